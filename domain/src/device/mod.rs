//! Device subdomain: how a managed device is named, identified and resolved.

pub mod entities;
pub mod policy;
pub mod value_objects;
