//! Notes subdomain: the note value, what was asked of it, and what happened.

pub mod outcome;
pub mod phase;
pub mod value_objects;
