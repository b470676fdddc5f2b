//! Microsoft Graph adapter
//!
//! Implements [`DeviceLookup`](devnotes_application::DeviceLookup) and
//! [`NotesStore`](devnotes_application::NotesStore) over the Intune managed
//! device collection.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::GraphDeviceClient;
pub use endpoints::GraphEndpoints;
pub use error::GraphError;
