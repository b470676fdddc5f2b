//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod manage_notes;
pub mod resolve_device;

#[cfg(test)]
pub(crate) mod test_support;
