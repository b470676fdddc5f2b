//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — validation errors for value objects
//! - [`string`] — display helpers for free text

pub mod error;
pub mod string;
