//! Error handling for the whist backend.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, ErrorCategory};
pub use error_code::ErrorCode;
