//! Web-specific middleware.

pub mod contact_throttle;
pub mod error_boundary;
