//! Utility modules.

pub(crate) mod jwt;
pub mod validation;

pub use validation::{validate_ip, validate_member};
