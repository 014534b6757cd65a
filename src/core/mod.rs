//! Core types shared across the crate: the error taxonomy and its
//! user-facing presentation.

pub mod error;

pub use error::{ErrorContext, ReelrecError, user_friendly_error};
