//! Core value types and the error taxonomy shared by every other module.

pub(crate) mod core;
pub(crate) mod error;
