//! Chain specification boundary: JSON model, loading and validation.

pub(crate) mod model;
pub(crate) mod spec;
pub(crate) mod validate;
