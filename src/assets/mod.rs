//! Resolved image references and the directory-backed resolver that produces them.

pub(crate) mod map;
pub(crate) mod store;
