//! Viewer coordinator: scale, visibility gating, fixed z-order composition and interaction
//! routing.

pub(crate) mod coordinator;
pub(crate) mod options;
pub(crate) mod visibility;
