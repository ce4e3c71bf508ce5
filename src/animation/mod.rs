//! Animation timing: easing curves, fully specified per-element configuration and idle motion
//! sampling.

pub(crate) mod config;
pub(crate) mod ease;
pub(crate) mod motion;
