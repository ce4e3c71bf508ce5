//! Design-space to viewport geometry: contain-fit scale, center-anchored placement and content
//! bounds.

pub(crate) mod bounds;
pub(crate) mod placement;
pub(crate) mod scale;
