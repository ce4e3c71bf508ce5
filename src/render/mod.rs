//! Visual tree composition, element renderers, SVG emission and rasterization.

pub(crate) mod background;
pub(crate) mod button;
pub(crate) mod fingerprint;
pub(crate) mod header;
pub(crate) mod offer;
pub(crate) mod raster;
pub(crate) mod rewards;
pub(crate) mod svg;
pub(crate) mod timer;
pub(crate) mod visual;
