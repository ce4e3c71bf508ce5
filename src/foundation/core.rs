use crate::foundation::error::{ChainError, ChainResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Frame size used when a chain specification does not declare one (mobile portrait).
pub const DEFAULT_FRAME_SIZE: FrameSize = FrameSize {
    width: 390.0,
    height: 844.0,
};

/// Width/height pair in design-space or pixel units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Width in units.
    pub width: f64,
    /// Height in units.
    pub height: f64,
}

impl FrameSize {
    /// Create a size without validation.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a validated size with finite, strictly positive dimensions.
    pub fn positive(width: f64, height: f64) -> ChainResult<Self> {
        let size = Self { width, height };
        if !size.is_positive() {
            return Err(ChainError::validation(format!(
                "size must have finite width/height > 0 (got {width}x{height})"
            )));
        }
        Ok(size)
    }

    /// Return `true` when both dimensions are finite and > 0.
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Area in square units.
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Multiply both dimensions by `scale`.
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }

    /// Origin-anchored rectangle covering this size.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl From<FrameSize> for Size {
    fn from(v: FrameSize) -> Self {
        Size::new(v.width, v.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
