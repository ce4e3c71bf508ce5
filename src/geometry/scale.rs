use crate::foundation::core::FrameSize;
use crate::foundation::error::{ChainError, ChainResult};

/// Uniform contain-fit scale of a design frame into a target box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleFit {
    /// Scale factor applied to both axes.
    pub scale: f64,
    /// Scaled frame width.
    pub scaled_width: f64,
    /// Scaled frame height.
    pub scaled_height: f64,
}

impl ScaleFit {
    /// Identity fit for a frame rendered at its design size.
    pub fn identity(original: FrameSize) -> Self {
        Self {
            scale: 1.0,
            scaled_width: original.width,
            scaled_height: original.height,
        }
    }

    /// Scaled frame as a size.
    pub fn scaled_size(self) -> FrameSize {
        FrameSize::new(self.scaled_width, self.scaled_height)
    }
}

/// Compute `min(target.w / original.w, target.h / original.h)` and the scaled frame size.
///
/// The scaled frame never exceeds either target dimension and touches at least one of them.
/// A zero-area or non-finite `original` has no meaningful scale and is a configuration error.
pub fn compute_scale(original: FrameSize, target: FrameSize) -> ChainResult<ScaleFit> {
    if !original.is_positive() {
        return Err(ChainError::validation(format!(
            "frame size must be > 0 to compute a scale (got {}x{})",
            original.width, original.height
        )));
    }
    if !target.width.is_finite()
        || !target.height.is_finite()
        || target.width < 0.0
        || target.height < 0.0
    {
        return Err(ChainError::validation(format!(
            "target size must be finite and >= 0 (got {}x{})",
            target.width, target.height
        )));
    }

    let scale = (target.width / original.width).min(target.height / original.height);
    Ok(ScaleFit {
        scale,
        scaled_width: original.width * scale,
        scaled_height: original.height * scale,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/scale.rs"]
mod tests;
