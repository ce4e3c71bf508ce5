use serde::{Deserialize, Serialize};

use crate::animation::config::AnimationConfig;
use crate::foundation::core::{DEFAULT_FRAME_SIZE, FrameSize};
use crate::foundation::error::{ChainError, ChainResult};
use crate::viewer::visibility::VisibilityOverrides;

/// How offer activation affects the offer's button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPolicy {
    /// Offers and buttons change independently.
    #[default]
    Independent,
    /// Activating an offer moves its button to `disabled`, `default` or `claimed` for `Locked`,
    /// `Unlocked` and `Claimed`.
    ButtonFollowsOffer,
}

/// Integration options of a [`crate::ChainViewer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerOptions {
    /// Target viewport size. `None`, or a size that is not strictly positive, renders at the
    /// frame size (scale 1).
    #[serde(default)]
    pub target: Option<FrameSize>,
    /// Partial visibility map merged over all-visible.
    #[serde(default)]
    pub visibility: VisibilityOverrides,
    /// Animation and timing configuration.
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Offer to button coupling.
    #[serde(default)]
    pub sync: SyncPolicy,
    /// Frame size used when the specification declares none.
    #[serde(default = "default_frame_size")]
    pub default_frame_size: FrameSize,
}

fn default_frame_size() -> FrameSize {
    DEFAULT_FRAME_SIZE
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            target: None,
            visibility: VisibilityOverrides::default(),
            animation: AnimationConfig::default(),
            sync: SyncPolicy::default(),
            default_frame_size: DEFAULT_FRAME_SIZE,
        }
    }
}

impl ViewerOptions {
    /// Set the target viewport size.
    pub fn with_target(mut self, width: f64, height: f64) -> Self {
        self.target = Some(FrameSize::new(width, height));
        self
    }

    /// Set the visibility overrides.
    pub fn with_visibility(mut self, visibility: VisibilityOverrides) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the animation configuration.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Set the offer to button coupling.
    pub fn with_sync(mut self, sync: SyncPolicy) -> Self {
        self.sync = sync;
        self
    }

    /// Check values a viewer cannot work with.
    pub fn validate(&self) -> ChainResult<()> {
        if !self.default_frame_size.is_positive() {
            return Err(ChainError::validation(format!(
                "default frame size must have finite width/height > 0 (got {}x{})",
                self.default_frame_size.width, self.default_frame_size.height
            )));
        }
        self.animation.validate()
    }
}
