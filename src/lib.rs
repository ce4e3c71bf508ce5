//! chainview renders data-driven promotional offer chains.
//!
//! A chain is described by a JSON [`ChainSpec`] exported from a design tool: offer nodes with
//! per-state bounds, a header, a countdown timer, a rewards strip and per-state styled buttons.
//! The runtime is split into a few small pieces:
//!
//! - [`ChainStateStore`] owns offer, header and button states and their transition rules
//! - [`compute_scale`] fits the design frame into a target viewport
//! - the element renderers turn one element in one state into a [`VisualNode`]
//! - [`ChainViewer`] composes everything into a [`VisualTree`] in a fixed z-order and routes
//!   pointer input back to the state machine
//!
//! Trees serialize to SVG with [`tree_to_svg`] and rasterize through [`Rasterizer`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod foundation;
mod geometry;
mod render;
mod scene;
mod state;
mod style;
mod viewer;

pub use crate::foundation::core::{
    Affine, DEFAULT_FRAME_SIZE, FrameSize, Point, Rect, Size, Vec2,
};
pub use crate::foundation::error::{ChainError, ChainResult};

pub use crate::animation::config::{
    AnimatedKind, AnimationConfig, AnimationConfigBuilder, DEFAULT_CLICK_FEEDBACK_MS,
    ElementAnimation, IdleMotion, OrbitalConfig, SpringConfig, TransitionTiming, WobbleConfig,
};
pub use crate::animation::ease::Ease;
pub use crate::animation::motion::{MotionSample, sample_idle, spring_scale};
pub use crate::assets::map::{AssetMap, ImageRef};
pub use crate::assets::store::{AssetResolver, normalize_rel_path};
pub use crate::geometry::bounds::{ContentBounds, compute_content_bounds, frame_content_bounds};
pub use crate::geometry::placement::Placement;
pub use crate::geometry::scale::{ScaleFit, compute_scale};
pub use crate::render::background::render_background;
pub use crate::render::button::{button_placement, render_button};
pub use crate::render::fingerprint::{Fingerprint, fingerprint_tree};
pub use crate::render::header::render_header;
pub use crate::render::offer::render_offer;
pub use crate::render::raster::{FrameRGBA, Rasterizer};
pub use crate::render::rewards::render_rewards;
pub use crate::render::svg::tree_to_svg;
pub use crate::render::timer::{format_countdown, render_timer};
pub use crate::render::visual::{
    BorderVisual, BoxVisual, ElementId, Layer, NodeContent, RenderCtx, TextVisual, VisualNode,
    VisualTree,
};
pub use crate::scene::model::{
    BackgroundSpec, BoxStyleSpec, ButtonSpec, ButtonStyle, ChainSpecDef, EdgesSpec, FillSpec,
    FontSpec, GradientKind, GradientStop, HeaderSpec, ImageBounds, MetadataSpec, OfferSpec,
    RewardItemSpec, RewardsSpec, ShadowSpec, SizingMode, SizingSpec, StrokeSpec, TimerSpec,
};
pub use crate::scene::spec::ChainSpec;
pub use crate::state::events::{ListenerId, StateChange};
pub use crate::state::kind::{ButtonState, HeaderState, OfferState};
pub use crate::state::machine::{ChainStateStore, StateSnapshot, button_state_for_offer};
pub use crate::state::timer::{TimerAction, TimerId, TimerQueue};
pub use crate::style::color::ColorSpec;
pub use crate::style::fill::{
    CssShadow, CssStop, StyleValue, fill_to_style, optional_fill_to_style,
};
pub use crate::style::shadow::shadows_to_style;
pub use crate::viewer::coordinator::ChainViewer;
pub use crate::viewer::options::{SyncPolicy, ViewerOptions};
pub use crate::viewer::visibility::{ElementKind, Visibility, VisibilityOverrides};
