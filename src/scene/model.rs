//! JSON boundary model of a chain specification.
//!
//! Field names are camelCase. Every state-keyed map uses the closed state enumerations as keys,
//! so an unknown state spelling fails at parse time instead of silently becoming a dead entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::core::FrameSize;
use crate::state::kind::{ButtonState, HeaderState, OfferState};
use crate::style::color::ColorSpec;

/// Root document as authored by the designer tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSpecDef {
    /// Opaque chain identifier.
    #[serde(default)]
    pub chain_id: String,
    /// Design-space canvas. The viewer substitutes a default when absent.
    #[serde(default)]
    pub frame_size: Option<FrameSize>,
    /// Optional background image reference.
    #[serde(default)]
    pub background: Option<BackgroundSpec>,
    /// Offer/quest nodes in display order.
    pub offers: Vec<OfferSpec>,
    /// Optional countdown timer.
    #[serde(default)]
    pub timer: Option<TimerSpec>,
    /// Optional chain header.
    #[serde(default)]
    pub header: Option<HeaderSpec>,
    /// Optional rewards strip.
    #[serde(default)]
    pub rewards: Option<RewardsSpec>,
    /// Buttons, correlated to offers by `offerKey`.
    pub buttons: Vec<ButtonSpec>,
    /// Informational metadata.
    #[serde(default)]
    pub metadata: MetadataSpec,
}

/// Informational document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataSpec {
    /// Exporter version string.
    #[serde(default)]
    pub version: String,
    /// Any other exporter-provided fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Background image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSpec {
    /// Image path relative to the asset root.
    pub export_url: String,
}

/// Center-anchored box in design space.
///
/// `w`/`h` are accepted as synonyms of `width`/`height` on input and normalized away here;
/// `width`/`height` win when both spellings are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageBounds {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Clockwise rotation in degrees about the center.
    #[serde(skip_serializing_if = "is_zero")]
    pub rotation: f64,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl ImageBounds {
    /// Unrotated bounds centered at `(x, y)`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Same bounds rotated by `deg` degrees.
    pub fn rotated(self, deg: f64) -> Self {
        Self {
            rotation: deg,
            ..self
        }
    }
}

impl<'de> Deserialize<'de> for ImageBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            x: f64,
            y: f64,
            width: Option<f64>,
            height: Option<f64>,
            w: Option<f64>,
            h: Option<f64>,
            #[serde(default)]
            rotation: f64,
        }

        let r = Repr::deserialize(deserializer)?;
        let width = r
            .width
            .or(r.w)
            .ok_or_else(|| serde::de::Error::missing_field("width"))?;
        let height = r
            .height
            .or(r.h)
            .ok_or_else(|| serde::de::Error::missing_field("height"))?;
        Ok(Self {
            x: r.x,
            y: r.y,
            width,
            height,
            rotation: r.rotation,
        })
    }
}

/// One offer/quest node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSpec {
    /// Unique correlation key across offers, images and buttons.
    pub offer_key: String,
    /// Bounds per offer state.
    pub state_bounds: BTreeMap<OfferState, ImageBounds>,
    /// Optional image file name overrides per state.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub state_images: BTreeMap<OfferState, String>,
}

/// Chain header, state-keyed like offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSpec {
    /// Bounds per header state.
    pub state_bounds: BTreeMap<HeaderState, ImageBounds>,
    /// Optional image file name overrides per state.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub state_images: BTreeMap<HeaderState, String>,
}

/// Countdown timer box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSpec {
    /// Box bounds.
    pub bounds: ImageBounds,
    /// Remaining time shown as a countdown.
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    /// Literal text; wins over `durationSeconds`.
    #[serde(default)]
    pub label: Option<String>,
    /// Box and text styling.
    #[serde(default)]
    pub style: BoxStyleSpec,
}

/// Rewards strip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsSpec {
    /// Reward items in display order.
    #[serde(default)]
    pub items: Vec<RewardItemSpec>,
}

/// One reward image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardItemSpec {
    /// Unique reward key.
    pub reward_key: String,
    /// Image bounds.
    pub bounds: ImageBounds,
    /// Image path relative to the asset root.
    #[serde(default)]
    pub export_url: Option<String>,
}

/// Button bound to an offer through `offerKey`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    /// Offer this button belongs to.
    pub offer_key: String,
    /// Style per button state.
    pub state_styles: BTreeMap<ButtonState, ButtonStyle>,
    /// Optional icon file name overrides per state.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub state_icons: BTreeMap<ButtonState, String>,
}

/// Appearance of a button in one state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    /// Button bounds.
    pub bounds: ImageBounds,
    /// Box and text styling.
    #[serde(flatten)]
    pub style: BoxStyleSpec,
    /// Caption.
    #[serde(default)]
    pub text: Option<String>,
    /// Per-axis auto-layout sizing.
    #[serde(default)]
    pub sizing: SizingSpec,
    /// Inner padding used by content-driven sizing.
    #[serde(default)]
    pub padding: EdgesSpec,
    /// Icon bounds; defaults to the button bounds.
    #[serde(default)]
    pub icon_bounds: Option<ImageBounds>,
}

/// Box styling shared by buttons and the timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyleSpec {
    /// Background fill.
    #[serde(default)]
    pub fill: Option<FillSpec>,
    /// Border.
    #[serde(default)]
    pub stroke: Option<StrokeSpec>,
    /// Corner radius in design units.
    #[serde(default)]
    pub corner_radius: f64,
    /// Drop shadows, first entry on top.
    #[serde(default)]
    pub shadows: Vec<ShadowSpec>,
    /// Whole-box opacity.
    #[serde(default = "one")]
    pub opacity: f64,
    /// Text styling.
    #[serde(default)]
    pub font: FontSpec,
}

fn one() -> f64 {
    1.0
}

impl Default for BoxStyleSpec {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            corner_radius: 0.0,
            shadows: Vec::new(),
            opacity: 1.0,
            font: FontSpec::default(),
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    /// Font size in design units.
    #[serde(default = "default_font_size")]
    pub size: f64,
    /// Font weight (100..900).
    #[serde(default = "default_font_weight")]
    pub weight: u16,
    /// Font family list.
    #[serde(default)]
    pub family: Option<String>,
    /// Text color.
    #[serde(default = "default_text_color")]
    pub color: ColorSpec,
}

fn default_font_size() -> f64 {
    14.0
}

fn default_font_weight() -> u16 {
    400
}

fn default_text_color() -> ColorSpec {
    ColorSpec::rgba(1.0, 1.0, 1.0, 1.0)
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: default_font_size(),
            weight: default_font_weight(),
            family: None,
            color: default_text_color(),
        }
    }
}

/// Border stroke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeSpec {
    /// Stroke color.
    pub color: ColorSpec,
    /// Stroke width in design units.
    #[serde(default = "one")]
    pub width: f64,
}

/// Abstract fill description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum FillSpec {
    /// Flat color.
    Solid {
        /// Fill color.
        color: ColorSpec,
        /// Extra opacity multiplied into the color alpha.
        #[serde(default = "one")]
        opacity: f64,
    },
    /// Gradient; only linear gradients are rendered.
    Gradient {
        /// Gradient geometry.
        #[serde(default)]
        gradient_type: GradientKind,
        /// Color stops in paint order.
        stops: Vec<GradientStop>,
        /// Rotation in degrees.
        #[serde(default)]
        rotation: f64,
    },
}

/// Gradient geometry kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    /// Linear gradient.
    #[default]
    Linear,
    /// Radial gradient (not rendered).
    Radial,
    /// Angular/conic gradient (not rendered).
    Angular,
    /// Diamond gradient (not rendered).
    Diamond,
}

/// Gradient color stop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color.
    pub color: ColorSpec,
    /// Position fraction in `0..1`.
    pub position: f64,
}

/// Drop shadow in design units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShadowSpec {
    /// Horizontal offset.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset.
    #[serde(default)]
    pub y: f64,
    /// Blur radius.
    #[serde(default)]
    pub blur: f64,
    /// Spread radius.
    #[serde(default)]
    pub spread: f64,
    /// Shadow color.
    pub color: ColorSpec,
}

/// Auto-layout sizing policy for one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    /// Content-driven.
    Hug,
    /// 100% of the available space on the axis.
    Fill,
    /// Explicit size.
    #[default]
    Fixed,
}

/// Per-axis sizing policy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingSpec {
    /// Horizontal policy.
    #[serde(default)]
    pub horizontal: SizingMode,
    /// Vertical policy.
    #[serde(default)]
    pub vertical: SizingMode,
    /// Explicit width for `fixed`; falls back to the bounds width.
    #[serde(default)]
    pub fixed_width: Option<f64>,
    /// Explicit height for `fixed`; falls back to the bounds height.
    #[serde(default)]
    pub fixed_height: Option<f64>,
}

/// Box edges in design units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgesSpec {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl<'de> Deserialize<'de> for EdgesSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct EdgesObj {
            top: Option<f64>,
            right: Option<f64>,
            bottom: Option<f64>,
            left: Option<f64>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Obj(EdgesObj),
            // Shorthand: single number applies to all edges.
            Num(f64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self {
                top: v,
                right: v,
                bottom: v,
                left: v,
            }),
            Repr::Obj(obj) => Ok(Self {
                top: obj.top.unwrap_or(0.0),
                right: obj.right.unwrap_or(0.0),
                bottom: obj.bottom.unwrap_or(0.0),
                left: obj.left.unwrap_or(0.0),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
