use crate::scene::model::{FillSpec, GradientKind};
use crate::style::fmt_num;

/// Gradient stop resolved to a CSS color.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CssStop {
    /// CSS color.
    pub color: String,
    /// Position fraction in `0..1`.
    pub position: f64,
}

/// One resolved shadow in viewport pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CssShadow {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Blur radius.
    pub blur: f64,
    /// Spread radius.
    pub spread: f64,
    /// CSS color.
    pub color: String,
}

/// Renderer-consumable style value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StyleValue {
    /// Nothing to paint.
    None,
    /// Flat color.
    Color {
        /// CSS color.
        css: String,
    },
    /// Linear gradient, stops in the given order.
    LinearGradient {
        /// Angle in degrees.
        angle_deg: f64,
        /// Color stops.
        stops: Vec<CssStop>,
    },
    /// Shadow list, first entry on top.
    Shadows {
        /// Shadows in paint order (topmost first).
        shadows: Vec<CssShadow>,
    },
}

impl StyleValue {
    /// Transparent flat fill.
    pub fn transparent() -> Self {
        Self::Color {
            css: "transparent".to_owned(),
        }
    }

    /// Return `true` when painting this value draws nothing.
    pub fn is_none(&self) -> bool {
        match self {
            Self::None => true,
            Self::Color { css } => css == "transparent",
            Self::LinearGradient { stops, .. } => stops.is_empty(),
            Self::Shadows { shadows } => shadows.is_empty(),
        }
    }

    /// CSS text for this value (`background` or `box-shadow` property value).
    pub fn to_css(&self) -> String {
        match self {
            Self::None => "none".to_owned(),
            Self::Color { css } => css.clone(),
            Self::LinearGradient { angle_deg, stops } => {
                let mut s = format!("linear-gradient({}deg", fmt_num(*angle_deg));
                for stop in stops {
                    s.push_str(&format!(
                        ", {} {}%",
                        stop.color,
                        fmt_num(stop.position * 100.0)
                    ));
                }
                s.push(')');
                s
            }
            Self::Shadows { shadows } => {
                if shadows.is_empty() {
                    return "none".to_owned();
                }
                shadows
                    .iter()
                    .map(|sh| {
                        format!(
                            "{}px {}px {}px {}px {}",
                            fmt_num(sh.x),
                            fmt_num(sh.y),
                            fmt_num(sh.blur),
                            fmt_num(sh.spread),
                            sh.color
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
    }
}

/// Convert a fill description into a style value.
///
/// Only solid and linear gradient fills are rendered. Radial, angular and diamond gradients
/// (and gradients without stops) degrade to a transparent fill.
pub fn fill_to_style(fill: &FillSpec) -> StyleValue {
    match fill {
        FillSpec::Solid { color, opacity } => StyleValue::Color {
            css: color.with_opacity(*opacity).to_css(),
        },
        FillSpec::Gradient {
            gradient_type: GradientKind::Linear,
            stops,
            rotation,
        } if !stops.is_empty() => StyleValue::LinearGradient {
            angle_deg: *rotation,
            stops: stops
                .iter()
                .map(|s| CssStop {
                    color: s.color.to_css(),
                    position: s.position,
                })
                .collect(),
        },
        FillSpec::Gradient { gradient_type, .. } => {
            tracing::debug!(?gradient_type, "unsupported gradient rendered transparent");
            StyleValue::transparent()
        }
    }
}

/// [`fill_to_style`] for an optional fill; `None` paints nothing.
pub fn optional_fill_to_style(fill: Option<&FillSpec>) -> StyleValue {
    fill.map(fill_to_style).unwrap_or(StyleValue::None)
}

#[cfg(test)]
#[path = "../../tests/unit/style/fill.rs"]
mod tests;
