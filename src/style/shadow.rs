use crate::scene::model::ShadowSpec;
use crate::style::fill::{CssShadow, StyleValue};

/// Scale every numeric shadow field by `scale` and combine the list into one value.
///
/// Input order is preserved: the first shadow paints on top. An empty list yields
/// [`StyleValue::None`].
pub fn shadows_to_style(shadows: &[ShadowSpec], scale: f64) -> StyleValue {
    if shadows.is_empty() {
        return StyleValue::None;
    }
    StyleValue::Shadows {
        shadows: shadows
            .iter()
            .map(|s| CssShadow {
                x: s.x * scale,
                y: s.y * scale,
                blur: s.blur * scale,
                spread: s.spread * scale,
                color: s.color.to_css(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/shadow.rs"]
mod tests;
