use crate::assets::map::ImageRef;
use crate::foundation::core::{Point, Size};
use crate::geometry::placement::Placement;
use crate::render::visual::{BoxVisual, ElementId, Layer, NodeContent, RenderCtx, VisualNode};
use crate::scene::model::{ButtonSpec, ButtonStyle, SizingMode};
use crate::state::kind::ButtonState;

/// Average advance of one character as a fraction of the font size.
const AVG_CHAR_ADVANCE: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.2;

/// Button in its current state, with its icon overlay when one is resolved.
///
/// Returns `None` when the button has no style for `state`. The icon is centered on
/// `iconBounds` (or the button bounds) and never takes pointer events.
pub fn render_button(
    button: &ButtonSpec,
    state: ButtonState,
    ctx: &RenderCtx,
    icon: Option<&ImageRef>,
) -> Option<VisualNode> {
    let Some(style) = button.state_styles.get(&state) else {
        tracing::debug!(
            button = %button.offer_key,
            %state,
            "no style for state, button not rendered"
        );
        return None;
    };

    let placement = button_placement(style, ctx);
    let sizing = [style.sizing.horizontal, style.sizing.vertical];
    let mut node = VisualNode::new(
        ElementId::Button(button.offer_key.clone()),
        Layer::Buttons,
        placement,
        NodeContent::Box(BoxVisual::from_style(
            &style.style,
            style.text.as_deref(),
            ctx.scale,
            sizing,
        )),
    )
    .interactive();
    node.opacity = style.style.opacity;

    if let Some(icon) = icon {
        let bounds = style.icon_bounds.as_ref().unwrap_or(&style.bounds);
        node.children.push(VisualNode::new(
            ElementId::ButtonIcon(button.offer_key.clone()),
            Layer::Buttons,
            Placement::from_bounds(bounds, ctx.scale),
            NodeContent::Image {
                image: Some(icon.clone()),
            },
        ));
    }

    Some(node)
}

/// Resolve per-axis sizing into a viewport placement.
///
/// - `hug`: estimated text extent plus padding
/// - `fill`: the full container extent, centered in the container on that axis
/// - `fixed`: `fixedWidth`/`fixedHeight`, falling back to the declared bounds
pub fn button_placement(style: &ButtonStyle, ctx: &RenderCtx) -> Placement {
    let base = Placement::from_bounds(&style.bounds, ctx.scale);
    let (hug_w, hug_h) = hug_extent(style);

    let (w, cx) = match style.sizing.horizontal {
        SizingMode::Hug => (hug_w * ctx.scale, base.center.x),
        SizingMode::Fill => (ctx.container.width, ctx.container.width / 2.0),
        SizingMode::Fixed => (
            style.sizing.fixed_width.unwrap_or(style.bounds.width) * ctx.scale,
            base.center.x,
        ),
    };
    let (h, cy) = match style.sizing.vertical {
        SizingMode::Hug => (hug_h * ctx.scale, base.center.y),
        SizingMode::Fill => (ctx.container.height, ctx.container.height / 2.0),
        SizingMode::Fixed => (
            style.sizing.fixed_height.unwrap_or(style.bounds.height) * ctx.scale,
            base.center.y,
        ),
    };

    Placement {
        center: Point::new(cx, cy),
        size: Size::new(w, h),
        rotation_deg: base.rotation_deg,
    }
}

/// Content extent in design units: estimated text size plus padding.
fn hug_extent(style: &ButtonStyle) -> (f64, f64) {
    let font = style.style.font.size;
    let text = style.text.as_deref().unwrap_or("");
    let (text_w, text_h) = if text.is_empty() {
        (0.0, 0.0)
    } else {
        (
            text.chars().count() as f64 * font * AVG_CHAR_ADVANCE,
            font * LINE_HEIGHT,
        )
    };
    let p = &style.padding;
    (text_w + p.left + p.right, text_h + p.top + p.bottom)
}

#[cfg(test)]
#[path = "../../tests/unit/render/button.rs"]
mod tests;
