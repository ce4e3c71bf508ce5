use crate::foundation::core::{FrameSize, Rect, Size};
use crate::geometry::placement::Placement;
use crate::render::button::button_placement;
use crate::render::visual::RenderCtx;
use crate::scene::model::ImageBounds;
use crate::scene::spec::ChainSpec;
use crate::state::machine::ChainStateStore;
use crate::viewer::visibility::Visibility;

/// Axis-aligned box covering rendered content, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBounds {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ContentBounds {
    /// Bounds of `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            min_x: rect.x0,
            min_y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Equivalent rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }
}

/// Frame box scaled by `scale`, origin at `(0, 0)`.
pub fn frame_content_bounds(frame: FrameSize, scale: f64) -> ContentBounds {
    ContentBounds::from_rect(frame.scaled(scale).to_rect())
}

/// Union of the scaled frame with the rotated bounding boxes of every visible element in its
/// current state.
///
/// Elements without bounds for their current state contribute nothing, matching what the
/// renderers draw.
pub fn compute_content_bounds(
    spec: &ChainSpec,
    frame: FrameSize,
    state: &ChainStateStore,
    scale: f64,
    visibility: &Visibility,
) -> ContentBounds {
    let scaled = frame.scaled(scale);
    let ctx = RenderCtx::new(scale, Size::new(scaled.width, scaled.height));
    let mut acc = scaled.to_rect();
    let bbox = |b: &ImageBounds| Placement::from_bounds(b, scale).bounding_box();
    let mut add = |r: Rect| acc = acc.union(r);

    if visibility.timer
        && let Some(timer) = spec.timer()
    {
        add(bbox(&timer.bounds));
    }
    if visibility.header
        && let Some(header) = spec.header()
        && let Some(b) = header.state_bounds.get(&state.header_state())
    {
        add(bbox(b));
    }
    if visibility.rewards
        && let Some(rewards) = spec.rewards()
    {
        for item in &rewards.items {
            add(bbox(&item.bounds));
        }
    }
    if visibility.offers {
        for offer in spec.offers() {
            let current = state.offer_state(&offer.offer_key);
            if let Some(b) = current.and_then(|s| offer.state_bounds.get(&s)) {
                add(bbox(b));
            }
        }
    }
    if visibility.buttons {
        for button in spec.buttons() {
            let current = state.button_state(&button.offer_key);
            if let Some(style) = current.and_then(|s| button.state_styles.get(&s)) {
                // Sized the way the button renderer sizes it, so hug and fill boxes count.
                add(button_placement(style, &ctx).bounding_box());
                if let Some(ib) = &style.icon_bounds {
                    add(bbox(ib));
                }
            }
        }
    }

    ContentBounds::from_rect(acc)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
