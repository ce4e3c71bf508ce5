use std::time::Duration;

use crate::geometry::placement::Placement;
use crate::render::visual::{BoxVisual, ElementId, Layer, NodeContent, VisualNode};
use crate::scene::model::{SizingMode, TimerSpec};

/// Timer box. The countdown is `durationSeconds` minus `elapsed`, floored at zero; a literal
/// `label` wins over the countdown.
pub fn render_timer(timer: &TimerSpec, scale: f64, elapsed: Duration) -> VisualNode {
    let text = timer.label.clone().or_else(|| {
        timer
            .duration_seconds
            .map(|d| format_countdown(d.saturating_sub(elapsed.as_secs())))
    });
    let mut node = VisualNode::new(
        ElementId::Timer,
        Layer::Timer,
        Placement::from_bounds(&timer.bounds, scale),
        NodeContent::Box(BoxVisual::from_style(
            &timer.style,
            text.as_deref(),
            scale,
            [SizingMode::Fixed, SizingMode::Fixed],
        )),
    );
    node.opacity = timer.style.opacity;
    node
}

/// `HH:MM:SS`, prefixed with `Nd ` once a day or more remains.
pub fn format_countdown(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let h = (total_secs % 86_400) / 3_600;
    let m = (total_secs % 3_600) / 60;
    let s = total_secs % 60;
    if days > 0 {
        format!("{days}d {h:02}:{m:02}:{s:02}")
    } else {
        format!("{h:02}:{m:02}:{s:02}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/timer.rs"]
mod tests;
