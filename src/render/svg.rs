use std::fmt::Write as _;

use crate::foundation::core::{Affine, Rect};
use crate::render::visual::{BoxVisual, ElementId, NodeContent, TextVisual, VisualNode, VisualTree};
use crate::style::fill::{CssStop, StyleValue};
use crate::style::fmt_num;

/// Serialize a visual tree to a standalone SVG document.
///
/// Image `href`s are written as given, so relative paths resolve against whatever resources
/// directory the consumer uses. Empty images paint nothing.
#[tracing::instrument(skip(tree), fields(nodes = tree.nodes.len()))]
pub fn tree_to_svg(tree: &VisualTree) -> String {
    let mut w = SvgWriter::default();
    for node in &tree.nodes {
        w.node(node);
    }

    let width = fmt_num(tree.size.width);
    let height = fmt_num(tree.size.height);
    let mut out = String::new();
    let _ = write!(
        out,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg""#,
            r#" xmlns:xlink="http://www.w3.org/1999/xlink""#,
            r#" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        ),
        w = width,
        h = height,
    );
    if !w.defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&w.defs);
        out.push_str("</defs>");
    }
    out.push_str(&w.body);
    out.push_str("</svg>");
    out
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    body: String,
    next_def: usize,
}

impl SvgWriter {
    fn def_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_def);
        self.next_def += 1;
        id
    }

    fn node(&mut self, node: &VisualNode) {
        let _ = write!(
            self.body,
            r#"<g data-id="{}" transform="{}""#,
            escape(&element_label(node)),
            matrix(node.transform())
        );
        if node.opacity < 1.0 {
            let _ = write!(self.body, r#" opacity="{}""#, fmt_num(node.opacity.max(0.0)));
        }
        self.body.push('>');

        let r = node.placement.local_rect();
        match &node.content {
            NodeContent::Image { image: Some(img) } => {
                let _ = write!(
                    self.body,
                    concat!(
                        r#"<image xlink:href="{}" x="{}" y="{}" width="{}" height="{}""#,
                        r#" preserveAspectRatio="none"/>"#,
                    ),
                    escape(&img.href),
                    fmt_num(r.x0),
                    fmt_num(r.y0),
                    fmt_num(r.width()),
                    fmt_num(r.height())
                );
            }
            NodeContent::Image { image: None } => {}
            NodeContent::Box(b) => self.styled_box(b, r),
        }
        self.body.push_str("</g>");

        // Overlays carry absolute placements, so they are emitted as siblings.
        for child in &node.children {
            self.node(child);
        }
    }

    fn styled_box(&mut self, b: &BoxVisual, r: Rect) {
        let radius = b.corner_radius.min(r.width() / 2.0).min(r.height() / 2.0).max(0.0);

        if let StyleValue::Shadows { shadows } = &b.shadow {
            // First shadow paints on top, so emit in reverse.
            for sh in shadows.iter().rev() {
                let filter = if sh.blur > 0.0 {
                    let id = self.def_id("blur");
                    let _ = write!(
                        self.defs,
                        r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%">"#
                    );
                    let _ = write!(
                        self.defs,
                        r#"<feGaussianBlur stdDeviation="{}"/></filter>"#,
                        fmt_num(sh.blur / 2.0)
                    );
                    format!(r#" filter="url(#{id})""#)
                } else {
                    String::new()
                };
                let sr = r.inflate(sh.spread, sh.spread) + kurbo::Vec2::new(sh.x, sh.y);
                let _ = write!(
                    self.body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{filter}/>"#,
                    fmt_num(sr.x0),
                    fmt_num(sr.y0),
                    fmt_num(sr.width().max(0.0)),
                    fmt_num(sr.height().max(0.0)),
                    fmt_num((radius + sh.spread).max(0.0)),
                    escape(&sh.color)
                );
            }
        }

        let fill = match &b.background {
            StyleValue::Color { css } => escape(css),
            StyleValue::LinearGradient { angle_deg, stops } => {
                let id = self.def_id("grad");
                self.linear_gradient(&id, *angle_deg, stops);
                format!("url(#{id})")
            }
            StyleValue::None | StyleValue::Shadows { .. } => "none".to_owned(),
        };
        let stroke = match &b.border {
            Some(border) => format!(
                r#" stroke="{}" stroke-width="{}""#,
                escape(&border.color),
                fmt_num(border.width)
            ),
            None => String::new(),
        };
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{fill}"{stroke}/>"#,
            fmt_num(r.x0),
            fmt_num(r.y0),
            fmt_num(r.width()),
            fmt_num(r.height()),
            fmt_num(radius)
        );

        if let Some(text) = &b.text {
            self.text(text);
        }
    }

    fn linear_gradient(&mut self, id: &str, angle_deg: f64, stops: &[CssStop]) {
        // CSS angles: 0deg points up, 90deg points right.
        let (s, c) = angle_deg.to_radians().sin_cos();
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            fmt_num(0.5 - 0.5 * s),
            fmt_num(0.5 + 0.5 * c),
            fmt_num(0.5 + 0.5 * s),
            fmt_num(0.5 - 0.5 * c)
        );
        for stop in stops {
            let _ = write!(
                self.defs,
                r#"<stop offset="{}" stop-color="{}"/>"#,
                fmt_num(stop.position),
                escape(&stop.color)
            );
        }
        self.defs.push_str("</linearGradient>");
    }

    fn text(&mut self, t: &TextVisual) {
        let family = t.font_family.as_deref().unwrap_or("sans-serif");
        let _ = write!(
            self.body,
            concat!(
                r#"<text x="0" y="0" text-anchor="middle" dominant-baseline="central""#,
                r#" font-size="{}" font-weight="{}" font-family="{}" fill="{}">{}</text>"#,
            ),
            fmt_num(t.font_size),
            t.font_weight,
            escape(family),
            escape(&t.color),
            escape(&t.content)
        );
    }
}

fn element_label(node: &VisualNode) -> String {
    let kind = match &node.id {
        ElementId::Background => "background",
        ElementId::Timer => "timer",
        ElementId::Header => "header",
        ElementId::Reward(_) => "reward",
        ElementId::Offer(_) => "offer",
        ElementId::Button(_) => "button",
        ElementId::ButtonIcon(_) => "button-icon",
    };
    match node.id.key() {
        Some(k) => format!("{kind}:{k}"),
        None => kind.to_owned(),
    }
}

fn matrix(a: Affine) -> String {
    let [a, b, c, d, e, f] = a.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(a),
        fmt_num(b),
        fmt_num(c),
        fmt_num(d),
        fmt_num(e),
        fmt_num(f)
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
