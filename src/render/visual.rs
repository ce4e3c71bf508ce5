use crate::animation::config::TransitionTiming;
use crate::animation::motion::MotionSample;
use crate::assets::map::ImageRef;
use crate::foundation::core::{Affine, Point, Rect, Size};
use crate::geometry::placement::Placement;
use crate::scene::model::{BoxStyleSpec, SizingMode};
use crate::style::fill::{StyleValue, optional_fill_to_style};
use crate::style::shadow::shadows_to_style;

/// Identity of a rendered element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum ElementId {
    /// Background image.
    Background,
    /// Countdown timer.
    Timer,
    /// Chain header.
    Header,
    /// Reward item by reward key.
    Reward(String),
    /// Offer node by offer key.
    Offer(String),
    /// Button by offer key.
    Button(String),
    /// Icon overlay of a button, by offer key.
    ButtonIcon(String),
}

impl ElementId {
    /// Correlation key, if the element has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Background | Self::Timer | Self::Header => None,
            Self::Reward(k) | Self::Offer(k) | Self::Button(k) | Self::ButtonIcon(k) => Some(k),
        }
    }
}

/// Z-order band. Variants are declared in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Background image, beneath everything.
    Background,
    /// Countdown timer.
    Timer,
    /// Chain header.
    Header,
    /// Rewards, then offer nodes.
    Content,
    /// Buttons, topmost.
    Buttons,
}

impl Layer {
    /// All layers in paint order.
    pub const ORDER: [Layer; 5] = [
        Layer::Background,
        Layer::Timer,
        Layer::Header,
        Layer::Content,
        Layer::Buttons,
    ];
}

/// Text drawn centered in a box.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVisual {
    /// Text content.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: u16,
    /// Font family list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// CSS color.
    pub color: String,
}

/// Box border.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BorderVisual {
    /// CSS color.
    pub color: String,
    /// Width in pixels.
    pub width: f64,
}

/// Styled box (buttons, timer).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxVisual {
    /// Fill.
    pub background: StyleValue,
    /// Drop shadows.
    pub shadow: StyleValue,
    /// Border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderVisual>,
    /// Corner radius in pixels.
    pub corner_radius: f64,
    /// Caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextVisual>,
    /// Horizontal and vertical sizing modes that produced the box size.
    pub sizing: [SizingMode; 2],
}

impl BoxVisual {
    /// Resolve box styling at `scale`.
    pub fn from_style(
        style: &BoxStyleSpec,
        text: Option<&str>,
        scale: f64,
        sizing: [SizingMode; 2],
    ) -> Self {
        Self {
            background: optional_fill_to_style(style.fill.as_ref()),
            shadow: shadows_to_style(&style.shadows, scale),
            border: style.stroke.as_ref().map(|s| BorderVisual {
                color: s.color.to_css(),
                width: s.width * scale,
            }),
            corner_radius: style.corner_radius * scale,
            text: text.filter(|t| !t.is_empty()).map(|t| TextVisual {
                content: t.to_owned(),
                font_size: style.font.size * scale,
                font_weight: style.font.weight,
                font_family: style.font.family.clone(),
                color: style.font.color.to_css(),
            }),
            sizing,
        }
    }
}

/// What a node paints.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeContent {
    /// Image; `None` mounts an empty image.
    Image {
        /// Resolved image, if any.
        image: Option<ImageRef>,
    },
    /// Styled box.
    Box(BoxVisual),
}

/// One positioned element of the composed view.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualNode {
    /// Element identity.
    pub id: ElementId,
    /// Z-order band.
    pub layer: Layer,
    /// Resting placement in viewport pixels.
    pub placement: Placement,
    /// Paint content.
    pub content: NodeContent,
    /// Whether pointer events target this node. Non-interactive nodes pass events through.
    pub interactive: bool,
    /// Whole-node opacity.
    pub opacity: f64,
    /// Idle motion applied about the placement center.
    pub motion: MotionSample,
    /// State transition timing consumers may animate with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionTiming>,
    /// Overlays painted above this node.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    /// Node with no motion, full opacity and no children.
    pub fn new(id: ElementId, layer: Layer, placement: Placement, content: NodeContent) -> Self {
        Self {
            id,
            layer,
            placement,
            content,
            interactive: false,
            opacity: 1.0,
            motion: MotionSample::IDENTITY,
            transition: None,
            children: Vec::new(),
        }
    }

    /// Mark the node as a pointer target.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Local-to-viewport transform including idle motion.
    pub fn transform(&self) -> Affine {
        self.motion.about(self.placement.center) * self.placement.transform()
    }

    /// Rotation- and motion-aware containment test.
    pub fn contains(&self, p: Point) -> bool {
        self.placement
            .contains(p, self.motion.about(self.placement.center))
    }

    /// Axis-aligned bounds of this node and its children, motion included.
    pub fn bounding_box(&self) -> Rect {
        let own = self
            .transform()
            .transform_rect_bbox(self.placement.local_rect());
        self.children
            .iter()
            .fold(own, |acc, c| acc.union(c.bounding_box()))
    }
}

/// Composed view, nodes stored in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTree {
    /// Canvas size in pixels (the scaled frame).
    pub size: Size,
    /// Design-to-viewport scale.
    pub scale: f64,
    /// Top-level nodes, bottom first.
    pub nodes: Vec<VisualNode>,
}

impl VisualTree {
    /// Empty tree.
    pub fn new(size: Size, scale: f64) -> Self {
        Self {
            size,
            scale,
            nodes: Vec::new(),
        }
    }

    /// Append a node. Callers push in layer order.
    pub fn push(&mut self, node: VisualNode) {
        debug_assert!(
            self.nodes.last().is_none_or(|n| n.layer <= node.layer),
            "nodes must be pushed in layer order"
        );
        self.nodes.push(node);
    }

    /// Every node, children included, in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &VisualNode> {
        fn walk<'a>(n: &'a VisualNode, out: &mut Vec<&'a VisualNode>) {
            out.push(n);
            for c in &n.children {
                walk(c, out);
            }
        }
        let mut out = Vec::new();
        for n in &self.nodes {
            walk(n, &mut out);
        }
        out.into_iter()
    }

    /// Look up a node by identity.
    pub fn find(&self, id: &ElementId) -> Option<&VisualNode> {
        self.iter().find(|n| &n.id == id)
    }

    /// Top-level nodes of one layer.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &VisualNode> {
        self.nodes.iter().filter(move |n| n.layer == layer)
    }

    /// Topmost interactive node under `p`.
    pub fn hit_test(&self, p: Point) -> Option<&VisualNode> {
        self.nodes
            .iter()
            .rev()
            .filter(|n| n.interactive)
            .find(|n| n.contains(p))
    }

    /// Union of the canvas with every node's bounding box.
    pub fn content_bounds(&self) -> Rect {
        self.nodes.iter().fold(
            Rect::from_origin_size(Point::ORIGIN, self.size),
            |acc, n| acc.union(n.bounding_box()),
        )
    }
}

/// Per-frame inputs shared by the element renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderCtx {
    /// Design-to-viewport scale.
    pub scale: f64,
    /// Available space for container-driven sizing (the scaled frame).
    pub container: Size,
}

impl RenderCtx {
    /// Context for a scaled frame.
    pub fn new(scale: f64, container: Size) -> Self {
        Self { scale, container }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/visual.rs"]
mod tests;
