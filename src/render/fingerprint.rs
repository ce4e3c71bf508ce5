use xxhash_rust::xxh3::Xxh3;

use crate::assets::map::ImageRef;
use crate::render::visual::{ElementId, NodeContent, VisualNode, VisualTree};
use crate::style::fill::StyleValue;

const XXH3_SEED: u64 = 0x5c4a_17e2_9d03_b6f1;

/// Stable 128-bit fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint of everything that affects how a tree paints.
pub fn fingerprint_tree(tree: &VisualTree) -> Fingerprint {
    let mut h = StableHasher::new();
    h.write_f64(tree.size.width);
    h.write_f64(tree.size.height);
    h.write_f64(tree.scale);
    h.write_u32(tree.nodes.len() as u32);
    for n in &tree.nodes {
        write_node(&mut h, n);
    }
    h.finish()
}

pub(crate) struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    pub(crate) fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    pub(crate) fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    pub(crate) fn finish(self) -> Fingerprint {
        let v = self.inner.digest128();
        Fingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, n: &VisualNode) {
    write_id(h, &n.id);
    h.write_u8(n.layer as u8);
    for c in n.transform().as_coeffs() {
        h.write_f64(c);
    }
    h.write_f64(n.placement.size.width);
    h.write_f64(n.placement.size.height);
    h.write_f64(n.opacity);
    h.write_bool(n.interactive);
    match &n.content {
        NodeContent::Image { image } => {
            h.write_u8(0);
            write_image(h, image.as_ref());
        }
        NodeContent::Box(b) => {
            h.write_u8(1);
            write_style(h, &b.background);
            write_style(h, &b.shadow);
            match &b.border {
                Some(border) => {
                    h.write_u8(1);
                    h.write_str(&border.color);
                    h.write_f64(border.width);
                }
                None => h.write_u8(0),
            }
            h.write_f64(b.corner_radius);
            match &b.text {
                Some(t) => {
                    h.write_u8(1);
                    h.write_str(&t.content);
                    h.write_f64(t.font_size);
                    h.write_u32(u32::from(t.font_weight));
                    h.write_str(t.font_family.as_deref().unwrap_or(""));
                    h.write_str(&t.color);
                }
                None => h.write_u8(0),
            }
        }
    }
    h.write_u32(n.children.len() as u32);
    for c in &n.children {
        write_node(h, c);
    }
}

fn write_id(h: &mut StableHasher, id: &ElementId) {
    let tag = match id {
        ElementId::Background => 0,
        ElementId::Timer => 1,
        ElementId::Header => 2,
        ElementId::Reward(_) => 3,
        ElementId::Offer(_) => 4,
        ElementId::Button(_) => 5,
        ElementId::ButtonIcon(_) => 6,
    };
    h.write_u8(tag);
    h.write_str(id.key().unwrap_or(""));
}

fn write_image(h: &mut StableHasher, img: Option<&ImageRef>) {
    match img {
        Some(img) => {
            h.write_u8(1);
            h.write_str(&img.href);
            h.write_u32(img.width);
            h.write_u32(img.height);
        }
        None => h.write_u8(0),
    }
}

fn write_style(h: &mut StableHasher, v: &StyleValue) {
    match v {
        StyleValue::None => h.write_u8(0),
        StyleValue::Color { css } => {
            h.write_u8(1);
            h.write_str(css);
        }
        StyleValue::LinearGradient { angle_deg, stops } => {
            h.write_u8(2);
            h.write_f64(*angle_deg);
            h.write_u32(stops.len() as u32);
            for s in stops {
                h.write_str(&s.color);
                h.write_f64(s.position);
            }
        }
        StyleValue::Shadows { shadows } => {
            h.write_u8(3);
            h.write_u32(shadows.len() as u32);
            for s in shadows {
                h.write_f64(s.x);
                h.write_f64(s.y);
                h.write_f64(s.blur);
                h.write_f64(s.spread);
                h.write_str(&s.color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
