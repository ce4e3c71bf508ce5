use crate::foundation::core::{Affine, Point, Rect, Size, Vec2};
use crate::scene::model::ImageBounds;

/// Center-anchored, optionally rotated box in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Geometric center.
    pub center: Point,
    /// Box size.
    pub size: Size,
    /// Clockwise rotation about the center, in degrees.
    pub rotation_deg: f64,
}

impl Placement {
    /// Scale design-space bounds into viewport pixels.
    ///
    /// A scale of `0` yields a zero-size placement; it is still a placement.
    pub fn from_bounds(b: &ImageBounds, scale: f64) -> Self {
        Self {
            center: Point::new(b.x * scale, b.y * scale),
            size: Size::new(b.width * scale, b.height * scale),
            rotation_deg: b.rotation,
        }
    }

    /// Placement covering `rect` without rotation.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            center: rect.center(),
            size: rect.size(),
            rotation_deg: 0.0,
        }
    }

    /// Top-left corner of the unrotated box.
    pub fn top_left(&self) -> Point {
        Point::new(
            self.center.x - self.size.width / 2.0,
            self.center.y - self.size.height / 2.0,
        )
    }

    /// Unrotated box.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Box in local coordinates (origin at the center).
    pub fn local_rect(&self) -> Rect {
        Rect::from_center_size(Point::ORIGIN, self.size)
    }

    /// Local-to-viewport transform: rotate about the origin, then move to the center.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2()) * Affine::rotate(self.rotation_deg.to_radians())
    }

    /// Axis-aligned bounding box of the rotated box.
    pub fn bounding_box(&self) -> Rect {
        self.transform().transform_rect_bbox(self.local_rect())
    }

    /// Same placement moved by `delta`.
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            center: self.center + delta,
            ..self
        }
    }

    /// Rotation-aware containment test, with `extra` applied after this placement's transform.
    pub fn contains(&self, p: Point, extra: Affine) -> bool {
        let xf = extra * self.transform();
        if xf.determinant().abs() < 1e-12 {
            return false;
        }
        let local = xf.inverse() * p;
        let r = self.local_rect();
        local.x >= r.x0 && local.x <= r.x1 && local.y >= r.y0 && local.y <= r.y1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/placement.rs"]
mod tests;
