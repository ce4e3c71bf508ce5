use std::f64::consts::TAU;
use std::time::Duration;

use crate::animation::config::{IdleMotion, OrbitalConfig, SpringConfig, WobbleConfig};
use crate::foundation::core::{Affine, Vec2};

/// Motion offset applied on top of an element's resting placement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionSample {
    /// Translation in viewport pixels.
    pub offset: Vec2,
    /// Extra rotation in degrees.
    pub rotation_deg: f64,
    /// Uniform scale about the element center.
    pub scale: f64,
}

impl Default for MotionSample {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MotionSample {
    /// No motion.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        rotation_deg: 0.0,
        scale: 1.0,
    };

    /// Return `true` when this sample moves nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transform about `center`: scale and rotate around it, then translate.
    pub fn about(&self, center: kurbo::Point) -> Affine {
        if self.is_identity() {
            return Affine::IDENTITY;
        }
        let c = center.to_vec2();
        Affine::translate(self.offset + c)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-c)
    }
}

/// Sample idle motion.
///
/// `clock` is the viewer clock (drives wobble and orbital); `since_change` is the time since the
/// element last changed state (drives the spring), `None` when it never changed. Lengths are
/// multiplied by `scale` to land in viewport pixels.
pub fn sample_idle(
    idle: &IdleMotion,
    clock: Duration,
    since_change: Option<Duration>,
    scale: f64,
) -> MotionSample {
    let mut out = MotionSample::IDENTITY;
    if let (Some(spring), Some(t)) = (&idle.spring, since_change) {
        out.scale = spring_scale(spring, t);
    }
    if let Some(wobble) = &idle.wobble {
        out.rotation_deg = wobble_rotation(wobble, clock);
    }
    if let Some(orbital) = &idle.orbital {
        out.offset = orbital_offset(orbital, clock) * scale;
    }
    out
}

/// Damped harmonic response released from `initial_scale` toward `1.0`.
pub fn spring_scale(s: &SpringConfig, t: Duration) -> f64 {
    let t = t.as_secs_f64();
    let d0 = s.initial_scale - 1.0;
    let w0 = (s.stiffness / s.mass).sqrt();
    let zeta = s.damping / (2.0 * (s.stiffness * s.mass).sqrt());
    let disp = if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        d0 * (-zeta * w0 * t).exp() * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
    } else {
        // Critically damped envelope; overdamped springs settle no faster than this.
        d0 * (-w0 * t).exp() * (1.0 + w0 * t)
    };
    1.0 + disp
}

fn wobble_rotation(w: &WobbleConfig, clock: Duration) -> f64 {
    let phase = clock.as_secs_f64() * 1000.0 / w.period_ms as f64;
    w.amplitude_deg * (TAU * phase).sin()
}

fn orbital_offset(o: &OrbitalConfig, clock: Duration) -> Vec2 {
    let turns = clock.as_secs_f64() * 1000.0 / o.period_ms as f64;
    let theta = TAU * turns + o.phase_deg.to_radians();
    Vec2::new(o.radius * theta.cos(), o.radius * theta.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
