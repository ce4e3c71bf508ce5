use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::error::{ChainError, ChainResult};

/// Default hold time of the button click feedback.
pub const DEFAULT_CLICK_FEEDBACK_MS: u64 = 150;

/// State transition timing for one element kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTiming {
    /// Transition duration in milliseconds.
    pub duration_ms: u64,
    /// Delay before the transition starts, in milliseconds.
    #[serde(default)]
    pub delay_ms: u64,
    /// Easing curve.
    #[serde(default)]
    pub ease: Ease,
}

impl TransitionTiming {
    /// Timing with no delay.
    pub fn new(duration_ms: u64, ease: Ease) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            ease,
        }
    }

    /// Instant change.
    pub fn none() -> Self {
        Self::new(0, Ease::Linear)
    }

    /// Delay plus duration.
    pub fn total(self) -> Duration {
        Duration::from_millis(self.delay_ms.saturating_add(self.duration_ms))
    }

    /// Eased progress at `elapsed` since the transition was triggered.
    pub fn progress(self, elapsed: Duration) -> f64 {
        let ms = elapsed.as_secs_f64() * 1000.0 - self.delay_ms as f64;
        if ms <= 0.0 {
            return if self.duration_ms == 0 { 1.0 } else { 0.0 };
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.ease.apply(ms / self.duration_ms as f64)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::new(300, Ease::InOutQuad)
    }
}

/// Damped spring "pop" played after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringConfig {
    /// Spring stiffness.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Mass.
    #[serde(default = "one")]
    pub mass: f64,
    /// Scale the element starts from when the spring is released.
    #[serde(default = "default_initial_scale")]
    pub initial_scale: f64,
}

fn one() -> f64 {
    1.0
}

fn default_initial_scale() -> f64 {
    0.85
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 12.0,
            mass: 1.0,
            initial_scale: default_initial_scale(),
        }
    }
}

/// Periodic rotation wobble.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WobbleConfig {
    /// Peak rotation in degrees.
    pub amplitude_deg: f64,
    /// Period in milliseconds.
    pub period_ms: u64,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            amplitude_deg: 3.0,
            period_ms: 1200,
        }
    }
}

/// Circular drift around the resting position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalConfig {
    /// Orbit radius in design units.
    pub radius: f64,
    /// Period in milliseconds.
    pub period_ms: u64,
    /// Starting phase in degrees.
    #[serde(default)]
    pub phase_deg: f64,
}

impl Default for OrbitalConfig {
    fn default() -> Self {
        Self {
            radius: 4.0,
            period_ms: 4000,
            phase_deg: 0.0,
        }
    }
}

/// Idle motion sub-configurations. Each is independent; absent means off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleMotion {
    /// Spring pop after a state change.
    #[serde(default)]
    pub spring: Option<SpringConfig>,
    /// Rotation wobble.
    #[serde(default)]
    pub wobble: Option<WobbleConfig>,
    /// Orbital drift.
    #[serde(default)]
    pub orbital: Option<OrbitalConfig>,
}

impl IdleMotion {
    /// Return `true` when no motion is configured.
    pub fn is_still(&self) -> bool {
        self.spring.is_none() && self.wobble.is_none() && self.orbital.is_none()
    }
}

/// Animation settings of one element kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAnimation {
    /// State transition timing.
    #[serde(default)]
    pub transition: TransitionTiming,
    /// Idle motion.
    #[serde(default)]
    pub idle: IdleMotion,
}

impl ElementAnimation {
    /// Replace the transition timing, keeping idle motion.
    pub fn with_transition(self, transition: TransitionTiming) -> Self {
        Self { transition, ..self }
    }

    /// Replace the spring sub-config, keeping wobble and orbital.
    pub fn with_spring(mut self, spring: Option<SpringConfig>) -> Self {
        self.idle.spring = spring;
        self
    }

    /// Replace the wobble sub-config, keeping spring and orbital.
    pub fn with_wobble(mut self, wobble: Option<WobbleConfig>) -> Self {
        self.idle.wobble = wobble;
        self
    }

    /// Replace the orbital sub-config, keeping spring and wobble.
    pub fn with_orbital(mut self, orbital: Option<OrbitalConfig>) -> Self {
        self.idle.orbital = orbital;
        self
    }
}

/// Element kinds that carry their own animation settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimatedKind {
    /// Offer nodes.
    Offer,
    /// Header.
    Header,
    /// Buttons.
    Button,
}

/// Complete animation and timing configuration.
///
/// Construct with [`AnimationConfig::builder`] or deserialize; every field has a default, so a
/// partial JSON object yields a fully specified value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Offer nodes.
    #[serde(default)]
    pub offer: ElementAnimation,
    /// Header.
    #[serde(default)]
    pub header: ElementAnimation,
    /// Buttons.
    #[serde(default = "default_button_animation")]
    pub button: ElementAnimation,
    /// Hold time of the `active` click feedback, in milliseconds.
    #[serde(default = "default_click_feedback_ms")]
    pub click_feedback_ms: u64,
}

fn default_button_animation() -> ElementAnimation {
    ElementAnimation {
        transition: TransitionTiming::new(120, Ease::OutQuad),
        idle: IdleMotion::default(),
    }
}

fn default_click_feedback_ms() -> u64 {
    DEFAULT_CLICK_FEEDBACK_MS
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            offer: ElementAnimation::default(),
            header: ElementAnimation::default(),
            button: default_button_animation(),
            click_feedback_ms: DEFAULT_CLICK_FEEDBACK_MS,
        }
    }
}

impl AnimationConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> AnimationConfigBuilder {
        AnimationConfigBuilder {
            config: Self::default(),
        }
    }

    /// No transitions and no idle motion; click feedback keeps its default hold time.
    pub fn still() -> Self {
        let still = ElementAnimation {
            transition: TransitionTiming::none(),
            idle: IdleMotion::default(),
        };
        Self {
            offer: still,
            header: still,
            button: still,
            click_feedback_ms: DEFAULT_CLICK_FEEDBACK_MS,
        }
    }

    /// Settings for one element kind.
    pub fn element(&self, kind: AnimatedKind) -> &ElementAnimation {
        match kind {
            AnimatedKind::Offer => &self.offer,
            AnimatedKind::Header => &self.header,
            AnimatedKind::Button => &self.button,
        }
    }

    /// Replace one element kind's settings through `f`, leaving the others untouched.
    pub fn update(
        &mut self,
        kind: AnimatedKind,
        f: impl FnOnce(ElementAnimation) -> ElementAnimation,
    ) {
        let slot = match kind {
            AnimatedKind::Offer => &mut self.offer,
            AnimatedKind::Header => &mut self.header,
            AnimatedKind::Button => &mut self.button,
        };
        *slot = f(*slot);
    }

    /// Click feedback hold time.
    pub fn click_feedback(&self) -> Duration {
        Duration::from_millis(self.click_feedback_ms)
    }

    /// Check that every configured value is usable.
    pub fn validate(&self) -> ChainResult<()> {
        for (name, el) in [
            ("offer", &self.offer),
            ("header", &self.header),
            ("button", &self.button),
        ] {
            if let Some(s) = &el.idle.spring {
                let ok = [s.stiffness, s.damping, s.mass, s.initial_scale]
                    .iter()
                    .all(|v| v.is_finite())
                    && s.stiffness > 0.0
                    && s.mass > 0.0
                    && s.damping >= 0.0;
                if !ok {
                    return Err(ChainError::validation(format!(
                        "{name}.idle.spring requires finite stiffness > 0, mass > 0, damping >= 0"
                    )));
                }
            }
            if let Some(w) = &el.idle.wobble
                && (w.period_ms == 0 || !w.amplitude_deg.is_finite())
            {
                return Err(ChainError::validation(format!(
                    "{name}.idle.wobble requires period_ms > 0 and a finite amplitude"
                )));
            }
            if let Some(o) = &el.idle.orbital
                && (o.period_ms == 0 || !o.radius.is_finite() || !o.phase_deg.is_finite())
            {
                return Err(ChainError::validation(format!(
                    "{name}.idle.orbital requires period_ms > 0 and finite radius/phase"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`AnimationConfig`].
#[derive(Clone, Debug)]
pub struct AnimationConfigBuilder {
    config: AnimationConfig,
}

impl AnimationConfigBuilder {
    /// Replace the offer settings.
    pub fn offer(mut self, v: ElementAnimation) -> Self {
        self.config.offer = v;
        self
    }

    /// Replace the header settings.
    pub fn header(mut self, v: ElementAnimation) -> Self {
        self.config.header = v;
        self
    }

    /// Replace the button settings.
    pub fn button(mut self, v: ElementAnimation) -> Self {
        self.config.button = v;
        self
    }

    /// Update one element kind's settings in place.
    pub fn with(
        mut self,
        kind: AnimatedKind,
        f: impl FnOnce(ElementAnimation) -> ElementAnimation,
    ) -> Self {
        self.config.update(kind, f);
        self
    }

    /// Set the click feedback hold time.
    pub fn click_feedback(mut self, d: Duration) -> Self {
        self.config.click_feedback_ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> ChainResult<AnimationConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
