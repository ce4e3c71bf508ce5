use std::collections::HashSet;
use std::fmt;

use crate::scene::model::{
    BoxStyleSpec, ButtonSpec, ChainSpecDef, FillSpec, ImageBounds, OfferSpec, ShadowSpec,
};
use crate::state::kind::{ButtonState, HeaderState, OfferState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
    Key(String),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
            SchemaPathElem::Key(k) => {
                s.push('.');
                s.push_str(k);
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Validate boundary invariants of a chain specification.
///
/// Hard errors are collected and returned together. Partially authored data (a state without
/// bounds or style) is only logged, since renderers skip such entries.
pub(crate) fn validate_chain(def: &ChainSpecDef) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    if let Some(fs) = def.frame_size
        && !fs.is_positive()
    {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("frameSize")],
            format!(
                "frameSize must have finite width/height > 0 (got {}x{})",
                fs.width, fs.height
            ),
        ));
    }

    if let Some(bg) = &def.background
        && bg.export_url.trim().is_empty()
    {
        errors.push(SchemaError::at(
            &[
                SchemaPathElem::Field("background"),
                SchemaPathElem::Field("exportUrl"),
            ],
            "exportUrl must be non-empty",
        ));
    }

    let mut offer_keys = HashSet::<&str>::new();
    for (i, offer) in def.offers.iter().enumerate() {
        let path = [SchemaPathElem::Field("offers"), SchemaPathElem::Index(i)];
        if offer.offer_key.trim().is_empty() {
            errors.push(SchemaError::at(&path, "offerKey must be non-empty"));
        } else if !offer_keys.insert(offer.offer_key.as_str()) {
            errors.push(SchemaError::at(
                &path,
                format!("duplicate offerKey '{}'", offer.offer_key),
            ));
        }
        validate_offer(offer, &path, &mut errors);
    }

    if let Some(header) = &def.header {
        let path = [SchemaPathElem::Field("header")];
        for (state, b) in &header.state_bounds {
            let p = with(&path, &[state_key("stateBounds", state.as_str())]);
            validate_bounds(b, &p, &mut errors);
        }
        for state in HeaderState::ALL {
            if !header.state_bounds.contains_key(&state) {
                tracing::warn!(state = %state, "header has no bounds for state");
            }
        }
    }

    if let Some(timer) = &def.timer {
        let path = [SchemaPathElem::Field("timer")];
        validate_bounds(
            &timer.bounds,
            &with(&path, &[SchemaPathElem::Field("bounds")]),
            &mut errors,
        );
        validate_box_style(
            &timer.style,
            &with(&path, &[SchemaPathElem::Field("style")]),
            &mut errors,
        );
    }

    if let Some(rewards) = &def.rewards {
        let mut keys = HashSet::<&str>::new();
        for (i, item) in rewards.items.iter().enumerate() {
            let path = [
                SchemaPathElem::Field("rewards"),
                SchemaPathElem::Field("items"),
                SchemaPathElem::Index(i),
            ];
            if !keys.insert(item.reward_key.as_str()) {
                errors.push(SchemaError::at(
                    &path,
                    format!("duplicate rewardKey '{}'", item.reward_key),
                ));
            }
            validate_bounds(
                &item.bounds,
                &with(&path, &[SchemaPathElem::Field("bounds")]),
                &mut errors,
            );
        }
    }

    let mut button_keys = HashSet::<&str>::new();
    for (i, button) in def.buttons.iter().enumerate() {
        let path = [SchemaPathElem::Field("buttons"), SchemaPathElem::Index(i)];
        if !offer_keys.contains(button.offer_key.as_str()) {
            errors.push(SchemaError::at(
                &path,
                format!("button references unknown offerKey '{}'", button.offer_key),
            ));
        }
        if !button_keys.insert(button.offer_key.as_str()) {
            errors.push(SchemaError::at(
                &path,
                format!("duplicate button for offerKey '{}'", button.offer_key),
            ));
        }
        validate_button(button, &path, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

fn validate_offer(offer: &OfferSpec, path: &[SchemaPathElem], errors: &mut Vec<SchemaError>) {
    for (state, b) in &offer.state_bounds {
        let p = with(path, &[state_key("stateBounds", state.as_str())]);
        validate_bounds(b, &p, errors);
    }
    for state in OfferState::ALL {
        if !offer.state_bounds.contains_key(&state) {
            tracing::warn!(
                offer = %offer.offer_key,
                state = %state,
                "offer has no bounds for state"
            );
        }
    }
}

fn validate_button(
    button: &ButtonSpec,
    path: &[SchemaPathElem],
    errors: &mut Vec<SchemaError>,
) {
    for (state, style) in &button.state_styles {
        let p = with(path, &[state_key("stateStyles", state.as_str())]);
        validate_bounds(
            &style.bounds,
            &with(&p, &[SchemaPathElem::Field("bounds")]),
            errors,
        );
        if let Some(ib) = &style.icon_bounds {
            validate_bounds(ib, &with(&p, &[SchemaPathElem::Field("iconBounds")]), errors);
        }
        for (name, v) in [
            ("fixedWidth", style.sizing.fixed_width),
            ("fixedHeight", style.sizing.fixed_height),
        ] {
            if let Some(v) = v
                && (!v.is_finite() || v < 0.0)
            {
                errors.push(SchemaError::at(
                    &with(&p, &[SchemaPathElem::Field("sizing"), SchemaPathElem::Field(name)]),
                    "must be finite and >= 0",
                ));
            }
        }
        validate_box_style(&style.style, &p, errors);
    }
    for state in ButtonState::ALL {
        if !button.state_styles.contains_key(&state) {
            tracing::warn!(
                button = %button.offer_key,
                state = %state,
                "button has no style for state"
            );
        }
    }
}

fn validate_box_style(
    style: &BoxStyleSpec,
    path: &[SchemaPathElem],
    errors: &mut Vec<SchemaError>,
) {
    if !style.corner_radius.is_finite() || style.corner_radius < 0.0 {
        errors.push(SchemaError::at(
            &with(path, &[SchemaPathElem::Field("cornerRadius")]),
            "cornerRadius must be finite and >= 0",
        ));
    }
    if !style.opacity.is_finite() || !(0.0..=1.0).contains(&style.opacity) {
        errors.push(SchemaError::at(
            &with(path, &[SchemaPathElem::Field("opacity")]),
            "opacity must be in [0, 1]",
        ));
    }
    if !style.font.size.is_finite() || style.font.size <= 0.0 {
        errors.push(SchemaError::at(
            &with(path, &[SchemaPathElem::Field("font"), SchemaPathElem::Field("size")]),
            "font size must be finite and > 0",
        ));
    }
    if let Some(FillSpec::Gradient { stops, .. }) = &style.fill {
        for (i, stop) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.position) {
                errors.push(SchemaError::at(
                    &with(
                        path,
                        &[
                            SchemaPathElem::Field("fill"),
                            SchemaPathElem::Field("stops"),
                            SchemaPathElem::Index(i),
                        ],
                    ),
                    "gradient stop position must be in [0, 1]",
                ));
            }
        }
    }
    for (i, shadow) in style.shadows.iter().enumerate() {
        validate_shadow(
            shadow,
            &with(path, &[SchemaPathElem::Field("shadows"), SchemaPathElem::Index(i)]),
            errors,
        );
    }
}

fn validate_shadow(shadow: &ShadowSpec, path: &[SchemaPathElem], errors: &mut Vec<SchemaError>) {
    let finite = [shadow.x, shadow.y, shadow.blur, shadow.spread]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        errors.push(SchemaError::at(path, "shadow values must be finite"));
    } else if shadow.blur < 0.0 {
        errors.push(SchemaError::at(path, "shadow blur must be >= 0"));
    }
}

fn validate_bounds(b: &ImageBounds, path: &[SchemaPathElem], errors: &mut Vec<SchemaError>) {
    let finite = [b.x, b.y, b.width, b.height, b.rotation]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        errors.push(SchemaError::at(path, "bounds values must be finite"));
        return;
    }
    if b.width < 0.0 || b.height < 0.0 {
        errors.push(SchemaError::at(
            path,
            format!("bounds width/height must be >= 0 (got {}x{})", b.width, b.height),
        ));
    }
}

fn state_key(field: &'static str, state: &str) -> SchemaPathElem {
    SchemaPathElem::Key(format!("{field}.{state}"))
}

fn with(path: &[SchemaPathElem], extra: &[SchemaPathElem]) -> Vec<SchemaPathElem> {
    let mut p = path.to_vec();
    p.extend_from_slice(extra);
    p
}

#[cfg(test)]
#[path = "../../tests/unit/scene/validate.rs"]
mod tests;
