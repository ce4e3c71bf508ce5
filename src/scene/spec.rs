use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{DEFAULT_FRAME_SIZE, FrameSize};
use crate::foundation::error::{ChainError, ChainResult};
use crate::scene::model::{
    BackgroundSpec, ButtonSpec, ChainSpecDef, HeaderSpec, MetadataSpec, OfferSpec, RewardsSpec,
    TimerSpec,
};
use crate::scene::validate::validate_chain;

/// Validated chain specification.
///
/// This is the JSON-facing, designer-authored document. Every constructor validates, so a value
/// of this type always satisfies the boundary invariants (positive frame, unique keys, buttons
/// bound to existing offers, non-negative bounds). It is read-only once loaded.
#[derive(Debug, Clone)]
pub struct ChainSpec {
    def: ChainSpecDef,
}

impl ChainSpec {
    /// Parse and validate a specification from a JSON reader.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R) -> ChainResult<Self> {
        let def: ChainSpecDef = serde_json::from_reader(r)
            .map_err(|e| ChainError::serde(format!("parse chain specification JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse and validate a specification from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChainResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChainError::validation(format!(
                "open chain specification '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate a specification from a JSON string.
    pub fn from_json_str(s: &str) -> ChainResult<Self> {
        let def: ChainSpecDef = serde_json::from_str(s)
            .map_err(|e| ChainError::serde(format!("parse chain specification JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Convert and validate an already parsed JSON value.
    pub fn from_value(v: serde_json::Value) -> ChainResult<Self> {
        let def: ChainSpecDef = serde_json::from_value(v)
            .map_err(|e| ChainError::serde(format!("parse chain specification JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Validate a boundary model built in code.
    pub fn from_def(def: ChainSpecDef) -> ChainResult<Self> {
        validate_chain(&def).map_err(|e| {
            ChainError::validation(format!("chain specification is invalid: {e}"))
        })?;
        tracing::debug!(
            chain = %def.chain_id,
            offers = def.offers.len(),
            buttons = def.buttons.len(),
            "chain specification loaded"
        );
        Ok(Self { def })
    }

    /// Opaque chain identifier.
    pub fn chain_id(&self) -> &str {
        &self.def.chain_id
    }

    /// Declared frame size, if any.
    pub fn declared_frame_size(&self) -> Option<FrameSize> {
        self.def.frame_size
    }

    /// Declared frame size, or `fallback` when the document has none.
    pub fn frame_size_or(&self, fallback: FrameSize) -> FrameSize {
        self.def.frame_size.unwrap_or(fallback)
    }

    /// Declared frame size, or [`DEFAULT_FRAME_SIZE`].
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size_or(DEFAULT_FRAME_SIZE)
    }

    /// Background reference.
    pub fn background(&self) -> Option<&BackgroundSpec> {
        self.def.background.as_ref()
    }

    /// Offers in display order.
    pub fn offers(&self) -> &[OfferSpec] {
        &self.def.offers
    }

    /// Look up an offer by key.
    pub fn offer(&self, key: &str) -> Option<&OfferSpec> {
        self.def.offers.iter().find(|o| o.offer_key == key)
    }

    /// Buttons in display order.
    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.def.buttons
    }

    /// Look up the button bound to an offer.
    pub fn button(&self, offer_key: &str) -> Option<&ButtonSpec> {
        self.def.buttons.iter().find(|b| b.offer_key == offer_key)
    }

    /// Header, if present.
    pub fn header(&self) -> Option<&HeaderSpec> {
        self.def.header.as_ref()
    }

    /// Timer, if present.
    pub fn timer(&self) -> Option<&TimerSpec> {
        self.def.timer.as_ref()
    }

    /// Rewards, if present.
    pub fn rewards(&self) -> Option<&RewardsSpec> {
        self.def.rewards.as_ref()
    }

    /// Document metadata.
    pub fn metadata(&self) -> &MetadataSpec {
        &self.def.metadata
    }

    /// Underlying boundary model.
    pub fn def(&self) -> &ChainSpecDef {
        &self.def
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/spec.rs"]
mod tests;
