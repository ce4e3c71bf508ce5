use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::scene::spec::ChainSpec;
use crate::state::kind::{ButtonState, HeaderState, OfferState};

/// Ready-to-render image reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    /// Path relative to the asset root (or any URL the consumer understands).
    pub href: String,
    /// Intrinsic width in pixels, `0` when unknown.
    #[serde(default)]
    pub width: u32,
    /// Intrinsic height in pixels, `0` when unknown.
    #[serde(default)]
    pub height: u32,
}

impl ImageRef {
    /// Reference with known intrinsic size.
    pub fn new(href: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            href: href.into(),
            width,
            height,
        }
    }

    /// Reference without intrinsic size.
    pub fn href(href: impl Into<String>) -> Self {
        Self::new(href, 0, 0)
    }
}

/// Resolved images for one chain specification.
///
/// Keys must equal the specification's `offerKey`/`rewardKey` values exactly. A missing entry
/// means "no image for this state"; the element still renders, with an empty image. Entries
/// under keys the specification does not declare are never looked up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMap {
    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageRef>,
    /// Offer images by offer key and state.
    #[serde(default)]
    pub offer_images: BTreeMap<String, BTreeMap<OfferState, ImageRef>>,
    /// Header images by state.
    #[serde(default)]
    pub header_images: BTreeMap<HeaderState, ImageRef>,
    /// Button icons by offer key and state.
    #[serde(default)]
    pub button_icons: BTreeMap<String, BTreeMap<ButtonState, ImageRef>>,
    /// Reward images by reward key.
    #[serde(default)]
    pub reward_images: BTreeMap<String, ImageRef>,
}

impl AssetMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Background image.
    pub fn background(&self) -> Option<&ImageRef> {
        self.background_image.as_ref()
    }

    /// Image of an offer in one state.
    pub fn offer_image(&self, key: &str, state: OfferState) -> Option<&ImageRef> {
        self.offer_images.get(key)?.get(&state)
    }

    /// Header image in one state.
    pub fn header_image(&self, state: HeaderState) -> Option<&ImageRef> {
        self.header_images.get(&state)
    }

    /// Icon of a button in one state.
    pub fn button_icon(&self, key: &str, state: ButtonState) -> Option<&ImageRef> {
        self.button_icons.get(key)?.get(&state)
    }

    /// Image of a reward item.
    pub fn reward_image(&self, key: &str) -> Option<&ImageRef> {
        self.reward_images.get(key)
    }

    /// Insert an offer image.
    pub fn insert_offer_image(&mut self, key: impl Into<String>, state: OfferState, img: ImageRef) {
        self.offer_images.entry(key.into()).or_default().insert(state, img);
    }

    /// Insert a button icon.
    pub fn insert_button_icon(
        &mut self,
        key: impl Into<String>,
        state: ButtonState,
        img: ImageRef,
    ) {
        self.button_icons.entry(key.into()).or_default().insert(state, img);
    }

    /// Total number of image references.
    pub fn len(&self) -> usize {
        usize::from(self.background_image.is_some())
            + self.offer_images.values().map(BTreeMap::len).sum::<usize>()
            + self.header_images.len()
            + self.button_icons.values().map(BTreeMap::len).sum::<usize>()
            + self.reward_images.len()
    }

    /// Return `true` when the map holds no image.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop images no longer referenced by `spec` and return how many were released.
    pub fn retain_referenced(&mut self, spec: &ChainSpec) -> usize {
        let before = self.len();

        if spec.background().is_none() {
            self.background_image = None;
        }
        if spec.header().is_none() {
            self.header_images.clear();
        }
        let offers: BTreeSet<&str> = spec.offers().iter().map(|o| o.offer_key.as_str()).collect();
        self.offer_images.retain(|k, _| offers.contains(k.as_str()));
        let buttons: BTreeSet<&str> = spec.buttons().iter().map(|b| b.offer_key.as_str()).collect();
        self.button_icons.retain(|k, _| buttons.contains(k.as_str()));
        let rewards: BTreeSet<&str> = spec
            .rewards()
            .map(|r| r.items.iter().map(|i| i.reward_key.as_str()).collect())
            .unwrap_or_default();
        self.reward_images.retain(|k, _| rewards.contains(k.as_str()));

        let released = before - self.len();
        if released > 0 {
            tracing::debug!(released, "released unreferenced images");
        }
        released
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/map.rs"]
mod tests;
