use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::map::{AssetMap, ImageRef};
use crate::foundation::error::{ChainError, ChainResult};
use crate::scene::spec::ChainSpec;
use crate::state::kind::{ButtonState, HeaderState, OfferState};

/// Directory-backed asset extraction.
///
/// Per-state images are found either through an explicit file name in the specification
/// (`stateImages` / `stateIcons`) or by naming convention:
///
/// - offers: `<offerKey>_<State>.png` (for example `o1_Unlocked.png`)
/// - header: `header_<state>.png`
/// - button icons: `<offerKey>_icon_<state>.png`
///
/// Background and reward images come from `exportUrl`. An explicit reference that is missing or
/// cannot be decoded fails the whole resolution; a convention lookup that finds nothing leaves
/// the slot empty.
#[derive(Clone, Debug)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    /// Resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Asset root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve every image `spec` can display.
    #[tracing::instrument(
        skip(self, spec),
        fields(root = %self.root.display(), chain = spec.chain_id())
    )]
    pub fn resolve(&self, spec: &ChainSpec) -> ChainResult<AssetMap> {
        let mut out = AssetMap::new();

        if let Some(bg) = spec.background() {
            out.background_image = Some(self.explicit(&bg.export_url)?);
        }

        for offer in spec.offers() {
            for state in OfferState::ALL {
                let img = match offer.state_images.get(&state) {
                    Some(name) => Some(self.explicit(name)?),
                    None => self.by_convention(&format!("{}_{}.png", offer.offer_key, state))?,
                };
                if let Some(img) = img {
                    out.insert_offer_image(offer.offer_key.clone(), state, img);
                }
            }
        }

        if let Some(header) = spec.header() {
            for state in HeaderState::ALL {
                let img = match header.state_images.get(&state) {
                    Some(name) => Some(self.explicit(name)?),
                    None => self.by_convention(&format!("header_{state}.png"))?,
                };
                if let Some(img) = img {
                    out.header_images.insert(state, img);
                }
            }
        }

        for button in spec.buttons() {
            for state in ButtonState::ALL {
                let img = match button.state_icons.get(&state) {
                    Some(name) => Some(self.explicit(name)?),
                    None => {
                        self.by_convention(&format!("{}_icon_{}.png", button.offer_key, state))?
                    }
                };
                if let Some(img) = img {
                    out.insert_button_icon(button.offer_key.clone(), state, img);
                }
            }
        }

        if let Some(rewards) = spec.rewards() {
            for item in &rewards.items {
                if let Some(url) = &item.export_url {
                    out.reward_images
                        .insert(item.reward_key.clone(), self.explicit(url)?);
                }
            }
        }

        tracing::debug!(images = out.len(), "assets resolved");
        Ok(out)
    }

    fn explicit(&self, source: &str) -> ChainResult<ImageRef> {
        let norm = normalize_rel_path(source)?;
        let path = self.root.join(Path::new(&norm));
        if !path.is_file() {
            return Err(ChainError::asset(format!(
                "referenced image '{}' not found",
                path.display()
            )));
        }
        self.load(norm, &path)
    }

    /// Convention lookup. Names built from keys that would leave the root are skipped.
    fn by_convention(&self, name: &str) -> ChainResult<Option<ImageRef>> {
        let norm = match normalize_rel_path(name) {
            Ok(norm) => norm,
            Err(e) => {
                tracing::warn!(name, error = %e, "convention name rejected");
                return Ok(None);
            }
        };
        let path = self.root.join(Path::new(&norm));
        if !path.is_file() {
            tracing::trace!(name = %norm, "no image by convention");
            return Ok(None);
        }
        self.load(norm, &path).map(Some)
    }

    fn load(&self, href: String, path: &Path) -> ChainResult<ImageRef> {
        let (width, height) = image::image_dimensions(path)
            .with_context(|| format!("decode image header '{}'", path.display()))
            .map_err(|e| ChainError::asset(format!("{e:#}")))?;
        Ok(ImageRef {
            href,
            width,
            height,
        })
    }
}

/// Normalize a relative asset path: forward slashes, no `.` segments, no escape from the root.
pub fn normalize_rel_path(source: &str) -> ChainResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ChainError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(ChainError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ChainError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ChainError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
