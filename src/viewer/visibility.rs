/// Per-component-kind visibility after merging caller overrides over the all-visible default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    /// Background image.
    pub background: bool,
    /// Chain header.
    pub header: bool,
    /// Offer/quest nodes.
    pub offers: bool,
    /// Countdown timer.
    pub timer: bool,
    /// Buttons and their icons.
    pub buttons: bool,
    /// Rewards strip.
    pub rewards: bool,
}

impl Visibility {
    /// Everything visible.
    pub const ALL: Self = Self {
        background: true,
        header: true,
        offers: true,
        timer: true,
        buttons: true,
        rewards: true,
    };

    /// Merge `overrides` over the all-visible default.
    pub fn merged(overrides: &VisibilityOverrides) -> Self {
        Self::ALL.with(overrides)
    }

    /// Merge `overrides` over `self`; unset entries keep their current value.
    pub fn with(self, overrides: &VisibilityOverrides) -> Self {
        Self {
            background: overrides.background.unwrap_or(self.background),
            header: overrides.header.unwrap_or(self.header),
            offers: overrides.offers.unwrap_or(self.offers),
            timer: overrides.timer.unwrap_or(self.timer),
            buttons: overrides.buttons.unwrap_or(self.buttons),
            rewards: overrides.rewards.unwrap_or(self.rewards),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::ALL
    }
}

/// Caller-supplied partial visibility map.
///
/// `quests` is accepted as a synonym of `offers`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityOverrides {
    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,
    /// Chain header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<bool>,
    /// Offer/quest nodes.
    #[serde(default, alias = "quests", skip_serializing_if = "Option::is_none")]
    pub offers: Option<bool>,
    /// Countdown timer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer: Option<bool>,
    /// Buttons and their icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<bool>,
    /// Rewards strip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<bool>,
}

impl VisibilityOverrides {
    /// Hide one kind.
    pub fn hide(mut self, kind: ElementKind) -> Self {
        *self.slot(kind) = Some(false);
        self
    }

    /// Show one kind.
    pub fn show(mut self, kind: ElementKind) -> Self {
        *self.slot(kind) = Some(true);
        self
    }

    fn slot(&mut self, kind: ElementKind) -> &mut Option<bool> {
        match kind {
            ElementKind::Background => &mut self.background,
            ElementKind::Header => &mut self.header,
            ElementKind::Offers => &mut self.offers,
            ElementKind::Timer => &mut self.timer,
            ElementKind::Buttons => &mut self.buttons,
            ElementKind::Rewards => &mut self.rewards,
        }
    }
}

/// Component kinds that can be hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Background image.
    Background,
    /// Chain header.
    Header,
    /// Offer/quest nodes.
    Offers,
    /// Countdown timer.
    Timer,
    /// Buttons and their icons.
    Buttons,
    /// Rewards strip.
    Rewards,
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/visibility.rs"]
mod tests;
