//! Closed state enumerations for every interactive element kind.
//!
//! Parsing is strict: any string that is not one of the listed spellings is rejected, both by
//! serde and by the [`std::str::FromStr`] implementations.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ChainError;

/// Lifecycle state of an offer/quest node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum OfferState {
    /// Not yet available.
    Locked,
    /// Available to claim.
    Unlocked,
    /// Already claimed.
    Claimed,
}

impl OfferState {
    /// Every offer state, in cycle order.
    pub const ALL: [Self; 3] = [Self::Locked, Self::Unlocked, Self::Claimed];

    /// Next state in the `Locked -> Unlocked -> Claimed -> Locked` cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Claimed,
            Self::Claimed => Self::Locked,
        }
    }

    /// Canonical spelling used in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "Locked",
            Self::Unlocked => "Unlocked",
            Self::Claimed => "Claimed",
        }
    }
}

/// State of the chain header.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HeaderState {
    /// Chain in progress.
    Active,
    /// Chain completed.
    Success,
    /// Chain failed or expired.
    Fail,
}

impl HeaderState {
    /// Every header state, in cycle order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Success, Self::Fail];

    /// Next state in the `active -> success -> fail -> active` cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Active => Self::Success,
            Self::Success => Self::Fail,
            Self::Fail => Self::Active,
        }
    }

    /// Canonical spelling used in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

/// Visual state of a button.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    /// Idle.
    #[default]
    Default,
    /// Pointer over the button.
    Hover,
    /// Pressed, held briefly as click feedback.
    Active,
    /// Not interactive; only reachable through an explicit set.
    Disabled,
    /// Reward already taken; only reachable through an explicit set.
    Claimed,
}

impl ButtonState {
    /// Every button state.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Hover,
        Self::Active,
        Self::Disabled,
        Self::Claimed,
    ];

    /// Canonical spelling used in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Claimed => "claimed",
        }
    }

    /// `true` for states entered only through `set_button_state`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Disabled | Self::Claimed)
    }
}

macro_rules! impl_str_boundary {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ChainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ChainError::validation(format!("invalid {} \"{s}\"", $what)))
            }
        }
    };
}

impl_str_boundary!(OfferState, "offer state");
impl_str_boundary!(HeaderState, "header state");
impl_str_boundary!(ButtonState, "button state");

#[cfg(test)]
#[path = "../../tests/unit/state/kind.rs"]
mod tests;
