use std::collections::BTreeMap;

use crate::foundation::error::{ChainError, ChainResult};
use crate::scene::spec::ChainSpec;
use crate::state::events::{ListenerId, Listeners, StateChange};
use crate::state::kind::{ButtonState, HeaderState, OfferState};

/// Serializable copy of the runtime state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// Offer states by key.
    pub offer_states: BTreeMap<String, OfferState>,
    /// Header state.
    pub header_state: HeaderState,
    /// Button states by offer key.
    pub button_states: BTreeMap<String, ButtonState>,
    /// Transient animating flag.
    pub is_animating: bool,
}

/// Button state implied by an offer state under the offer-drives-button policy.
pub fn button_state_for_offer(state: OfferState) -> ButtonState {
    match state {
        OfferState::Locked => ButtonState::Disabled,
        OfferState::Unlocked => ButtonState::Default,
        OfferState::Claimed => ButtonState::Claimed,
    }
}

/// Single owner of every interactive element's state for one chain specification.
///
/// The key set is fixed at construction from the specification: offers start `Locked`, buttons
/// start `default`, the header starts `active`. Operations on a key outside that set fail with
/// [`ChainError::UnknownKey`] and never insert an entry.
///
/// Every effective mutation bumps [`ChainStateStore::revision`] and notifies listeners. While
/// recording is on (see [`ChainStateStore::record_changes`]) it is also appended to a change
/// log drained with [`ChainStateStore::drain_changes`]. Writing a value equal to the current one
/// is not a mutation.
#[derive(Debug)]
pub struct ChainStateStore {
    offers: BTreeMap<String, OfferState>,
    header: HeaderState,
    buttons: BTreeMap<String, ButtonState>,
    animating: bool,
    revision: u64,
    recording: bool,
    log: Vec<StateChange>,
    listeners: Listeners,
}

impl ChainStateStore {
    /// Initial state for `spec`.
    pub fn new(spec: &ChainSpec) -> Self {
        let offers = spec
            .offers()
            .iter()
            .map(|o| (o.offer_key.clone(), OfferState::Locked))
            .collect();
        let buttons = spec
            .buttons()
            .iter()
            .map(|b| (b.offer_key.clone(), ButtonState::Default))
            .collect();
        Self {
            offers,
            header: HeaderState::ALL[0],
            buttons,
            animating: false,
            revision: 0,
            recording: false,
            log: Vec::new(),
            listeners: Listeners::default(),
        }
    }

    /// Re-initialize for a new specification, keeping listeners.
    ///
    /// Counts as one mutation but emits no per-key changes; pending log entries are discarded.
    pub fn reset(&mut self, spec: &ChainSpec) {
        let listeners = std::mem::take(&mut self.listeners);
        let (revision, recording) = (self.revision, self.recording);
        *self = Self::new(spec);
        self.listeners = listeners;
        self.revision = revision + 1;
        self.recording = recording;
    }

    /// Monotonic mutation counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// State of an offer, `None` for unknown keys.
    pub fn offer_state(&self, key: &str) -> Option<OfferState> {
        self.offers.get(key).copied()
    }

    /// Current header state.
    pub fn header_state(&self) -> HeaderState {
        self.header
    }

    /// State of a button, `None` for unknown keys.
    pub fn button_state(&self, key: &str) -> Option<ButtonState> {
        self.buttons.get(key).copied()
    }

    /// Transient animating flag.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Offer keys in key order.
    pub fn offer_keys(&self) -> impl Iterator<Item = &str> {
        self.offers.keys().map(String::as_str)
    }

    /// Button keys in key order.
    pub fn button_keys(&self) -> impl Iterator<Item = &str> {
        self.buttons.keys().map(String::as_str)
    }

    /// Copy of the full runtime state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            offer_states: self.offers.clone(),
            header_state: self.header,
            button_states: self.buttons.clone(),
            is_animating: self.animating,
        }
    }

    /// Advance an offer one step along `Locked -> Unlocked -> Claimed -> Locked`.
    pub fn cycle_offer_state(&mut self, key: &str) -> ChainResult<OfferState> {
        let current = self.require_offer(key)?;
        let next = current.next();
        self.write_offer(key, next);
        Ok(next)
    }

    /// Set an offer state directly.
    pub fn set_offer_state(&mut self, key: &str, state: OfferState) -> ChainResult<()> {
        self.require_offer(key)?;
        self.write_offer(key, state);
        Ok(())
    }

    /// Advance an offer and, when it has a button, move that button to the state implied by
    /// [`button_state_for_offer`].
    pub fn cycle_offer_state_synced(&mut self, key: &str) -> ChainResult<OfferState> {
        let next = self.cycle_offer_state(key)?;
        if self.buttons.contains_key(key) {
            self.write_button(key, button_state_for_offer(next));
        }
        Ok(next)
    }

    /// Advance the header along `active -> success -> fail -> active`.
    pub fn cycle_header_state(&mut self) -> HeaderState {
        let next = self.header.next();
        self.set_header_state(next);
        next
    }

    /// Set the header state directly, bypassing the cycle.
    pub fn set_header_state(&mut self, state: HeaderState) {
        let from = self.header;
        if from == state {
            return;
        }
        self.header = state;
        self.record(StateChange::Header { from, to: state });
    }

    /// Set a button state directly. This is the only way into `disabled` and `claimed`.
    pub fn set_button_state(&mut self, key: &str, state: ButtonState) -> ChainResult<()> {
        self.require_button(key)?;
        self.write_button(key, state);
        Ok(())
    }

    /// Pointer entered a button: `default -> hover`, no-op from any other state.
    pub fn button_mouse_enter(&mut self, key: &str) -> ChainResult<ButtonState> {
        let current = self.require_button(key)?;
        if current == ButtonState::Default {
            self.write_button(key, ButtonState::Hover);
            return Ok(ButtonState::Hover);
        }
        Ok(current)
    }

    /// Pointer left a button: `hover | active -> default`, no-op otherwise.
    pub fn button_mouse_leave(&mut self, key: &str) -> ChainResult<ButtonState> {
        let current = self.require_button(key)?;
        if matches!(current, ButtonState::Hover | ButtonState::Active) {
            self.write_button(key, ButtonState::Default);
            return Ok(ButtonState::Default);
        }
        Ok(current)
    }

    /// Button pressed: enter `active` from `default`, `hover` or `active`.
    ///
    /// Returns `false` (and changes nothing) for `disabled` and `claimed` buttons.
    pub fn button_press(&mut self, key: &str) -> ChainResult<bool> {
        let current = self.require_button(key)?;
        if current.is_terminal() {
            tracing::debug!(button = key, state = %current, "press ignored");
            return Ok(false);
        }
        self.write_button(key, ButtonState::Active);
        Ok(true)
    }

    /// End of click feedback: `active -> default`. Any other state is left alone.
    pub fn button_release(&mut self, key: &str) -> ChainResult<bool> {
        let current = self.require_button(key)?;
        if current != ButtonState::Active {
            return Ok(false);
        }
        self.write_button(key, ButtonState::Default);
        Ok(true)
    }

    /// Set the transient animating flag.
    pub fn set_animating(&mut self, animating: bool) {
        if self.animating == animating {
            return;
        }
        self.animating = animating;
        self.record(StateChange::Animating { animating });
    }

    /// Register a synchronous change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Turn the change log on or off. Off by default; turning it off discards pending entries.
    pub fn record_changes(&mut self, on: bool) {
        self.recording = on;
        if !on {
            self.log.clear();
        }
    }

    /// Take the changes recorded since the last drain.
    pub fn drain_changes(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.log)
    }

    fn require_offer(&self, key: &str) -> ChainResult<OfferState> {
        self.offer_state(key)
            .ok_or_else(|| ChainError::unknown_key(format!("offer '{key}'")))
    }

    fn require_button(&self, key: &str) -> ChainResult<ButtonState> {
        self.button_state(key)
            .ok_or_else(|| ChainError::unknown_key(format!("button '{key}'")))
    }

    fn write_offer(&mut self, key: &str, to: OfferState) {
        let Some(slot) = self.offers.get_mut(key) else {
            return;
        };
        let from = *slot;
        if from == to {
            return;
        }
        *slot = to;
        self.record(StateChange::Offer {
            key: key.to_owned(),
            from,
            to,
        });
    }

    fn write_button(&mut self, key: &str, to: ButtonState) {
        let Some(slot) = self.buttons.get_mut(key) else {
            return;
        };
        let from = *slot;
        if from == to {
            return;
        }
        *slot = to;
        self.record(StateChange::Button {
            key: key.to_owned(),
            from,
            to,
        });
    }

    fn record(&mut self, change: StateChange) {
        self.revision += 1;
        tracing::debug!(revision = self.revision, ?change, "state changed");
        self.listeners.notify(&change);
        if self.recording {
            self.log.push(change);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/machine.rs"]
mod tests;
