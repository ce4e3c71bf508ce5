use crate::state::kind::{ButtonState, HeaderState, OfferState};

/// One observable runtime state mutation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StateChange {
    /// An offer changed state.
    Offer {
        /// Offer key.
        key: String,
        /// Previous state.
        from: OfferState,
        /// New state.
        to: OfferState,
    },
    /// The header changed state.
    Header {
        /// Previous state.
        from: HeaderState,
        /// New state.
        to: HeaderState,
    },
    /// A button changed state.
    Button {
        /// Offer key of the button.
        key: String,
        /// Previous state.
        from: ButtonState,
        /// New state.
        to: ButtonState,
    },
    /// The transient animating flag flipped.
    Animating {
        /// New flag value.
        animating: bool,
    },
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&StateChange)>;

/// Synchronous change listeners, invoked in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        before != self.entries.len()
    }

    pub(crate) fn notify(&mut self, change: &StateChange) {
        for (_, listener) in &mut self.entries {
            listener(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
