use std::time::Duration;

/// Identifier of a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Deferred work owned by the viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Return a button from click feedback (`active`) to `default`.
    RevertButton(String),
    /// Clear the animating flag once transitions have settled.
    SettleAnimation,
}

#[derive(Clone, Debug)]
struct Pending {
    id: TimerId,
    due: Duration,
    action: TimerAction,
}

/// Cancellable timers on a caller-driven clock.
///
/// Nothing fires on its own: the owner advances the clock and applies whatever became due.
/// Cancelling (or dropping the queue with its owner) guarantees the action is never returned,
/// so a torn-down owner can never receive a deferred state write.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    /// Empty queue at clock time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `action` to become due after `delay`.
    pub fn schedule(&mut self, delay: Duration, action: TimerAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        tracing::trace!(?id, ?delay, ?action, "timer scheduled");
        self.pending.push(Pending {
            id,
            due: self.now.saturating_add(delay),
            action,
        });
        id
    }

    /// Cancel one timer. Returns `false` when it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        before != self.pending.len()
    }

    /// Cancel every timer whose action matches `pred`.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&TimerAction) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !pred(&p.action));
        before - self.pending.len()
    }

    /// Cancel everything.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Whether any pending timer matches `pred`.
    pub fn any(&self, mut pred: impl FnMut(&TimerAction) -> bool) -> bool {
        self.pending.iter().any(|p| pred(&p.action))
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Return `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due time, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Move the clock forward and return the actions that became due, ordered by due time and
    /// then by scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerAction> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let mut due = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.due, p.id));
        due.into_iter().map(|p| p.action).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/timer.rs"]
mod tests;
