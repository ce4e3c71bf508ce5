//! Interaction state machine: closed state enumerations, the central store, change
//! notifications and cancellable timers.

pub(crate) mod events;
pub(crate) mod kind;
pub(crate) mod machine;
pub(crate) mod timer;
