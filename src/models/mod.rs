//! Domain models for event windows and lifecycle phases.

pub mod countdown;
pub mod event;
pub mod phase;

pub use countdown::{EndCountdown, StartCountdown};
pub use event::{EventWindow, DEFAULT_DURATION_HOURS};
pub use phase::Phase;
