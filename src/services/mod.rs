//! Service layer for lifecycle evaluation.
//!
//! This module contains the pure computation that sits between the domain
//! models and the HTTP layer. There is no orchestration here: every operation
//! is a deterministic function over a reference instant and an event window.

pub mod lifecycle;

pub use lifecycle::{can_join, classify, time_until_end, time_until_start};
