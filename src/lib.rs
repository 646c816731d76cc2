//! # Eventfox
//!
//! Event lifecycle evaluation engine for a social events platform.
//!
//! This crate answers one question deterministically: given a reference
//! instant and an event's temporal bounds, what phase is the event in, and
//! what follows from that (join eligibility, time remaining)? The evaluator
//! is a pure function set over `(now, window)` inputs — "now" is always
//! supplied by the caller, never read from the platform clock inside the
//! core, which keeps every operation referentially transparent and testable.
//! The optional HTTP layer exposes the evaluator as a REST API via Axum.
//!
//! ## Features
//!
//! - **Phase classification**: upcoming / ongoing / completed from an event's
//!   start, optional explicit end, and duration fallback
//! - **Join eligibility**: membership gate derived from the phase
//! - **Countdowns**: time-until-start and time-until-end, decomposed for
//!   human-readable display
//! - **HTTP API**: RESTful classification endpoints for frontend integration
//!   (feature `http-server`)
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types — event windows, phases, countdown decompositions
//! - [`services`]: The pure lifecycle evaluator
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: Server configuration from environment variables
//! - [`error`]: Typed error taxonomy for boundary validation

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;

pub use error::{LifecycleError, Result};
pub use models::{EndCountdown, EventWindow, Phase, StartCountdown};
pub use services::lifecycle;
