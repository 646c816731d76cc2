//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Timestamps cross the wire as RFC 3339 / ISO-8601 strings and are parsed
//! into domain types at this boundary; parse failures surface as typed
//! `InvalidInput` errors, never silently defaulted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LifecycleError, Result};
use crate::models::{EndCountdown, EventWindow, StartCountdown, DEFAULT_DURATION_HOURS};

/// Wire representation of an event's temporal bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWindowInput {
    /// Scheduled start, ISO-8601
    pub start: String,
    /// Duration fallback in hours (default: 2), used only when `end` is absent
    #[serde(default)]
    pub duration_hours: Option<f64>,
    /// Explicit end, ISO-8601; takes precedence over the duration fallback
    #[serde(default)]
    pub end: Option<String>,
}

impl EventWindowInput {
    /// Parse and validate this input into a domain [`EventWindow`].
    pub fn to_window(&self) -> Result<EventWindow> {
        let start = parse_instant("start", &self.start)?;
        let end = match &self.end {
            Some(raw) => Some(parse_instant("end", raw)?),
            None => None,
        };
        EventWindow::new(start, self.duration_hours.unwrap_or(DEFAULT_DURATION_HOURS), end)
    }
}

/// Parse an RFC 3339 timestamp, tagging failures with the offending field.
pub fn parse_instant(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| LifecycleError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source,
        })
}

/// Request body for classifying a single event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(flatten)]
    pub event: EventWindowInput,
    /// Reference instant, ISO-8601 (default: server clock)
    #[serde(default)]
    pub now: Option<String>,
}

/// Request body for classifying many events against one reference instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyBatchRequest {
    /// Events to classify
    pub events: Vec<EventWindowInput>,
    /// Shared reference instant, ISO-8601 (default: server clock)
    #[serde(default)]
    pub now: Option<String>,
}

/// Countdown until an upcoming event starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartCountdownDto {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    /// Pre-rendered display label, e.g. `"1h 30m"`
    pub label: String,
}

impl From<StartCountdown> for StartCountdownDto {
    fn from(countdown: StartCountdown) -> Self {
        Self {
            days: countdown.days,
            hours: countdown.hours,
            minutes: countdown.minutes,
            label: countdown.to_string(),
        }
    }
}

/// Countdown until an ongoing event ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndCountdownDto {
    pub hours: i64,
    pub minutes: i64,
    /// Pre-rendered display label, e.g. `"0h 45m"`
    pub label: String,
}

impl From<EndCountdown> for EndCountdownDto {
    fn from(countdown: EndCountdown) -> Self {
        Self {
            hours: countdown.hours,
            minutes: countdown.minutes,
            label: countdown.to_string(),
        }
    }
}

/// Classification result for a single event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Lifecycle phase: `"upcoming" | "ongoing" | "completed"`
    pub phase: crate::models::Phase,
    /// Neutral display label for the phase
    pub label: String,
    /// Stable style token for the phase
    pub style_tag: String,
    /// Whether a user can still join
    pub can_join: bool,
    /// Present exactly when the event is upcoming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_in: Option<StartCountdownDto>,
    /// Present exactly when the event is ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_in: Option<EndCountdownDto>,
}

/// Batch classification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyBatchResponse {
    /// Results in input order
    pub results: Vec<ClassifyResponse>,
    /// Total count
    pub total: usize,
    /// Reference instant the batch was evaluated against, ISO-8601
    pub now: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Server clock at response time, ISO-8601
    pub clock: String,
}
