//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the lifecycle
//! service for the actual computation. Handlers resolve the reference instant
//! exactly once per request: from the request body when supplied, from the
//! injected clock otherwise.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::dto::{
    parse_instant, ClassifyBatchRequest, ClassifyBatchResponse, ClassifyRequest, ClassifyResponse,
    HealthResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{EndCountdown, EventWindow, StartCountdown};
use crate::services::lifecycle;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Evaluate one window against a reference instant and assemble the full
/// response: phase, presentation tokens, eligibility, and countdowns.
pub fn evaluate(now: DateTime<Utc>, window: &EventWindow) -> ClassifyResponse {
    let phase = lifecycle::classify(now, window);

    ClassifyResponse {
        phase,
        label: phase.display_text().to_string(),
        style_tag: phase.style_tag().to_string(),
        can_join: lifecycle::can_join(now, window),
        starts_in: lifecycle::time_until_start(now, window)
            .map(|delta| StartCountdown::from_delta(delta).into()),
        ends_in: lifecycle::time_until_end(now, window)
            .map(|delta| EndCountdown::from_delta(delta).into()),
    }
}

/// Resolve the reference instant for a request: explicit `now` wins, the
/// server clock is the fallback.
fn resolve_now(state: &AppState, now: &Option<String>) -> Result<DateTime<Utc>, AppError> {
    match now {
        Some(raw) => Ok(parse_instant("now", raw)?),
        None => Ok(state.clock.now()),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        clock: state.clock.now().to_rfc3339(),
    }))
}

// =============================================================================
// Classification
// =============================================================================

/// POST /v1/events/classify
///
/// Classify a single event window and report eligibility and countdowns.
pub async fn classify_event(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> HandlerResult<ClassifyResponse> {
    let now = resolve_now(&state, &request.now)?;
    let window = request.event.to_window()?;

    debug!(%now, "classifying event window");
    Ok(Json(evaluate(now, &window)))
}

/// POST /v1/events/classify-batch
///
/// Classify many event windows against one shared reference instant. Results
/// come back in input order; any invalid window rejects the whole batch.
pub async fn classify_batch(
    State(state): State<AppState>,
    Json(request): Json<ClassifyBatchRequest>,
) -> HandlerResult<ClassifyBatchResponse> {
    let now = resolve_now(&state, &request.now)?;

    let results = request
        .events
        .iter()
        .map(|input| Ok(evaluate(now, &input.to_window()?)))
        .collect::<Result<Vec<_>, AppError>>()?;
    let total = results.len();

    debug!(%now, total, "classified event batch");
    Ok(Json(ClassifyBatchResponse {
        results,
        total,
        now: now.to_rfc3339(),
    }))
}
