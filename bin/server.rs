// Enrolment Calendar - Web Server
// JSON facade over the calculator for the enrolment form

use anyhow::{Context as AnyhowContext, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use enrolment_calendar::{
    assess, intake_dates, logging, parse_date_of_birth, parse_today, upcoming_intakes,
    EnrolmentConfig, EnrolmentError,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
struct AppState {
    config: Arc<EnrolmentConfig>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response()
    }
}

fn bad_request(err: EnrolmentError) -> Response {
    warn!(error = %err, "rejected request");
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(err.to_string()),
        }),
    )
        .into_response()
}

#[derive(Deserialize)]
struct IntakeQuery {
    today: Option<String>,
    #[serde(default)]
    all: bool,
}

#[derive(Deserialize)]
struct AssessmentQuery {
    dob: Option<String>,
    today: Option<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Response {
    ApiResponse::ok("OK")
}

/// GET /api/calendar - Configured term table
async fn get_calendar(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.config.calendar.clone())
}

/// GET /api/intakes - Upcoming (or all) intake dates
async fn get_intakes(State(state): State<AppState>, Query(query): Query<IntakeQuery>) -> Response {
    let dates = intake_dates(&state.config.calendar);
    if query.all {
        return ApiResponse::ok(dates);
    }

    match parse_today(query.today.as_deref()) {
        Ok(today) => ApiResponse::ok(upcoming_intakes(
            &dates,
            today,
            state.config.max_upcoming_intakes,
        )),
        Err(e) => bad_request(e),
    }
}

/// GET /api/assessment - Age, classification, enrolment year, intakes
async fn get_assessment(
    State(state): State<AppState>,
    Query(query): Query<AssessmentQuery>,
) -> Response {
    let result = parse_date_of_birth(query.dob.as_deref().unwrap_or(""))
        .and_then(|dob| Ok((dob, parse_today(query.today.as_deref())?)))
        .and_then(|(dob, today)| assess(dob, today, &state.config));

    match result {
        Ok(assessment) => ApiResponse::ok(assessment),
        Err(e) => bad_request(e),
    }
}

fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/calendar", get(get_calendar))
        .route("/intakes", get(get_intakes))
        .route("/assessment", get(get_assessment))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(1);

    let config_path = std::env::var_os("ENROLMENT_CONFIG").map(PathBuf::from);
    let config = EnrolmentConfig::load(config_path.as_deref())?;

    let state = AppState {
        config: Arc::new(config),
    };

    let addr = std::env::var("ENROLMENT_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(%addr, "enrolment server listening");

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
