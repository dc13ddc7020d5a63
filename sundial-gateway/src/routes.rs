//! Axum route handlers for the Sundial API.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use sundial_core::{random, Operands, Summation};
use sundial_executor::FixedCommand;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    auth::{require_api_key, API_KEY_HEADER},
    error::GatewayError,
    state::{AppState, SharedState},
};

// ── Response types ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
}

#[derive(Debug, Serialize)]
pub struct RandomNumber {
    pub number: u8,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given state.
pub fn create_router(state: SharedState) -> Router {
    let protected = Router::new()
        .route("/test-auth", get(test_auth))
        .route("/random-number", get(random_number))
        .route("/add-numbers", post(add_numbers))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    let cors = cors_layer(state.config.cors_origin.clone());

    Router::new()
        .route("/", get(home))
        .route("/date", get(date))
        .route("/cal", get(cal))
        .route("/add/{a}/{b}", get(add_path))
        .route("/health", get(health))
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)])
}

// ── Public handlers ───────────────────────────────────────────────────────────

/// `GET /` — greeting.
pub async fn home() -> &'static str {
    "Hello, world!"
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /date` — output of the `date` command.
///
/// # Errors
/// Returns [`GatewayError::Executor`] if the command fails.
pub async fn date(State(state): State<SharedState>) -> Result<String, GatewayError> {
    run_fixed(&state, FixedCommand::Date).await
}

/// `GET /cal` — output of the `cal` command.
///
/// # Errors
/// Returns [`GatewayError::Executor`] if the command fails.
pub async fn cal(State(state): State<SharedState>) -> Result<String, GatewayError> {
    run_fixed(&state, FixedCommand::Cal).await
}

/// `GET /add/:a/:b` — exact decimal sum of two non-negative integers.
///
/// # Errors
/// Returns [`GatewayError::NotFound`] if either segment is not all digits
/// or cannot be decoded.
pub async fn add_path(
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<String, GatewayError> {
    let Ok(Path((a, b))) = path else {
        return Err(GatewayError::NotFound);
    };
    if !sundial_core::is_decimal(&a) || !sundial_core::is_decimal(&b) {
        return Err(GatewayError::NotFound);
    }
    Ok(sundial_core::add_decimal(&a, &b)?)
}

/// Fallback for unmatched paths.
pub async fn not_found() -> GatewayError {
    GatewayError::NotFound
}

// ── Protected handlers ────────────────────────────────────────────────────────

/// `GET /test-auth` — confirms the API key was accepted.
pub async fn test_auth() -> Json<AuthStatus> {
    Json(AuthStatus { authenticated: true })
}

/// `GET /random-number` — uniform integer in `[1, 100]`.
pub async fn random_number() -> Json<RandomNumber> {
    Json(RandomNumber { number: random::draw(&mut rand::rng()) })
}

/// `POST /add-numbers` — validate `num1` and `num2` and return their sum.
///
/// The body is read raw: an absent or malformed body yields the
/// missing-parameters message, not an extractor rejection.
///
/// # Errors
/// Returns [`GatewayError::Validation`] for missing, non-integer, or
/// overflowing operands.
pub async fn add_numbers(body: Bytes) -> Result<Json<Summation>, GatewayError> {
    let summation = Operands::from_json_slice(&body)?.sum()?;
    Ok(Json(summation))
}

// ── Execution helpers ─────────────────────────────────────────────────────────

async fn run_fixed(state: &AppState, command: FixedCommand) -> Result<String, GatewayError> {
    let output = state.runner.run(command).await?;
    Ok(output.stdout)
}
