//! Authentication routes for registration and login.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use tokenflow_core::auth::{hash_password, validate_password, verify_password};
use tokenflow_db::UserRepository;
use tokenflow_shared::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// POST /auth/register - Register a new user and create their wallet.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_email",
                "message": "A valid email address is required"
            })),
        )
            .into_response();
    }

    if let Err(e) = validate_password(&payload.password) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "weak_password",
                "message": e.to_string()
            })),
        )
            .into_response();
    }

    let user_repo = UserRepository::new((*state.db).clone());

    match user_repo.email_exists(&payload.email).await {
        Ok(true) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "email_exists",
                    "message": "An account with this email already exists"
                })),
            )
                .into_response();
        }
        Ok(false) => {}
        Err(e) => {
            error!(error = %e, "Database error checking email");
            return internal_error("An error occurred during registration");
        }
    }

    let password_hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return internal_error("An error occurred during registration");
        }
    };

    // User and wallet are created in one transaction; a user without a
    // wallet must never exist.
    let user = match user_repo
        .create_with_wallet(&payload.email, &password_hash)
        .await
    {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "Failed to create user");
            return internal_error("An error occurred during registration");
        }
    };

    let token = match state.jwt_service.issue_session_token(user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to issue session token");
            return internal_error("An error occurred during registration");
        }
    };

    info!(user_id = %user.id, email = %user.email, "New user registered with wallet");

    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered and wallet created successfully.".to_string(),
            user_id: user.id,
            token,
        }),
    )
        .into_response()
}

/// POST /auth/login - Authenticate a user and return a session token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());

    // Unknown email and wrong password produce the same response.
    let user = match user_repo.find_by_email(&payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!(email = %payload.email, "Login attempt for non-existent user");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return internal_error("An error occurred during login");
        }
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return internal_error("An error occurred during login");
        }
    }

    let token = match state.jwt_service.issue_session_token(user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to issue session token");
            return internal_error("An error occurred during login");
        }
    };

    info!(user_id = %user.id, "User logged in successfully");

    (
        StatusCode::OK,
        Json(LoginResponse {
            token,
            user_id: user.id,
        }),
    )
        .into_response()
}

fn invalid_credentials() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "invalid_credentials",
            "message": "Invalid email or password"
        })),
    )
        .into_response()
}

fn internal_error(message: &str) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": message
        })),
    )
        .into_response()
}
