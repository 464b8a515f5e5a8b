use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        claims::Role,
        dto::{LoginRequest, LoginResponse, MessageResponse, SignupRequest},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::{self, User},
    },
    error::ApiError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if payload.name.is_empty()
        || payload.email.is_empty()
        || payload.password.is_empty()
        || payload.role.is_empty()
    {
        warn!("signup with missing fields");
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let role = match payload.role.as_str() {
        "admin" => Role::Admin,
        "user" => Role::User,
        _ => {
            warn!(role = %payload.role, "signup with unknown role");
            return Err(ApiError::Validation("Invalid role".into()));
        }
    };

    let hash = hash_password(&payload.password)?;

    let user = match User::create(&state.db, &payload.name, &payload.email, &hash, role).await {
        Ok(u) => u,
        Err(e) if repo::is_unique_violation(&e) => {
            warn!(email = %payload.email, "email already in use");
            return Err(ApiError::EmailTaken);
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, role = ?user.role, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully",
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::UserNotFound
        })?;

    // A malformed stored hash counts as a failed verification.
    let ok = verify_password(&payload.password, &user.password_hash).unwrap_or(false);
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, user.role)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        role: user.role,
    }))
}
