// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    error::AppError,
    models::user::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User},
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
};

/// Drops values that are absent or empty, so both cases fall through to
/// the same "required" error.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Registers a new user.
///
/// Hashes the password using bcrypt before storing it.
/// Returns 201 Created and the user object (excluding password).
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing or duplicate credentials", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (non_empty(payload.email), non_empty(payload.password))
    else {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ?1")
        .bind(&email)
        .fetch_optional(&pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    let hashed_password = hash_password(&password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password, created_at)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, name, email, password, image, created_at
        "#,
    )
    .bind(&payload.name)
    .bind(&email)
    .bind(&hashed_password)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        // Two concurrent registrations can both pass the lookup above; the
        // unique index on email turns the loser into the same 400.
        if e.as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false)
        {
            AppError::BadRequest("User already exists".to_string())
        } else {
            tracing::error!("Failed to register user: {:?}", e);
            AppError::from(e)
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: user.into(),
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Authenticates a user and returns a JWT token.
///
/// Verifies the email and password against the database.
/// If valid, signs a JWT token with the user's ID.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password, image, created_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(&payload.email)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    // Unknown email and wrong password produce the same message.
    let user = user.ok_or(AppError::AuthError(
        "Invalid email or password".to_string(),
    ))?;

    let is_valid = verify_password(&payload.password, &user.password)?;

    if !is_valid {
        return Err(AppError::AuthError(
            "Invalid email or password".to_string(),
        ));
    }

    let token = sign_jwt(user.id, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
