use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::auth::jwt::create_token;
use crate::auth::password::{check_password_strength, hash_password, verify_password};
use crate::domain::repositories::UserRepository;
use crate::domain::user::AdminUser;
use crate::domain::value_objects::Email;
use crate::infrastructure::repositories::PostgresUserRepository;
use crate::state::AppState;

/// Request body for admin login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub full_name: String,
}

/// Request body for registering a new admin account
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Response from successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub message: String,
}

/// Request body for changing the caller's password
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Validate email
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    // Find admin by email
    let user_repo = PostgresUserRepository::new(state.pool.clone());
    let user = user_repo
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    // Check if account is active
    if !user.is_active {
        return Err(ApiError::unauthorized("Account is disabled"));
    }

    // Verify password
    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    // Update last login
    let _ = user_repo.update_last_login(user.id).await;

    // Create JWT token
    let token = create_token(
        user.id,
        &state.config.jwt.secret,
        state.config.jwt.expiry_hours,
    )
    .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
        full_name: user.full_name,
    }))
}

/// Register a new admin account (requires an existing admin token)
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    // Validate email
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    // Validate password strength
    check_password_strength(&req.password).map_err(ApiError::bad_request)?;

    if req.full_name.trim().is_empty() {
        return Err(ApiError::bad_request("Full name cannot be empty"));
    }

    // Hash password
    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let now = Utc::now();
    let user = AdminUser {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash,
        full_name: req.full_name.trim().to_string(),
        is_active: true,
        last_login: None,
        created_at: now,
        updated_at: now,
    };

    // Save to database
    let user_repo = PostgresUserRepository::new(state.pool.clone());
    let user_id = user_repo.create(&user).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict("Email already registered")
        } else {
            ApiError::internal_server_error(format!("Failed to create admin user: {}", e))
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id,
            message: "Admin user registered successfully".to_string(),
        }),
    ))
}

/// Get the authenticated admin's profile
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    JwtAuth(admin_id): JwtAuth,
) -> Result<Json<AdminUser>, ApiError> {
    let user_repo = PostgresUserRepository::new(state.pool.clone());
    let user = user_repo
        .find_by_id(admin_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::unauthorized("Account no longer exists"))?;

    Ok(Json(user))
}

/// Change the authenticated admin's password
///
/// POST /auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    JwtAuth(admin_id): JwtAuth,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    check_password_strength(&req.new_password).map_err(ApiError::bad_request)?;

    let user_repo = PostgresUserRepository::new(state.pool.clone());
    let user = user_repo
        .find_by_id(admin_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::unauthorized("Account no longer exists"))?;

    // The caller must prove they know the current password
    let valid = verify_password(&req.current_password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Current password is incorrect"));
    }

    let new_hash = hash_password(&req.new_password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    user_repo
        .update_password(admin_id, &new_hash)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update password: {}", e)))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
