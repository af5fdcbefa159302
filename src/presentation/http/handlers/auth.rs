//! Authentication Handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::application::dto::request::LoginRequest;
use crate::application::dto::response::TokenResponse;
use crate::application::services::{AuthError, AuthService, AuthServiceImpl};
use crate::infrastructure::repositories::PgAccountRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Login with username/password credentials
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    // Create service
    let account_repo = Arc::new(PgAccountRepository::new(state.db.clone()));
    let auth_service = AuthServiceImpl::new(account_repo, state.settings.jwt.clone());

    // Authenticate
    let token = auth_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Invalid username or password".into())
            }
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(TokenResponse::from(token)))
}
