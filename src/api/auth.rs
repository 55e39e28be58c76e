use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState};
use crate::storage::{Account, AccountDraft};
use crate::util::{clean_tags, ValidationError, Validator};

/// `{ "user": ... }` envelope; the password never serializes.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: Account,
}

// No Debug derive: these carry a plaintext password.
#[derive(Deserialize)]
pub(crate) struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    preferences: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub(crate) struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

fn incomplete() -> ValidationError {
    ValidationError::single("body", "is incomplete")
}

impl RegisterRequest {
    fn into_draft(self) -> Result<AccountDraft, ValidationError> {
        let mut v = Validator::new();
        let name = v.required_text("name", self.name.as_deref());
        let email = v.required_email("email", self.email.as_deref());
        let password = v.required_raw("password", self.password);
        v.finish()?;

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(incomplete());
        };
        Ok(AccountDraft {
            name,
            email,
            password: SecretString::from(password),
            preferences: self.preferences.map(clean_tags),
        })
    }
}

/// `POST /api/auth/register`
pub(crate) async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(request) = payload?;
    let draft = request.into_draft()?;

    let mut store = state.write()?;
    if store.get_account_by_email(&draft.email).is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }
    let account = store.create_account(draft);

    tracing::info!(account_id = account.id, "Registered account");
    Ok(Json(UserResponse { user: account }))
}

/// `POST /api/auth/login`
///
/// Unknown email and wrong password are indistinguishable to the client.
pub(crate) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(request) = payload?;

    let mut v = Validator::new();
    let email = v.required_email("email", request.email.as_deref());
    let password = v.required_raw("password", request.password);
    v.finish()?;
    let (Some(email), Some(password)) = (email, password) else {
        return Err(incomplete().into());
    };

    let store = state.read()?;
    match store.get_account_by_email(&email) {
        Some(account) if account.password_matches(&password) => {
            tracing::debug!(account_id = account.id, "Login succeeded");
            Ok(Json(UserResponse { user: account }))
        }
        _ => Err(ApiError::Unauthorized),
    }
}
