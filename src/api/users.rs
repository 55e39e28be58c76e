use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use super::auth::UserResponse;
use super::error::invalid_path;
use super::{ApiError, AppState};
use crate::storage::{AccountId, AccountUpdate, StoreError};
use crate::util::{clean_tags, Validator};

/// Profile fields a client may change. Any other key is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
    preferences: Option<Vec<String>>,
}

impl UpdateUserRequest {
    fn into_update(self) -> Result<AccountUpdate, ApiError> {
        let mut v = Validator::new();
        let name = match self.name.as_deref() {
            Some(name) => v.required_text("name", Some(name)),
            None => None,
        };
        let email = match self.email.as_deref() {
            Some(email) => v.required_email("email", Some(email)),
            None => None,
        };
        v.finish()?;

        Ok(AccountUpdate {
            name,
            email,
            preferences: self.preferences.map(clean_tags),
        })
    }
}

/// `PUT /api/users/:user_id`
///
/// Changing the email to one held by another account is a conflict.
pub(crate) async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<AccountId>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(account_id) = path.map_err(invalid_path("Invalid user ID"))?;
    let Json(request) = payload?;
    let update = request.into_update()?;

    let mut store = state.write()?;
    if store.get_account(account_id).is_none() {
        return Err(StoreError::AccountNotFound(account_id).into());
    }
    if let Some(email) = &update.email {
        if let Some(owner) = store.get_account_by_email(email) {
            if owner.id != account_id {
                return Err(StoreError::EmailTaken(email.clone()).into());
            }
        }
    }

    let changed = !update.is_empty();
    let account = store.update_account(account_id, update)?;
    if changed {
        tracing::info!(account_id = account.id, "Updated profile");
    }
    Ok(Json(UserResponse { user: account }))
}
