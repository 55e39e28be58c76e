use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::invalid_path;
use super::{ApiError, AppState};
use crate::storage::{AccountId, Article, ArticleId, SavedLink};

const INVALID_USER_ID: &str = "Invalid user ID";
const INVALID_PAIR: &str = "Invalid user ID or article ID";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveRequest {
    user_id: Option<AccountId>,
    article_id: Option<ArticleId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedStatus {
    pub is_saved: bool,
}

/// `GET /api/saved-articles/:user_id`
pub(crate) async fn list_saved(
    State(state): State<AppState>,
    path: Result<Path<AccountId>, PathRejection>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let Path(account_id) = path.map_err(invalid_path(INVALID_USER_ID))?;
    let articles = state.read()?.list_saved(account_id);
    Ok(Json(articles))
}

/// `POST /api/saved-articles`
///
/// A missing or zero ID is rejected before the store is touched.
pub(crate) async fn save(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SavedLink>, ApiError> {
    let Json(request) = payload?;
    let (Some(account_id), Some(article_id)) = (
        request.user_id.filter(|id| *id != 0),
        request.article_id.filter(|id| *id != 0),
    ) else {
        return Err(ApiError::BadRequest(
            "User ID and Article ID are required".to_string(),
        ));
    };

    let link = state.write()?.save(account_id, article_id)?;
    Ok(Json(link))
}

/// `DELETE /api/saved-articles/:user_id/:article_id`
pub(crate) async fn unsave(
    State(state): State<AppState>,
    path: Result<Path<(AccountId, ArticleId)>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path((account_id, article_id)) = path.map_err(invalid_path(INVALID_PAIR))?;
    state.write()?.unsave(account_id, article_id)?;
    Ok(Json(MessageResponse {
        message: "Article unsaved successfully".to_string(),
    }))
}

/// `GET /api/saved-articles/:user_id/:article_id/check`
pub(crate) async fn check(
    State(state): State<AppState>,
    path: Result<Path<(AccountId, ArticleId)>, PathRejection>,
) -> Result<Json<SavedStatus>, ApiError> {
    let Path((account_id, article_id)) = path.map_err(invalid_path(INVALID_PAIR))?;
    let is_saved = state.read()?.has_saved_link(account_id, article_id);
    Ok(Json(SavedStatus { is_saved }))
}
