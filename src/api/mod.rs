//! HTTP surface of the service.
//!
//! Every handler takes the shared [`Store`] from [`AppState`], holds the lock
//! only for its store calls, and maps failures through [`ApiError`].

mod articles;
mod auth;
mod cors;
mod error;
mod saved;
mod users;

use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use crate::storage::{SharedStore, Store};
use crate::util::MAX_SEARCH_QUERY_LENGTH;

pub use articles::{ArticlesQuery, CategoryInfo};
pub use auth::UserResponse;
pub use error::ApiError;
pub use saved::{MessageResponse, SavedStatus};

// ============================================================================
// Application State
// ============================================================================

/// Router state: the injected store plus request limits.
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
    max_search_query_length: usize,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            max_search_query_length: MAX_SEARCH_QUERY_LENGTH,
        }
    }

    pub fn with_max_search_query_length(mut self, max: usize) -> Self {
        self.max_search_query_length = max;
        self
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Store>, ApiError> {
        self.store
            .read()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {e}")))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, ApiError> {
        self.store
            .write()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {e}")))
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the API router. With `cors_enabled`, every response carries
/// permissive CORS headers and OPTIONS preflights short-circuit with 200.
pub fn router(state: AppState, cors_enabled: bool) -> Router {
    let router = Router::new()
        .route(
            "/api/auth/register",
            post(auth::register).fallback(method_not_allowed),
        )
        .route(
            "/api/auth/login",
            post(auth::login).fallback(method_not_allowed),
        )
        .route(
            "/api/articles",
            get(articles::list_articles).fallback(method_not_allowed),
        )
        .route(
            "/api/categories",
            get(articles::list_categories).fallback(method_not_allowed),
        )
        .route(
            "/api/saved-articles",
            post(saved::save).fallback(method_not_allowed),
        )
        .route(
            "/api/saved-articles/:user_id",
            get(saved::list_saved).fallback(method_not_allowed),
        )
        .route(
            "/api/saved-articles/:user_id/:article_id",
            delete(saved::unsave).fallback(method_not_allowed),
        )
        .route(
            "/api/saved-articles/:user_id/:article_id/check",
            get(saved::check).fallback(method_not_allowed),
        )
        .route(
            "/api/users/:user_id",
            put(users::update_user).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state);

    if cors_enabled {
        router.layer(middleware::from_fn(cors::cors))
    } else {
        router
    }
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
