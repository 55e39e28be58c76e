use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState};
use crate::storage::{Article, Category, ALL_CATEGORIES};
use crate::util::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// One entry of the category menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub label: &'static str,
}

/// `GET /api/articles?category=&search=`
///
/// A non-blank `search` wins over `category`; a `category` of `all` (or
/// empty) means no filter.
pub(crate) async fn list_articles(
    State(state): State<AppState>,
    query: Result<Query<ArticlesQuery>, QueryRejection>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let Query(query) = query?;

    // Blank means no filter; otherwise the query is matched as given
    let search = query
        .search
        .as_deref()
        .filter(|s| !s.trim().is_empty());
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

    if let Some(search) = search {
        if search.len() > state.max_search_query_length {
            return Err(ValidationError::single(
                "search",
                format!(
                    "must be at most {} characters",
                    state.max_search_query_length
                ),
            )
            .into());
        }
    }

    let store = state.read()?;
    let articles = match (search, category) {
        (Some(search), _) => store.search_articles(search),
        (None, Some(category)) => store.articles_by_category(category),
        (None, None) => store.list_articles(),
    };
    Ok(Json(articles))
}

/// `GET /api/categories`: the "all" pseudo-category followed by the vocabulary.
pub(crate) async fn list_categories() -> Json<Vec<CategoryInfo>> {
    let mut categories = vec![CategoryInfo {
        id: ALL_CATEGORIES,
        label: "All News",
    }];
    categories.extend(Category::ALL.into_iter().map(|c| CategoryInfo {
        id: c.as_str(),
        label: c.label(),
    }));
    Json(categories)
}
