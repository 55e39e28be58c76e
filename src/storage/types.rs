use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::categories::Category;

pub type AccountId = i64;
pub type ArticleId = i64;
pub type SavedLinkId = i64;

// ============================================================================
// Error Types
// ============================================================================

/// Failures reported by the record store and the bookmark workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No account exists with the given ID
    #[error("User not found")]
    AccountNotFound(AccountId),

    /// The account has not saved this article
    #[error("Saved article not found")]
    SavedLinkNotFound {
        account_id: AccountId,
        article_id: ArticleId,
    },

    /// The account already saved this article
    #[error("Article already saved")]
    AlreadySaved {
        account_id: AccountId,
        article_id: ArticleId,
    },

    /// Another account is registered under this email
    #[error("Email is already registered")]
    EmailTaken(String),
}

// ============================================================================
// Accounts
// ============================================================================

/// A registered user.
///
/// The password is never serialized and is redacted from `Debug` output.
#[derive(Serialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
    pub preferences: Vec<String>,
}

impl Account {
    /// Plaintext comparison against the stored password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose_secret() == candidate
    }
}

impl Clone for Account {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            password: SecretString::from(self.password.expose_secret().to_owned()),
            preferences: self.preferences.clone(),
        }
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("preferences", &self.preferences)
            .finish()
    }
}

/// Fields supplied at registration
#[derive(Debug)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub preferences: Option<Vec<String>>,
}

/// Profile fields that may change after registration. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub preferences: Option<Vec<String>>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.preferences.is_none()
    }
}

// ============================================================================
// Articles
// ============================================================================

/// A news item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub category: Category,
    pub source: String,
    pub author: Option<String>,
    /// Free text; may be a timestamp or something like "2 hours ago"
    pub published_at: String,
    pub url: String,
    pub image_url: Option<String>,
}

/// Article fields before an ID is assigned. Also the shape of seed files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
    pub category: Category,
    pub source: String,
    #[serde(default)]
    pub author: Option<String>,
    pub published_at: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

// ============================================================================
// Saved Links
// ============================================================================

/// A bookmark: this account saved this article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLink {
    pub id: SavedLinkId,
    #[serde(rename = "userId")]
    pub account_id: AccountId,
    pub article_id: ArticleId,
}
