use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::types::{Account, AccountId, Article, ArticleId, SavedLink, SavedLinkId};

// ============================================================================
// Store
// ============================================================================

/// Handle shared between request handlers
pub type SharedStore = Arc<RwLock<Store>>;

/// In-memory record store for accounts, articles and saved links.
///
/// Each record kind has its own monotonic ID counter starting at 1. IDs are
/// never reused, even after a saved link is deleted. Maps are ordered by ID,
/// so iteration order is insertion order.
///
/// Operations are split across sibling modules by record kind:
/// `accounts`, `articles`, `search` and `saved`.
#[derive(Debug)]
pub struct Store {
    pub(crate) accounts: BTreeMap<AccountId, Account>,
    /// email -> lowest account ID registered under it
    pub(crate) email_index: HashMap<String, AccountId>,
    pub(crate) articles: BTreeMap<ArticleId, Article>,
    pub(crate) saved_links: BTreeMap<SavedLinkId, SavedLink>,
    pub(crate) next_account_id: AccountId,
    pub(crate) next_article_id: ArticleId,
    pub(crate) next_saved_link_id: SavedLinkId,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            email_index: HashMap::new(),
            articles: BTreeMap::new(),
            saved_links: BTreeMap::new(),
            next_account_id: 1,
            next_article_id: 1,
            next_saved_link_id: 1,
        }
    }

    /// Wrap the store for sharing across request handlers
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn saved_link_count(&self) -> usize {
        self.saved_links.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Take the next value of an ID counter, advancing it.
pub(crate) fn next_id(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert_eq!(store.account_count(), 0);
        assert_eq!(store.article_count(), 0);
        assert_eq!(store.saved_link_count(), 0);
    }

    #[test]
    fn test_next_id_is_monotonic() {
        let mut counter = 1;
        assert_eq!(next_id(&mut counter), 1);
        assert_eq!(next_id(&mut counter), 2);
        assert_eq!(counter, 3);
    }
}
