use super::store::{next_id, Store};
use super::types::{AccountId, Article, ArticleId, SavedLink, StoreError};

impl Store {
    // ========================================================================
    // Saved Link Primitives
    // ========================================================================

    /// Insert a saved link without checking for an existing pair.
    pub fn create_saved_link(&mut self, account_id: AccountId, article_id: ArticleId) -> SavedLink {
        let id = next_id(&mut self.next_saved_link_id);
        let link = SavedLink {
            id,
            account_id,
            article_id,
        };
        self.saved_links.insert(id, link);
        link
    }

    /// Remove the earliest link for the pair. Returns whether one was removed.
    pub fn delete_saved_link(&mut self, account_id: AccountId, article_id: ArticleId) -> bool {
        let found = self
            .saved_links
            .values()
            .find(|link| link.account_id == account_id && link.article_id == article_id)
            .map(|link| link.id);

        match found {
            Some(id) => {
                self.saved_links.remove(&id);
                true
            }
            None => false,
        }
    }

    pub fn has_saved_link(&self, account_id: AccountId, article_id: ArticleId) -> bool {
        self.saved_links
            .values()
            .any(|link| link.account_id == account_id && link.article_id == article_id)
    }

    // ========================================================================
    // Bookmark Workflow
    // ========================================================================

    /// Articles the account saved, in the order they were saved.
    ///
    /// Links pointing at articles that no longer exist are skipped.
    pub fn list_saved(&self, account_id: AccountId) -> Vec<Article> {
        self.saved_links
            .values()
            .filter(|link| link.account_id == account_id)
            .filter_map(|link| self.articles.get(&link.article_id))
            .cloned()
            .collect()
    }

    /// Bookmark an article, refusing a second bookmark of the same pair.
    ///
    /// Runs under the caller's `&mut` borrow, so the check and the insert
    /// cannot interleave with another writer.
    pub fn save(&mut self, account_id: AccountId, article_id: ArticleId) -> Result<SavedLink, StoreError> {
        if self.has_saved_link(account_id, article_id) {
            return Err(StoreError::AlreadySaved {
                account_id,
                article_id,
            });
        }

        let link = self.create_saved_link(account_id, article_id);
        tracing::debug!(
            account_id = account_id,
            article_id = article_id,
            link_id = link.id,
            "Saved article"
        );
        Ok(link)
    }

    pub fn unsave(&mut self, account_id: AccountId, article_id: ArticleId) -> Result<(), StoreError> {
        if !self.delete_saved_link(account_id, article_id) {
            return Err(StoreError::SavedLinkNotFound {
                account_id,
                article_id,
            });
        }

        tracing::debug!(account_id = account_id, article_id = article_id, "Unsaved article");
        Ok(())
    }
}
