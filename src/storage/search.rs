use super::store::Store;
use super::types::Article;

impl Store {
    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Articles whose category identifier equals `category` exactly, newest first.
    ///
    /// An identifier outside the category vocabulary yields an empty list.
    pub fn articles_by_category(&self, category: &str) -> Vec<Article> {
        self.list_articles()
            .into_iter()
            .filter(|article| article.category.as_str() == category)
            .collect()
    }

    /// Case-insensitive substring search over title, description and source.
    ///
    /// Results keep [`Store::list_articles`] ordering. An empty query matches
    /// everything; deciding whether to search at all is the caller's job.
    pub fn search_articles(&self, query: &str) -> Vec<Article> {
        let needle = query.to_lowercase();
        let matches: Vec<Article> = self
            .list_articles()
            .into_iter()
            .filter(|article| {
                article.title.to_lowercase().contains(&needle)
                    || article.description.to_lowercase().contains(&needle)
                    || article.source.to_lowercase().contains(&needle)
            })
            .collect();

        tracing::debug!(query = %query, matches = matches.len(), "search_articles");
        matches
    }
}
