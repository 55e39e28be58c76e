use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Reverse;

use super::store::{next_id, Store};
use super::types::{Article, ArticleDraft, ArticleId};

/// Naive layouts tried after RFC 3339 and RFC 2822, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Sort key for an article's `published_at` text.
///
/// Anything that does not parse as a date sorts as the Unix epoch.
pub fn publication_instant(published_at: &str) -> DateTime<Utc> {
    let text = published_at.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return dt.with_timezone(&Utc);
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return naive.and_utc();
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return naive.and_utc();
    }

    DateTime::<Utc>::UNIX_EPOCH
}

impl Store {
    // ========================================================================
    // Article Operations
    // ========================================================================

    /// Store a new article. Optional fields stay absent when not provided.
    pub fn create_article(&mut self, draft: ArticleDraft) -> Article {
        let id = next_id(&mut self.next_article_id);
        let article = Article {
            id,
            title: draft.title,
            description: draft.description,
            content: draft.content,
            category: draft.category,
            source: draft.source,
            author: draft.author,
            published_at: draft.published_at,
            url: draft.url,
            image_url: draft.image_url,
        };
        self.articles.insert(id, article.clone());

        tracing::debug!(article_id = id, category = %article.category, "Created article");
        article
    }

    pub fn get_article(&self, id: ArticleId) -> Option<Article> {
        self.articles.get(&id).cloned()
    }

    /// All articles, most recently published first.
    ///
    /// Articles with equal publication instants (including every unparseable
    /// one) keep ascending ID order.
    pub fn list_articles(&self) -> Vec<Article> {
        let mut keyed: Vec<(DateTime<Utc>, &Article)> = self
            .articles
            .values()
            .map(|article| (publication_instant(&article.published_at), article))
            .collect();

        keyed.sort_by_key(|(published, article)| (Reverse(*published), article.id));

        keyed.into_iter().map(|(_, article)| article.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Category;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn draft(title: &str, published_at: &str) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            description: format!("About {title}"),
            content: None,
            category: Category::Technology,
            source: "Wire".to_string(),
            author: None,
            published_at: published_at.to_string(),
            url: format!("https://example.com/{title}"),
            image_url: None,
        }
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_publication_instant_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
            .and_utc();

        assert_eq!(publication_instant("2024-03-01T12:30:00Z"), expected);
        assert_eq!(publication_instant("2024-03-01T14:30:00+02:00"), expected);
        assert_eq!(publication_instant("Fri, 01 Mar 2024 12:30:00 +0000"), expected);
        assert_eq!(publication_instant("2024-03-01 12:30:00"), expected);
        assert_eq!(publication_instant("2024-03-01 12:30"), expected);
        assert_eq!(
            publication_instant("2024-03-01"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
        );
    }

    #[test]
    fn test_publication_instant_unparseable_is_epoch() {
        assert_eq!(publication_instant("2 hours ago"), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(publication_instant(""), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(publication_instant("2024-13-45"), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_create_article_assigns_ids() {
        let mut store = Store::new();
        let first = store.create_article(draft("one", "2024-01-01"));
        let second = store.create_article(draft("two", "2024-01-02"));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get_article(2).unwrap().title, "two");
    }

    #[test]
    fn test_list_articles_newest_first() {
        let mut store = Store::new();
        store.create_article(draft("middle", "2024-02-01T00:00:00Z"));
        store.create_article(draft("oldest", "2023-06-15"));
        store.create_article(draft("newest", "2024-05-20 08:00:00"));

        assert_eq!(
            titles(&store.list_articles()),
            vec!["newest", "middle", "oldest"]
        );
    }

    #[test]
    fn test_list_articles_unparseable_sorts_last_in_id_order() {
        let mut store = Store::new();
        store.create_article(draft("relative-a", "2 hours ago"));
        store.create_article(draft("dated", "2024-01-01"));
        store.create_article(draft("relative-b", "1 day ago"));

        assert_eq!(
            titles(&store.list_articles()),
            vec!["dated", "relative-a", "relative-b"]
        );
    }

    #[test]
    fn test_list_articles_pre_epoch_dates_sort_below_unparseable() {
        let mut store = Store::new();
        store.create_article(draft("moon-landing", "1969-07-20"));
        store.create_article(draft("relative", "3 days ago"));
        store.create_article(draft("recent", "2024-01-01"));

        assert!(publication_instant("1969-07-20") < DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(
            titles(&store.list_articles()),
            vec!["recent", "relative", "moon-landing"]
        );
    }

    #[test]
    fn test_list_articles_empty_store() {
        let store = Store::new();
        assert!(store.list_articles().is_empty());
    }

    proptest! {
        #[test]
        fn prop_list_articles_sorted_and_idempotent(
            stamps in proptest::collection::vec(
                prop_oneof![
                    (2000i32..2030, 1u32..13, 1u32..29)
                        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
                    Just("yesterday".to_string()),
                    Just(String::new()),
                ],
                0..24,
            )
        ) {
            let mut store = Store::new();
            for (i, stamp) in stamps.iter().enumerate() {
                store.create_article(draft(&format!("a{i}"), stamp));
            }

            let listed = store.list_articles();
            prop_assert_eq!(listed.len(), stamps.len());
            for pair in listed.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let (ka, kb) = (publication_instant(&a.published_at), publication_instant(&b.published_at));
                prop_assert!(ka > kb || (ka == kb && a.id < b.id));
            }
            prop_assert_eq!(listed, store.list_articles());
        }
    }
}
