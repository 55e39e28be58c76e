//! Integration tests for the store: accounts, article queries and bookmarks.
//!
//! Each test builds its own `Store`, so tests never share state.

use headlines::storage::{
    default_articles, AccountDraft, AccountUpdate, ArticleDraft, Category, Store, StoreError,
};
use pretty_assertions::assert_eq;
use secrecy::SecretString;

fn seeded_store() -> Store {
    let mut store = Store::new();
    store.seed_articles(default_articles()).unwrap();
    store
}

fn account_draft(name: &str, email: &str) -> AccountDraft {
    AccountDraft {
        name: name.to_string(),
        email: email.to_string(),
        password: SecretString::from("p".to_string()),
        preferences: None,
    }
}

fn article_draft(title: &str, source: &str, category: Category, published_at: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        description: "Body text".to_string(),
        content: None,
        category,
        source: source.to_string(),
        author: None,
        published_at: published_at.to_string(),
        url: "https://example.com/x".to_string(),
        image_url: None,
    }
}

// ============================================================================
// Article Queries
// ============================================================================

#[test]
fn test_listing_is_idempotent() {
    let store = seeded_store();
    assert_eq!(store.list_articles(), store.list_articles());
}

#[test]
fn test_dated_articles_sort_before_relative_ones() {
    let mut store = seeded_store();
    let dated = store.create_article(article_draft(
        "Dated",
        "Wire",
        Category::Trending,
        "2024-06-01T09:00:00Z",
    ));

    let listed = store.list_articles();
    assert_eq!(listed[0].id, dated.id);
    assert_eq!(listed.len(), 7);
}

#[test]
fn test_search_title_and_source() {
    let mut store = Store::new();
    store.create_article(article_draft("Tech Trends", "Daily", Category::Technology, "2024-01-02"));
    store.create_article(article_draft("Phones", "TechCrunch", Category::Technology, "2024-01-01"));
    store.create_article(article_draft("Cup Final", "ESPN", Category::Sports, "2024-01-03"));

    let titles: Vec<_> = store
        .search_articles("tech")
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["Tech Trends", "Phones"]);
    assert!(store.search_articles("zzz-no-match").is_empty());
}

#[test]
fn test_by_category_only_exact_matches() {
    let store = seeded_store();
    let sports = store.articles_by_category("sports");
    assert_eq!(sports.len(), 1);
    assert!(sports.iter().all(|a| a.category == Category::Sports));
}

// ============================================================================
// Bookmarks
// ============================================================================

#[test]
fn test_save_then_save_again_conflicts() {
    let mut store = seeded_store();
    let account = store.create_account(account_draft("A", "a@x.com"));

    store.save(account.id, 4).unwrap();
    assert!(store.has_saved_link(account.id, 4));
    assert_eq!(
        store.save(account.id, 4),
        Err(StoreError::AlreadySaved {
            account_id: account.id,
            article_id: 4
        })
    );
}

#[test]
fn test_unsave_then_unsave_again_not_found() {
    let mut store = seeded_store();
    let account = store.create_account(account_draft("A", "a@x.com"));
    store.save(account.id, 4).unwrap();

    store.unsave(account.id, 4).unwrap();
    assert!(!store.has_saved_link(account.id, 4));
    assert!(matches!(
        store.unsave(account.id, 4),
        Err(StoreError::SavedLinkNotFound { .. })
    ));
}

#[test]
fn test_saved_lists_are_per_account() {
    let mut store = seeded_store();
    let a = store.create_account(account_draft("A", "a@x.com"));
    let b = store.create_account(account_draft("B", "b@x.com"));

    store.save(a.id, 5).unwrap();
    store.save(b.id, 1).unwrap();
    store.save(a.id, 2).unwrap();

    let a_ids: Vec<_> = store.list_saved(a.id).iter().map(|x| x.id).collect();
    let b_ids: Vec<_> = store.list_saved(b.id).iter().map(|x| x.id).collect();
    assert_eq!(a_ids, vec![5, 2]);
    assert_eq!(b_ids, vec![1]);
}

#[test]
fn test_list_saved_without_links_is_empty() {
    let mut store = seeded_store();
    let account = store.create_account(account_draft("A", "a@x.com"));
    assert!(store.list_saved(account.id).is_empty());
}

// ============================================================================
// Accounts
// ============================================================================

#[test]
fn test_profile_update_preserves_unlisted_fields() {
    let mut store = Store::new();
    let account = store.create_account(AccountDraft {
        preferences: Some(vec!["politics".to_string()]),
        ..account_draft("A", "a@x.com")
    });

    let updated = store
        .update_account(
            account.id,
            AccountUpdate {
                email: Some("alice@x.com".to_string()),
                ..AccountUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "A");
    assert_eq!(updated.preferences, vec!["politics".to_string()]);
    assert_eq!(store.get_account_by_email("alice@x.com").unwrap().id, account.id);
}
