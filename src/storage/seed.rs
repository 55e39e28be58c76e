//! Initial article set loaded at startup.
//!
//! Articles are only ever created here: either the built-in set or a JSON
//! seed file holding an array of [`ArticleDraft`] objects.

use std::path::Path;
use thiserror::Error;

use super::categories::Category;
use super::store::Store;
use super::types::ArticleDraft;
use crate::util::{ValidationError, Validator};

/// Maximum seed file size (8 MB).
const MAX_SEED_FILE_SIZE: u64 = 8 * 1_048_576;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed file too large: {0} bytes (max {max} bytes)", max = MAX_SEED_FILE_SIZE)]
    TooLarge(u64),

    #[error("Seed article {index} rejected: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl ArticleDraft {
    /// Check the draft before it is stored.
    ///
    /// Title, description, source and publication text must be non-blank;
    /// `url` and `imageUrl` (when present) must be http(s) URLs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.required_text("title", Some(self.title.as_str()));
        v.required_text("description", Some(self.description.as_str()));
        v.required_text("source", Some(self.source.as_str()));
        v.required_text("publishedAt", Some(self.published_at.as_str()));
        v.http_url("url", &self.url);
        if let Some(image_url) = &self.image_url {
            v.http_url("imageUrl", image_url);
        }
        v.finish()
    }
}

impl Store {
    /// Validate every draft, then insert them in order.
    ///
    /// Nothing is inserted if any draft is invalid.
    pub fn seed_articles(&mut self, drafts: Vec<ArticleDraft>) -> Result<usize, SeedError> {
        for (index, draft) in drafts.iter().enumerate() {
            draft
                .validate()
                .map_err(|source| SeedError::Invalid { index, source })?;
        }

        let count = drafts.len();
        for draft in drafts {
            self.create_article(draft);
        }
        tracing::info!(articles = count, "Seeded articles");
        Ok(count)
    }
}

/// Read article drafts from a JSON file.
pub fn load_seed_file(path: &Path) -> Result<Vec<ArticleDraft>, SeedError> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_SEED_FILE_SIZE {
        return Err(SeedError::TooLarge(size));
    }

    let content = std::fs::read_to_string(path)?;
    let drafts: Vec<ArticleDraft> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), articles = drafts.len(), "Loaded seed file");
    Ok(drafts)
}

#[allow(clippy::too_many_arguments)]
fn article(
    title: &str,
    description: &str,
    category: Category,
    source: &str,
    author: &str,
    published_at: &str,
    slug: &str,
    photo: &str,
    size: &str,
) -> ArticleDraft {
    ArticleDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        content: Some("Full article content...".to_owned()),
        category,
        source: source.to_owned(),
        author: Some(author.to_owned()),
        published_at: published_at.to_owned(),
        url: format!("https://example.com/{slug}"),
        image_url: Some(format!(
            "https://images.unsplash.com/{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&{size}"
        )),
    }
}

/// The built-in article set, newest first.
pub fn default_articles() -> Vec<ArticleDraft> {
    vec![
        article(
            "Revolutionary AI Technology Transforms Urban Planning in Smart Cities",
            "A groundbreaking artificial intelligence system is now being deployed across major metropolitan areas to optimize traffic flow, reduce energy consumption, and improve urban living conditions for millions of residents.",
            Category::Technology,
            "TechCrunch",
            "Sarah Johnson",
            "2 hours ago",
            "article1",
            "photo-1449824913935-59a10b8d2000",
            "w=1200&h=400",
        ),
        article(
            "Remote Work Trends Continue to Shape Corporate Policies",
            "Companies worldwide are adapting their policies to accommodate the growing demand for flexible work arrangements, with hybrid models becoming the new standard.",
            Category::Business,
            "Forbes",
            "Michael Chen",
            "4 hours ago",
            "article2",
            "photo-1551434678-e076c223a692",
            "w=600&h=300",
        ),
        article(
            "Championship Finals Draw Record Breaking Viewership",
            "The highly anticipated championship game attracted over 50 million viewers worldwide, setting new records for digital streaming platforms.",
            Category::Sports,
            "ESPN",
            "David Martinez",
            "6 hours ago",
            "article3",
            "photo-1431324155629-1a6deb1dec8d",
            "w=600&h=300",
        ),
        article(
            "Breakthrough Treatment Shows Promise for Rare Diseases",
            "Clinical trials reveal significant improvements in patient outcomes using innovative gene therapy techniques developed by international research teams.",
            Category::Health,
            "Medical News",
            "Dr. Emily Rodriguez",
            "8 hours ago",
            "article4",
            "photo-1559757148-5c350d0d3c56",
            "w=600&h=300",
        ),
        article(
            "New Environmental Policy Gains Bipartisan Support",
            "Lawmakers from both parties unite behind comprehensive climate legislation aimed at reducing carbon emissions and promoting renewable energy initiatives.",
            Category::Politics,
            "Reuters",
            "Alex Thompson",
            "1 day ago",
            "article5",
            "photo-1555581234-0af19e9c2c12",
            "w=600&h=300",
        ),
        article(
            "Streaming Wars Heat Up with New Platform Launches",
            "The entertainment industry sees increased competition as multiple new streaming services enter the market with exclusive content and innovative features.",
            Category::Entertainment,
            "Variety",
            "Jessica Park",
            "1 day ago",
            "article6",
            "photo-1489599663928-f2be171c491a",
            "w=600&h=300",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("headlines_seed_test_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("articles.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_articles_are_valid() {
        let drafts = default_articles();
        assert_eq!(drafts.len(), 6);
        for draft in &drafts {
            draft.validate().unwrap();
        }
    }

    #[test]
    fn test_seed_default_keeps_listing_order() {
        let mut store = Store::new();
        store.seed_articles(default_articles()).unwrap();

        let listed = store.list_articles();
        let ids: Vec<_> = listed.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(listed[0].source, "TechCrunch");
    }

    #[test]
    fn test_seed_rejects_invalid_without_inserting() {
        let mut store = Store::new();
        let mut drafts = default_articles();
        drafts[3].url = "javascript:alert(1)".to_string();

        let err = store.seed_articles(drafts).unwrap_err();
        assert!(matches!(err, SeedError::Invalid { index: 3, .. }));
        assert_eq!(store.article_count(), 0);
    }

    #[test]
    fn test_validate_reports_blank_title() {
        let mut draft = default_articles().remove(0);
        draft.title = "  ".to_string();
        let err = draft.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "title");
    }

    #[test]
    fn test_load_seed_file() {
        let path = write_temp(
            "valid",
            r#"[{
                "title": "Local Election Results",
                "description": "Turnout hit a record high.",
                "category": "politics",
                "source": "City Desk",
                "publishedAt": "2024-11-06T08:00:00Z",
                "url": "https://example.com/election"
            }]"#,
        );

        let drafts = load_seed_file(&path).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category, Category::Politics);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_seed_file_unknown_category() {
        let path = write_temp(
            "bad_category",
            r#"[{
                "title": "T",
                "description": "D",
                "category": "weather",
                "source": "S",
                "publishedAt": "2024-01-01",
                "url": "https://example.com/t"
            }]"#,
        );

        assert!(matches!(load_seed_file(&path), Err(SeedError::Parse(_))));

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_seed_file_missing() {
        let path = Path::new("/tmp/headlines_seed_test_nonexistent/articles.json");
        assert!(matches!(load_seed_file(path), Err(SeedError::Io(_))));
    }
}
