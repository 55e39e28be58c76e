mod accounts;
mod articles;
mod categories;
mod saved;
mod search;
mod seed;
mod store;
mod types;

pub use articles::publication_instant;
pub use categories::{Category, UnknownCategory, ALL_CATEGORIES};
pub use seed::{default_articles, load_seed_file, SeedError};
pub use store::{SharedStore, Store};
pub use types::{
    Account, AccountDraft, AccountId, AccountUpdate, Article, ArticleDraft, ArticleId, SavedLink,
    SavedLinkId, StoreError,
};
