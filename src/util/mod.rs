//! Input hygiene shared by the storage seeding path and the HTTP handlers.
//!
//! - **Text cleaning**: control-character stripping for names and tags
//! - **Validation**: field-level checks that report every problem at once
//!
//! # Examples
//!
//! ```
//! use headlines::util::{clean_text, Validator};
//!
//! let mut v = Validator::new();
//! let name = v.required_text("name", Some("  Ada  "));
//! assert_eq!(name.as_deref(), Some("Ada"));
//! assert!(v.finish().is_ok());
//!
//! assert_eq!(clean_text("\u{1b}Ada\n"), "Ada");
//! ```

mod text;
mod validate;

pub use text::{clean_tags, clean_text, strip_control_chars};
pub use validate::{
    is_valid_email, validate_http_url, FieldError, UrlValidationError, ValidationError, Validator,
};

/// Default cap on search query length, in bytes
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
