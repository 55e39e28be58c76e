use serde::Serialize;
use thiserror::Error;
use url::Url;

use super::text::clean_text;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// One or more input fields failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }
}

/// Errors from [`validate_http_url`].
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("uses unsupported scheme {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Parse an absolute `http`/`https` URL.
///
/// # Examples
///
/// ```
/// use headlines::util::validate_http_url;
///
/// assert!(validate_http_url("https://example.com/article1").is_ok());
/// assert!(validate_http_url("ftp://example.com/file").is_err());
/// assert!(validate_http_url("/relative/path").is_err());
/// ```
pub fn validate_http_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }
}

/// Shape check for an email address: a non-empty local part, one `@`, and a
/// dotted domain, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Collects field errors so a request reports every problem at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_owned(),
            message: message.into(),
        });
    }

    /// Present and non-blank after cleaning. Returns the cleaned text.
    pub fn required_text(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        match value.map(clean_text) {
            Some(text) if !text.is_empty() => Some(text),
            Some(_) => {
                self.reject(field, "must not be empty");
                None
            }
            None => {
                self.reject(field, "is required");
                None
            }
        }
    }

    /// Present and non-empty, taken verbatim (passwords are not trimmed).
    pub fn required_raw(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(text) if !text.is_empty() => Some(text),
            Some(_) => {
                self.reject(field, "must not be empty");
                None
            }
            None => {
                self.reject(field, "is required");
                None
            }
        }
    }

    /// Present, trimmed, and shaped like an email address.
    pub fn required_email(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let email = self.required_text(field, value)?;
        if is_valid_email(&email) {
            Some(email)
        } else {
            self.reject(field, "must be a valid email address");
            None
        }
    }

    pub fn http_url(&mut self, field: &str, value: &str) {
        if let Err(e) = validate_http_url(value) {
            self.reject(field, e.to_string());
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}
