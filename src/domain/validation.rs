//! Input validation.
//!
//! Rules are checked field by field and every failure is collected, so a
//! client sees all problems with a request at once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid username regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[1-9][0-9]{0,15}$").expect("valid phone regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
});

/// Per-field validation messages, keyed by JSON field path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    fn count(&self, field: &str) -> usize {
        self.0.get(field).map_or(0, Vec::len)
    }

    /// Names of all fields with at least one failure.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if any failure was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Implemented by every write input.
pub trait Validate {
    /// Check every field rule.
    ///
    /// # Errors
    ///
    /// Returns all field failures found.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Field-level rule helpers operating on a [`ValidationErrors`] collector.
impl ValidationErrors {
    /// Required text: non-blank and at most `max` characters.
    pub fn required(&mut self, field: &str, value: &str, max: usize) {
        if value.trim().is_empty() {
            self.add(field, "is required");
        } else {
            self.max_len(field, value, max);
        }
    }

    /// Required text when supplied; absent means "leave unchanged".
    pub fn required_if_present(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.required(field, value, max);
        }
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("must be at most {max} characters"));
        }
    }

    /// Optional length bound for patch fields.
    pub fn max_len_if_present(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.max_len(field, value, max);
        }
    }

    /// Required, bounded, well-formed email address.
    pub fn email(&mut self, field: &str, value: &str, max: usize) {
        let before = self.count(field);
        self.required(field, value, max);
        if self.count(field) == before && !EMAIL_RE.is_match(value) {
            self.add(field, "must be a valid email address");
        }
    }

    pub fn email_if_present(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.email(field, value, max);
        }
    }

    /// Required, bounded username made of letters, digits and underscores.
    pub fn username(&mut self, field: &str, value: &str, max: usize) {
        let before = self.count(field);
        self.required(field, value, max);
        if self.count(field) == before && !USERNAME_RE.is_match(value) {
            self.add(
                field,
                "may only contain letters, digits and underscores",
            );
        }
    }

    pub fn username_if_present(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.username(field, value, max);
        }
    }

    /// Optional phone number; an empty string is allowed.
    pub fn phone(&mut self, field: &str, value: &str, max: usize) {
        if value.is_empty() {
            return;
        }
        self.max_len(field, value, max);
        if !PHONE_RE.is_match(value) {
            self.add(field, "must be a valid phone number");
        }
    }

    /// Absolute http(s) URL. Empty is accepted only when `required` is false.
    pub fn url(&mut self, field: &str, value: &str, max: usize, required: bool) {
        if value.trim().is_empty() {
            if required {
                self.add(field, "is required");
            }
            return;
        }
        self.max_len(field, value, max);
        if !is_http_url(value) {
            self.add(field, "must be a valid http or https URL");
        }
    }

    /// Parent key supplied on create or update.
    pub fn foreign_key(&mut self, field: &str, value: i64) {
        if value < 1 {
            self.add(field, "must be a positive id");
        }
    }

    pub fn foreign_key_if_present(&mut self, field: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.foreign_key(field, value);
        }
    }
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}
