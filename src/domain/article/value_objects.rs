use crate::domain::errors::{DomainError, DomainResult, FieldErrors};
use crate::domain::outcome::ValueOutcome;
use crate::domain::value_object::{ValueObject, value_object};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank article title of at most [`Title::MAX_LENGTH`] UTF-16 code units.
#[derive(Debug, Clone)]
pub struct Title(String);

impl Title {
    pub const ERROR_KEY: &'static str = "title";
    pub const MAX_LENGTH: usize = 50;

    pub fn create(raw: Option<String>) -> ValueOutcome<Self> {
        let raw = raw.unwrap_or_default();
        let mut errors = FieldErrors::new();

        if raw.trim().is_empty() {
            errors.insert(Self::ERROR_KEY, "invalid");
        } else if raw.encode_utf16().count() > Self::MAX_LENGTH {
            errors.insert(Self::ERROR_KEY, "tooLong");
        }

        ValueOutcome::create(|| Self(raw), [errors])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for Title {
    type Key<'a> = &'a str;

    fn equality_key(&self) -> Self::Key<'_> {
        &self.0
    }
}

value_object!(Title);

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Article body. Any input is accepted, including none at all.
#[derive(Debug, Clone)]
pub struct Content(Option<String>);

impl Content {
    pub fn create(raw: Option<String>) -> ValueOutcome<Self> {
        ValueOutcome::success(Self(raw))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl ValueObject for Content {
    type Key<'a> = Option<&'a str>;

    fn equality_key(&self) -> Self::Key<'_> {
        self.0.as_deref()
    }
}

value_object!(Content);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Unpublished,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Unpublished => "unpublished",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            "unpublished" => Ok(ArticleStatus::Unpublished),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}
