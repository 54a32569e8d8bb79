// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, Content, Title};
use crate::domain::errors::FieldErrors;
use crate::domain::outcome::{Outcome, ValueOutcome};
use chrono::{DateTime, Utc};

/// News article aggregate.
///
/// Lifecycle: `Draft -> Published <-> Unpublished`. Every mutation returns an
/// outcome and only touches state when it succeeds and actually changes
/// something, so repeated calls leave the timestamps alone.
#[derive(Debug, Clone)]
pub struct Article {
    id: Option<ArticleId>,
    title: Title,
    content: Content,
    status: ArticleStatus,
    created: DateTime<Utc>,
    modified: Option<DateTime<Utc>>,
    published: Option<DateTime<Utc>>,
}

impl Article {
    pub const STATUS_ERROR_KEY: &'static str = "status";
    pub const ID_ERROR_KEY: &'static str = "id";

    /// Validates title and content together and builds a draft stamped with
    /// `now`.
    pub fn create(
        title: Option<String>,
        content: Option<String>,
        now: DateTime<Utc>,
    ) -> ValueOutcome<Self> {
        Title::create(title)
            .zip(Content::create(content))
            .map(|(title, content)| Self {
                id: None,
                title,
                content,
                status: ArticleStatus::Draft,
                created: now,
                modified: None,
                published: None,
            })
    }

    /// Rebuilds an article loaded from storage.
    ///
    /// The stored status is free text; anything outside the known states is
    /// reported as `status: error`.
    pub fn restore(record: ArticleRecord) -> ValueOutcome<Self> {
        let ArticleRecord {
            id,
            title,
            content,
            status,
            created,
            modified,
            published,
        } = record;

        let mut errors = FieldErrors::new();
        let id = match ArticleId::new(id) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.insert(Self::ID_ERROR_KEY, "invalid");
                None
            }
        };
        let status = match status.parse::<ArticleStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.insert(Self::STATUS_ERROR_KEY, "error");
                None
            }
        };

        let fields = Title::create(title).zip(Content::create(content));
        match (fields.into_result(), id, status) {
            (Ok((title, content)), Some(id), Some(status)) => ValueOutcome::success(Self {
                id: Some(id),
                title,
                content,
                status,
                created,
                modified,
                published,
            }),
            (fields, _, _) => ValueOutcome::fail([fields.err().unwrap_or_default(), errors]),
        }
    }

    /// `id: invalid` unless `raw` can identify a stored article.
    pub fn validate_id(raw: i64) -> FieldErrors {
        if ArticleId::new(raw).is_ok() {
            FieldErrors::new()
        } else {
            FieldErrors::single(Self::ID_ERROR_KEY, "invalid")
        }
    }

    pub fn not_found() -> FieldErrors {
        FieldErrors::single(Self::ID_ERROR_KEY, "notFound")
    }

    /// Attaches the identifier assigned by storage.
    pub fn with_id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn update(
        &mut self,
        title: Option<String>,
        content: Option<String>,
        now: DateTime<Utc>,
    ) -> Outcome {
        let fields = Title::create(title).zip(Content::create(content));
        let (title, content) = match fields.into_result() {
            Ok(fields) => fields,
            Err(errors) => return Outcome::fail([errors]),
        };

        if title == self.title && content == self.content {
            return Outcome::success();
        }

        self.title = title;
        self.content = content;
        self.modified = Some(now);
        Outcome::success()
    }

    pub fn publish(&mut self, now: DateTime<Utc>) -> Outcome {
        if self.status == ArticleStatus::Published {
            return Outcome::success();
        }

        self.status = ArticleStatus::Published;
        self.modified = Some(now);
        self.published = Some(now);
        Outcome::success()
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) -> Outcome {
        match self.status {
            ArticleStatus::Draft => Outcome::fail([FieldErrors::single(
                Self::STATUS_ERROR_KEY,
                "cannotUnpublishDraft",
            )]),
            ArticleStatus::Unpublished => Outcome::success(),
            ArticleStatus::Published => {
                self.status = ArticleStatus::Unpublished;
                self.modified = Some(now);
                self.published = None;
                Outcome::success()
            }
        }
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.modified
    }

    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published
    }
}

/// Flat storage representation of an [`Article`].
///
/// `id` is `0` for an article that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: String,
    pub created: DateTime<Utc>,
    pub modified: Option<DateTime<Utc>>,
    pub published: Option<DateTime<Utc>>,
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.map(i64::from).unwrap_or_default(),
            title: Some(article.title.as_str().to_string()),
            content: article.content.as_deref().map(str::to_string),
            status: article.status.as_str().to_string(),
            created: article.created,
            modified: article.modified,
            published: article.published,
        }
    }
}
