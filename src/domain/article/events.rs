use crate::domain::article::value_objects::{ArticleId, Title};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleEvent {
    Created {
        id: ArticleId,
        owner_id: UserId,
        title: Title,
        at: DateTime<Utc>,
    },
    Updated {
        id: ArticleId,
        at: DateTime<Utc>,
    },
    Published {
        id: ArticleId,
        at: DateTime<Utc>,
    },
    Unpublished {
        id: ArticleId,
        at: DateTime<Utc>,
    },
}

impl ArticleEvent {
    pub fn article_id(&self) -> ArticleId {
        match self {
            ArticleEvent::Created { id, .. }
            | ArticleEvent::Updated { id, .. }
            | ArticleEvent::Published { id, .. }
            | ArticleEvent::Unpublished { id, .. } => *id,
        }
    }
}
