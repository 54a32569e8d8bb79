// src/application/commands/articles/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{
        error::ApplicationResult,
        ports::{events::ArticleEventPublisher, time::Clock},
    },
    domain::{
        article::{Article, ArticleEvent, ArticleId, ArticleRecord, ArticleRepository},
        outcome::{Outcome, OutcomeBase, ValueOutcome},
    },
};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) events: Arc<dyn ArticleEventPublisher>,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn ArticleEventPublisher>,
    ) -> Self {
        Self {
            repo,
            clock,
            events,
        }
    }

    /// Loads an article, applies `change` and stores the result.
    ///
    /// Nothing is written and no event is emitted when the change fails or
    /// leaves the article as it was.
    pub(super) async fn apply<F>(
        &self,
        id: i64,
        change: F,
        event: fn(ArticleId, DateTime<Utc>) -> ArticleEvent,
    ) -> ApplicationResult<ValueOutcome<Article>>
    where
        F: FnOnce(&mut Article, DateTime<Utc>) -> Outcome + Send,
    {
        let id = ArticleId::new(id)?;
        let Some(mut article) = self.repo.find_by_id(id).await? else {
            return Ok(ValueOutcome::fail([Article::not_found()]));
        };

        let before = ArticleRecord::from(&article);
        let now = self.clock.now();
        let outcome = change(&mut article, now);
        if !outcome.is_successful() {
            return Ok(ValueOutcome::failure(outcome.into_errors()));
        }

        if ArticleRecord::from(&article) != before {
            self.repo.save(&article).await?;
            let event = event(id, now);
            tracing::info!(article_id = %id, ?event, "article changed");
            self.events.publish(event);
        }

        Ok(ValueOutcome::success(article))
    }
}
