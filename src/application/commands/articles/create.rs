// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        pipeline::Handler,
    },
    domain::{
        article::{Article, ArticleEvent, Content, Title},
        outcome::{Outcome, OutcomeBase, ValueOutcome},
        user::UserId,
    },
};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Owner of the new article, supplied by the authenticated caller.
    pub user_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    user_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title,
            content: self.content,
            user_id: self.user_id,
        }
    }
}

#[async_trait]
impl Handler<CreateArticleCommand> for ArticleCommandService {
    type Output = ValueOutcome<Article>;

    /// Field errors come first. A missing or non-positive owner has no field
    /// of its own and fails with the generic error.
    fn validate(&self, command: &CreateArticleCommand) -> Outcome {
        let fields = Title::create(command.title.clone())
            .zip(Content::create(command.content.clone()))
            .without_value();
        if !fields.is_successful() {
            return fields;
        }

        match command.user_id.map(UserId::new) {
            Some(Ok(_)) => Outcome::success(),
            _ => Outcome::fail([]),
        }
    }

    async fn run(&self, command: CreateArticleCommand) -> ApplicationResult<Self::Output> {
        let owner = UserId::new(command.user_id.unwrap_or_default())?;
        let now = self.clock.now();

        let article = match Article::create(command.title, command.content, now).into_result() {
            Ok(article) => article,
            Err(errors) => return Ok(ValueOutcome::fail([errors])),
        };

        let created = self.repo.insert(article, owner).await?;
        let id = created.id().ok_or_else(|| {
            ApplicationError::infrastructure("stored article was not assigned an id")
        })?;

        tracing::info!(
            article_id = %id,
            owner_id = %owner,
            title = %created.title(),
            "article created"
        );
        self.events.publish(ArticleEvent::Created {
            id,
            owner_id: owner,
            title: created.title().clone(),
            at: created.created(),
        });

        Ok(ValueOutcome::success(created))
    }
}
