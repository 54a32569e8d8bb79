// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{error::ApplicationResult, pipeline::Handler},
    domain::{
        article::{Article, ArticleEvent},
        outcome::{Outcome, ValueOutcome},
    },
};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy)]
pub struct PublishArticleCommand {
    pub id: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct UnpublishArticleCommand {
    pub id: i64,
}

#[async_trait]
impl Handler<PublishArticleCommand> for ArticleCommandService {
    type Output = ValueOutcome<Article>;

    fn validate(&self, command: &PublishArticleCommand) -> Outcome {
        Outcome::create([Article::validate_id(command.id)])
    }

    async fn run(&self, command: PublishArticleCommand) -> ApplicationResult<Self::Output> {
        self.apply(
            command.id,
            |article, now| article.publish(now),
            |id, at| ArticleEvent::Published { id, at },
        )
        .await
    }
}

#[async_trait]
impl Handler<UnpublishArticleCommand> for ArticleCommandService {
    type Output = ValueOutcome<Article>;

    fn validate(&self, command: &UnpublishArticleCommand) -> Outcome {
        Outcome::create([Article::validate_id(command.id)])
    }

    async fn run(&self, command: UnpublishArticleCommand) -> ApplicationResult<Self::Output> {
        self.apply(
            command.id,
            |article, now| article.unpublish(now),
            |id, at| ArticleEvent::Unpublished { id, at },
        )
        .await
    }
}
