// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{error::ApplicationResult, pipeline::Handler},
    domain::{
        article::{Article, ArticleEvent, Content, Title},
        outcome::{Outcome, ValueOutcome},
    },
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

#[async_trait]
impl Handler<UpdateArticleCommand> for ArticleCommandService {
    type Output = ValueOutcome<Article>;

    fn validate(&self, command: &UpdateArticleCommand) -> Outcome {
        let fields = Title::create(command.title.clone())
            .zip(Content::create(command.content.clone()))
            .without_value();
        Outcome::create([Article::validate_id(command.id), fields.into_errors()])
    }

    async fn run(&self, command: UpdateArticleCommand) -> ApplicationResult<Self::Output> {
        let UpdateArticleCommand { id, title, content } = command;
        self.apply(
            id,
            move |article, now| article.update(title, content, now),
            |id, at| ArticleEvent::Updated { id, at },
        )
        .await
    }
}
