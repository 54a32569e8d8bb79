use super::ArticleQueryService;
use crate::{
    application::{error::ApplicationResult, pipeline::Handler},
    domain::{
        article::{Article, ArticleId},
        outcome::{Outcome, ValueOutcome},
    },
};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy)]
pub struct GetArticleByIdQuery {
    pub id: i64,
}

#[async_trait]
impl Handler<GetArticleByIdQuery> for ArticleQueryService {
    type Output = ValueOutcome<Article>;

    fn validate(&self, query: &GetArticleByIdQuery) -> Outcome {
        Outcome::create([Article::validate_id(query.id)])
    }

    async fn run(&self, query: GetArticleByIdQuery) -> ApplicationResult<Self::Output> {
        let id = ArticleId::new(query.id)?;
        Ok(match self.repo.find_by_id(id).await? {
            Some(article) => ValueOutcome::success(article),
            None => ValueOutcome::fail([Article::not_found()]),
        })
    }
}
