use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Stores a new article for `owner` and returns it with its assigned id.
    async fn insert(&self, article: Article, owner: UserId) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Overwrites a stored article. Fails with `NotFound` when the article
    /// carries no id or the id is unknown.
    async fn save(&self, article: &Article) -> DomainResult<()>;
    /// One page of articles, newest first. `page` starts at 1.
    async fn list_page(&self, page: u32, size: u32) -> DomainResult<Vec<Article>>;
}
