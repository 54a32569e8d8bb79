use super::ArticleQueryService;
use crate::{
    application::{error::ApplicationResult, pipeline::Handler},
    domain::{
        article::Article,
        errors::FieldErrors,
        outcome::{Outcome, PagedOutcome},
    },
};
use async_trait::async_trait;

/// Newest-first listing of all articles.
///
/// Coordinates arrive as the caller sent them, negative values included, so
/// every bad request is reported through the error map.
#[derive(Debug, Clone, Copy)]
pub struct GetAllArticlesQuery {
    pub page: i32,
    pub size: i32,
}

impl GetAllArticlesQuery {
    pub const PAGE_ERROR_KEY: &'static str = "page";
    pub const SIZE_ERROR_KEY: &'static str = "size";
    pub const DEFAULT_MAX_SIZE: u32 = 100;

    pub fn new(page: i32, size: i32) -> Self {
        Self { page, size }
    }

    /// `page` starts at 1; `size` must lie within `1..=max_size`.
    pub fn validate(&self, max_size: u32) -> Outcome {
        let mut errors = FieldErrors::new();

        if self.page < 1 {
            errors.insert(Self::PAGE_ERROR_KEY, "invalid");
        }
        if self.size < 1 || i64::from(self.size) > i64::from(max_size) {
            errors.insert(Self::SIZE_ERROR_KEY, "invalid");
        }

        Outcome::create([errors])
    }

    /// Page and size as storage expects them, once both are positive.
    pub fn coordinates(&self) -> Option<(u32, u32)> {
        let page = u32::try_from(self.page).ok().filter(|page| *page > 0)?;
        let size = u32::try_from(self.size).ok().filter(|size| *size > 0)?;
        Some((page, size))
    }
}

#[async_trait]
impl Handler<GetAllArticlesQuery> for ArticleQueryService {
    type Output = PagedOutcome<Vec<Article>>;

    fn validate(&self, query: &GetAllArticlesQuery) -> Outcome {
        query.validate(self.max_page_size)
    }

    async fn run(&self, query: GetAllArticlesQuery) -> ApplicationResult<Self::Output> {
        let Some((page, size)) = query.coordinates() else {
            let rejected = query.validate(self.max_page_size);
            return Ok(PagedOutcome::fail([rejected.into_errors()]));
        };

        let articles = self.repo.list_page(page, size).await?;
        tracing::debug!(page, size, count = articles.len(), "articles listed");
        Ok(PagedOutcome::success(articles, page, size))
    }
}
