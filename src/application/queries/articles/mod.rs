mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::GetAllArticlesQuery;
pub use service::ArticleQueryService;
