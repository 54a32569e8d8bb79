use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) max_page_size: u32,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>, max_page_size: u32) -> Self {
        Self {
            repo,
            max_page_size,
        }
    }
}
