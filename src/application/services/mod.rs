// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{events::ArticleEventPublisher, time::Clock},
        queries::articles::ArticleQueryService,
    },
    config::AppConfig,
    domain::article::ArticleRepository,
};

/// Handlers wired to their ports.
///
/// Notifications go through the publisher passed in here; there is no global
/// subscriber list.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn ArticleEventPublisher>,
        config: &AppConfig,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&clock),
            Arc::clone(&events),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            config.max_page_size(),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
