// tests/support/helpers.rs
use std::sync::Arc;

use news_core::application::services::ApplicationServices;
use news_core::config::AppConfig;

use super::mocks::{CapturingPublisher, InMemoryArticleRepo, ManualClock, fixed_now};

/// Services wired to in-memory ports, with handles on each port for
/// assertions.
pub struct TestApp {
    pub services: ApplicationServices,
    pub repo: Arc<InMemoryArticleRepo>,
    pub clock: Arc<ManualClock>,
    pub events: Arc<CapturingPublisher>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(AppConfig::default())
}

pub fn build_test_app_with(config: AppConfig) -> TestApp {
    let repo = Arc::new(InMemoryArticleRepo::default());
    let clock = Arc::new(ManualClock::new(fixed_now()));
    let events = Arc::new(CapturingPublisher::default());

    let services = ApplicationServices::new(
        repo.clone(),
        clock.clone(),
        events.clone(),
        &config,
    );

    TestApp {
        services,
        repo,
        clock,
        events,
    }
}
