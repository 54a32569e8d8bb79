// tests/support/mocks/events.rs
use std::sync::Mutex;

use news_core::application::ports::events::ArticleEventPublisher;
use news_core::domain::article::ArticleEvent;

/// Records every published event.
#[derive(Default)]
pub struct CapturingPublisher {
    events: Mutex<Vec<ArticleEvent>>,
}

impl CapturingPublisher {
    pub fn events(&self) -> Vec<ArticleEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ArticleEventPublisher for CapturingPublisher {
    fn publish(&self, event: ArticleEvent) {
        self.events.lock().unwrap().push(event);
    }
}
