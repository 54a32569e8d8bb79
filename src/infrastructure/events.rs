//! Article event publishers.

use crate::application::ports::events::ArticleEventPublisher;
use crate::config::AppConfig;
use crate::domain::article::ArticleEvent;
use tokio::sync::broadcast;

/// Fans events out to every live subscriber over a bounded broadcast channel.
///
/// Slow subscribers lose the oldest events once the buffer is full; having
/// no subscriber at all is not an error.
#[derive(Clone)]
pub struct BroadcastArticleEventPublisher {
    sender: broadcast::Sender<ArticleEvent>,
}

impl BroadcastArticleEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Sized by [`AppConfig::event_capacity`].
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.event_capacity())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ArticleEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl ArticleEventPublisher for BroadcastArticleEventPublisher {
    fn publish(&self, event: ArticleEvent) {
        if let Err(broadcast::error::SendError(event)) = self.sender.send(event) {
            tracing::trace!(
                article_id = %event.article_id(),
                "no subscriber for article event"
            );
        }
    }
}

/// Writes each event to the log.
#[derive(Default, Clone)]
pub struct LoggingArticleEventPublisher;

impl ArticleEventPublisher for LoggingArticleEventPublisher {
    fn publish(&self, event: ArticleEvent) {
        match &event {
            ArticleEvent::Created { id, title, .. } => {
                tracing::info!(article_id = %id, %title, "new article \"{title}\" created");
            }
            other => {
                tracing::info!(
                    article_id = %other.article_id(),
                    event = ?other,
                    "article event"
                );
            }
        }
    }
}
