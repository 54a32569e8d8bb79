// src/application/ports/events.rs
use crate::domain::article::ArticleEvent;

/// Receives article lifecycle events once the change has been stored.
///
/// Publishing is fire-and-forget: a publisher that cannot deliver an event
/// must not fail the operation that produced it.
pub trait ArticleEventPublisher: Send + Sync {
    fn publish(&self, event: ArticleEvent);
}
