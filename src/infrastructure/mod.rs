pub mod events;
pub mod time;

pub use events::{BroadcastArticleEventPublisher, LoggingArticleEventPublisher};
pub use time::SystemClock;
