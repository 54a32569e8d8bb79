// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod events;
pub mod time;

pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};
pub use events::CapturingPublisher;
pub use time::{ManualClock, fixed_now};
