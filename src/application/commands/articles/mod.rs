// src/application/commands/articles/mod.rs
mod create;
mod publish;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use publish::{PublishArticleCommand, UnpublishArticleCommand};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
