pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleRecord};
pub use events::ArticleEvent;
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleStatus, Content, Title};
