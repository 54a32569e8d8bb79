// tests/support/mocks/article_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use news_core::domain::article::{Article, ArticleId, ArticleRepository};
use news_core::domain::errors::{DomainError, DomainResult};
use news_core::domain::user::UserId;

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

#[derive(Default)]
struct Store {
    next_id: i64,
    articles: HashMap<i64, Article>,
    owners: HashMap<i64, UserId>,
    saves: usize,
}

/// Article repository backed by a map, assigning ids from 1.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Store>,
}

impl InMemoryArticleRepo {
    pub fn owner_of(&self, id: ArticleId) -> Option<UserId> {
        self.inner.lock().unwrap().owners.get(&i64::from(id)).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> usize {
        self.inner.lock().unwrap().saves
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn insert(&self, article: Article, owner: UserId) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        let stored = article.with_id(ArticleId(id));
        store.articles.insert(id, stored.clone());
        store.owners.insert(id, owner);
        Ok(stored)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store.articles.get(&i64::from(id)).cloned())
    }

    async fn save(&self, article: &Article) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let id = article
            .id()
            .map(i64::from)
            .filter(|id| store.articles.contains_key(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        store.articles.insert(id, article.clone());
        store.saves += 1;
        Ok(())
    }

    async fn list_page(&self, page: u32, size: u32) -> DomainResult<Vec<Article>> {
        let store = self.inner.lock().unwrap();
        let mut articles: Vec<Article> = store.articles.values().cloned().collect();
        articles.sort_by(|a, b| {
            b.created()
                .cmp(&a.created())
                .then_with(|| b.id().map(i64::from).cmp(&a.id().map(i64::from)))
        });
        let skip = (page.saturating_sub(1) as usize) * size as usize;
        Ok(articles.into_iter().skip(skip).take(size as usize).collect())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// Every call fails as if the database were unreachable.
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn insert(&self, _article: Article, _owner: UserId) -> DomainResult<Article> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn save(&self, _article: &Article) -> DomainResult<()> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_page(&self, _page: u32, _size: u32) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
