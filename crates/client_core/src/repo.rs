//! Narrow repository seams over the gateway, one per entity, so views and
//! the backend worker never touch the query client directly and tests can
//! substitute fakes.

use anyhow::Result;
use async_trait::async_trait;
use gateway::{Gateway, Order};
use shared::domain::{Article, ArticleCategory, Book, ContactSubmission, NewsPost};
use tracing::debug;

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// All news, newest first.
    async fn list(&self) -> Result<Vec<NewsPost>>;
    /// The newest `limit` news, for the home page strip.
    async fn latest(&self, limit: u32) -> Result<Vec<NewsPost>>;
    async fn by_slug(&self, slug: &str) -> Result<Option<NewsPost>>;
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Articles of one category, newest first.
    async fn list(&self, category: ArticleCategory) -> Result<Vec<Article>>;
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in their curated order.
    async fn list(&self) -> Result<Vec<Book>>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// One write per user-initiated submit; no automatic retry.
    async fn submit(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Gateway-backed implementation of every content repository.
#[derive(Clone)]
pub struct GatewayContent {
    gateway: Gateway,
}

impl GatewayContent {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl NewsRepository for GatewayContent {
    async fn list(&self) -> Result<Vec<NewsPost>> {
        let rows = self
            .gateway
            .from("news")
            .select("*")
            .order("published_at", Order::Desc)
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn latest(&self, limit: u32) -> Result<Vec<NewsPost>> {
        let rows = self
            .gateway
            .from("news")
            .select("*")
            .order("published_at", Order::Desc)
            .limit(limit)
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn by_slug(&self, slug: &str) -> Result<Option<NewsPost>> {
        let row = self
            .gateway
            .from("news")
            .select("*")
            .eq("slug", slug)
            .maybe_single()
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl ArticleRepository for GatewayContent {
    async fn list(&self, category: ArticleCategory) -> Result<Vec<Article>> {
        let rows = self
            .gateway
            .from("articles")
            .select("*")
            .eq("category", category.as_str())
            .order("published_at", Order::Desc)
            .fetch()
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl BookRepository for GatewayContent {
    async fn list(&self) -> Result<Vec<Book>> {
        let rows = self
            .gateway
            .from("books")
            .select("*")
            .order("order_position", Order::Asc)
            .fetch()
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl ContactRepository for GatewayContent {
    async fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        debug!(name = %submission.name, "submitting contact form");
        self.gateway
            .from("contact_submissions")
            .insert(submission)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/repo_tests.rs"]
mod tests;
