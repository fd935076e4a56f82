use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editorial category for long-form articles. Serialized values match the
/// gateway's `articles.category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleCategory {
    #[serde(rename = "minhas-palavras")]
    MinhasPalavras,
    #[serde(rename = "sobre-escrita")]
    SobreEscrita,
}

impl ArticleCategory {
    /// Column value used in gateway equality filters.
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleCategory::MinhasPalavras => "minhas-palavras",
            ArticleCategory::SobreEscrita => "sobre-escrita",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ArticleCategory::MinhasPalavras => "Em Minhas Palavras",
            ArticleCategory::SobreEscrita => "Sobre Escrita",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub category: ArticleCategory,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub cover_url: Option<String>,
    pub description: String,
    pub full_description: Option<String>,
    pub purchase_links: Option<BTreeMap<String, String>>,
    pub published_year: Option<i32>,
    pub order_position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outgoing contact-form payload. The gateway assigns id, submitted_at and
/// the moderation `read` flag on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_category_serializes_as_column_value() {
        let json = serde_json::to_string(&ArticleCategory::MinhasPalavras).expect("serialize");
        assert_eq!(json, "\"minhas-palavras\"");
        let back: ArticleCategory = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ArticleCategory::MinhasPalavras);
        assert_eq!(back.as_str(), "minhas-palavras");
    }

    #[test]
    fn news_post_deserializes_from_gateway_row() {
        let row = serde_json::json!({
            "id": "7c9a1f08-9f2e-4d4b-8a7a-2d1f64f5b7a1",
            "title": "Lançamento confirmado",
            "slug": "lancamento-confirmado",
            "summary": null,
            "content": "Texto completo.",
            "image_url": null,
            "published_at": "2025-03-12T14:00:00Z",
            "created_at": "2025-03-10T09:00:00Z",
            "updated_at": "2025-03-10T09:00:00Z"
        });
        let post: NewsPost = serde_json::from_value(row).expect("row shape");
        assert_eq!(post.slug, "lancamento-confirmado");
        assert!(post.summary.is_none());
    }
}
