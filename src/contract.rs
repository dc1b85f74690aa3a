//! # contract: the record this crate produces and the collaborator that consumes it
//!
//! [`ArticleData`] is the normalized result of reading one Markdown document. Its serde
//! field names are the article payload the dev.to API expects for creation and update,
//! so a publisher can serialize it as the request body unchanged.
//!
//! [`Publisher`] is the outbound seam. Transport, authentication and pagination live in
//! its implementors; this crate only calls it. The trait is annotated for `mockall` so
//! tests can script responses.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// One article, ready to be published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleData {
    pub title: String,
    pub description: String,
    pub body_markdown: String,
    pub published: bool,
    pub series: String,
    pub tags: Vec<String>,
    pub canonical_url: String,
    /// `null` on the wire when the document has no cover image.
    pub cover_image: Option<String>,
}

/// An article as the remote API reports it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body_markdown: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Error type for Publisher calls
pub type PublishError = Box<dyn std::error::Error + Send + Sync>;

/// Destination for parsed articles.
///
/// The trait is `Send` + `Sync` and intended for async/await usage.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Every article owned by the authenticated user, across all pages.
    async fn list_articles(&self) -> Result<Vec<Article>, PublishError>;

    /// Create a new article.
    async fn create_article(&self, article: &ArticleData) -> Result<Article, PublishError>;

    /// Replace an existing article's content.
    async fn update_article(
        &self,
        id: u64,
        article: &ArticleData,
    ) -> Result<Article, PublishError>;
}
