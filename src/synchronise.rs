//! High-level pipeline: parse every article and publish it.
//!
//! For each [`Document`]:
//!   - Parses the front matter into an [`ArticleData`] record
//!   - Skips the document when required metadata is missing (the rest still run)
//!   - Updates the remote article with the same title, or creates a new one
//!   - Records the outcome in a [`SynchroniseReport`]
//!
//! # Error Handling
//! Listing the remote articles is the only fatal step: without it nothing can be matched.
//! A parse failure or a failed create/update affects only its own document and is
//! reported, never retried.

use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use crate::contract::{Article, ArticleData, PublishError, Publisher};
use crate::documents::Document;
use crate::frontmatter::{FrontMatterParser, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishAction {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDocument {
    pub display_name: String,
    pub article_id: u64,
    pub title: String,
    pub action: PublishAction,
}

/// A document that could not be turned into an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub display_name: String,
    pub reason: ParseError,
}

/// A document the publisher rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDocument {
    pub display_name: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct SynchroniseReport {
    pub published: Vec<PublishedDocument>,
    pub skipped: Vec<SkippedDocument>,
    pub failed: Vec<FailedDocument>,
}

impl SynchroniseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

async fn publish<P>(
    publisher: &P,
    existing_id: Option<u64>,
    data: &ArticleData,
) -> Result<(Article, PublishAction), PublishError>
where
    P: Publisher + Sync,
{
    match existing_id {
        Some(id) => publisher
            .update_article(id, data)
            .await
            .map(|article| (article, PublishAction::Updated)),
        None => publisher
            .create_article(data)
            .await
            .map(|article| (article, PublishAction::Created)),
    }
}

pub async fn synchronise<P>(
    documents: &[Document],
    publisher: &P,
) -> Result<SynchroniseReport, PublishError>
where
    P: Publisher + Sync,
{
    info!(documents = documents.len(), "[SYNC] Starting article synchronisation");

    let existing = match publisher.list_articles().await {
        Ok(articles) => {
            info!(count = articles.len(), "[SYNC] Listed existing articles");
            articles
        }
        Err(e) => {
            error!(error = ?e, "[SYNC][ERROR] Failed to list existing articles");
            return Err(e);
        }
    };

    // First listed article wins when titles repeat.
    let mut ids_by_title: HashMap<String, u64> = HashMap::new();
    for article in existing {
        ids_by_title.entry(article.title).or_insert(article.id);
    }

    let mut report = SynchroniseReport::default();

    for document in documents {
        let parsed = FrontMatterParser::new(
            document.text.as_str(),
            document.display_name.as_str(),
        )
        .data();
        let data = match parsed {
            Ok(data) => data,
            Err(reason) => {
                warn!(document = %document.display_name, error = %reason, "[SYNC] Skipping document");
                report.skipped.push(SkippedDocument {
                    display_name: document.display_name.clone(),
                    reason,
                });
                continue;
            }
        };

        let existing_id = ids_by_title.get(&data.title).copied();
        debug!(document = %document.display_name, title = %data.title, ?existing_id, "[SYNC] Publishing document");
        match serde_json::to_string_pretty(&data) {
            Ok(json) => {
                debug!(json = %json, document = %document.display_name, "[SYNC][DEBUG] Article payload as JSON")
            }
            Err(e) => {
                error!(document = %document.display_name, error = ?e, "[SYNC][DEBUG] Failed to serialize article payload")
            }
        }

        match publish(publisher, existing_id, &data).await {
            Ok((article, action)) => {
                info!(
                    document = %document.display_name,
                    article_id = article.id,
                    ?action,
                    "[SYNC] Published document"
                );
                ids_by_title.entry(data.title.clone()).or_insert(article.id);
                report.published.push(PublishedDocument {
                    display_name: document.display_name.clone(),
                    article_id: article.id,
                    title: data.title,
                    action,
                });
            }
            Err(e) => {
                error!(document = %document.display_name, error = ?e, "[SYNC][ERROR] Publishing failed");
                report.failed.push(FailedDocument {
                    display_name: document.display_name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        published = report.published.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "[SYNC] Synchronisation finished"
    );
    Ok(report)
}
