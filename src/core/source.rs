//! Document sources.
//!
//! A [`DocumentSource`] stands in for the backend that stores
//! contracts and files. It applies the structured filters and returns
//! at most `limit` candidates in storage order; text matching and
//! ranking happen in the search service.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::error::{Result, SearchError};
use crate::core::search::AttributeFilter;
use crate::core::types::Document;

/// Backend holding the searchable documents
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch up to `limit` documents that satisfy `filter`
    async fn fetch(&self, filter: &AttributeFilter, limit: usize) -> Result<Vec<Document>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Documents held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<Document>,
}

impl MemorySource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch(&self, filter: &AttributeFilter, limit: usize) -> Result<Vec<Document>> {
        Ok(select(self.documents.iter().cloned(), filter, limit))
    }

    fn describe(&self) -> String {
        if self.is_empty() {
            "memory (empty)".to_string()
        } else {
            format!("memory ({} documents)", self.len())
        }
    }
}

/// Documents read from a JSON array on disk
///
/// The file is re-read on every fetch so edits are picked up without
/// a restart.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every document in the file
    pub async fn load(&self) -> Result<Vec<Document>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SearchError::SourceUnavailable(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            SearchError::SourceUnavailable(format!(
                "Failed to parse {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl DocumentSource for JsonFileSource {
    async fn fetch(&self, filter: &AttributeFilter, limit: usize) -> Result<Vec<Document>> {
        let documents = self.load().await?;
        tracing::debug!(
            path = %self.path().display(),
            documents = documents.len(),
            "Loaded document file"
        );
        Ok(select(documents.into_iter(), filter, limit))
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path().display())
    }
}

fn select(
    documents: impl Iterator<Item = Document>,
    filter: &AttributeFilter,
    limit: usize,
) -> Vec<Document> {
    documents.filter(|d| filter.matches(d)).take(limit).collect()
}
