//! Shared context for one composition pass. Each indexer is constructed
//! with the subset of these fields it needs and ignores the rest.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::model::SourceRecord;
use crate::status::{StatusService, VersionMetadata, WorkflowRun};

/// Repository timestamps for the record, fetched alongside it.
#[derive(Debug, Clone, Default)]
pub struct RecordMetadata {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Resolves a related object by identifier. `Ok(None)` means not found,
/// which callers recover from locally; other errors propagate.
pub trait RelatedObjectResolver {
    fn find(&self, id: &str) -> Result<Option<SourceRecord>>;
}

/// Everything a composition pass may read. Built fresh per pass; all fields
/// are read-only borrows, so concurrent passes never share mutable state.
pub struct IndexingContext<'a> {
    pub id: &'a str,
    pub record: &'a SourceRecord,
    pub metadata: &'a RecordMetadata,
    pub administrative_tags: &'a [String],
    pub parent_collections: &'a [SourceRecord],
    pub resolver: Option<&'a dyn RelatedObjectResolver>,
    pub status: Option<&'a dyn StatusService>,
    pub versions: Option<&'a dyn VersionMetadata>,
    pub workflows: Option<&'a [WorkflowRun]>,
}

impl<'a> IndexingContext<'a> {
    pub fn new(
        record: &'a SourceRecord,
        metadata: &'a RecordMetadata,
    ) -> IndexingContext<'a> {
        IndexingContext {
            id: &record.external_identifier,
            record,
            metadata,
            administrative_tags: &[],
            parent_collections: &[],
            resolver: None,
            status: None,
            versions: None,
            workflows: None,
        }
    }
}
