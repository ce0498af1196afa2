//! Selects the indexer pipeline for a record's kind and assembles the
//! context for one composition pass.

use anyhow::Result;
use tracing::{debug, warn};

use crate::context::{IndexingContext, RecordMetadata, RelatedObjectResolver};
use crate::document::Document;
use crate::indexers::{CompositeIndexer, IndexerId};
use crate::model::{ItemKind, SourceRecord};
use crate::status::{StatusService, VersionMetadata, WorkflowRun};

const ITEM_INDEXER: CompositeIndexer = CompositeIndexer::new(&[
    IndexerId::AdministrativeTags,
    IndexerId::Data,
    IndexerId::Rights,
    IndexerId::Identity,
    IndexerId::Descriptive,
    IndexerId::Content,
    IndexerId::Identifiable,
    IndexerId::CollectionTitle,
    IndexerId::Releasable,
    IndexerId::Processable,
    IndexerId::Workflows,
]);

const COLLECTION_INDEXER: CompositeIndexer = CompositeIndexer::new(&[
    IndexerId::AdministrativeTags,
    IndexerId::Data,
    IndexerId::Rights,
    IndexerId::Identity,
    IndexerId::Descriptive,
    IndexerId::Identifiable,
    IndexerId::Releasable,
    IndexerId::Processable,
    IndexerId::Workflows,
]);

const ADMIN_POLICY_INDEXER: CompositeIndexer = CompositeIndexer::new(&[
    IndexerId::AdministrativeTags,
    IndexerId::Data,
    IndexerId::DefaultObjectRights,
    IndexerId::Identity,
    IndexerId::Descriptive,
    IndexerId::Identifiable,
    IndexerId::Processable,
    IndexerId::Workflows,
]);

const SET_INDEXER: CompositeIndexer = CompositeIndexer::new(&[
    IndexerId::AdministrativeTags,
    IndexerId::Data,
    IndexerId::Rights,
    IndexerId::Identity,
    IndexerId::Descriptive,
    IndexerId::Identifiable,
    IndexerId::Processable,
    IndexerId::Workflows,
]);

/// The pipeline for a record kind. Agreements index like items.
pub fn indexer_for(kind: ItemKind) -> &'static CompositeIndexer {
    match kind {
        ItemKind::Item | ItemKind::Agreement => &ITEM_INDEXER,
        ItemKind::Collection => &COLLECTION_INDEXER,
        ItemKind::AdminPolicy => &ADMIN_POLICY_INDEXER,
        ItemKind::Set => &SET_INDEXER,
    }
}

/// Facade over one composition pass: resolves parent collections, picks the
/// pipeline for the record's kind, and runs it.
pub struct DocumentBuilder<'a> {
    resolver: &'a dyn RelatedObjectResolver,
    status: Option<&'a dyn StatusService>,
    versions: Option<&'a dyn VersionMetadata>,
    workflows: Option<&'a [WorkflowRun]>,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(resolver: &'a dyn RelatedObjectResolver) -> DocumentBuilder<'a> {
        DocumentBuilder {
            resolver,
            status: None,
            versions: None,
            workflows: None,
        }
    }

    pub fn with_status(mut self, status: &'a dyn StatusService) -> DocumentBuilder<'a> {
        self.status = Some(status);
        self
    }

    pub fn with_versions(mut self, versions: &'a dyn VersionMetadata) -> DocumentBuilder<'a> {
        self.versions = Some(versions);
        self
    }

    pub fn with_workflows(mut self, workflows: &'a [WorkflowRun]) -> DocumentBuilder<'a> {
        self.workflows = Some(workflows);
        self
    }

    pub fn to_document(
        &self,
        record: &SourceRecord,
        metadata: &RecordMetadata,
        administrative_tags: &[String],
    ) -> Result<Document> {
        let kind = record.kind();
        debug!(kind = kind.label(), id = record.external_identifier.as_str(), "composing document");

        let parent_collections = self.load_parent_collections(record)?;
        let ctx = IndexingContext {
            id: &record.external_identifier,
            record,
            metadata,
            administrative_tags,
            parent_collections: &parent_collections,
            resolver: Some(self.resolver),
            status: self.status,
            versions: self.versions,
            workflows: self.workflows,
        };
        indexer_for(kind).to_document(&ctx)
    }

    /// Collections an item belongs to. A dangling membership link is bad
    /// data, not a reason to fail the pass; the relation is simply dropped.
    fn load_parent_collections(&self, record: &SourceRecord) -> Result<Vec<SourceRecord>> {
        let mut collections = Vec::new();
        if !matches!(record.kind(), ItemKind::Item | ItemKind::Agreement) {
            return Ok(collections);
        }
        for id in &record.structural.is_member_of {
            match self.resolver.find(id)? {
                Some(collection) => collections.push(collection),
                None => warn!(
                    id = id.as_str(),
                    record = record.external_identifier.as_str(),
                    "membership points at a collection that does not exist"
                ),
            }
        }
        Ok(collections)
    }
}
