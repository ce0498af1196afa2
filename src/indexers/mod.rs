//! One indexer per facet of the record. Each produces a partial document;
//! the composite folds them into one.

mod administrative_tag_indexer;
mod collection_title_indexer;
mod content_metadata_indexer;
mod data_indexer;
mod default_object_rights_indexer;
mod descriptive_metadata_indexer;
mod identifiable_indexer;
mod identity_metadata_indexer;
mod processable_indexer;
mod releasable_indexer;
mod rights_metadata_indexer;
mod workflows_indexer;

pub use self::administrative_tag_indexer::{exploded_tags, AdministrativeTagIndexer};
pub use self::collection_title_indexer::CollectionTitleIndexer;
pub use self::content_metadata_indexer::ContentMetadataIndexer;
pub use self::data_indexer::DataIndexer;
pub use self::default_object_rights_indexer::DefaultObjectRightsIndexer;
pub use self::descriptive_metadata_indexer::DescriptiveMetadataIndexer;
pub use self::identifiable_indexer::IdentifiableIndexer;
pub use self::identity_metadata_indexer::IdentityMetadataIndexer;
pub use self::processable_indexer::ProcessableIndexer;
pub use self::releasable_indexer::ReleasableIndexer;
pub use self::rights_metadata_indexer::RightsMetadataIndexer;
pub use self::workflows_indexer::WorkflowsIndexer;

use anyhow::{Context, Result};

use crate::context::IndexingContext;
use crate::document::Document;

/// A unit that derives a partial search document from one facet of the
/// source record.
pub trait Indexer {
    fn to_document(&self) -> Result<Document>;
}

/// Descriptor for a concrete indexer; pipelines are ordered lists of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexerId {
    AdministrativeTags,
    Data,
    Rights,
    DefaultObjectRights,
    Identity,
    Descriptive,
    Content,
    Identifiable,
    CollectionTitle,
    Releasable,
    Processable,
    Workflows,
}

impl IndexerId {
    pub fn name(self) -> &'static str {
        match self {
            IndexerId::AdministrativeTags => "AdministrativeTagIndexer",
            IndexerId::Data => "DataIndexer",
            IndexerId::Rights => "RightsMetadataIndexer",
            IndexerId::DefaultObjectRights => "DefaultObjectRightsIndexer",
            IndexerId::Identity => "IdentityMetadataIndexer",
            IndexerId::Descriptive => "DescriptiveMetadataIndexer",
            IndexerId::Content => "ContentMetadataIndexer",
            IndexerId::Identifiable => "IdentifiableIndexer",
            IndexerId::CollectionTitle => "CollectionTitleIndexer",
            IndexerId::Releasable => "ReleasableIndexer",
            IndexerId::Processable => "ProcessableIndexer",
            IndexerId::Workflows => "WorkflowsIndexer",
        }
    }

    fn instantiate<'a>(self, ctx: &'a IndexingContext<'a>) -> Result<Box<dyn Indexer + 'a>> {
        Ok(match self {
            IndexerId::AdministrativeTags => Box::new(AdministrativeTagIndexer::new(ctx)),
            IndexerId::Data => Box::new(DataIndexer::new(ctx)),
            IndexerId::Rights => Box::new(RightsMetadataIndexer::new(ctx)),
            IndexerId::DefaultObjectRights => Box::new(DefaultObjectRightsIndexer::new(ctx)),
            IndexerId::Identity => Box::new(IdentityMetadataIndexer::new(ctx)),
            IndexerId::Descriptive => Box::new(DescriptiveMetadataIndexer::new(ctx)),
            IndexerId::Content => Box::new(ContentMetadataIndexer::new(ctx)),
            IndexerId::Identifiable => Box::new(IdentifiableIndexer::new(ctx)),
            IndexerId::CollectionTitle => Box::new(CollectionTitleIndexer::new(ctx)),
            IndexerId::Releasable => Box::new(ReleasableIndexer::new(ctx)),
            IndexerId::Processable => Box::new(ProcessableIndexer::new(ctx)?),
            IndexerId::Workflows => Box::new(WorkflowsIndexer::new(ctx)?),
        })
    }
}

/// Runs an ordered pipeline of indexers over one context and merges their
/// partial documents, later indexers overwriting earlier ones key-wise.
#[derive(Debug)]
pub struct CompositeIndexer {
    indexers: &'static [IndexerId],
}

impl CompositeIndexer {
    pub const fn new(indexers: &'static [IndexerId]) -> CompositeIndexer {
        CompositeIndexer { indexers }
    }

    pub fn indexers(&self) -> &'static [IndexerId] {
        self.indexers
    }

    pub fn to_document(&self, ctx: &IndexingContext<'_>) -> Result<Document> {
        // Construct everything up front so a missing context member fails
        // the whole pass before any field is produced.
        let instances = self
            .indexers
            .iter()
            .map(|id| {
                id.instantiate(ctx)
                    .with_context(|| format!("unable to initialize {}", id.name()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut document = Document::new();
        for instance in instances {
            document.merge(instance.to_document()?);
        }
        Ok(document)
    }
}

/// Hierarchical prefixes of an ordered sequence of parts: each prefix joins
/// one more part onto the last.
pub(crate) fn join_prefixes(parts: &[&str], delimiter: &str) -> Vec<String> {
    (1..=parts.len())
        .map(|i| parts[..i].join(delimiter))
        .collect()
}
