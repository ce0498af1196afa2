use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use super::Indexer;
use crate::context::IndexingContext;
use crate::document::Document;
use crate::model::{ItemKind, SourceRecord};
use crate::rights_description;

/// Indexes copyright, use statement, license and the rights descriptors.
/// The descriptor list comes from whichever rights representation the
/// record carries: the legacy authorization object when present, otherwise
/// the access-policy tree.
pub struct RightsMetadataIndexer<'a> {
    record: &'a SourceRecord,
}

impl<'a> RightsMetadataIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> RightsMetadataIndexer<'a> {
        RightsMetadataIndexer { record: ctx.record }
    }

    fn rights_descriptions(&self) -> Vec<String> {
        if let Some(auth) = &self.record.rights {
            return rights_description::build_legacy(auth);
        }
        match self.record.kind() {
            ItemKind::Collection => {
                vec![rights_description::build_for_collection(&self.record.access)]
            }
            _ => rights_description::build_for_record(self.record),
        }
    }
}

impl Indexer for RightsMetadataIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        debug!("indexing rights metadata");
        let access = &self.record.access;

        let mut document = Document::new();
        document.insert_nonblank("copyright_ssim", Value::from(access.copyright.as_deref()));
        document.insert_nonblank(
            "use_statement_ssim",
            Value::from(access.use_and_reproduction_statement.as_deref()),
        );
        document.insert_nonblank(
            "use_license_machine_ssi",
            Value::from(access.license.as_deref()),
        );
        document.insert_nonblank(
            "rights_descriptions_ssim",
            Value::from(self.rights_descriptions()),
        );
        Ok(document)
    }
}
