use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::Indexer;
use crate::context::{IndexingContext, RecordMetadata};
use crate::document::Document;
use crate::model::SourceRecord;

/// Legacy repository model URI, still faceted on by the admin UI.
const HAS_MODEL: &str = "info:fedora/afmodel:Dor_Item";

/// Indexes the record's identity, relationships and repository timestamps.
pub struct DataIndexer<'a> {
    record: &'a SourceRecord,
    metadata: &'a RecordMetadata,
}

impl<'a> DataIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> DataIndexer<'a> {
        DataIndexer {
            record: ctx.record,
            metadata: ctx.metadata,
        }
    }
}

impl Indexer for DataIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let mut document = Document::new();
        document.insert("id", Value::from(self.record.external_identifier.as_str()));
        document.insert_nonblank("obj_label_tesim", Value::from(self.record.label.as_str()));
        document.insert("current_version_isi", Value::from(self.record.version));
        document.insert("has_model_ssim", Value::from(HAS_MODEL));

        if let Some(apo) = self.record.administrative.has_admin_policy.as_deref() {
            document.insert("is_governed_by_ssim", Value::from(format!("info:fedora/{}", apo)));
        }

        let collections: Vec<String> = self
            .record
            .structural
            .is_member_of
            .iter()
            .map(|id| format!("info:fedora/{}", id))
            .collect();
        document.insert_nonblank("is_member_of_collection_ssim", Value::from(collections));

        let constituents: Vec<String> = self
            .record
            .structural
            .has_member_orders
            .iter()
            .flat_map(|order| order.members.iter().cloned())
            .collect();
        document.insert_nonblank("has_constituents_ssim", Value::from(constituents));

        document.insert_nonblank(
            "created_at_dttsi",
            Value::from(self.metadata.created_at.map(format_utc)),
        );
        document.insert_nonblank(
            "modified_latest_dttsi",
            Value::from(self.metadata.updated_at.map(format_utc)),
        );
        Ok(document)
    }
}

fn format_utc(at: DateTime<Utc>) -> String {
    at.format("%FT%TZ").to_string()
}
