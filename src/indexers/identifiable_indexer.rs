use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use super::Indexer;
use crate::context::{IndexingContext, RelatedObjectResolver};
use crate::document::Document;
use crate::model::SourceRecord;
use crate::title_builder::TitleBuilder;

/// Indexes the metadata source and the governing admin policy's title,
/// fetched through the related-object resolver.
pub struct IdentifiableIndexer<'a> {
    id: &'a str,
    record: &'a SourceRecord,
    resolver: Option<&'a dyn RelatedObjectResolver>,
}

impl<'a> IdentifiableIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> IdentifiableIndexer<'a> {
        IdentifiableIndexer {
            id: ctx.id,
            record: ctx.record,
            resolver: ctx.resolver,
        }
    }

    /// The admin policy's display title and whether it is a Hydrus policy.
    /// A dangling link indexes the raw id so the record stays findable.
    fn apo_title(&self, apo_id: &str) -> Result<(String, bool)> {
        let apo = match self.resolver {
            Some(resolver) => resolver.find(apo_id)?,
            None => None,
        };
        match apo {
            Some(apo) => {
                let title = TitleBuilder::build(&apo.description.title)
                    .unwrap_or_else(|| apo.label.clone());
                let hydrus = apo.label.starts_with("Hydrus");
                Ok((title, hydrus))
            }
            None => {
                warn!(apo = apo_id, "governing admin policy not found");
                Ok((apo_id.to_string(), false))
            }
        }
    }
}

impl Indexer for IdentifiableIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let mut document = Document::new();

        let source = if self.record.identification.catalog_record_id("symphony").is_some() {
            "Symphony"
        } else {
            "DOR"
        };
        document.insert("metadata_source_ssi", Value::from(source));

        document.insert(
            "objectId_tesim",
            Value::from(vec![
                self.id.to_string(),
                self.id.trim_start_matches("druid:").to_string(),
            ]),
        );

        if let Some(apo_id) = self.record.administrative.has_admin_policy.as_deref() {
            let (title, hydrus) = self.apo_title(apo_id)?;
            let titles = Value::from(vec![title]);
            let prefix = if hydrus { "hydrus" } else { "nonhydrus" };
            document.insert(&format!("{}_apo_title_ssim", prefix), titles.clone());
            document.insert(&format!("{}_apo_title_tesim", prefix), titles.clone());
            document.insert("apo_title_ssim", titles.clone());
            document.insert("apo_title_tesim", titles);
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RecordMetadata;
    use serde_json::json;
    use std::collections::HashMap;

    struct FakeResolver {
        records: HashMap<String, SourceRecord>,
    }

    impl RelatedObjectResolver for FakeResolver {
        fn find(&self, id: &str) -> Result<Option<SourceRecord>> {
            Ok(self.records.get(id).cloned())
        }
    }

    fn item() -> SourceRecord {
        serde_json::from_value(json!({
            "externalIdentifier": "druid:mx123ms3333",
            "type": "image",
            "administrative": { "hasAdminPolicy": "druid:gf999hb9999" },
            "identification": {
                "catalogLinks": [{ "catalog": "symphony", "catalogRecordId": "1234" }]
            }
        }))
        .unwrap()
    }

    fn apo(label: &str) -> SourceRecord {
        serde_json::from_value(json!({
            "externalIdentifier": "druid:gf999hb9999",
            "type": "admin_policy",
            "label": label,
            "description": { "title": [{ "value": "APO title" }] }
        }))
        .unwrap()
    }

    #[test]
    fn test_apo_title_resolved() {
        let record = item();
        let metadata = RecordMetadata::default();
        let resolver = FakeResolver {
            records: vec![("druid:gf999hb9999".to_string(), apo("testing"))]
                .into_iter()
                .collect(),
        };
        let mut ctx = IndexingContext::new(&record, &metadata);
        ctx.resolver = Some(&resolver);
        let doc = IdentifiableIndexer::new(&ctx).to_document().unwrap();

        assert_eq!(doc.get("metadata_source_ssi"), Some(&json!("Symphony")));
        assert_eq!(
            doc.get("objectId_tesim"),
            Some(&json!(["druid:mx123ms3333", "mx123ms3333"]))
        );
        assert_eq!(doc.get("apo_title_ssim"), Some(&json!(["APO title"])));
        assert_eq!(doc.get("nonhydrus_apo_title_tesim"), Some(&json!(["APO title"])));
        assert!(!doc.contains_field("hydrus_apo_title_ssim"));
    }

    #[test]
    fn test_hydrus_apo_gets_hydrus_fields() {
        let record = item();
        let metadata = RecordMetadata::default();
        let resolver = FakeResolver {
            records: vec![("druid:gf999hb9999".to_string(), apo("Hydrus: deposits"))]
                .into_iter()
                .collect(),
        };
        let mut ctx = IndexingContext::new(&record, &metadata);
        ctx.resolver = Some(&resolver);
        let doc = IdentifiableIndexer::new(&ctx).to_document().unwrap();

        assert_eq!(doc.get("hydrus_apo_title_ssim"), Some(&json!(["APO title"])));
        assert!(!doc.contains_field("nonhydrus_apo_title_ssim"));
    }

    #[test]
    fn test_dangling_apo_link_indexes_the_id() {
        let record = item();
        let metadata = RecordMetadata::default();
        let resolver = FakeResolver {
            records: HashMap::new(),
        };
        let mut ctx = IndexingContext::new(&record, &metadata);
        ctx.resolver = Some(&resolver);
        let doc = IdentifiableIndexer::new(&ctx).to_document().unwrap();

        assert_eq!(doc.get("apo_title_ssim"), Some(&json!(["druid:gf999hb9999"])));
    }

    #[test]
    fn test_no_catalog_link_indexes_dor_source() {
        let record: SourceRecord = serde_json::from_value(json!({
            "externalIdentifier": "druid:mx123ms3333",
            "type": "image"
        }))
        .unwrap();
        let metadata = RecordMetadata::default();
        let ctx = IndexingContext::new(&record, &metadata);
        let doc = IdentifiableIndexer::new(&ctx).to_document().unwrap();

        assert_eq!(doc.get("metadata_source_ssi"), Some(&json!("DOR")));
        assert!(!doc.contains_field("apo_title_ssim"));
    }
}
