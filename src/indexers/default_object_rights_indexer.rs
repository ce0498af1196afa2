use anyhow::Result;
use serde_json::Value;

use super::Indexer;
use crate::context::IndexingContext;
use crate::document::Document;
use crate::model::SourceRecord;

/// Indexes the rights defaults an admin policy hands to objects registered
/// under it.
pub struct DefaultObjectRightsIndexer<'a> {
    record: &'a SourceRecord,
}

impl<'a> DefaultObjectRightsIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> DefaultObjectRightsIndexer<'a> {
        DefaultObjectRightsIndexer { record: ctx.record }
    }
}

impl Indexer for DefaultObjectRightsIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let mut document = Document::new();
        let default_access = match &self.record.administrative.default_access {
            Some(access) => access,
            None => return Ok(document),
        };

        document.insert_nonblank(
            "use_statement_ssim",
            Value::from(default_access.use_and_reproduction_statement.as_deref()),
        );
        document.insert_nonblank(
            "copyright_ssim",
            Value::from(default_access.copyright.as_deref()),
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RecordMetadata;
    use serde_json::json;

    #[test]
    fn test_default_access_indexed() {
        let record: SourceRecord = serde_json::from_value(json!({
            "externalIdentifier": "druid:gf999hb9999",
            "type": "admin_policy",
            "administrative": {
                "defaultAccess": {
                    "access": "world",
                    "useAndReproductionStatement": "Rights are owned by the repository.",
                    "copyright": "Copyright © Board of Trustees"
                }
            }
        }))
        .unwrap();
        let metadata = RecordMetadata::default();
        let ctx = IndexingContext::new(&record, &metadata);
        let doc = DefaultObjectRightsIndexer::new(&ctx).to_document().unwrap();

        assert_eq!(
            doc.get("use_statement_ssim"),
            Some(&json!("Rights are owned by the repository."))
        );
        assert_eq!(doc.get("copyright_ssim"), Some(&json!("Copyright © Board of Trustees")));
    }

    #[test]
    fn test_no_default_access_empty_document() {
        let record: SourceRecord = serde_json::from_value(json!({
            "externalIdentifier": "druid:gf999hb9999",
            "type": "admin_policy"
        }))
        .unwrap();
        let metadata = RecordMetadata::default();
        let ctx = IndexingContext::new(&record, &metadata);
        let doc = DefaultObjectRightsIndexer::new(&ctx).to_document().unwrap();

        assert!(doc.is_empty());
    }
}
