use anyhow::Result;
use serde_json::Value;

use super::Indexer;
use crate::context::IndexingContext;
use crate::document::Document;
use crate::model::SourceRecord;

/// Indexes the identity facet: object type, source id, barcode, catkey, and
/// the combined identifier lists searched by the admin UI.
pub struct IdentityMetadataIndexer<'a> {
    record: &'a SourceRecord,
}

impl<'a> IdentityMetadataIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> IdentityMetadataIndexer<'a> {
        IdentityMetadataIndexer { record: ctx.record }
    }
}

impl Indexer for IdentityMetadataIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let mut document = Document::new();
        document.insert(
            "objectType_ssim",
            Value::from(vec![self.record.kind().label().to_string()]),
        );

        let identification = &self.record.identification;
        let source_id = identification.source_id.as_deref();
        let barcode = identification.barcode.as_deref();
        let catkey = identification.catalog_record_id("symphony");

        document.insert_nonblank("source_id_ssim", Value::from(source_id));
        document.insert_nonblank("barcode_id_ssim", Value::from(barcode));
        document.insert_nonblank("catkey_id_ssim", Value::from(catkey));

        // Prefixed and bare forms of every identifier, searchable together.
        let mut identifiers: Vec<String> = Vec::new();
        let mut bare: Vec<String> = Vec::new();
        if let Some(source_id) = source_id {
            identifiers.push(source_id.to_string());
            bare.push(source_id.to_string());
        }
        if let Some(barcode) = barcode {
            identifiers.push(format!("barcode:{}", barcode));
            bare.push(barcode.to_string());
        }
        if let Some(catkey) = catkey {
            identifiers.push(format!("catkey:{}", catkey));
            bare.push(catkey.to_string());
        }
        document.insert_nonblank("identifier_ssim", Value::from(identifiers.clone()));
        document.insert_nonblank("identifier_tesim", Value::from(identifiers));
        document.insert_nonblank("dor_id_tesim", Value::from(bare));
        Ok(document)
    }
}
