use anyhow::Result;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

use super::Indexer;
use crate::context::IndexingContext;
use crate::document::Document;
use crate::model::{File, SourceRecord};

static TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("image", "image");
    m.insert("manuscript", "image");
    m.insert("book", "book");
    m.insert("map", "map");
    m.insert("three_dimensional", "3d");
    m.insert("media", "media");
    m.insert("webarchive_seed", "webarchive-seed");
    m.insert("webarchive_binary", "webarchive-binary");
    m.insert("geo", "geo");
    m.insert("document", "document");
    m
});

/// Aggregates the structural file tree: content type, file counts, sizes,
/// mime types and roles. Counts are always present, zero included.
pub struct ContentMetadataIndexer<'a> {
    record: &'a SourceRecord,
}

impl<'a> ContentMetadataIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> ContentMetadataIndexer<'a> {
        ContentMetadataIndexer { record: ctx.record }
    }
}

impl Indexer for ContentMetadataIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let files: Vec<&File> = self.record.files().collect();
        let shelved: Vec<&File> = files
            .iter()
            .filter(|file| file.administrative.shelve)
            .cloned()
            .collect();
        let preserved_size: u64 = files
            .iter()
            .filter(|file| file.administrative.sdr_preserve)
            .map(|file| file.size)
            .sum();

        let mut mime_types: Vec<String> = Vec::new();
        for file in &files {
            if let Some(mime) = file.has_mime_type.as_deref() {
                if !mime_types.iter().any(|m| m == mime) {
                    mime_types.push(mime.to_string());
                }
            }
        }

        let roles: Vec<String> = files
            .iter()
            .filter_map(|file| file.use_role.clone())
            .collect();

        let first_shelved_image = shelved
            .iter()
            .filter_map(|file| file.filename.as_deref())
            .find(|filename| filename.ends_with("jp2"));

        let content_type = TYPES
            .get(self.record.object_type.as_str())
            .copied()
            .unwrap_or("file");

        let mut document = Document::new();
        document.insert("content_type_ssim", Value::from(content_type));
        document.insert_nonblank("content_file_mimetypes_ssim", Value::from(mime_types));
        document.insert("content_file_count_itsi", Value::from(files.len()));
        document.insert("shelved_content_file_count_itsi", Value::from(shelved.len()));
        document.insert(
            "resource_count_itsi",
            Value::from(self.record.structural.contains.len()),
        );
        document.insert("preserved_size_dbtsi", Value::from(preserved_size));
        document.insert_nonblank("content_file_roles_ssim", Value::from(roles));
        document.insert_nonblank("first_shelved_image_ss", Value::from(first_shelved_image));
        Ok(document)
    }
}
