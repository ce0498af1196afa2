use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use super::{join_prefixes, Indexer};
use crate::context::IndexingContext;
use crate::document::Document;

const TAG_PART_DELIMITER: &str = " : ";

/// Tag prefixes that additionally index into their own field, e.g.
/// "Project : X" also lands in `project_tag_ssim`.
const SPECIAL_TAG_TYPES_TO_INDEX: [&str; 2] = ["Project", "Registered By"];

/// Indexes administrative tags: the raw tag, every hierarchical prefix of
/// it, and per-prefix fields for the recognized tag types.
pub struct AdministrativeTagIndexer<'a> {
    administrative_tags: &'a [String],
}

impl<'a> AdministrativeTagIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> AdministrativeTagIndexer<'a> {
        AdministrativeTagIndexer {
            administrative_tags: ctx.administrative_tags,
        }
    }
}

impl Indexer for AdministrativeTagIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        debug!("indexing administrative tags");
        let mut document = Document::new();
        if self.administrative_tags.is_empty() {
            return Ok(document);
        }

        let mut exploded: Vec<String> = Vec::new();
        let mut special: Vec<(String, Vec<String>)> = Vec::new();

        for tag in self.administrative_tags {
            exploded.extend(exploded_tags(tag));

            let mut split = tag.splitn(2, TAG_PART_DELIMITER);
            let prefix = split.next().unwrap_or_default();
            let rest = match split.next() {
                Some(rest) => rest,
                None => continue,
            };
            if !SPECIAL_TAG_TYPES_TO_INDEX.contains(&prefix) {
                continue;
            }
            let field = format!(
                "{}_tag_ssim",
                prefix
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<&str>>()
                    .join("_")
            );
            match special.iter_mut().find(|(name, _)| *name == field) {
                Some((_, values)) => values.push(rest.trim().to_string()),
                None => special.push((field, vec![rest.trim().to_string()])),
            }
        }

        document.insert("tag_ssim", Value::from(self.administrative_tags.to_vec()));
        document.insert("exploded_tag_ssim", Value::from(exploded));
        for (field, values) in special {
            document.insert(&field, Value::from(values));
        }
        Ok(document)
    }
}

/// Every prefix of the tag, inclusive of the full tag: "A : B : C" explodes
/// to ["A", "A : B", "A : B : C"].
pub fn exploded_tags(tag: &str) -> Vec<String> {
    let parts: Vec<&str> = tag.split(TAG_PART_DELIMITER).collect();
    join_prefixes(&parts, TAG_PART_DELIMITER)
}
