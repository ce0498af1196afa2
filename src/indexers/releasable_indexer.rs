use anyhow::Result;
use serde_json::Value;

use super::Indexer;
use crate::context::IndexingContext;
use crate::document::Document;
use crate::model::{ReleaseTag, SourceRecord};

/// Indexes which targets the object is currently released to. Tags
/// accumulate over time, so only the latest tag per target decides.
pub struct ReleasableIndexer<'a> {
    record: &'a SourceRecord,
}

impl<'a> ReleasableIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> ReleasableIndexer<'a> {
        ReleasableIndexer { record: ctx.record }
    }
}

impl Indexer for ReleasableIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let tags = &self.record.administrative.release_tags;

        let mut targets: Vec<&str> = Vec::new();
        for tag in tags {
            if let Some(to) = tag.to.as_deref() {
                if !targets.contains(&to) {
                    targets.push(to);
                }
            }
        }

        let released_to: Vec<String> = targets
            .into_iter()
            .filter(|target| {
                latest_tag_for(tags, target)
                    .map(|tag| tag.release)
                    .unwrap_or(false)
            })
            .map(str::to_string)
            .collect();

        let mut document = Document::new();
        document.insert_nonblank("released_to_ssim", Value::from(released_to));
        Ok(document)
    }
}

/// The tag that currently governs a target: latest by date, an undated tag
/// sorting earliest.
fn latest_tag_for<'a>(tags: &'a [ReleaseTag], target: &str) -> Option<&'a ReleaseTag> {
    tags.iter()
        .filter(|tag| tag.to.as_deref() == Some(target))
        .max_by_key(|tag| tag.date)
}
