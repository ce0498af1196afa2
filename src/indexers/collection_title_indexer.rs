use anyhow::Result;
use serde_json::Value;

use super::Indexer;
use crate::context::IndexingContext;
use crate::document::Document;
use crate::model::SourceRecord;
use crate::title_builder::TitleBuilder;

/// Indexes the display titles of the collections this item belongs to.
pub struct CollectionTitleIndexer<'a> {
    parent_collections: &'a [SourceRecord],
}

impl<'a> CollectionTitleIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> CollectionTitleIndexer<'a> {
        CollectionTitleIndexer {
            parent_collections: ctx.parent_collections,
        }
    }
}

impl Indexer for CollectionTitleIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let titles: Vec<String> = self
            .parent_collections
            .iter()
            .filter_map(|collection| TitleBuilder::build(&collection.description.title))
            .collect();

        let mut document = Document::new();
        document.insert_nonblank("collection_title_ssim", Value::from(titles.clone()));
        document.insert_nonblank("collection_title_tesim", Value::from(titles));
        Ok(document)
    }
}
