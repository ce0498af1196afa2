//! Turns hierarchical repository metadata records into flat, denormalized
//! search documents. Each facet of a record is handled by one indexer; a
//! composite runs an ordered pipeline of them and merges the partial
//! documents into one.

pub mod context;
pub mod date_parse;
pub mod document;
pub mod document_builder;
pub mod event_selector;
pub mod indexers;
pub mod language;
pub mod model;
pub mod rights_description;
pub mod status;
pub mod title_builder;

pub use context::{IndexingContext, RecordMetadata, RelatedObjectResolver};
pub use document::Document;
pub use document_builder::{indexer_for, DocumentBuilder};
pub use indexers::{CompositeIndexer, Indexer, IndexerId};
pub use model::{ItemKind, SourceRecord};
pub use title_builder::{Strategy, TitleBuilder};
