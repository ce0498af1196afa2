//! The source record: a read-only snapshot of one repository object's
//! descriptive, access, administrative and structural metadata.

mod access;
mod administrative;
mod description;
mod identification;
mod rights;
mod structural;

pub use self::access::{AccessLevel, AccessPolicy, DownloadLevel};
pub use self::administrative::{Administrative, ReleaseTag};
pub use self::description::{
    Contributor, ContributorName, DateValue, Description, Event, Form, Language, Location, Note,
    Role, Subject, Title,
};
pub use self::identification::{CatalogLink, Identification};
pub use self::rights::{QualifiedGroup, QualifiedLocation, QualifiedRule, RightsAuthorization};
pub use self::structural::{
    File, FileAdministrative, FileSet, FileSetStructural, MemberOrder, Structural,
};

use serde::{Deserialize, Serialize};

/// One repository object as handed to the indexing pipeline. Nested sections
/// default to empty so partially-populated records deserialize cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceRecord {
    pub external_identifier: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub label: String,
    pub version: u32,
    pub description: Description,
    pub access: AccessPolicy,
    pub administrative: Administrative,
    pub identification: Identification,
    pub structural: Structural,
    /// Present only on records whose rights are still expressed as the
    /// rule-based authorization object rather than an access policy.
    pub rights: Option<RightsAuthorization>,
}

impl SourceRecord {
    pub fn kind(&self) -> ItemKind {
        ItemKind::from_object_type(&self.object_type)
    }

    /// Every file in the structural tree, in document order.
    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.structural
            .contains
            .iter()
            .flat_map(|file_set| file_set.structural.contains.iter())
    }
}

/// Closed set of record kinds; each kind maps to one indexer pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Item,
    Collection,
    AdminPolicy,
    Agreement,
    Set,
}

impl ItemKind {
    /// Anything that is not one of the named kinds indexes as an item.
    pub fn from_object_type(object_type: &str) -> ItemKind {
        match object_type {
            "collection" => ItemKind::Collection,
            "admin_policy" => ItemKind::AdminPolicy,
            "agreement" => ItemKind::Agreement,
            "set" => ItemKind::Set,
            _ => ItemKind::Item,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Item => "item",
            ItemKind::Collection => "collection",
            ItemKind::AdminPolicy => "adminPolicy",
            ItemKind::Agreement => "agreement",
            ItemKind::Set => "set",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_object_type() {
        assert_eq!(ItemKind::from_object_type("collection"), ItemKind::Collection);
        assert_eq!(ItemKind::from_object_type("admin_policy"), ItemKind::AdminPolicy);
        assert_eq!(ItemKind::from_object_type("agreement"), ItemKind::Agreement);
        assert_eq!(ItemKind::from_object_type("set"), ItemKind::Set);
        assert_eq!(ItemKind::from_object_type("image"), ItemKind::Item);
        assert_eq!(ItemKind::from_object_type("book"), ItemKind::Item);
    }

    #[test]
    fn test_record_deserializes_with_missing_sections() {
        let record: SourceRecord = serde_json::from_value(serde_json::json!({
            "externalIdentifier": "druid:bc123df4567",
            "type": "image",
            "label": "test",
            "version": 1
        }))
        .unwrap();

        assert_eq!(record.kind(), ItemKind::Item);
        assert!(record.description.title.is_empty());
        assert_eq!(record.files().count(), 0);
    }
}
