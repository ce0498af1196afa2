use anyhow::Result;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use super::Indexer;
use crate::context::IndexingContext;
use crate::date_parse;
use crate::document::{scalar_or_list, Document};
use crate::event_selector::{event_date, pub_date, select_event};
use crate::language;
use crate::model::{Contributor, ContributorName, Event, Form, SourceRecord, Subject};
use crate::title_builder::TitleBuilder;

static FORMAT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("cartographic", "Map");
    m.insert("mixed material", "Archive/Manuscript");
    m.insert("moving image", "Video");
    m.insert("notated music", "Music score");
    m.insert("software, multimedia", "Software/Multimedia");
    m.insert("sound recording-musical", "Music recording");
    m.insert("sound recording-nonmusical", "Sound recording");
    m.insert("sound recording", "Sound recording");
    m.insert("still image", "Image");
    m.insert("three dimensional object", "Object");
    m
});

/// Indexes the descriptive facet: titles, authors, subjects, formats,
/// languages, and the origin-info dates, publisher and place.
pub struct DescriptiveMetadataIndexer<'a> {
    record: &'a SourceRecord,
}

impl<'a> DescriptiveMetadataIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> DescriptiveMetadataIndexer<'a> {
        DescriptiveMetadataIndexer { record: ctx.record }
    }
}

impl Indexer for DescriptiveMetadataIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        debug!("indexing descriptive metadata");
        let description = &self.record.description;
        let events = &description.event;
        let forms = &description.form;
        let subjects = &description.subject;

        let resource_types = form_values(forms, "resource type");
        let genres = form_values(forms, "genre");

        // The event governing publisher and place; publication wins over
        // creation when both are present.
        let origin_event =
            select_event(events, "publication").or_else(|| select_event(events, "creation"));

        let mut document = Document::new();
        document.insert_nonblank(
            "sw_language_ssim",
            Value::from(language::build(&description.language)),
        );
        document.insert_nonblank(
            "mods_typeOfResource_ssim",
            Value::from(resource_types.clone()),
        );
        document.insert_nonblank(
            "sw_format_ssim",
            Value::from(vec![self.sw_format(&resource_types, &genres, events)]),
        );
        document.insert_nonblank("sw_genre_ssim", Value::from(display_genres(&genres)));
        document.insert_nonblank(
            "sw_author_tesim",
            Value::from(author(&description.contributor)),
        );
        document.insert_nonblank(
            "sw_display_title_tesim",
            Value::from(TitleBuilder::build(&description.title)),
        );
        document.insert_nonblank(
            "sw_subject_temporal_ssim",
            Value::from(structured_subject_values(subjects, "time")),
        );
        document.insert_nonblank(
            "sw_subject_geographic_ssim",
            Value::from(structured_subject_values(subjects, "place")),
        );
        document.insert_nonblank(
            "sw_pub_date_facet_ssi",
            Value::from(
                pub_date(events)
                    .and_then(|date| date_parse::earliest_year(&date))
                    .map(|year| year.to_string()),
            ),
        );
        document.insert_nonblank(
            "originInfo_date_created_tesim",
            Value::from(
                select_event(events, "creation").and_then(|event| event_date(event, "creation")),
            ),
        );
        document.insert_nonblank(
            "originInfo_publisher_tesim",
            Value::from(origin_event.map(publisher_names).map(scalar_or_list)),
        );
        document.insert_nonblank(
            "originInfo_place_placeTerm_tesim",
            Value::from(origin_event.map(location_values).map(scalar_or_list)),
        );

        let topics = topics(subjects);
        document.insert_nonblank("topic_ssim", Value::from(topics.clone()));
        document.insert_nonblank("topic_tesim", Value::from(topics));

        document.insert("metadata_format_ssim", Value::from("mods"));
        Ok(document)
    }
}

impl DescriptiveMetadataIndexer<'_> {
    /// A record whose resource type is absent or unmapped still gets a
    /// format via the text fallthrough.
    fn sw_format(&self, resource_types: &[String], genres: &[String], events: &[Event]) -> String {
        match resource_types.first().and_then(|rt| FORMAT.get(rt.as_str())) {
            Some(format) => format.to_string(),
            None => self.format_for_text(genres, events),
        }
    }

    fn format_for_text(&self, genres: &[String], events: &[Event]) -> String {
        if genres.iter().any(|genre| genre == "archived website") {
            return "Archived website".to_string();
        }
        if self.periodical(events) {
            return "Journal/Periodical".to_string();
        }
        "Book".to_string()
    }

    fn periodical(&self, events: &[Event]) -> bool {
        select_event(events, "publication")
            .map(|event| {
                event.note.iter().any(|note| {
                    note.note_type.as_deref() == Some("issuance")
                        && note.value.as_deref() == Some("serial")
                })
            })
            .unwrap_or(false)
    }
}

fn form_values(forms: &[Form], form_type: &str) -> Vec<String> {
    forms
        .iter()
        .filter(|form| form.form_type.as_deref() == Some(form_type))
        .filter_map(|form| form.value.clone())
        .collect()
}

/// Genre display values, with the composite labels the catalog facets on
/// appended when the corresponding genre variants occur.
fn display_genres(genres: &[String]) -> Vec<String> {
    if genres.is_empty() {
        return Vec::new();
    }
    let mut values: Vec<String> = genres.to_vec();
    let has = |candidates: &[&str]| genres.iter().any(|g| candidates.contains(&g.as_str()));

    if has(&["thesis", "Thesis"]) {
        values.push("Thesis/Dissertation".to_string());
    }
    if has(&[
        "conference publication",
        "Conference publication",
        "Conference Publication",
    ]) {
        values.push("Conference proceedings".to_string());
    }
    if has(&[
        "government publication",
        "Government publication",
        "Government Publication",
    ]) {
        values.push("Government document".to_string());
    }
    if has(&[
        "technical report",
        "Technical report",
        "Technical Report",
    ]) {
        values.push("Technical report".to_string());
    }

    dedup_in_order(&mut values);
    values
}

/// Direct topic subjects first, then topic parts of structured subjects.
fn topics(subjects: &[Subject]) -> Vec<String> {
    let mut values: Vec<String> = subjects
        .iter()
        .filter(|subject| subject.subject_type.as_deref() == Some("topic"))
        .filter_map(|subject| subject.value.clone())
        .collect();
    values.extend(
        subjects
            .iter()
            .flat_map(|subject| subject.structured_value.iter())
            .filter(|part| part.subject_type.as_deref() == Some("topic"))
            .filter_map(|part| part.value.clone()),
    );
    dedup_in_order(&mut values);
    values
}

fn structured_subject_values(subjects: &[Subject], part_type: &str) -> Vec<String> {
    subjects
        .iter()
        .flat_map(|subject| subject.structured_value.iter())
        .filter(|part| part.subject_type.as_deref() == Some(part_type))
        .filter_map(|part| part.value.clone())
        .collect()
}

/// The primary contributor's display name, or the first contributor's.
fn author(contributors: &[Contributor]) -> Option<String> {
    let contributor = contributors
        .iter()
        .find(|c| c.status.as_deref() == Some("primary"))
        .or_else(|| contributors.first())?;
    contributor.name.first().and_then(contributor_name)
}

fn contributor_name(name: &ContributorName) -> Option<String> {
    if let Some(value) = name.value.as_deref() {
        if !value.trim().is_empty() {
            return Some(value.to_string());
        }
    }
    if !name.structured_value.is_empty() {
        let joined = name
            .structured_value
            .iter()
            .filter_map(|part| part.value.as_deref())
            .filter(|value| !value.trim().is_empty())
            .collect::<Vec<&str>>()
            .join(", ");
        if !joined.is_empty() {
            return Some(joined);
        }
    }
    name.parallel_value.first().and_then(contributor_name)
}

/// Names of the event's contributors holding the publisher role.
fn publisher_names(event: &Event) -> Vec<String> {
    event
        .contributor
        .iter()
        .filter(|contributor| {
            contributor
                .role
                .iter()
                .any(|role| role.value.as_deref() == Some("publisher"))
        })
        .flat_map(|contributor| contributor.name.iter())
        .filter_map(contributor_name)
        .collect()
}

fn location_values(event: &Event) -> Vec<String> {
    event
        .location
        .iter()
        .filter_map(|location| location.value.clone())
        .collect()
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = Vec::with_capacity(values.len());
    values.retain(|value| {
        if seen.contains(value) {
            false
        } else {
            seen.push(value.clone());
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RecordMetadata;
    use serde_json::json;

    fn doc_for(description: serde_json::Value) -> Document {
        let record: SourceRecord = serde_json::from_value(json!({
            "externalIdentifier": "druid:qy781dy0220",
            "type": "image",
            "label": "test",
            "version": 1,
            "description": description
        }))
        .unwrap();
        let metadata = RecordMetadata::default();
        let ctx = IndexingContext::new(&record, &metadata);
        DescriptiveMetadataIndexer::new(&ctx).to_document().unwrap()
    }

    #[test]
    fn test_populates_expected_fields() {
        let doc = doc_for(json!({
            "title": [{
                "structuredValue": [
                    { "value": "The", "type": "nonsorting characters" },
                    { "value": "complete works of Henry George", "type": "main title" }
                ],
                "note": [{ "value": "4", "type": "nonsorting character count" }]
            }],
            "contributor": [
                {
                    "name": [{
                        "structuredValue": [
                            { "value": "George, Henry", "type": "name" },
                            { "value": "1839-1897", "type": "life dates" }
                        ]
                    }],
                    "type": "person",
                    "role": [{ "value": "creator" }]
                },
                {
                    "name": [{
                        "structuredValue": [
                            { "value": "George, Henry", "type": "name" },
                            { "value": "1862-1916", "type": "life dates" }
                        ]
                    }],
                    "type": "person"
                }
            ],
            "event": [{
                "type": "publication",
                "date": [{ "value": "1911", "status": "primary", "type": "publication" }],
                "contributor": [{
                    "name": [{ "value": "Doubleday, Page" }],
                    "type": "organization",
                    "role": [{ "value": "publisher" }]
                }],
                "location": [
                    { "value": "Garden City, N. Y" },
                    { "code": "xx" }
                ],
                "note": [
                    { "value": "[Library ed.]", "type": "edition" },
                    { "value": "monographic", "type": "issuance" }
                ]
            }],
            "form": [
                { "value": "text", "type": "resource type" },
                { "value": "electronic", "type": "form" }
            ],
            "language": [{ "code": "eng" }],
            "subject": [
                {
                    "structuredValue": [
                        { "value": "Economics", "type": "topic" },
                        { "value": "1800-1900", "type": "time" }
                    ]
                },
                {
                    "structuredValue": [
                        { "value": "Economics", "type": "topic" },
                        { "value": "Europe", "type": "place" }
                    ]
                },
                { "value": "cats", "type": "topic" }
            ]
        }));

        assert_eq!(doc.get("sw_language_ssim"), Some(&json!(["English"])));
        assert_eq!(doc.get("sw_format_ssim"), Some(&json!(["Book"])));
        assert_eq!(doc.get("mods_typeOfResource_ssim"), Some(&json!(["text"])));
        assert_eq!(doc.get("sw_subject_temporal_ssim"), Some(&json!(["1800-1900"])));
        assert_eq!(doc.get("sw_subject_geographic_ssim"), Some(&json!(["Europe"])));
        assert_eq!(doc.get("sw_pub_date_facet_ssi"), Some(&json!("1911")));
        assert_eq!(doc.get("sw_author_tesim"), Some(&json!("George, Henry, 1839-1897")));
        assert_eq!(
            doc.get("sw_display_title_tesim"),
            Some(&json!("The complete works of Henry George"))
        );
        assert_eq!(doc.get("originInfo_publisher_tesim"), Some(&json!("Doubleday, Page")));
        assert_eq!(
            doc.get("originInfo_place_placeTerm_tesim"),
            Some(&json!("Garden City, N. Y"))
        );
        assert_eq!(doc.get("topic_ssim"), Some(&json!(["cats", "Economics"])));
        assert_eq!(doc.get("topic_tesim"), Some(&json!(["cats", "Economics"])));
        assert_eq!(doc.get("metadata_format_ssim"), Some(&json!("mods")));
        assert!(!doc.contains_field("originInfo_date_created_tesim"));
    }

    #[test]
    fn test_no_empty_values_indexed() {
        let doc = doc_for(json!({ "title": [{ "value": "Test obj" }] }));
        for (field, value) in doc.iter() {
            assert!(!value.is_null(), "{} is null", field);
            assert_ne!(value, &json!([]), "{} is an empty list", field);
            assert_ne!(value, &json!(""), "{} is an empty string", field);
        }
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.get("sw_display_title_tesim"), Some(&json!("Test obj")));
        assert_eq!(doc.get("sw_format_ssim"), Some(&json!(["Book"])));
        assert_eq!(doc.get("metadata_format_ssim"), Some(&json!("mods")));
    }

    #[test]
    fn test_missing_resource_type_falls_through_to_book() {
        let doc = doc_for(json!({ "title": [{ "value": "Title" }] }));
        assert_eq!(doc.get("sw_format_ssim"), Some(&json!(["Book"])));
    }

    #[test]
    fn test_date_created_from_creation_event() {
        let doc = doc_for(json!({
            "title": [{ "value": "Title" }],
            "event": [{
                "date": [{ "value": "1900", "type": "creation", "status": "primary" }]
            }]
        }));
        assert_eq!(doc.get("originInfo_date_created_tesim"), Some(&json!("1900")));
        assert_eq!(doc.get("sw_pub_date_facet_ssi"), Some(&json!("1900")));
    }

    #[test]
    fn test_genre_display_labels() {
        let doc = doc_for(json!({
            "title": [{ "value": "Title" }],
            "form": [
                { "value": "thesis", "type": "genre" },
                { "value": "Technical report", "type": "genre" }
            ]
        }));
        assert_eq!(
            doc.get("sw_genre_ssim"),
            Some(&json!(["thesis", "Technical report", "Thesis/Dissertation"]))
        );
    }

    #[test]
    fn test_archived_website_format() {
        let doc = doc_for(json!({
            "title": [{ "value": "Title" }],
            "form": [
                { "value": "text", "type": "resource type" },
                { "value": "archived website", "type": "genre" }
            ]
        }));
        assert_eq!(doc.get("sw_format_ssim"), Some(&json!(["Archived website"])));
    }

    #[test]
    fn test_periodical_format() {
        let doc = doc_for(json!({
            "title": [{ "value": "Title" }],
            "form": [{ "value": "text", "type": "resource type" }],
            "event": [{
                "type": "publication",
                "date": [{ "value": "1911", "type": "publication" }],
                "note": [{ "value": "serial", "type": "issuance" }]
            }]
        }));
        assert_eq!(doc.get("sw_format_ssim"), Some(&json!(["Journal/Periodical"])));
    }

    #[test]
    fn test_mapped_resource_type_format() {
        let doc = doc_for(json!({
            "title": [{ "value": "Title" }],
            "form": [{ "value": "cartographic", "type": "resource type" }]
        }));
        assert_eq!(doc.get("sw_format_ssim"), Some(&json!(["Map"])));
    }

    #[test]
    fn test_unparseable_pub_date_omits_year_facet() {
        let doc = doc_for(json!({
            "title": [{ "value": "Title" }],
            "event": [{
                "date": [{ "value": "[19--?]", "type": "publication" }]
            }]
        }));
        assert!(!doc.contains_field("sw_pub_date_facet_ssi"));
    }
}
