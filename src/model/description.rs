use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Description {
    pub title: Vec<Title>,
    pub contributor: Vec<Contributor>,
    pub event: Vec<Event>,
    pub form: Vec<Form>,
    pub language: Vec<Language>,
    pub subject: Vec<Subject>,
    pub note: Vec<Note>,
}

/// A title variant. Exactly one of `value`, `structuredValue` or
/// `parallelValue` is expected to be populated; the others stay empty.
/// `structuredValue` entries reuse this type, with `type` naming the part
/// (`nonsorting characters`, `part name`, `part number`, `main title`,
/// `subtitle`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Title {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub title_type: Option<String>,
    pub status: Option<String>,
    pub structured_value: Vec<Title>,
    pub parallel_value: Vec<Title>,
    pub note: Vec<Note>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub note_type: Option<String>,
}

/// A descriptive event (publication, creation, capture, ...). `parallelEvent`
/// carries alternative renderings of the same event, mirroring parallel
/// titles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub date: Vec<DateValue>,
    pub parallel_event: Vec<Event>,
    pub contributor: Vec<Contributor>,
    pub location: Vec<Location>,
    pub note: Vec<Note>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateValue {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub date_type: Option<String>,
    pub status: Option<String>,
    /// Ordered range parts, `start` before `end` by position.
    pub structured_value: Vec<DateValue>,
    pub parallel_value: Vec<DateValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub value: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contributor {
    pub name: Vec<ContributorName>,
    #[serde(rename = "type")]
    pub contributor_type: Option<String>,
    pub status: Option<String>,
    pub role: Vec<Role>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributorName {
    pub value: Option<String>,
    pub structured_value: Vec<ContributorName>,
    pub parallel_value: Vec<ContributorName>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Form {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub form_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub value: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub subject_type: Option<String>,
    pub structured_value: Vec<Subject>,
}
