use serde::{Deserialize, Serialize};

/// Legacy rule-based authorization object: categorized index elements
/// summarizing object- and file-level grants. Records that still carry this
/// shape get their rights descriptors from the legacy builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RightsAuthorization {
    pub primary: String,
    pub terms: Vec<String>,
    pub obj_locations_qualified: Vec<QualifiedLocation>,
    pub file_locations_qualified: Vec<QualifiedLocation>,
    pub obj_groups_qualified: Vec<QualifiedGroup>,
    pub file_groups_qualified: Vec<QualifiedGroup>,
    pub obj_world_qualified: Vec<QualifiedRule>,
    pub file_world_qualified: Vec<QualifiedRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualifiedLocation {
    pub location: String,
    pub rule: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualifiedGroup {
    pub group: String,
    pub rule: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualifiedRule {
    pub rule: Option<String>,
}
