use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::access::AccessPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Administrative {
    pub has_admin_policy: Option<String>,
    pub part_of_project: Option<String>,
    pub release_tags: Vec<ReleaseTag>,
    /// Rights defaults an admin policy hands to newly registered objects.
    /// Same shape as an object-level policy.
    pub default_access: Option<AccessPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseTag {
    pub to: Option<String>,
    pub release: bool,
    pub date: Option<DateTime<Utc>>,
    pub who: Option<String>,
    pub what: Option<String>,
}
