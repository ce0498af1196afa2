use serde::{Deserialize, Serialize};

use super::access::AccessPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Structural {
    pub contains: Vec<FileSet>,
    pub is_member_of: Vec<String>,
    pub has_member_orders: Vec<MemberOrder>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberOrder {
    pub members: Vec<String>,
}

/// One resource in the content tree; its files live one level down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSet {
    pub label: Option<String>,
    pub structural: FileSetStructural,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSetStructural {
    pub contains: Vec<File>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct File {
    pub filename: Option<String>,
    pub size: u64,
    pub has_mime_type: Option<String>,
    #[serde(rename = "use")]
    pub use_role: Option<String>,
    /// File-level policy; absent means the object-level policy applies.
    pub access: Option<AccessPolicy>,
    pub administrative: FileAdministrative,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileAdministrative {
    pub publish: bool,
    pub shelve: bool,
    pub sdr_preserve: bool,
}
