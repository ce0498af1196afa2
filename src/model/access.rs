use serde::{Deserialize, Serialize};

/// Object- or file-level access policy. The same shape is used at both
/// levels; a file without its own policy inherits the object's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessPolicy {
    pub access: AccessLevel,
    pub download: DownloadLevel,
    pub read_location: Option<String>,
    pub controlled_digital_lending: bool,
    pub copyright: Option<String>,
    pub use_and_reproduction_statement: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    World,
    Stanford,
    LocationBased,
    CitationOnly,
    Dark,
}

impl Default for AccessLevel {
    fn default() -> AccessLevel {
        AccessLevel::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownloadLevel {
    World,
    Stanford,
    LocationBased,
    None,
}

impl Default for DownloadLevel {
    fn default() -> DownloadLevel {
        DownloadLevel::None
    }
}
