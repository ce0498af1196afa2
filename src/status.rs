//! Collaborator interfaces for state that lives outside the record itself:
//! workflow/processing status, per-version metadata, and workflow runs. The
//! core consumes these as opaque, caller-supplied handles.

use chrono::{DateTime, Utc};

/// A lifecycle milestone reported by the workflow system.
#[derive(Debug, Clone)]
pub struct Milestone {
    pub name: String,
    pub at: DateTime<Utc>,
    pub version: Option<u32>,
}

/// Processing status of the object as the workflow system sees it.
pub trait StatusService {
    fn current_version(&self) -> u32;
    /// Display string, e.g. "v4 Accessioned".
    fn display(&self) -> String;
    /// Status without the version prefix, e.g. "Accessioned".
    fn display_simplified(&self) -> String;
    fn status_code(&self) -> Option<i64>;
    fn milestones(&self) -> Vec<Milestone>;
}

/// Optional capability: per-version tag and description lookup. Implemented
/// only by resources that retain version history.
pub trait VersionMetadata {
    fn tag_for_version(&self, version: u32) -> Option<String>;
    fn description_for_version(&self, version: u32) -> Option<String>;
}

/// One workflow and the state of its processes, resolved by the caller.
#[derive(Debug, Clone)]
pub struct WorkflowRun {
    pub name: String,
    pub processes: Vec<WorkflowProcess>,
}

#[derive(Debug, Clone)]
pub struct WorkflowProcess {
    pub name: String,
    pub status: Option<String>,
    pub error_message: Option<String>,
}
