use anyhow::{anyhow, Result};
use serde_json::Value;
use tracing::debug;

use super::{join_prefixes, Indexer};
use crate::context::IndexingContext;
use crate::document::Document;
use crate::status::WorkflowRun;

/// Indexes the object's position in its workflows: workflow names, the
/// workflow:process:status hierarchy, and any process error messages.
pub struct WorkflowsIndexer<'a> {
    workflows: &'a [WorkflowRun],
}

impl<'a> WorkflowsIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> Result<WorkflowsIndexer<'a>> {
        let workflows = ctx
            .workflows
            .ok_or_else(|| anyhow!("workflow state is required"))?;
        Ok(WorkflowsIndexer { workflows })
    }
}

impl Indexer for WorkflowsIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        debug!("indexing workflows");
        let names: Vec<String> = self.workflows.iter().map(|wf| wf.name.clone()).collect();

        let mut wps: Vec<String> = Vec::new();
        let mut errors: Vec<String> = Vec::new();
        for workflow in self.workflows {
            for process in &workflow.processes {
                let mut parts = vec![workflow.name.as_str(), process.name.as_str()];
                if let Some(status) = process.status.as_deref() {
                    parts.push(status);
                }
                for prefix in join_prefixes(&parts, ":") {
                    if !wps.contains(&prefix) {
                        wps.push(prefix);
                    }
                }
                if let Some(message) = process.error_message.as_deref() {
                    errors.push(format!("{}:{}:{}", workflow.name, process.name, message));
                }
            }
        }

        let mut document = Document::new();
        document.insert_nonblank("wf_ssim", Value::from(names));
        document.insert_nonblank("wf_wps_ssim", Value::from(wps));
        document.insert_nonblank("workflow_error_ssim", Value::from(errors));
        Ok(document)
    }
}
