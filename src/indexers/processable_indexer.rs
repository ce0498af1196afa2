use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::Indexer;
use crate::context::{IndexingContext, RecordMetadata};
use crate::document::Document;
use crate::status::{StatusService, VersionMetadata};

/// Indexes processing state: current version, display status, lifecycle
/// milestones, and (when the resource retains version history) a line per
/// version.
pub struct ProcessableIndexer<'a> {
    status: &'a dyn StatusService,
    versions: Option<&'a dyn VersionMetadata>,
    metadata: &'a RecordMetadata,
}

impl<'a> ProcessableIndexer<'a> {
    pub fn new(ctx: &'a IndexingContext<'a>) -> Result<ProcessableIndexer<'a>> {
        let status = ctx
            .status
            .ok_or_else(|| anyhow!("workflow status service is required"))?;
        Ok(ProcessableIndexer {
            status,
            versions: ctx.versions,
            metadata: ctx.metadata,
        })
    }
}

impl Indexer for ProcessableIndexer<'_> {
    fn to_document(&self) -> Result<Document> {
        let current_version = self.status.current_version();
        let milestones = self.status.milestones();

        let mut document = Document::new();
        document.insert("current_version_isi", Value::from(current_version));
        document.insert_nonblank(
            "modified_latest_dttsi",
            Value::from(self.metadata.updated_at.map(format_utc)),
        );
        document.insert_nonblank("status_ssi", Value::from(self.status.display()));
        document.insert_nonblank(
            "processing_status_text_ssi",
            Value::from(self.status.display_simplified()),
        );
        document.insert_nonblank("processing_status_code_isi", Value::from(self.status.status_code()));

        if !milestones.is_empty() {
            let names: Vec<String> = milestones.iter().map(|m| m.name.clone()).collect();
            let lifecycle: Vec<String> = milestones
                .iter()
                .map(|m| {
                    format!(
                        "{}:{};{}",
                        m.name,
                        format_utc(m.at),
                        m.version.unwrap_or(current_version)
                    )
                })
                .collect();
            document.insert("milestones_ssim", Value::from(names));
            document.insert("lifecycle_ssim", Value::from(lifecycle));

            // Sortable per-milestone date fields, e.g. published_dttsim plus
            // earliest/latest for harvesters to sort on.
            let mut by_name: Vec<(String, Vec<String>)> = Vec::new();
            for milestone in &milestones {
                let at = format_utc(milestone.at);
                match by_name.iter_mut().find(|(name, _)| *name == milestone.name) {
                    Some((_, dates)) => dates.push(at),
                    None => by_name.push((milestone.name.clone(), vec![at])),
                }
            }
            for (name, mut dates) in by_name {
                dates.sort();
                dates.dedup();
                document.insert(
                    &format!("{}_earliest_dttsi", name),
                    Value::from(dates.first().cloned()),
                );
                document.insert(
                    &format!("{}_latest_dttsi", name),
                    Value::from(dates.last().cloned()),
                );
                document.insert(&format!("{}_dttsim", name), Value::from(dates));
            }
        }

        if let Some(versions) = self.versions {
            let lines: Vec<String> = (1..=current_version)
                .rev()
                .map(|version| {
                    format!(
                        "{};{};{}",
                        version,
                        versions.tag_for_version(version).unwrap_or_default(),
                        versions.description_for_version(version).unwrap_or_default()
                    )
                })
                .collect();
            document.insert_nonblank("versions_ssm", Value::from(lines));
        }
        Ok(document)
    }
}

fn format_utc(at: DateTime<Utc>) -> String {
    at.format("%FT%TZ").to_string()
}
