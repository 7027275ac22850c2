use std::path::PathBuf;

use crate::{application::layout::JobLayout, domain::table_group::TableGroup};

#[derive(Debug)]
pub struct ExtractTableDdlCommand {
    pub layout: JobLayout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    Extracted,
    /// The dump has no header for the table.
    NotFound,
    /// The dump file itself is absent.
    SourceMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExtraction {
    pub table_name: String,
    pub source_file: &'static str,
    pub outcome: TableOutcome,
}

#[derive(Debug)]
pub struct ExtractTableDdlResult {
    pub output_path: PathBuf,
    pub tables: Vec<TableExtraction>,
}

impl ExtractTableDdlResult {
    pub fn requested_count(&self) -> usize {
        self.tables.len()
    }

    pub fn extracted_count(&self) -> usize {
        self.tables
            .iter()
            .filter(|table| table.outcome == TableOutcome::Extracted)
            .count()
    }

    pub fn missing_tables(&self) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|table| table.outcome != TableOutcome::Extracted)
            .map(|table| table.table_name.as_str())
            .collect()
    }
}

#[derive(Debug)]
pub struct GenerateExportSqlCommand {
    pub layout: JobLayout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSummary {
    pub group: TableGroup,
    pub schema_name: &'static str,
    pub table_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct GenerateExportSqlResult {
    pub table_count: usize,
    pub output_dir: PathBuf,
    pub scripts: Vec<ScriptSummary>,
}
