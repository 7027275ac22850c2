use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::table_group::{SchemaNames, TableGroup};

const DASH_RUN: &str = "----------------------------";
const STRUCTURE_MARKER: &str = "-- Table structure for";

/// Slices one table's DDL out of a dump that follows the
/// `-- Table structure for <table>` comment-header convention.
#[derive(Debug, Clone)]
pub struct DdlBlockExtractor {
    schemas: SchemaNames,
    next_header: Regex,
}

impl DdlBlockExtractor {
    pub fn new(schemas: SchemaNames) -> Result<Self> {
        let next_header = Regex::new(&format!(
            r"(?m)^(?i:-- {}\s*\n{})",
            regex::escape(DASH_RUN),
            regex::escape(STRUCTURE_MARKER)
        ))
        .context("Unable to build table header pattern")?;

        Ok(Self {
            schemas,
            next_header,
        })
    }

    /// Returns the trimmed DDL block of `table_name`, or `None` when the dump
    /// has no header for it. A `DROP TABLE` is inserted after the header when
    /// the block does not already carry one.
    pub fn extract(
        &self,
        content: &str,
        table_name: &str,
        group: TableGroup,
    ) -> Result<Option<String>> {
        let header = self.header_pattern(table_name)?;
        let Some(header_match) = header.find(content) else {
            return Ok(None);
        };

        let block_end = self
            .next_header
            .find(&content[header_match.end()..])
            .map_or(content.len(), |next| header_match.end() + next.start());

        let mut ddl = content[header_match.start()..block_end].trim().to_string();
        if !contains_drop_for(&ddl, table_name)? {
            let drop_statement = format!(
                "DROP TABLE IF EXISTS \"{}\".\"{table_name}\";\n\n",
                self.schemas.for_group(group)
            );
            insert_after_header(&mut ddl, &drop_statement);
        }

        Ok(Some(ddl))
    }

    fn header_pattern(&self, table_name: &str) -> Result<Regex> {
        let dash_line = format!("-- {}", regex::escape(DASH_RUN));
        let schema_prefix = self
            .schemas
            .all()
            .map(regex::escape)
            .join("|");

        Regex::new(&format!(
            r"(?m)^(?i:{dash_line}\s*\n{marker} (?:(?:{schema_prefix})\.)?){table}\s*\n(?i:{dash_line})",
            marker = regex::escape(STRUCTURE_MARKER),
            table = regex::escape(table_name),
        ))
        .with_context(|| format!("Unable to build header pattern for table {table_name}"))
    }
}

fn contains_drop_for(ddl: &str, table_name: &str) -> Result<bool> {
    let drop_pattern = Regex::new(&format!(r"(?i)DROP TABLE.*{}", regex::escape(table_name)))
        .with_context(|| format!("Unable to build DROP pattern for table {table_name}"))?;
    Ok(drop_pattern.is_match(ddl))
}

/// The header ends with the newline following its second dash run.
fn insert_after_header(ddl: &mut String, statement: &str) {
    let Some(first_dash_run) = ddl.find(DASH_RUN) else {
        return;
    };
    let Some(second_dash_run) = ddl[first_dash_run + 1..]
        .find(DASH_RUN)
        .map(|offset| first_dash_run + 1 + offset)
    else {
        return;
    };

    match ddl[second_dash_run..].find('\n') {
        Some(offset) => ddl.insert_str(second_dash_run + offset + 1, statement),
        None => {
            ddl.push('\n');
            ddl.push_str(statement);
        }
    }
}
