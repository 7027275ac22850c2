use std::fs;

use anyhow::{Context, Result};

use crate::{
    application::commands::{GenerateExportSqlCommand, GenerateExportSqlResult, ScriptSummary},
    domain::{
        export_definition::{ExportDefinition, ExportScript},
        table_group::{SchemaNames, TableGroup},
    },
    infrastructure::table_list_source::read_table_list,
};

#[derive(Debug, Default)]
pub struct GenerateExportSqlUseCase;

impl GenerateExportSqlUseCase {
    pub fn execute(&self, command: GenerateExportSqlCommand) -> Result<GenerateExportSqlResult> {
        let layout = command.layout;
        let tables = read_table_list(&layout.table_list_path())?;

        let scripts = build_export_scripts(&tables, SchemaNames::SIT_SUNCBS);

        let output_dir = layout.task_defn_dir();
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Unable to create directory: {}", output_dir.display()))?;

        let mut summaries = Vec::with_capacity(scripts.len());
        for script in scripts {
            let output_path = layout.export_script_path(script.group());
            fs::write(&output_path, script.render())
                .with_context(|| format!("Unable to write file: {}", output_path.display()))?;
            summaries.push(ScriptSummary {
                group: script.group(),
                schema_name: script.schema_name(),
                table_count: script.table_count(),
                output_path,
            });
        }

        Ok(GenerateExportSqlResult {
            table_count: tables.len(),
            output_dir,
            scripts: summaries,
        })
    }
}

/// One script per group in `TableGroup::ALL` order; tables keep list order.
pub fn build_export_scripts(tables: &[String], schemas: SchemaNames) -> Vec<ExportScript> {
    let mut scripts = Vec::from(
        TableGroup::ALL.map(|group| ExportScript::new(group, schemas.for_group(group))),
    );

    for table_name in tables {
        let definition = ExportDefinition::new(table_name.as_str());
        if let Some(script) = scripts
            .iter_mut()
            .find(|script| script.group() == definition.group())
        {
            script.push(&definition);
        }
    }

    scripts
}
