mod application;
mod domain;
mod infrastructure;
mod interfaces;

use anyhow::Result;
use console::style;

use crate::application::{
    commands::{ExtractTableDdlCommand, GenerateExportSqlCommand},
    layout::TABLE_LIST_FILE,
    use_cases::{
        extract_table_ddl::ExtractTableDdlUseCase, generate_export_sql::GenerateExportSqlUseCase,
    },
};
use crate::interfaces::{
    cli::{JobRequest, collect_job_request},
    report::{print_extraction_report, print_generation_report},
};

fn main() -> Result<()> {
    match collect_job_request()? {
        JobRequest::ExtractDdl(layout) => {
            println!(
                "{} {}",
                style("Reading table list from").cyan(),
                style(layout.table_list_path().display()).bold()
            );
            let result = ExtractTableDdlUseCase.execute(ExtractTableDdlCommand { layout })?;
            println!(
                "Found {} tables to extract in {TABLE_LIST_FILE}\n",
                result.requested_count()
            );
            print_extraction_report(&result);
        }
        JobRequest::GenerateSql(layout) => {
            println!("{}", style("Generating export definition SQL...").cyan());
            let result = GenerateExportSqlUseCase.execute(GenerateExportSqlCommand { layout })?;
            print_generation_report(&result);
        }
    }
    Ok(())
}
