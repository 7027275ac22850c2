use console::style;

use crate::application::commands::{
    ExtractTableDdlResult, GenerateExportSqlResult, TableOutcome,
};

const RULE_WIDTH: usize = 60;

pub fn print_extraction_report(result: &ExtractTableDdlResult) {
    for table in &result.tables {
        match table.outcome {
            TableOutcome::SourceMissing => println!(
                "{} {}",
                style("⚠  Source file not found:").yellow(),
                table.source_file
            ),
            TableOutcome::Extracted => {
                println!("Processing {} from {}...", table.table_name, table.source_file);
                println!("  {} {}", style("✓ Extracted").green(), table.table_name);
            }
            TableOutcome::NotFound => {
                println!("Processing {} from {}...", table.table_name, table.source_file);
                println!(
                    "  {} {} not found in {}",
                    style("✗ Table").red(),
                    table.table_name,
                    table.source_file
                );
            }
        }
    }

    let rule = "=".repeat(RULE_WIDTH);
    let missing_tables = result.missing_tables();

    println!();
    println!("{rule}");
    println!("{}", style("Extraction Summary:").cyan().bold());
    println!("  Total tables requested: {}", result.requested_count());
    println!("  Successfully extracted: {}", result.extracted_count());
    println!("  Missing or not found: {}", missing_tables.len());

    if !missing_tables.is_empty() {
        println!();
        println!("{}", style("Missing tables:").yellow());
        for table_name in missing_tables {
            println!("  - {table_name}");
        }
    }

    println!();
    println!(
        "{} {}",
        style("✓ Created:").green(),
        style(result.output_path.display()).bold()
    );
    println!("{rule}");
}

pub fn print_generation_report(result: &GenerateExportSqlResult) {
    println!("Generated SQL statements for {} tables", result.table_count);
    for script in &result.scripts {
        println!(
            "  - {} DB ({}): {} tables",
            script.group.label(),
            script.schema_name,
            script.table_count
        );
        println!("    Output: {}", style(script.output_path.display()).bold());
    }

    println!();
    println!(
        "{} {}",
        style("You can now review the generated SQL files in:").green(),
        style(result.output_dir.display()).bold()
    );
}
