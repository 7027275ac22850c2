use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::application::layout::JobLayout;

const DEFAULT_ROOT: &str = ".";

#[derive(Debug, Parser)]
#[command(
    name = "sql-migration-prep",
    version,
    about = "Prepare table DDL archives and data export definitions for a migration"
)]
struct CliArgs {
    #[command(subcommand)]
    job: CliJob,
}

#[derive(Debug, Subcommand)]
enum CliJob {
    /// Extract per-table DDL from ddl-gen/{core_db,acct_db}.sql into ddl-gen/table_ddls.zip
    ExtractDdl {
        #[arg(long, short = 'r', default_value = DEFAULT_ROOT, help = "Directory holding table-list.txt")]
        root: PathBuf,
    },
    /// Generate task-defn/{acct,core}.sql export definition statements
    GenerateSql {
        #[arg(long, short = 'r', default_value = DEFAULT_ROOT, help = "Directory holding table-list.txt")]
        root: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobRequest {
    ExtractDdl(JobLayout),
    GenerateSql(JobLayout),
}

impl From<CliJob> for JobRequest {
    fn from(value: CliJob) -> Self {
        match value {
            CliJob::ExtractDdl { root } => JobRequest::ExtractDdl(JobLayout::new(root)),
            CliJob::GenerateSql { root } => JobRequest::GenerateSql(JobLayout::new(root)),
        }
    }
}

pub fn collect_job_request() -> Result<JobRequest> {
    if env::args_os().len() == 1 {
        return collect_interactive_request();
    }
    Ok(CliArgs::parse().job.into())
}

fn collect_interactive_request() -> Result<JobRequest> {
    let theme = ColorfulTheme::default();

    println!();
    println!(
        "{}",
        style(" SQL MIGRATION PREP ")
            .black()
            .on_cyan()
            .bold()
            .underlined()
    );
    println!("{}", style("Table DDL archives and export definitions").dim());
    println!();

    let job_options = [
        "Extract table DDLs into ddl-gen/table_ddls.zip",
        "Generate export definition SQL into task-defn/",
    ];
    let job_index = Select::with_theme(&theme)
        .with_prompt("Job")
        .default(0)
        .items(&job_options)
        .interact()?;

    let root: String = Input::with_theme(&theme)
        .with_prompt("Root directory (holds table-list.txt)")
        .default(DEFAULT_ROOT.to_string())
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("Root directory must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    let layout = JobLayout::new(root.trim());

    match job_index {
        0 => Ok(JobRequest::ExtractDdl(layout)),
        1 => Ok(JobRequest::GenerateSql(layout)),
        other => Err(anyhow!("Unknown job selection: {other}")),
    }
}
