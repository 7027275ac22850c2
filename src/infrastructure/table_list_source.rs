use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::domain::table_list::parse_table_list;

pub fn read_table_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        bail!("Table list not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read table list: {}", path.display()))?;
    Ok(parse_table_list(&content))
}
