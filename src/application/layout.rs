use std::path::PathBuf;

use crate::domain::table_group::TableGroup;

pub const TABLE_LIST_FILE: &str = "table-list.txt";
const DDL_GEN_DIR: &str = "ddl-gen";
const TASK_DEFN_DIR: &str = "task-defn";
const DDL_ARCHIVE_FILE: &str = "table_ddls.zip";

/// Fixed file layout under one root directory:
///
/// ```text
/// table-list.txt
/// ddl-gen/{core_db.sql, acct_db.sql, table_ddls.zip}
/// task-defn/{acct.sql, core.sql}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLayout {
    root: PathBuf,
}

impl JobLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn table_list_path(&self) -> PathBuf {
        self.root.join(TABLE_LIST_FILE)
    }

    pub fn ddl_gen_dir(&self) -> PathBuf {
        self.root.join(DDL_GEN_DIR)
    }

    pub fn dump_path(&self, group: TableGroup) -> PathBuf {
        self.ddl_gen_dir().join(group.dump_file_name())
    }

    pub fn ddl_archive_path(&self) -> PathBuf {
        self.ddl_gen_dir().join(DDL_ARCHIVE_FILE)
    }

    pub fn task_defn_dir(&self) -> PathBuf {
        self.root.join(TASK_DEFN_DIR)
    }

    pub fn export_script_path(&self, group: TableGroup) -> PathBuf {
        self.task_defn_dir().join(group.script_file_name())
    }
}

impl Default for JobLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
