use std::{collections::HashMap, fs};

use anyhow::{Context, Result};

use crate::{
    application::{
        commands::{ExtractTableDdlCommand, ExtractTableDdlResult, TableExtraction, TableOutcome},
        layout::JobLayout,
    },
    domain::{
        ddl_block::DdlBlockExtractor,
        table_group::{SchemaNames, TableGroup},
    },
    infrastructure::{ddl_archive::DdlArchive, table_list_source::read_table_list},
};

#[derive(Debug, Default)]
pub struct ExtractTableDdlUseCase;

impl ExtractTableDdlUseCase {
    pub fn execute(&self, command: ExtractTableDdlCommand) -> Result<ExtractTableDdlResult> {
        let layout = command.layout;
        let tables = read_table_list(&layout.table_list_path())?;

        let extractor = DdlBlockExtractor::new(SchemaNames::UAT_SUNCBS)?;
        let mut dumps = DumpSources::new(&layout);
        let mut archive = DdlArchive::new();

        let mut extractions = Vec::with_capacity(tables.len());
        for table_name in tables {
            let group = TableGroup::classify(&table_name);
            let outcome = match dumps.content(group)? {
                None => TableOutcome::SourceMissing,
                Some(content) => match extractor.extract(content, &table_name, group)? {
                    Some(ddl) => {
                        archive.add(&table_name, &ddl)?;
                        TableOutcome::Extracted
                    }
                    None => TableOutcome::NotFound,
                },
            };
            extractions.push(TableExtraction {
                table_name,
                source_file: group.dump_file_name(),
                outcome,
            });
        }

        let output_dir = layout.ddl_gen_dir();
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Unable to create directory: {}", output_dir.display()))?;
        let output_path = layout.ddl_archive_path();
        archive.write_to(&output_path)?;

        Ok(ExtractTableDdlResult {
            output_path,
            tables: extractions,
        })
    }
}

/// Each dump is read at most once per run; `None` marks an absent file.
struct DumpSources<'a> {
    layout: &'a JobLayout,
    loaded: HashMap<TableGroup, Option<String>>,
}

impl<'a> DumpSources<'a> {
    fn new(layout: &'a JobLayout) -> Self {
        Self {
            layout,
            loaded: HashMap::new(),
        }
    }

    fn content(&mut self, group: TableGroup) -> Result<Option<&str>> {
        if !self.loaded.contains_key(&group) {
            let path = self.layout.dump_path(group);
            let content = if path.exists() {
                Some(
                    fs::read_to_string(&path)
                        .with_context(|| format!("Unable to read dump file: {}", path.display()))?,
                )
            } else {
                None
            };
            self.loaded.insert(group, content);
        }

        Ok(self.loaded.get(&group).and_then(|content| content.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        io::{Cursor, Read},
        path::Path,
    };

    use zip::ZipArchive;

    use crate::{
        application::{
            commands::{ExtractTableDdlCommand, TableOutcome},
            layout::JobLayout,
        },
        domain::table_group::TableGroup,
    };

    use super::ExtractTableDdlUseCase;

    const ACCT_DUMP: &str = "\
-- ----------------------------
-- Table structure for uat_suncbs_acctdb.kfab_bal
-- ----------------------------
CREATE TABLE kfab_bal (id int8);

-- ----------------------------
-- Table structure for kgl_entry
-- ----------------------------
DROP TABLE IF EXISTS kgl_entry;
CREATE TABLE kgl_entry (id int8);
";

    const CORE_DUMP: &str = "\
-- ----------------------------
-- Table structure for cust_info
-- ----------------------------
CREATE TABLE cust_info (id int8);
";

    fn prepare_layout(root: &Path, table_list: &str, with_core_dump: bool) -> JobLayout {
        let layout = JobLayout::new(root);
        fs::write(layout.table_list_path(), table_list).expect("table list should be written");
        fs::create_dir_all(layout.ddl_gen_dir()).expect("ddl-gen dir should be created");
        fs::write(layout.dump_path(TableGroup::Acct), ACCT_DUMP)
            .expect("acct dump should be written");
        if with_core_dump {
            fs::write(layout.dump_path(TableGroup::Core), CORE_DUMP)
                .expect("core dump should be written");
        }
        layout
    }

    fn read_archive(path: &Path) -> ZipArchive<Cursor<Vec<u8>>> {
        let bytes = fs::read(path).expect("archive should be readable");
        ZipArchive::new(Cursor::new(bytes)).expect("zip archive")
    }

    #[test]
    fn archives_found_tables_and_reports_missing_ones() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let layout = prepare_layout(dir.path(), "kfab_bal\ncust_info\nkfa_unknown\n", true);

        let result = ExtractTableDdlUseCase
            .execute(ExtractTableDdlCommand { layout })
            .expect("extraction should succeed");

        assert_eq!(result.requested_count(), 3);
        assert_eq!(result.extracted_count(), 2);
        assert_eq!(result.missing_tables(), vec!["kfa_unknown"]);
        assert_eq!(result.tables[2].outcome, TableOutcome::NotFound);
        assert_eq!(result.tables[2].source_file, "acct_db.sql");

        let mut archive = read_archive(&result.output_path);
        let mut names = archive.file_names().map(str::to_string).collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec!["cust_info.sql", "kfab_bal.sql"]);

        let mut content = String::new();
        archive
            .by_name("kfab_bal.sql")
            .expect("kfab_bal member")
            .read_to_string(&mut content)
            .expect("member should be readable");
        assert!(content.contains("DROP TABLE IF EXISTS \"uat_suncbs_acctdb\".\"kfab_bal\";"));
        assert!(!content.contains("kgl_entry"));
    }

    #[test]
    fn missing_dump_marks_its_tables_as_missing() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let layout = prepare_layout(dir.path(), "cust_info\nkgl_entry\n", false);

        let result = ExtractTableDdlUseCase
            .execute(ExtractTableDdlCommand { layout })
            .expect("extraction should succeed");

        assert_eq!(result.tables[0].outcome, TableOutcome::SourceMissing);
        assert_eq!(result.missing_tables(), vec!["cust_info"]);
        assert_eq!(read_archive(&result.output_path).len(), 1);
    }

    #[test]
    fn missing_table_list_fails_without_writing_output() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let layout = JobLayout::new(dir.path());

        let error = ExtractTableDdlUseCase
            .execute(ExtractTableDdlCommand {
                layout: layout.clone(),
            })
            .expect_err("missing table list should be fatal");

        assert!(error.to_string().contains("Table list not found"));
        assert!(!layout.ddl_archive_path().exists());
    }

    #[test]
    fn blank_table_list_writes_empty_archive() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let layout = prepare_layout(dir.path(), "\n  \n", true);

        let result = ExtractTableDdlUseCase
            .execute(ExtractTableDdlCommand { layout })
            .expect("extraction should succeed");

        assert_eq!(result.requested_count(), 0);
        assert_eq!(read_archive(&result.output_path).len(), 0);
    }

    #[test]
    fn rerun_produces_identical_archive() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let layout = prepare_layout(dir.path(), "kgl_entry\ncust_info\n", true);

        let first = ExtractTableDdlUseCase
            .execute(ExtractTableDdlCommand {
                layout: layout.clone(),
            })
            .expect("first run should succeed");
        let first_bytes = fs::read(&first.output_path).expect("archive should be readable");

        let second = ExtractTableDdlUseCase
            .execute(ExtractTableDdlCommand { layout })
            .expect("second run should succeed");
        let second_bytes = fs::read(&second.output_path).expect("archive should be readable");

        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn duplicate_requests_are_each_reported() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let layout = prepare_layout(dir.path(), "kgl_entry\nkgl_entry\nnope\nnope\n", true);

        let result = ExtractTableDdlUseCase
            .execute(ExtractTableDdlCommand { layout })
            .expect("extraction should succeed");

        assert_eq!(result.extracted_count(), 2);
        assert_eq!(result.missing_tables(), vec!["nope", "nope"]);
        assert_eq!(read_archive(&result.output_path).len(), 1);
    }
}
