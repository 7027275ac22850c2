use std::{
    collections::HashSet,
    fs,
    io::{Cursor, Write},
    path::Path,
};

use anyhow::{Context, Result};
use zip::{CompressionMethod, DateTime, ZipWriter, write::FileOptions};

/// In-memory ZIP of `<table>.sql` members.
pub struct DdlArchive {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
    member_names: HashSet<String>,
}

impl DdlArchive {
    pub fn new() -> Self {
        // Fixed timestamp keeps reruns byte-identical.
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options,
            member_names: HashSet::new(),
        }
    }

    /// Adds the DDL of `table_name`. Returns `false` when the table is
    /// already archived; member names stay unique.
    pub fn add(&mut self, table_name: &str, ddl: &str) -> Result<bool> {
        let member_name = format!("{table_name}.sql");
        if !self.member_names.insert(member_name.clone()) {
            return Ok(false);
        }

        self.writer
            .start_file(member_name.as_str(), self.options)
            .with_context(|| format!("Unable to start archive member {member_name}"))?;
        self.writer
            .write_all(ddl.as_bytes())
            .with_context(|| format!("Unable to write archive member {member_name}"))?;
        Ok(true)
    }

    pub fn finish(mut self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish().context("Unable to finish archive")?;
        Ok(cursor.into_inner())
    }

    pub fn write_to(self, path: &Path) -> Result<()> {
        let bytes = self.finish()?;
        fs::write(path, bytes)
            .with_context(|| format!("Unable to write archive: {}", path.display()))
    }
}

impl Default for DdlArchive {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use zip::{CompressionMethod, ZipArchive};

    use super::DdlArchive;

    fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut archive = DdlArchive::new();
        for (table_name, ddl) in entries {
            archive
                .add(table_name, ddl)
                .expect("archive member should be added");
        }
        archive.finish().expect("archive should be finished")
    }

    #[test]
    fn writes_one_deflated_member_per_table() {
        let bytes = build_archive(&[
            ("kfab_bal", "CREATE TABLE kfab_bal (id int8);"),
            ("cust_info", "CREATE TABLE cust_info (id int8);"),
        ]);

        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip archive");
        assert_eq!(archive.len(), 2);

        let mut member = archive.by_name("cust_info.sql").expect("cust_info member");
        assert_eq!(member.compression(), CompressionMethod::Deflated);
        let mut content = String::new();
        member
            .read_to_string(&mut content)
            .expect("member should be readable");
        assert_eq!(content, "CREATE TABLE cust_info (id int8);");
    }

    #[test]
    fn duplicate_table_is_archived_once() {
        let mut archive = DdlArchive::new();
        assert!(archive.add("cust_info", "ddl").expect("first add"));
        assert!(!archive.add("cust_info", "ddl").expect("second add"));

        let bytes = archive.finish().expect("archive should be finished");
        let archive = ZipArchive::new(Cursor::new(bytes)).expect("zip archive");
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn same_entries_produce_identical_bytes() {
        let entries = [("kgl_entry", "CREATE TABLE kgl_entry (id int8);")];

        assert_eq!(build_archive(&entries), build_archive(&entries));
    }

    #[test]
    fn empty_archive_is_still_valid() {
        let bytes = build_archive(&[]);

        let archive = ZipArchive::new(Cursor::new(bytes)).expect("zip archive");
        assert_eq!(archive.len(), 0);
    }
}
