use crate::domain::table_group::TableGroup;

const DEFINITION_TABLE: &str = "kapp_data_expr_defn";
const LEGAL_PERSON_CODE: &str = "6666";
const FILE_TYPE: &str = "parquet";
const DEFINITION_COLUMNS: &str = "lgl_pern_code,data_expr_id,data_expr_grp_code,data_expr_tab_nm,\
expr_sql_sentc,wthr_rgst_tmstp,wthr_concurrent_exec,concurrent_num,\
fld_seprtr,file_tp,file_gen_way,file_nm,file_comps_way,file_comps_type,\
wthr_gen_succ_file,wthr_file_upld,file_local_path,file_remote_path,\
wthr_vld,comt_info,sharding_hash_key";
// Resolved by the downstream export job; emitted verbatim.
const LEGAL_PERSON_PLACEHOLDER: &str = "''${lgl_pern_code}''";

/// A data export definition row for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDefinition {
    table_name: String,
    group: TableGroup,
}

impl ExportDefinition {
    pub fn new(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        let group = TableGroup::classify(&table_name);
        Self { table_name, group }
    }

    pub fn group(&self) -> TableGroup {
        self.group
    }

    pub fn delete_statement(&self) -> String {
        format!(
            "delete from {DEFINITION_TABLE} where lgl_pern_code = '{LEGAL_PERSON_CODE}' \
             and data_expr_id = '{table}' and data_expr_grp_code = '{group}' \
             and file_tp = '{FILE_TYPE}';",
            table = self.table_name,
            group = self.group.code(),
        )
    }

    pub fn select_clause(&self) -> String {
        format!(
            "select a.* from {table} a where a.lgl_pern_code = {LEGAL_PERSON_PLACEHOLDER} ",
            table = self.table_name
        )
    }

    pub fn insert_statement(&self) -> String {
        let table = &self.table_name;
        format!(
            "INSERT INTO {DEFINITION_TABLE} ({DEFINITION_COLUMNS}) VALUES\n\
             \t ('{LEGAL_PERSON_CODE}','{table}','{group}','{table}','{select}',\
             '0','0',5,'@|@','{FILE_TYPE}','0','{table}','0',NULL,'1','1',\
             '{table}','{table}','1',NULL,NULL);",
            group = self.group.code(),
            select = self.select_clause(),
        )
    }
}

/// Statements of one group, rendered as a single `.sql` file.
#[derive(Debug, Clone)]
pub struct ExportScript {
    group: TableGroup,
    schema_name: &'static str,
    lines: Vec<String>,
    table_count: usize,
}

impl ExportScript {
    pub fn new(group: TableGroup, schema_name: &'static str) -> Self {
        Self {
            group,
            schema_name,
            lines: Vec::new(),
            table_count: 0,
        }
    }

    pub fn group(&self) -> TableGroup {
        self.group
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn table_count(&self) -> usize {
        self.table_count
    }

    pub fn push(&mut self, definition: &ExportDefinition) {
        self.lines.push(definition.delete_statement());
        self.lines.push(definition.insert_statement());
        self.lines.push(String::new());
        self.table_count += 1;
    }

    pub fn render(&self) -> String {
        let label = self.group.label();
        let mut rendered = format!(
            "-- Generated SQL statements for {label} DB data export definitions\n\
             -- Based on table-list.txt\n\
             -- {label} DB ({}): {} tables\n\n",
            self.schema_name, self.table_count
        );
        rendered.push_str(&self.lines.join("\n"));
        rendered
    }
}
