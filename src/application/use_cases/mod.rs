pub mod extract_table_ddl;
pub mod generate_export_sql;
