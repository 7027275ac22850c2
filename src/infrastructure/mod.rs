pub mod ddl_archive;
pub mod table_list_source;
