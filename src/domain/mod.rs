pub mod ddl_block;
pub mod export_definition;
pub mod table_group;
pub mod table_list;
