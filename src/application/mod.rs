pub mod commands;
pub mod layout;
pub mod use_cases;
