pub mod add;
pub mod config;
pub mod export;
pub mod form;
pub mod list;
pub mod prompts;
