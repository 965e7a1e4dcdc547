pub mod config;
pub mod server_config;
pub mod database_config;
pub mod ai_config;
