pub mod config_helper;
pub mod password;
pub mod prompt_generator;
pub mod session_token;
