//! AI-assisted code review service: a warp web app backed by SQLite that
//! forwards submitted code to Gemini, stores the answers per user and
//! renders them, plus a terminal client for the same API.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
