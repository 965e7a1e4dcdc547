pub mod ai_providers;
pub mod auth_service;
pub mod code_analyzer;
pub mod database;
pub mod result_parser;
pub mod result_renderer;
pub mod review_client;
pub mod review_repository;
pub mod star_renderer;
pub mod user_repository;
