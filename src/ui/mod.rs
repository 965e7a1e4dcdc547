pub mod app_state;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod templates;
pub mod web_server;
