pub mod ai;
pub mod api;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod review;
pub mod session_user;
pub mod star_rating;
pub mod user;
pub mod validation_result;
