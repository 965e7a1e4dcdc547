pub mod commands;
pub mod ai_provider_error;
pub mod analysis_kind;
pub mod render_mode;
pub mod parsed_analysis;
pub mod request_outcome;
pub mod star_unit;
pub mod auth_form;
