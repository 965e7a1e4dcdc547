pub mod ai_provider;
pub mod review_transport;
