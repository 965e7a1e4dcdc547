pub mod review_prompt;
pub mod debug_prompt;
pub mod comprehensive_prompt;
pub mod fallback_responses;
