use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

impl AuthResponse {
    pub fn ok(message: &str) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failed(message: &str) -> Self {
        Self { success: false, message: message.to_string() }
    }
}
