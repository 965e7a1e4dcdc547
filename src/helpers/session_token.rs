use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use crate::errors::{ReviewerError, ReviewerResult};

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies `<user_id>.<issued_at>.<signature>` session tokens.
#[derive(Clone)]
pub struct SessionSigner {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl SessionSigner {
    pub fn new(secret: &str, ttl_hours: u64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            ttl_secs: i64::try_from(ttl_hours.saturating_mul(3600)).unwrap_or(i64::MAX),
        }
    }

    /// A signer with a random per-process secret.
    pub fn ephemeral(ttl_hours: u64) -> Self {
        let secret = format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple());
        Self::new(&secret, ttl_hours)
    }

    pub fn sign(&self, user_id: i64) -> ReviewerResult<String> {
        self.sign_at(user_id, Utc::now().timestamp())
    }

    fn sign_at(&self, user_id: i64, issued_at: i64) -> ReviewerResult<String> {
        let payload = format!("{}.{}", user_id, issued_at);
        let mac = self.mac(&payload)
            .ok_or_else(|| ReviewerError::system_error("session signing", "invalid session key"))?;
        Ok(format!("{}.{}", payload, hex::encode(mac.finalize().into_bytes())))
    }

    /// User id of a valid, unexpired token.
    pub fn verify(&self, token: &str) -> Option<i64> {
        let (payload, signature) = token.rsplit_once('.')?;
        let (user_id, issued_at) = payload.split_once('.')?;
        let user_id = user_id.parse::<i64>().ok()?;
        let issued_at = issued_at.parse::<i64>().ok()?;
        let signature = hex::decode(signature).ok()?;

        self.mac(payload)?.verify_slice(&signature).ok()?;

        let age = Utc::now().timestamp() - issued_at;
        if age < 0 || age > self.ttl_secs {
            return None;
        }
        Some(user_id)
    }

    fn mac(&self, payload: &str) -> Option<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(payload.as_bytes());
        Some(mac)
    }
}
