use crate::config::constants::{EMAIL_TAKEN_MESSAGE, USERNAME_TAKEN_MESSAGE};
use crate::errors::{ReviewerError, ReviewerResult};
use crate::helpers::password::{hash_password, verify_password};
use crate::helpers::session_token::SessionSigner;
use crate::services::database::Database;
use crate::services::user_repository::UserRepository;
use crate::structs::api::auth_request::{LoginRequest, RegisterRequest};
use crate::structs::session_user::SessionUser;
use crate::structs::user::{NewUser, User};

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";
const FIELDS_REQUIRED: &str = "All fields are required";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Account registration, credential checks and session cookies.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    signer: SessionSigner,
}

impl AuthService {
    pub fn new(db: Database, signer: SessionSigner) -> Self {
        Self {
            users: UserRepository::new(db),
            signer,
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> ReviewerResult<i64> {
        let username = request.username.trim();
        let email = request.email.trim();

        if username.is_empty() || email.is_empty() || request.password.is_empty() {
            return Err(ReviewerError::validation_error("registration", "", FIELDS_REQUIRED, None));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(ReviewerError::validation_error("username", username, USERNAME_TAKEN_MESSAGE, None));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(ReviewerError::validation_error("email", email, EMAIL_TAKEN_MESSAGE, None));
        }

        let password = request.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ReviewerError::system_error("password hashing", &e.to_string()))??;

        // the UNIQUE constraints still decide when two registrations race
        let id = self.users.create(&NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        }).await?;

        log::info!("👤 Registered user '{}' ({})", username, id);
        Ok(id)
    }

    pub async fn login(&self, request: &LoginRequest) -> ReviewerResult<User> {
        let user = self.users.find_by_username(request.username.trim()).await?
            .ok_or_else(|| ReviewerError::auth_error(INVALID_CREDENTIALS))?;

        let password = request.password.clone();
        let stored = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
            .await
            .map_err(|e| ReviewerError::system_error("password check", &e.to_string()))?;

        if !verified {
            log::warn!("🔒 Failed login for '{}'", user.username);
            return Err(ReviewerError::auth_error(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    pub fn issue_token(&self, user: &User) -> ReviewerResult<String> {
        self.signer.sign(user.id)
    }

    /// Resolves a session cookie value to its (still existing) user.
    pub async fn authenticate(&self, token: &str) -> Option<SessionUser> {
        let user_id = self.signer.verify(token)?;
        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => Some(SessionUser { id: user.id, username: user.username }),
            Ok(None) => None,
            Err(e) => {
                log::error!("❌ Session lookup failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service() -> AuthService {
        let db = Database::in_memory().await.unwrap();
        AuthService::new(db, SessionSigner::new("test-secret", 1))
    }

    fn registration(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_username_and_email_are_rejected() {
        let auth = service().await;
        auth.register(&registration("alice", "a@example.com")).await.unwrap();

        let err = auth.register(&registration("alice", "other@example.com")).await.unwrap_err();
        assert_eq!(err.public_message(), "Username already exists");

        let err = auth.register(&registration("alicia", "a@example.com")).await.unwrap_err();
        assert_eq!(err.public_message(), "Email already registered");
    }

    #[tokio::test]
    async fn racing_registrations_yield_one_account() {
        let auth = service().await;
        let first = registration("frank", "f1@example.com");
        let second = registration("frank", "f2@example.com");

        let (a, b) = tokio::join!(auth.register(&first), auth.register(&second));
        let (ok, err): (Vec<_>, Vec<_>) = [a, b].into_iter().partition(Result::is_ok);
        assert_eq!(ok.len(), 1);
        assert_eq!(err[0].as_ref().unwrap_err().public_message(), "Username already exists");
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let auth = service().await;
        let err = auth.register(&registration("", "a@example.com")).await.unwrap_err();
        assert_eq!(err.public_message(), "All fields are required");
    }

    #[tokio::test]
    async fn login_checks_password() {
        let auth = service().await;
        auth.register(&registration("bob", "b@example.com")).await.unwrap();

        let user = auth.login(&LoginRequest {
            username: "bob".to_string(),
            password: "hunter22".to_string(),
        }).await.unwrap();
        assert_eq!(user.username, "bob");

        let err = auth.login(&LoginRequest {
            username: "bob".to_string(),
            password: "wrong".to_string(),
        }).await.unwrap_err();
        assert_eq!(err.public_message(), "Invalid credentials");

        let err = auth.login(&LoginRequest {
            username: "nobody".to_string(),
            password: "hunter22".to_string(),
        }).await.unwrap_err();
        assert_eq!(err.public_message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let auth = service().await;
        let id = auth.register(&registration("carol", "c@example.com")).await.unwrap();
        let user = auth.login(&LoginRequest {
            username: "carol".to_string(),
            password: "hunter22".to_string(),
        }).await.unwrap();

        let token = auth.issue_token(&user).unwrap();
        let session = auth.authenticate(&token).await.unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.username, "carol");
        assert!(auth.authenticate("garbage").await.is_none());
    }
}
