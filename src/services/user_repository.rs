use chrono::Utc;
use crate::config::constants::{EMAIL_TAKEN_MESSAGE, USERNAME_TAKEN_MESSAGE};
use crate::errors::{ReviewerError, ReviewerResult};
use crate::services::database::Database;
use crate::structs::user::{NewUser, User};

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, user: &NewUser) -> ReviewerResult<i64> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .execute(self.db.pool())
        .await
        .map_err(|e| Self::map_conflict(e, user))?;

        Ok(result.last_insert_rowid())
    }

    /// A concurrent insert can still trip the UNIQUE constraints after the
    /// caller's lookups passed; report it like the lookups would have.
    fn map_conflict(error: sqlx::Error, user: &NewUser) -> ReviewerError {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                if db.message().contains("users.email") {
                    ReviewerError::validation_error("email", &user.email, EMAIL_TAKEN_MESSAGE, None)
                } else {
                    ReviewerError::validation_error("username", &user.username, USERNAME_TAKEN_MESSAGE, None)
                }
            }
            _ => error.into(),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> ReviewerResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> ReviewerResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS))
            .bind(username)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> ReviewerResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS))
            .bind(email)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$pbkdf2-sha256$i=1,l=32$c2FsdA$aGFzaA".to_string(),
        }
    }

    async fn repository() -> UserRepository {
        UserRepository::new(Database::in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn created_user_is_found_by_every_key() {
        let users = repository().await;
        let id = users.create(&new_user("dana", "d@example.com")).await.unwrap();

        assert_eq!(users.find_by_id(id).await.unwrap().unwrap().username, "dana");
        assert_eq!(users.find_by_username("dana").await.unwrap().unwrap().id, id);
        assert_eq!(users.find_by_email("d@example.com").await.unwrap().unwrap().id, id);
        assert!(users.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_reports_the_taken_field() {
        let users = repository().await;
        users.create(&new_user("erin", "e@example.com")).await.unwrap();

        let err = users.create(&new_user("erin", "other@example.com")).await.unwrap_err();
        assert!(matches!(err, ReviewerError::ValidationError { .. }));
        assert_eq!(err.public_message(), USERNAME_TAKEN_MESSAGE);

        let err = users.create(&new_user("erin2", "e@example.com")).await.unwrap_err();
        assert_eq!(err.public_message(), EMAIL_TAKEN_MESSAGE);
    }
}
