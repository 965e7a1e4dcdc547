use chrono::Utc;
use crate::errors::ReviewerResult;
use crate::services::database::Database;
use crate::structs::review::{NewReview, Review, ReviewSummary};

const REVIEW_COLUMNS: &str = "id, user_id, title, code, language, error_message, review_result, created_at";

/// Review rows, always scoped to their owner.
#[derive(Clone)]
pub struct ReviewRepository {
    db: Database,
}

impl ReviewRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn insert(&self, review: &NewReview) -> ReviewerResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO code_reviews (user_id, title, code, language, error_message, review_result, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.user_id)
        .bind(&review.title)
        .bind(&review.code)
        .bind(&review.language)
        .bind(&review.error_message)
        .bind(&review.review_result)
        .bind(Utc::now())
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Newest first; `limit` of `None` returns everything.
    pub async fn list_for_user(&self, user_id: i64, limit: Option<i64>) -> ReviewerResult<Vec<ReviewSummary>> {
        let reviews = sqlx::query_as::<_, ReviewSummary>(
            r#"
            SELECT id, title, language, created_at
            FROM code_reviews
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(limit.unwrap_or(-1))
        .fetch_all(self.db.pool())
        .await?;

        Ok(reviews)
    }

    pub async fn find_for_user(&self, id: i64, user_id: i64) -> ReviewerResult<Option<Review>> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "SELECT {} FROM code_reviews WHERE id = ? AND user_id = ?",
            REVIEW_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(review)
    }

    /// Returns whether a row owned by `user_id` was removed.
    pub async fn delete_for_user(&self, id: i64, user_id: i64) -> ReviewerResult<bool> {
        let result = sqlx::query("DELETE FROM code_reviews WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::user_repository::UserRepository;
    use crate::structs::user::NewUser;

    async fn setup() -> (ReviewRepository, i64, i64) {
        let db = Database::in_memory().await.unwrap();
        let users = UserRepository::new(db.clone());
        let alice = users.create(&NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "x".to_string(),
        }).await.unwrap();
        let bob = users.create(&NewUser {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "x".to_string(),
        }).await.unwrap();
        (ReviewRepository::new(db), alice, bob)
    }

    fn review(user_id: i64, title: &str) -> NewReview {
        NewReview {
            user_id,
            title: title.to_string(),
            code: "print(1)".to_string(),
            language: "python".to_string(),
            error_message: None,
            review_result: "{\"summary\":\"ok\"}".to_string(),
        }
    }

    #[tokio::test]
    async fn stored_text_comes_back_verbatim() {
        let (repo, alice, _) = setup().await;
        let id = repo.insert(&review(alice, "first")).await.unwrap();

        let stored = repo.find_for_user(id, alice).await.unwrap().unwrap();
        assert_eq!(stored.title, "first");
        assert_eq!(stored.review_result.as_deref(), Some("{\"summary\":\"ok\"}"));
    }

    #[tokio::test]
    async fn other_users_cannot_see_or_delete() {
        let (repo, alice, bob) = setup().await;
        let id = repo.insert(&review(alice, "private")).await.unwrap();

        assert!(repo.find_for_user(id, bob).await.unwrap().is_none());
        assert!(!repo.delete_for_user(id, bob).await.unwrap());
        assert!(repo.delete_for_user(id, alice).await.unwrap());
        assert!(repo.find_for_user(id, alice).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_is_newest_first_and_limited() {
        let (repo, alice, bob) = setup().await;
        for i in 0..7 {
            repo.insert(&review(alice, &format!("review {}", i))).await.unwrap();
        }
        repo.insert(&review(bob, "bob's")).await.unwrap();

        let recent = repo.list_for_user(alice, Some(5)).await.unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].title, "review 6");

        let all = repo.list_for_user(alice, None).await.unwrap();
        assert_eq!(all.len(), 7);
        assert!(all.iter().all(|r| r.title != "bob's"));
    }
}
