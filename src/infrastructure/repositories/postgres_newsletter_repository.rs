use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::newsletter::Subscriber;
use crate::domain::repositories::newsletter_repository::{NewsletterRepository, SubscribeOutcome};
use crate::domain::value_objects::Email;

/// Column list for `newsletter_subscribers` queries
const COLUMNS: &str = "id, email, is_active, subscribed_at, unsubscribed_at";

/// PostgreSQL implementation of NewsletterRepository
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    /// Creates a new PostgresNewsletterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn subscribe(&self, email: &Email) -> Result<(Subscriber, SubscribeOutcome), String> {
        let existing = sqlx::query_as::<_, Subscriber>(&format!(
            "SELECT {COLUMNS} FROM newsletter_subscribers WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to look up subscriber: {}", e))?;

        match existing {
            Some(subscriber) if subscriber.is_active => {
                Ok((subscriber, SubscribeOutcome::AlreadySubscribed))
            }
            Some(_) => {
                let reactivated = sqlx::query_as::<_, Subscriber>(&format!(
                    "UPDATE newsletter_subscribers \
                     SET is_active = true, unsubscribed_at = NULL \
                     WHERE email = $1 \
                     RETURNING {COLUMNS}"
                ))
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| format!("Failed to re-activate subscriber: {}", e))?;

                Ok((reactivated, SubscribeOutcome::Reactivated))
            }
            None => {
                let created = sqlx::query_as::<_, Subscriber>(&format!(
                    "INSERT INTO newsletter_subscribers (id, email) \
                     VALUES ($1, $2) \
                     RETURNING {COLUMNS}"
                ))
                .bind(Uuid::new_v4())
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| format!("Failed to create subscriber: {}", e))?;

                Ok((created, SubscribeOutcome::Created))
            }
        }
    }

    async fn unsubscribe(&self, email: &Email) -> Result<bool, String> {
        let result = sqlx::query(
            "UPDATE newsletter_subscribers \
             SET is_active = false, unsubscribed_at = NOW() \
             WHERE email = $1 AND is_active = true",
        )
        .bind(email.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to unsubscribe: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Subscriber>, String> {
        sqlx::query_as::<_, Subscriber>(&format!(
            "SELECT {COLUMNS} FROM newsletter_subscribers ORDER BY subscribed_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list subscribers: {}", e))
    }
}
