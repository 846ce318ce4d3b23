use async_trait::async_trait;

use crate::domain::newsletter::Subscriber;
use crate::domain::value_objects::Email;

/// Outcome of a subscribe call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// First time this email subscribed
    Created,
    /// A previously unsubscribed email was re-activated
    Reactivated,
    /// The email was already an active subscriber
    AlreadySubscribed,
}

/// Repository trait for newsletter subscribers
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Subscribe an email, re-activating a previous subscription if present
    async fn subscribe(&self, email: &Email) -> Result<(Subscriber, SubscribeOutcome), String>;

    /// Deactivate a subscription; returns false if the email is unknown
    /// or already inactive
    async fn unsubscribe(&self, email: &Email) -> Result<bool, String>;

    /// List subscribers newest first (admin view, active and inactive)
    async fn list(&self) -> Result<Vec<Subscriber>, String>;
}
