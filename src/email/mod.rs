//! Transactional email delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport and sends the HTML
//! messages defined in [`templates`]. Delivery is best-effort: callers log
//! failures and never fail the originating request, since the triggering
//! record is already persisted.

use chrono::{DateTime, Utc};

use crate::config::SmtpConfig;

pub mod templates;

/// Error type for email delivery failures
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.)
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled
    #[error("Email build error: {0}")]
    Build(String),
}

/// Sends templated transactional emails via SMTP
pub struct Mailer {
    config: SmtpConfig,
}

impl Mailer {
    /// Creates a new mailer with the given SMTP configuration
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Sends an HTML email to a single recipient
    async fn send_html(&self, to: &str, subject: &str, html: String) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
                .port(self.config.port);

        if let (Some(user), Some(pass)) = (&self.config.user, &self.config.password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to, subject = subject, "Email sent");
        Ok(())
    }

    /// Acknowledgement for a contact-form submission
    pub async fn send_contact_acknowledgement(
        &self,
        to: &str,
        name: &str,
        message: &str,
    ) -> Result<(), EmailError> {
        let html = templates::render(
            templates::CONTACT_ACK,
            &[("name", name), ("message", message)],
        );
        self.send_html(to, "We received your message", html).await
    }

    /// Welcome email for a first-time newsletter subscriber
    pub async fn send_newsletter_welcome(&self, to: &str) -> Result<(), EmailError> {
        let html = templates::render(templates::NEWSLETTER_WELCOME, &[("email", to)]);
        self.send_html(to, "Welcome to the Halcyon newsletter", html)
            .await
    }

    /// Confirmation sent to the prospect after a demo request
    pub async fn send_demo_confirmation(
        &self,
        to: &str,
        name: &str,
        interest: &str,
        slot: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<(), EmailError> {
        let schedule_line = match slot {
            Some((starts_at, ends_at)) => format!(
                "Your demo is booked for {} – {} (UTC).",
                starts_at.format("%B %e, %Y %H:%M"),
                ends_at.format("%H:%M")
            ),
            None => "Our sales team will reach out shortly to find a time that works.".to_string(),
        };

        let html = templates::render(
            templates::DEMO_CONFIRMATION,
            &[
                ("name", name),
                ("interest", interest),
                ("schedule_line", &schedule_line),
            ],
        );
        self.send_html(to, "Your Halcyon demo request", html).await
    }

    /// Internal notification to the sales inbox for a new demo request
    #[allow(clippy::too_many_arguments)]
    pub async fn send_demo_sales_notification(
        &self,
        sales_email: &str,
        name: &str,
        email: &str,
        company: Option<&str>,
        interest: &str,
        slot: Option<(DateTime<Utc>, DateTime<Utc>)>,
        message: Option<&str>,
    ) -> Result<(), EmailError> {
        let slot_line = match slot {
            Some((starts_at, ends_at)) => format!(
                "{} – {} (UTC)",
                starts_at.format("%B %e, %Y %H:%M"),
                ends_at.format("%H:%M")
            ),
            None => "none picked".to_string(),
        };

        let html = templates::render(
            templates::DEMO_SALES_NOTIFICATION,
            &[
                ("name", name),
                ("email", email),
                ("company", company.unwrap_or("n/a")),
                ("interest", interest),
                ("slot", &slot_line),
                ("message", message.unwrap_or("")),
            ],
        );
        self.send_html(sales_email, &format!("New demo request from {}", name), html)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn email_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = EmailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
