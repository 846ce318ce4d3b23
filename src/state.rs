use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::email::Mailer;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Application configuration loaded at startup
    pub config: Arc<AppConfig>,
    /// SMTP mailer; `None` when `SMTP_HOST` is not configured
    pub mailer: Option<Arc<Mailer>>,
}

impl AppState {
    /// Builds state from the loaded configuration and an established pool
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        let mailer = config
            .smtp
            .clone()
            .map(|smtp| Arc::new(Mailer::new(smtp)));

        Self {
            pool,
            config: Arc::new(config),
            mailer,
        }
    }
}
