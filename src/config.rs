// Application configuration loaded from environment variables
// Required variables abort startup with a clear message when missing

/// JWT signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens
    pub secret: String,
    /// Access token lifetime in hours (default: 8)
    pub expiry_hours: i64,
}

/// SMTP delivery configuration
///
/// Only constructed when `SMTP_HOST` is set; without it email delivery
/// is disabled and sends are skipped with a log line.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port (default: 587, STARTTLS)
    pub port: u16,
    /// RFC 5322 "From" address
    pub from_address: String,
    /// Optional SMTP username
    pub user: Option<String>,
    /// Optional SMTP password
    pub password: Option<String>,
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory uploaded files are written to (default: `uploads`)
    pub dir: String,
    /// Maximum accepted upload size in bytes (default: 10 MiB)
    pub max_bytes: usize,
}

/// Top-level application configuration
///
/// # Environment Variables
/// * `DATABASE_URL` - Postgres connection string (required)
/// * `JWT_SECRET` - token signing secret (required)
/// * `HOST` / `PORT` - bind address (default `0.0.0.0:4000`)
/// * `CORS_ORIGIN` - allowed origin; unset means any origin
/// * `JWT_EXPIRY_HOURS` - token lifetime (default 8)
/// * `SMTP_HOST` / `SMTP_PORT` / `SMTP_USER` / `SMTP_PASSWORD` / `SMTP_FROM`
/// * `SALES_EMAIL` - recipient for demo-request notifications
/// * `UPLOAD_DIR` / `MAX_UPLOAD_BYTES`
/// * `PUBLIC_BASE_URL` - base URL used when building upload URLs
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Allowed CORS origin; `None` allows any origin
    pub cors_origin: Option<String>,
    pub jwt: JwtConfig,
    pub smtp: Option<SmtpConfig>,
    /// Recipient for demo-request sales notifications
    pub sales_email: Option<String>,
    pub upload: UploadConfig,
    pub public_base_url: String,
}

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_ADDRESS: &str = "noreply@halcyonhealth.io";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl AppConfig {
    /// Loads configuration from the environment
    ///
    /// # Panics
    /// Panics if `DATABASE_URL` or `JWT_SECRET` is missing or empty,
    /// or if a numeric variable fails to parse.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in the environment");

        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origin = std::env::var("CORS_ORIGIN").ok().filter(|s| !s.is_empty());

        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");

        let smtp = std::env::var("SMTP_HOST").ok().map(|smtp_host| SmtpConfig {
            host: smtp_host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            user: std::env::var("SMTP_USER").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
        });

        let sales_email = std::env::var("SALES_EMAIL").ok().filter(|s| !s.is_empty());

        let upload = UploadConfig {
            dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            max_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse()
                .expect("MAX_UPLOAD_BYTES must be a valid usize"),
        };

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        Self {
            host,
            port,
            database_url,
            cors_origin,
            jwt: JwtConfig {
                secret,
                expiry_hours,
            },
            smtp,
            sales_email,
            upload,
            public_base_url,
        }
    }
}
