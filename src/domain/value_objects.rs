use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character with a non-empty local part
/// - Must be at least 3 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Arguments
    /// * `email` - The email string to validate
    ///
    /// # Returns
    /// * `Ok(Email)` - If email is valid
    /// * `Err(String)` - If email is invalid
    ///
    /// # Example
    /// ```
    /// use halcyon_api::domain::value_objects::Email;
    ///
    /// let email = Email::new("test@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "test@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into().trim().to_string();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    /// Validates an email string
    ///
    /// # Validation Rules
    /// - Must contain exactly one '@' with non-empty local and domain parts
    /// - Must be at least 3 characters long
    fn is_valid(email: &str) -> bool {
        if email.len() < 3 || email.contains(char::is_whitespace) {
            return false;
        }
        match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
            None => false,
        }
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slug value object for URL-safe identifiers
///
/// # Invariants
/// - Only lowercase ASCII letters, digits and hyphens
/// - Non-empty, no leading or trailing hyphen
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Creates a new Slug, validating the given string
    ///
    /// # Example
    /// ```
    /// use halcyon_api::domain::value_objects::Slug;
    ///
    /// let slug = Slug::new("intro-to-telehealth").expect("valid slug");
    /// assert_eq!(slug.as_str(), "intro-to-telehealth");
    /// assert!(Slug::new("Not A Slug").is_err());
    /// ```
    pub fn new(slug: impl Into<String>) -> Result<Self, String> {
        let slug = slug.into();
        if Self::is_valid(&slug) {
            Ok(Slug(slug))
        } else {
            Err(format!("Invalid slug: {}", slug))
        }
    }

    /// Derives a slug from a free-form title
    ///
    /// Lowercases, maps runs of non-alphanumeric characters to single
    /// hyphens and trims hyphens from both ends.
    ///
    /// # Example
    /// ```
    /// use halcyon_api::domain::value_objects::Slug;
    ///
    /// let slug = Slug::from_title("Why Remote Care Works!").expect("valid slug");
    /// assert_eq!(slug.as_str(), "why-remote-care-works");
    /// ```
    pub fn from_title(title: &str) -> Result<Self, String> {
        let mut out = String::with_capacity(title.len());
        let mut last_hyphen = true;
        for c in title.chars() {
            if c.is_ascii_alphanumeric() {
                out.push(c.to_ascii_lowercase());
                last_hyphen = false;
            } else if !last_hyphen {
                out.push('-');
                last_hyphen = true;
            }
        }
        let trimmed = out.trim_matches('-');
        if trimmed.is_empty() {
            return Err(format!("Cannot derive slug from title: {}", title));
        }
        Ok(Slug(trimmed.to_string()))
    }

    fn is_valid(slug: &str) -> bool {
        !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    /// Returns the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn valid_email_with_subdomain() {
        assert!(Email::new("user@mail.example.com").is_ok());
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("invalid").is_err());
    }

    #[test]
    fn invalid_email_empty_local_part() {
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn invalid_email_empty_domain() {
        assert!(Email::new("user@").is_err());
    }

    #[test]
    fn invalid_email_double_at() {
        assert!(Email::new("user@@example.com").is_err());
    }

    #[test]
    fn invalid_email_empty() {
        assert!(Email::new("").is_err());
    }

    #[test]
    fn email_trims_whitespace() {
        let email = Email::new("  test@example.com  ").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
    }

    #[test]
    fn email_display() {
        let email = Email::new("test@example.com").unwrap();
        assert_eq!(format!("{}", email), "test@example.com");
    }

    #[test]
    fn valid_slug() {
        assert!(Slug::new("my-first-post").is_ok());
        assert!(Slug::new("post-2024").is_ok());
    }

    #[test]
    fn invalid_slug_uppercase() {
        assert!(Slug::new("My-Post").is_err());
    }

    #[test]
    fn invalid_slug_spaces() {
        assert!(Slug::new("my post").is_err());
    }

    #[test]
    fn invalid_slug_edge_hyphens() {
        assert!(Slug::new("-leading").is_err());
        assert!(Slug::new("trailing-").is_err());
    }

    #[test]
    fn invalid_slug_empty() {
        assert!(Slug::new("").is_err());
    }

    #[test]
    fn slug_from_title_normalizes() {
        let slug = Slug::from_title("  Hello, World! 2024  ").unwrap();
        assert_eq!(slug.as_str(), "hello-world-2024");
    }

    #[test]
    fn slug_from_title_collapses_runs() {
        let slug = Slug::from_title("a -- b").unwrap();
        assert_eq!(slug.as_str(), "a-b");
    }

    #[test]
    fn slug_from_symbols_only_fails() {
        assert!(Slug::from_title("!!!").is_err());
    }
}
