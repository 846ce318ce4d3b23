//! HTML email templates filled by placeholder substitution.
//!
//! Templates are plain HTML strings with `{{name}}` placeholders. [`render`]
//! replaces every provided placeholder; a placeholder left unfilled stays in
//! the output, which the template tests guard against.

/// Acknowledgement sent to a visitor who submitted the contact form
pub const CONTACT_ACK: &str = r#"<html>
<body style="font-family: Arial, sans-serif; color: #1a2e44;">
  <h2>Thanks for reaching out, {{name}}!</h2>
  <p>We received your message and a member of the Halcyon team will get back
  to you within one business day.</p>
  <p style="color: #5a6b7f;">Your message:</p>
  <blockquote style="border-left: 3px solid #2aa198; padding-left: 12px; color: #5a6b7f;">{{message}}</blockquote>
  <p>— The Halcyon Health team</p>
</body>
</html>"#;

/// Welcome email for a new newsletter subscriber
pub const NEWSLETTER_WELCOME: &str = r#"<html>
<body style="font-family: Arial, sans-serif; color: #1a2e44;">
  <h2>Welcome to the Halcyon newsletter</h2>
  <p>You're subscribed with <strong>{{email}}</strong>. Expect product news,
  clinical insights and the occasional deep dive — never spam.</p>
  <p>You can unsubscribe at any time from the link in every issue.</p>
  <p>— The Halcyon Health team</p>
</body>
</html>"#;

/// Confirmation sent to a prospect after submitting a demo request
pub const DEMO_CONFIRMATION: &str = r#"<html>
<body style="font-family: Arial, sans-serif; color: #1a2e44;">
  <h2>Your demo request is in, {{name}}</h2>
  <p>Thanks for your interest in <strong>{{interest}}</strong>.</p>
  <p>{{schedule_line}}</p>
  <p>If anything changes, just reply to this email.</p>
  <p>— The Halcyon Health team</p>
</body>
</html>"#;

/// Internal notification sent to the sales inbox for a new demo request
pub const DEMO_SALES_NOTIFICATION: &str = r#"<html>
<body style="font-family: Arial, sans-serif; color: #1a2e44;">
  <h2>New demo request</h2>
  <ul>
    <li><strong>Name:</strong> {{name}}</li>
    <li><strong>Email:</strong> {{email}}</li>
    <li><strong>Company:</strong> {{company}}</li>
    <li><strong>Interest:</strong> {{interest}}</li>
    <li><strong>Requested slot:</strong> {{slot}}</li>
  </ul>
  <p>{{message}}</p>
</body>
</html>"#;

/// Fills `{{key}}` placeholders in a template
///
/// # Example
/// ```
/// use halcyon_api::email::templates::render;
///
/// let out = render("Hi {{name}}!", &[("name", "Ada")]);
/// assert_eq!(out, "Hi Ada!");
/// ```
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every template placeholder must be filled by its send helper;
    /// this lists the variables each template expects.
    fn expected_vars(template: &str) -> Vec<&'static str> {
        match template {
            t if t == CONTACT_ACK => vec!["name", "message"],
            t if t == NEWSLETTER_WELCOME => vec!["email"],
            t if t == DEMO_CONFIRMATION => vec!["name", "interest", "schedule_line"],
            t if t == DEMO_SALES_NOTIFICATION => {
                vec!["name", "email", "company", "interest", "slot", "message"]
            }
            _ => vec![],
        }
    }

    #[test]
    fn render_replaces_placeholders() {
        let out = render("Hello {{name}}, your code is {{code}}.", &[
            ("name", "Sam"),
            ("code", "42"),
        ]);
        assert_eq!(out, "Hello Sam, your code is 42.");
    }

    #[test]
    fn render_replaces_repeated_placeholder() {
        let out = render("{{x}} and {{x}}", &[("x", "y")]);
        assert_eq!(out, "y and y");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("Hello {{name}}", &[("other", "v")]);
        assert_eq!(out, "Hello {{name}}");
    }

    #[test]
    fn all_templates_fully_filled_by_expected_vars() {
        for template in [
            CONTACT_ACK,
            NEWSLETTER_WELCOME,
            DEMO_CONFIRMATION,
            DEMO_SALES_NOTIFICATION,
        ] {
            let vars: Vec<(&str, &str)> = expected_vars(template)
                .into_iter()
                .map(|k| (k, "value"))
                .collect();
            let out = render(template, &vars);
            assert!(
                !out.contains("{{"),
                "template left unfilled placeholders: {}",
                out
            );
        }
    }
}
