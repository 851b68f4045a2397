#[cfg(any(feature = "ssr", test))]
pub mod dispatch;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EMAIL_API_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_WEBHOOK_URL: &str = "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[cfg(any(feature = "ssr", test))]
    #[error("email delivery failed: {0}")]
    Email(#[source] reqwest::Error),
    #[cfg(any(feature = "ssr", test))]
    #[error("email service responded with status {0}")]
    EmailStatus(u16),
    #[cfg(any(feature = "ssr", test))]
    #[error("webhook delivery failed: {0}")]
    Webhook(#[source] reqwest::Error),
}

/// The three fields of the contact form, as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Mirrors the browser's `required` check: every field must be non-empty.
    /// Whitespace-only values pass, as they do in the browser.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Record posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2026-10-16T09:30:00.000Z`.
    pub timestamp: String,
    #[serde(rename = "pageURL")]
    pub page_url: String,
}

impl Submission {
    pub fn new(form: &ContactForm, page_url: String, at: DateTime<Utc>) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            page_url,
        }
    }
}

/// Opaque tokens and endpoints for the two delivery targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub email_api_url: String,
    pub webhook_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ContactConfig {
    pub const SERVICE_ID_VAR: &'static str = "EMAILJS_SERVICE_ID";
    pub const TEMPLATE_ID_VAR: &'static str = "EMAILJS_TEMPLATE_ID";
    pub const USER_ID_VAR: &'static str = "EMAILJS_USER_ID";
    pub const EMAIL_API_VAR: &'static str = "EMAILJS_API_URL";
    pub const WEBHOOK_VAR: &'static str = "CONTACT_WEBHOOK_URL";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            service_id: get(Self::SERVICE_ID_VAR, "YOUR_SERVICE_ID"),
            template_id: get(Self::TEMPLATE_ID_VAR, "YOUR_TEMPLATE_ID"),
            user_id: get(Self::USER_ID_VAR, "YOUR_USER_ID"),
            email_api_url: get(Self::EMAIL_API_VAR, DEFAULT_EMAIL_API_URL),
            webhook_url: get(Self::WEBHOOK_VAR, DEFAULT_WEBHOOK_URL),
        }
    }

    /// Environment variables still holding a placeholder value.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.starts_with("YOUR_") {
            missing.push(Self::SERVICE_ID_VAR);
        }
        if self.template_id.starts_with("YOUR_") {
            missing.push(Self::TEMPLATE_ID_VAR);
        }
        if self.user_id.starts_with("YOUR_") {
            missing.push(Self::USER_ID_VAR);
        }
        if self.webhook_url.contains("YOUR_") {
            missing.push(Self::WEBHOOK_VAR);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(form().validate().is_ok());

        let mut f = form();
        f.email = String::new();
        assert!(matches!(f.validate(), Err(ContactError::MissingField("email"))));

        let f = ContactForm::default();
        assert!(matches!(f.validate(), Err(ContactError::MissingField("name"))));

        let mut f = form();
        f.message.clear();
        let err = f.validate().unwrap_err();
        assert_eq!(err.to_string(), "message is required");
    }

    #[test]
    fn test_validate_accepts_whitespace_only_values() {
        let f = ContactForm {
            name: " ".to_string(),
            email: "a@b.c".to_string(),
            message: "hi".to_string(),
        };
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_submission_wire_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        let s = Submission::new(&form(), "https://portfolio.test/#projects".to_string(), at);
        assert_eq!(s.timestamp, "2026-10-16T09:30:00.000Z");
        assert!(DateTime::parse_from_rfc3339(&s.timestamp).is_ok());

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
                "timestamp": "2026-10-16T09:30:00.000Z",
                "pageURL": "https://portfolio.test/#projects",
            })
        );
    }

    #[test]
    fn test_config_defaults_to_placeholders() {
        let config = ContactConfig::default();
        assert_eq!(config.service_id, "YOUR_SERVICE_ID");
        assert_eq!(config.email_api_url, DEFAULT_EMAIL_API_URL);
        assert_eq!(
            config.placeholders(),
            vec![
                "EMAILJS_SERVICE_ID",
                "EMAILJS_TEMPLATE_ID",
                "EMAILJS_USER_ID",
                "CONTACT_WEBHOOK_URL"
            ]
        );
    }

    #[test]
    fn test_config_from_lookup() {
        let vars = HashMap::from([
            ("EMAILJS_SERVICE_ID", "svc_1"),
            ("EMAILJS_TEMPLATE_ID", "tpl_1"),
            ("EMAILJS_USER_ID", "usr_1"),
            ("EMAILJS_API_URL", ""),
            ("CONTACT_WEBHOOK_URL", "https://hooks.test/exec"),
        ]);
        let config = ContactConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.service_id, "svc_1");
        assert_eq!(config.template_id, "tpl_1");
        assert_eq!(config.user_id, "usr_1");
        // blank values fall back to defaults
        assert_eq!(config.email_api_url, DEFAULT_EMAIL_API_URL);
        assert_eq!(config.webhook_url, "https://hooks.test/exec");
        assert!(config.placeholders().is_empty());
    }
}
