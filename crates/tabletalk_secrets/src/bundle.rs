//! Parsed secret payload.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Key/value credential payload read from the secret store.
///
/// Lives in memory only long enough for the caller to pull the fields it
/// needs during client construction. The `Debug` impl reports the field
/// count and nothing else; values must never reach a log line.
#[derive(Clone, Default)]
pub struct SecretBundle {
    name: String,
    fields: HashMap<String, String>,
}

impl SecretBundle {
    pub(crate) fn new(name: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Name the bundle was fetched under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Look up a field that must exist.
    pub fn require(&self, field: &str) -> Result<&str> {
        self.get(field).ok_or_else(|| Error::MissingField {
            secret: self.name.clone(),
            field: field.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for SecretBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBundle")
            .field("name", &self.name)
            .field("fields", &format_args!("<{} redacted>", self.fields.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> SecretBundle {
        let mut fields = HashMap::new();
        fields.insert("api_key".to_string(), "sk-test-123".to_string());
        fields.insert("org_id".to_string(), "org-42".to_string());
        SecretBundle::new("openai/prod", fields)
    }

    #[test]
    fn get_present_field() {
        assert_eq!(bundle().get("api_key"), Some("sk-test-123"));
    }

    #[test]
    fn get_absent_field() {
        assert_eq!(bundle().get("nope"), None);
    }

    #[test]
    fn require_present_field() {
        assert_eq!(bundle().require("org_id").unwrap(), "org-42");
    }

    #[test]
    fn require_absent_field_names_secret_and_field() {
        let err = bundle().require("nope").unwrap_err();
        match err {
            Error::MissingField { secret, field } => {
                assert_eq!(secret, "openai/prod");
                assert_eq!(field, "nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn debug_never_prints_values() {
        let rendered = format!("{:?}", bundle());
        assert!(rendered.contains("openai/prod"));
        assert!(rendered.contains("redacted"));
        assert!(!rendered.contains("sk-test-123"));
        assert!(!rendered.contains("org-42"));
    }
}
