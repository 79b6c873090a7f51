use crate::models::Entry;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shared request body for create and update. Absent fields deserialize to
/// empty strings so both paths fall through the same length checks.
#[derive(Debug, Deserialize, Validate)]
pub struct EntryPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "term must not be empty"))]
    pub term: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "interpretation must not be empty"))]
    pub interpretation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryResponse {
    pub id: String,
    pub term: String,
    pub interpretation: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            term: entry.term,
            interpretation: entry.interpretation,
            created_at: entry.created_at.to_rfc3339(),
            updated_at: entry.updated_at.to_rfc3339(),
        }
    }
}

/// Response wrapper for fetch-by-id; the envelope key is part of the public
/// contract consumed by the browser UI.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryEnvelope {
    pub interpretation: EntryResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_fields() {
        let payload = EntryPayload {
            term: "API".to_string(),
            interpretation: "Application Programming Interface".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_empty_term() {
        let payload = EntryPayload {
            term: String::new(),
            interpretation: "Application Programming Interface".to_string(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("term"));
    }

    #[test]
    fn rejects_empty_interpretation() {
        let payload = EntryPayload {
            term: "API".to_string(),
            interpretation: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("interpretation"));
    }

    #[test]
    fn missing_fields_deserialize_to_empty_and_fail_validation() {
        let payload: EntryPayload = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(payload.term, "");
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("term"));
        assert!(errors.field_errors().contains_key("interpretation"));
    }
}
