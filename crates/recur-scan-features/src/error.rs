use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct FeatureError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl FeatureError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_date(field_name: &str, received: &str) -> Self {
        Self::new(
            "invalid_date",
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            vec![
                "Provide the date as `YYYY-MM-DD`, for example `2024-01-15`.".to_string(),
                "Check that the day exists in that month (leap years included).".to_string(),
            ],
        )
        .with_data(json!({
            "field": field_name,
            "received": received,
        }))
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::new("invalid_argument", message, Vec::new())
    }

    pub fn missing_field(field_name: &str) -> Self {
        Self::new(
            "invalid_argument",
            &format!("`{field_name}` must not be empty."),
            vec![format!("Provide a non-empty `{field_name}` value.")],
        )
        .with_data(json!({
            "field": field_name,
        }))
    }
}

pub type FeatureResult<T> = Result<T, FeatureError>;
