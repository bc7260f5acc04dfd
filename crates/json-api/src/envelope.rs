//! Uniform response envelope.
//!
//! Every endpoint, success or failure, answers with
//! `{success, data?, message?, error?}` so clients can branch on one
//! shape.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Successful response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Envelope<T> {
    /// Always `true` on this path.
    pub success: bool,

    /// The payload, when the operation yields one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub(crate) fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub(crate) fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn data_envelope_omits_absent_fields() {
        let envelope = Envelope::data(42);

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value, json!({ "success": true, "data": 42 }));
    }

    #[test]
    fn message_envelope_has_no_data_key() {
        let envelope = Envelope::<String>::message("OTP sent if the email exists");

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({ "success": true, "message": "OTP sent if the email exists" })
        );
    }
}
