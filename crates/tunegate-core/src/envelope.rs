use serde::{Deserialize, Serialize};

/// Uniform response wrapper.
///
/// Serializes as `{"status": "success", "data": ...}` or
/// `{"status": "error", "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_wraps_data() {
        let envelope = Envelope::success(json!({"feed": []}));
        assert_eq!(
            serde_json::to_value(&envelope).expect("serializes"),
            json!({"status": "success", "data": {"feed": []}})
        );
    }

    #[test]
    fn error_carries_message_only() {
        let envelope: Envelope<()> = Envelope::error("missing query param");
        assert_eq!(
            serde_json::to_value(&envelope).expect("serializes"),
            json!({"status": "error", "message": "missing query param"})
        );
    }
}
