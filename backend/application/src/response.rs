use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUBMITTED: &str = "Application submitted successfully!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl SubmitResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: Value) -> Self {
        self.error = Some(error);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_error_omitted_when_absent() {
        let body = serde_json::to_value(SubmitResponse::success(SUBMITTED)).unwrap();
        assert_eq!(body, json!({ "success": true, "message": SUBMITTED }));
    }

    #[test]
    fn test_error_detail_serialized() {
        let body = SubmitResponse::failure("Failed to submit application.")
            .with_error(json!({ "status": 422 }));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"]["status"], json!(422));
        assert_eq!(serde_json::from_value::<SubmitResponse>(value).unwrap(), body);
    }
}
