use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Sent form-encoded; the gateway speaks the OAuth2 password flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_id: i64,
    #[serde(default)]
    pub message: String,
}

/// One row of the analysis history ledger. `report_path` is absent until the
/// report generator has produced artifacts for the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub id: i64,
    pub file_id: i64,
    #[serde(default)]
    pub report_path: Option<String>,
    pub request_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileDescriptor {
    pub id: i64,
    pub file_path: String,
    pub file_type: String,
    pub upload_date: NaiveDateTime,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            status: None,
        }
    }

    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            status: Some(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_register_request_snake_case_fields() {
        let req = RegisterRequest {
            username: "alice".into(),
            password: "Secret123".into(),
            email: "alice@example.com".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["username"], serde_json::json!("alice"));
        assert_eq!(v["email"], serde_json::json!("alice@example.com"));
    }

    #[wasm_bindgen_test]
    fn deserialize_history_record_without_report_path() {
        let raw = r#"{"id":1,"file_id":5,"request_date":"2025-01-02T03:04:05"}"#;
        let record: HistoryRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, 1);
        assert!(record.report_path.is_none());
        assert_eq!(record.request_date.format("%H:%M:%S").to_string(), "03:04:05");
    }

    #[wasm_bindgen_test]
    fn deserialize_upload_response_without_message() {
        let raw = r#"{"file_id":42}"#;
        let response: UploadResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.file_id, 42);
        assert_eq!(response.message, "");
    }

    #[wasm_bindgen_test]
    fn deserialize_login_response_defaults_token_type() {
        let raw = r#"{"access_token":"tok-1"}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.access_token, "tok-1");
        assert_eq!(response.token_type, "");
    }
}
