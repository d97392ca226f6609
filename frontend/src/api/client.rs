use crate::api::types::{
    ApiError, FileDescriptor, HistoryRecord, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, UploadResponse,
};
use crate::config;
use crate::state::session::SessionStore;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Thin client for the analysis gateway. Cheap to clone; shared through
/// context so every page talks to the same session.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Option<String>,
    session: SessionStore,
}

/// FastAPI error envelope. `detail` is usually a string but carries a list
/// of field errors on 422 responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Value,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(SessionStore::browser(config::SessionPolicy::default()))
    }

    pub fn with_session(session: SessionStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
            session,
        }
    }

    /// Pins the base URL instead of resolving it from runtime config.
    pub fn with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let credential = self
            .session
            .credential()
            .ok_or_else(|| ApiError::request_failed("Not authenticated"))?;
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", credential))
            .map_err(|_| ApiError::request_failed("Invalid session credential"))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    async fn map_json_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => detail_text(&body.detail).unwrap_or(fallback),
            Err(_) => fallback,
        };
        ApiError::from_status(status.as_u16(), message)
    }

    async fn fetch_binary(&self, url: String) -> Result<Vec<u8>, ApiError> {
        let headers = self.auth_headers()?;
        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(|e| {
                ApiError::request_failed(format!("Failed to read response body: {}", e))
            })?;
            Ok(bytes.to_vec())
        } else {
            // Artifact endpoints answer failures with a plain text body.
            let text = response.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Download failed")
                    .to_string()
            } else {
                text
            };
            Err(ApiError::from_status(status.as_u16(), message))
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/user/register", self.resolved_base_url().await);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::map_json_response(response).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/user/login", self.resolved_base_url().await);
        let response = self
            .client
            .post(&url)
            .form(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::map_json_response(response).await
    }

    pub async fn upload_media(
        &self,
        file_name: &str,
        media_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let url = format!("{}/audio/upload", self.resolved_base_url().await);
        let headers = self.auth_headers()?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(media_type)
            .map_err(|_| {
                ApiError::request_failed(format!("Unsupported media type: {}", media_type))
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(&url)
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::map_json_response(response).await
    }

    /// Kicks off server-side analysis of an uploaded file. The outcome shape
    /// varies by media kind, so it stays opaque JSON.
    pub async fn analyze_media(&self, file_id: i64) -> Result<Value, ApiError> {
        let url = format!("{}/audio/analyze/{}", self.resolved_base_url().await, file_id);
        let headers = self.auth_headers()?;
        let response = self
            .client
            .post(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::map_json_response(response).await
    }

    pub async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let url = format!("{}/user/history", self.resolved_base_url().await);
        let headers = self.auth_headers()?;
        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::map_json_response(response).await
    }

    pub async fn fetch_user_files(&self) -> Result<Vec<FileDescriptor>, ApiError> {
        let url = format!("{}/user/files", self.resolved_base_url().await);
        let headers = self.auth_headers()?;
        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::map_json_response(response).await
    }

    pub async fn download_pdf_report(&self, request_id: i64) -> Result<Vec<u8>, ApiError> {
        let url = format!(
            "{}/user/history/report/{}",
            self.resolved_base_url().await,
            request_id
        );
        self.fetch_binary(url).await
    }

    pub async fn download_json_report(&self, request_id: i64) -> Result<Vec<u8>, ApiError> {
        let url = format!(
            "{}/user/history/json/{}",
            self.resolved_base_url().await,
            request_id
        );
        self.fetch_binary(url).await
    }

    pub async fn download_user_file(&self, file_id: i64) -> Result<Vec<u8>, ApiError> {
        let url = format!(
            "{}/user/files/download/{}",
            self.resolved_base_url().await,
            file_id
        );
        self.fetch_binary(url).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_text_prefers_plain_strings() {
        assert_eq!(
            detail_text(&Value::String("Incorrect username or password".into())),
            Some("Incorrect username or password".into())
        );
        assert_eq!(detail_text(&Value::Null), None);
    }

    #[test]
    fn detail_text_stringifies_validation_lists() {
        let detail = serde_json::json!([{"loc": ["body", "email"], "msg": "field required"}]);
        let text = detail_text(&detail).unwrap();
        assert!(text.contains("field required"));
    }
}
