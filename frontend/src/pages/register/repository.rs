use crate::api::{ApiClient, ApiError, MessageResponse, RegisterRequest};

pub async fn register(
    api: &ApiClient,
    request: &RegisterRequest,
) -> Result<MessageResponse, ApiError> {
    api.register(request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::shared_memory_store;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn forwards_the_payload_and_parses_the_acknowledgement() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/user/register")
                .json_body(serde_json::json!({
                    "username": "alice",
                    "password": "Passw0rd",
                    "email": "alice@example.com"
                }));
            then.status(200)
                .json_body(serde_json::json!({"message": "User registered successfully"}));
        });

        let (store, _clock) = shared_memory_store(30 * 60 * 1000);
        let api = ApiClient::with_base_url(server.url(""), store);
        let response = register(
            &api,
            &RegisterRequest {
                username: "alice".into(),
                password: "Passw0rd".into(),
                email: "alice@example.com".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(response.message, "User registered successfully");
    }

    #[tokio::test]
    async fn surfaces_a_duplicate_user_detail() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/user/register");
            then.status(400)
                .json_body(serde_json::json!({"detail": "Username already registered"}));
        });

        let (store, _clock) = shared_memory_store(30 * 60 * 1000);
        let api = ApiClient::with_base_url(server.url(""), store);
        let error = register(
            &api,
            &RegisterRequest {
                username: "alice".into(),
                password: "Passw0rd".into(),
                email: "alice@example.com".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(error.message, "Username already registered");
        assert_eq!(error.status, Some(400));
    }
}
