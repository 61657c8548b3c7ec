use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(response) = mock::dispatch(&request) {
            return response;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) fn map_error_payload_parse_failure(err: reqwest::Error) -> ApiError {
        ApiError::unknown(format!("Failed to parse error: {}", err))
    }

    pub(crate) async fn map_error_response(response: Response) -> ApiError {
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return Self::map_error_payload_parse_failure(err),
        };
        serde_json::from_slice::<ApiError>(&body).unwrap_or_else(|_| {
            let reason = status.canonical_reason().unwrap_or("Unexpected status");
            ApiError::http_status(status.as_u16(), format!("{} ({})", reason, status.as_u16()))
        })
    }

    pub(crate) async fn map_json_response<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(crate) async fn map_bytes_response(response: Response) -> Result<Vec<u8>, ApiError> {
        if response.status().is_success() {
            response
                .bytes()
                .await
                .map(|body| body.to_vec())
                .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock::{register_mock, MockResponse, TestResponder};
