use async_trait::async_trait;
use reqwest::Response;
use serde::Serialize;

use crate::service::{RegistrationRequest, RegistrationService, SubmissionError};

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            return Err(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            http_status: error.status().map(|s| s.as_u16()),
            error: error.to_string(),
        }
    }
}

impl From<NotSuccessResponseInfo> for SubmissionError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self {
            http_status: Some(info.status_code),
            error: info.text,
        }
    }
}

/// Registers accounts against a JSON HTTP API.
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRegistrationClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, endpoint: &str) -> String {
        format!("{}/auth/{}", self.base_url, endpoint)
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, SubmissionError> {
        let response = self
            .http
            .post(self.endpoint(endpoint))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl RegistrationService for HttpRegistrationClient {
    async fn register(&self, request: RegistrationRequest) -> Result<(), SubmissionError> {
        log::info!("Registering '{}' at {}", request.username, self.base_url);
        let response = self.post_json("register", &request).await?;
        response.check_success().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::POST, MockServer};
    use serde_json::json;

    #[test]
    fn endpoint_url() {
        let client = HttpRegistrationClient::new("https://example.org/api/v1/".to_string());
        assert_eq!(
            client.endpoint("register"),
            "https://example.org/api/v1/auth/register"
        );
    }

    #[test]
    fn not_success_into_submission_error() {
        let err: SubmissionError = NotSuccessResponseInfo {
            status_code: 409,
            text: "username taken".to_string(),
        }
        .into();
        assert_eq!(err.http_status, Some(409));
        assert_eq!(err.error, "username taken");
    }

    fn joe() -> RegistrationRequest {
        RegistrationRequest {
            username: "joe".to_string(),
            full_name: "Joe Doe".to_string(),
            email: "joe@x.com".to_string(),
            password: "Abc123".to_string(),
        }
    }

    #[tokio::test]
    async fn register_posts_the_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/register")
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "username": "joe",
                        "fullName": "Joe Doe",
                        "email": "joe@x.com",
                        "password": "Abc123",
                    }));
                then.status(201);
            })
            .await;

        let client = HttpRegistrationClient::new(server.base_url());
        client.register(joe()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_registration() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/register");
                then.status(409).body("username taken");
            })
            .await;

        let client = HttpRegistrationClient::new(format!("{}/", server.base_url()));
        let err = client.register(joe()).await.unwrap_err();
        mock.assert_async().await;
        assert_eq!(err.http_status, Some(409));
        assert_eq!(err.error, "username taken");
        assert_eq!(
            err.to_string(),
            "Registration error: [409] username taken"
        );
    }
}
