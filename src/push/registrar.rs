use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{error, info};

/// Fixed registration endpoint on the backup server.
const REGISTER_TOKEN_ENDPOINT: &str = "http://fire-backup.hallym.ac.kr:8000/api/v1/register-token";

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    token: &'a str,
}

/// Forwards push registration tokens to the backend.
///
/// Delivery is fire-and-forget: failures are logged and dropped, there is no
/// retry, and concurrent registrations are not ordered relative to issuance.
#[derive(Clone)]
pub struct TokenRegistrar {
    client: reqwest::Client,
    endpoint: String,
}

impl TokenRegistrar {
    pub fn new() -> Self {
        Self::with_endpoint(REGISTER_TOKEN_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Register `token` off the caller's thread.
    ///
    /// Never blocks and never reports failure to the caller; the worst-case
    /// outcome is a log line and a device the backend cannot notify.
    pub fn register(&self, token: String) {
        let registrar = self.clone();
        tokio::spawn(async move {
            match registrar.send(&token).await {
                Ok(status) if status.is_success() => {
                    info!("Token registered, status {}", status)
                }
                Ok(status) => error!("Token registration rejected, status {}", status),
                Err(e) => error!("Token registration failed: {:#}", e),
            }
        });
    }

    /// Issue the registration POST and return the response status.
    async fn send(&self, token: &str) -> Result<StatusCode> {
        let body =
            serde_json::to_vec(&TokenRequest { token }).context("Failed to encode token payload")?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await
            .context("Token registration request failed")?;

        Ok(response.status())
    }
}

impl Default for TokenRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn payload_is_a_single_token_field() {
        let value = serde_json::to_value(TokenRequest { token: "abc123" }).unwrap();
        assert_eq!(value, serde_json::json!({ "token": "abc123" }));
    }

    #[tokio::test]
    async fn send_posts_json_to_the_register_endpoint() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if n == 0 || text.contains("\"token\"") {
                    break;
                }
            }
            socket
                .write_all(b"HTTP/1.1 201 Created\r\ncontent-length: 0\r\n\r\n")
                .await
                .unwrap();
            String::from_utf8_lossy(&request).to_string()
        });

        let registrar =
            TokenRegistrar::with_endpoint(format!("http://{}/api/v1/register-token", addr));
        let status = registrar.send("fcm-token-1").await.unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/v1/register-token HTTP/1.1\r\n"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/json; charset=utf-8"));
        assert!(request.contains(r#"{"token":"fcm-token-1"}"#));
    }

    #[tokio::test]
    async fn network_failure_is_contained() {
        let registrar = TokenRegistrar::with_endpoint("http://127.0.0.1:9/api/v1/register-token");

        // The inner send reports the error...
        assert!(registrar.send("some-token").await.is_err());

        // ...but the public entry point swallows it.
        registrar.register("some-token".to_string());
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }
}
