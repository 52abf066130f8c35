//! GitHub API client shared by all gist tools.
//!
//! The client is configured once at startup: fixed base URL, token auth in a
//! default header, JSON accept header. Every tool invocation issues exactly
//! one call through it; there are no retries and no batching. Failed calls
//! are translated into the [`ToolError`] taxonomy here so the tools only see
//! caller-facing kinds.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::GithubConfig;
use crate::core::error::Error;

use super::error::ToolError;

/// Fallback when an upstream error body carries no message.
const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown GitHub API error";

/// Configured HTTP client bound to the GitHub API.
#[derive(Debug, Clone)]
pub struct GistClient {
    http: Client,
    base_url: String,
}

impl GistClient {
    /// Build the client with auth and accept headers applied to every call.
    pub fn new(config: &GithubConfig) -> Result<Self, Error> {
        let mut auth = HeaderValue::from_str(&format!("token {}", config.token))
            .map_err(|_| Error::config("GITHUB_TOKEN contains invalid header characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = Client::builder()
            .user_agent(concat!("gists-mcp-server/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a resource and decode the JSON response.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ToolError> {
        let response = self.send(Method::GET, path, query, None).await?;
        Self::decode(response).await
    }

    /// POST with an optional JSON body and decode the response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ToolError> {
        let response = self.send(Method::POST, path, &[], body).await?;
        Self::decode(response).await
    }

    /// PATCH with a JSON body and decode the response.
    pub async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ToolError> {
        let response = self.send(Method::PATCH, path, &[], Some(body)).await?;
        Self::decode(response).await
    }

    /// PUT with no body; the response body is not of interest.
    pub async fn put(&self, path: &str) -> Result<(), ToolError> {
        self.send(Method::PUT, path, &[], None).await.map(|_| ())
    }

    /// DELETE; the response body is not of interest.
    pub async fn delete(&self, path: &str) -> Result<(), ToolError> {
        self.send(Method::DELETE, path, &[], None).await.map(|_| ())
    }

    /// Issue the single upstream call for an invocation.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ToolError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = upstream_message(response).await;
        warn!("GitHub API returned {}: {}", status, message);
        Err(map_status(status, message))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ToolError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ToolError::Upstream(format!("unexpected response body: {e}")))
    }
}

/// Translate an upstream HTTP status into a caller-facing error kind.
pub(crate) fn map_status(status: StatusCode, message: String) -> ToolError {
    match status {
        StatusCode::UNAUTHORIZED => ToolError::InvalidCredential,
        StatusCode::NOT_FOUND => ToolError::NotFound,
        StatusCode::FORBIDDEN => ToolError::Forbidden(message),
        _ => ToolError::Upstream(message),
    }
}

/// Pull the `message` field out of a GitHub error body.
async fn upstream_message(response: reqwest::Response) -> String {
    response
        .json::<Value>()
        .await
        .ok()
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_UPSTREAM_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn test_client() -> GistClient {
        GistClient::new(&Config::default().github).unwrap()
    }

    #[test]
    fn test_client_builds_from_default_config() {
        let client = test_client();
        assert_eq!(client.base_url, "https://api.github.com");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut github = Config::default().github;
        github.api_url = "http://localhost:9999/".to_string();
        let client = GistClient::new(&github).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_map_status_401() {
        let err = map_status(StatusCode::UNAUTHORIZED, "Bad credentials".to_string());
        assert!(matches!(err, ToolError::InvalidCredential));
    }

    #[test]
    fn test_map_status_404() {
        let err = map_status(StatusCode::NOT_FOUND, "Not Found".to_string());
        assert!(matches!(err, ToolError::NotFound));
    }

    #[test]
    fn test_map_status_403_keeps_message() {
        let err = map_status(
            StatusCode::FORBIDDEN,
            "API rate limit exceeded".to_string(),
        );
        match err {
            ToolError::Forbidden(msg) => assert_eq!(msg, "API rate limit exceeded"),
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_map_status_other_is_upstream() {
        let err = map_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            UNKNOWN_UPSTREAM_ERROR.to_string(),
        );
        match err {
            ToolError::Upstream(msg) => assert_eq!(msg, UNKNOWN_UPSTREAM_ERROR),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_token_characters_rejected() {
        let mut github = Config::default().github;
        github.token = "bad\ntoken".to_string();
        assert!(GistClient::new(&github).is_err());
    }

    /// Serve exactly one canned HTTP response on a local port and return the
    /// base URL to point the client at.
    fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            // Drain the request headers before responding.
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}", addr)
    }

    fn stub_client(api_url: String) -> GistClient {
        let mut github = Config::default().github;
        github.api_url = api_url;
        GistClient::new(&github).unwrap()
    }

    #[tokio::test]
    async fn test_403_body_message_passed_through() {
        let url = spawn_one_shot_server(
            "HTTP/1.1 403 Forbidden",
            r#"{"message":"API rate limit exceeded"}"#,
        );
        let client = stub_client(url);

        let err = client
            .get_json::<serde_json::Value>("/gists", &[])
            .await
            .unwrap_err();
        match err {
            ToolError::Forbidden(msg) => assert_eq!(msg, "API rate limit exceeded"),
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_body_without_message_falls_back() {
        let url = spawn_one_shot_server("HTTP/1.1 500 Internal Server Error", "not json");
        let client = stub_client(url);

        let err = client
            .get_json::<serde_json::Value>("/gists", &[])
            .await
            .unwrap_err();
        match err {
            ToolError::Upstream(msg) => assert_eq!(msg, UNKNOWN_UPSTREAM_ERROR),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_401_maps_to_invalid_credential() {
        let url = spawn_one_shot_server(
            "HTTP/1.1 401 Unauthorized",
            r#"{"message":"Bad credentials"}"#,
        );
        let client = stub_client(url);

        let err = client
            .get_json::<serde_json::Value>("/gists", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = stub_client(format!("http://{}", addr));
        let err = client
            .get_json::<serde_json::Value>("/gists", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Network(_)));
    }
}
