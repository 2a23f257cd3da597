use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::envelope;
use crate::error::ApiError;
use crate::transport::{HttpRequest, Method, Transport, UreqTransport};

/// Supplies the bearer token at request time. Implementations read the
/// session store on every call so a logout takes effect immediately.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

impl<F> TokenSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn access_token(&self) -> Option<String> {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No `Authorization` header (login, registration).
    Public,
    /// `Authorization: Bearer <token>`; fails fast without a token.
    Bearer,
}

/// Preconfigured JSON REST client.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(config: &HttpConfig, tokens: Arc<dyn TokenSource>) -> Self {
        Self::with_transport(Arc::new(UreqTransport::new(config)), tokens)
    }

    pub fn with_transport(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenSource>) -> Self {
        Self { transport, tokens }
    }

    /// Send a request and parse the JSON response. An empty 2xx body
    /// yields `Value::Null`.
    pub fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Value, ApiError> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if auth == Auth::Bearer {
            let token = self
                .tokens
                .access_token()
                .filter(|t| !t.is_empty())
                .ok_or(ApiError::MissingToken)?;
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let body = body.map(serde_json::to_string).transpose()?;
        let request = HttpRequest {
            method,
            path: path.to_string(),
            headers,
            body,
        };

        debug!(method = %method, path, "sending request");
        let response = self.transport.execute(&request)?;

        if !response.is_success() {
            let error = ApiError::from_status(response.status, &response.body);
            warn!(method = %method, path, status = response.status, error = %error, "request failed");
            return Err(error);
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Authorized GET, unwrapping `envelope_key`.
    pub fn get<T: DeserializeOwned>(&self, path: &str, envelope_key: &str) -> Result<T, ApiError> {
        let value = self.request::<Value>(Method::Get, path, None, Auth::Bearer)?;
        envelope::unwrap(value, envelope_key)
    }

    /// Authorized POST, unwrapping `envelope_key`.
    pub fn post<B, T>(&self, path: &str, body: &B, envelope_key: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request(Method::Post, path, Some(body), Auth::Bearer)?;
        envelope::unwrap(value, envelope_key)
    }

    /// Authorized PUT, unwrapping `envelope_key`.
    pub fn put<B, T>(&self, path: &str, body: &B, envelope_key: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request(Method::Put, path, Some(body), Auth::Bearer)?;
        envelope::unwrap(value, envelope_key)
    }
}
