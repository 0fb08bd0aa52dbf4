//! Weixin HTTP Client
//!
//! Provides the JSON / multipart RPC helpers used against Weixin APIs.

use std::path::Path;
use std::time::Duration;

use log::{debug, error};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::types::{WeixinError, WeixinResponse};
use crate::utils::redact_url;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("weixin-mp/", env!("CARGO_PKG_VERSION"));

/// Weixin API Client
///
/// Reusable HTTP client for calling Weixin APIs. URLs are passed in whole,
/// with any access token already embedded by the caller.
///
/// Weixin reports business failures inside a 200 response as
/// `{"errcode": .., "errmsg": ..}`. Checking operations turn a non-zero
/// `errcode` into [`Error::Weixin`]; transport and decode failures are
/// returned as [`Error::Http`] and [`Error::Decode`] without inspecting it.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: Client,
}

impl RpcClient {
    /// Create a new client builder
    pub fn builder() -> RpcClientBuilder {
        RpcClientBuilder::default()
    }

    /// Wrap an already configured [`reqwest::Client`].
    pub fn from_http(http: Client) -> Self {
        Self { http }
    }

    /// Returns the underlying [`reqwest::Client`] for raw HTTP requests.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// GET `url` and decode the JSON body.
    ///
    /// When `T` exposes its embedded status through
    /// [`WeixinResponse::weixin_error`], a non-zero `errcode` is returned
    /// as [`Error::Weixin`].
    ///
    /// # Errors
    /// - `Error::Http` on transport failure
    /// - `Error::Decode` when the body does not decode into `T`
    /// - `Error::Weixin` when the embedded `errcode` is non-zero
    pub async fn get<T: WeixinResponse>(&self, url: &str) -> Result<T, Error> {
        debug!("GET url={}", redact_url(url));
        let request = self.http.get(url).build()?;
        let result: T = self.execute(request).await?;
        check_embedded(&result)?;
        Ok(result)
    }

    /// POST a raw JSON body and decode the response into `T`.
    ///
    /// The embedded status is not checked; the caller inspects `T` itself.
    pub async fn post_raw<T: DeserializeOwned>(&self, url: &str, body: &[u8]) -> Result<T, Error> {
        debug!(
            "POST url={}, body={}",
            redact_url(url),
            String::from_utf8_lossy(body)
        );
        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .build()?;
        self.execute(request).await
    }

    /// POST a raw JSON body and check the `errcode` of the response.
    pub async fn post_raw_checked(&self, url: &str, body: &[u8]) -> Result<(), Error> {
        let status: WeixinError = self.post_raw(url, body).await?;
        check_status(status)
    }

    /// Encode `value` as JSON, POST it and check the `errcode` of the
    /// response.
    ///
    /// # Errors
    /// - `Error::Encode` when `value` cannot be serialized
    /// - `Error::Http` / `Error::Decode` as for [`post_raw`](Self::post_raw)
    /// - `Error::Weixin` when the response `errcode` is non-zero
    pub async fn post_checked<B: Serialize + ?Sized>(
        &self,
        url: &str,
        value: &B,
    ) -> Result<(), Error> {
        let status: WeixinError = self.post_json(url, value).await?;
        check_status(status)
    }

    /// Encode `value` as JSON, POST it and decode the response into `T`.
    ///
    /// The embedded status is not checked; the caller inspects `T` itself.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        value: &B,
    ) -> Result<T, Error> {
        let body = serde_json::to_vec(value).map_err(Error::Encode)?;
        self.post_raw(url, &body).await
    }

    /// Upload a file as multipart form data.
    ///
    /// The file goes in field `field_name` under its base name. A
    /// `description` text field is added only when `description` is given.
    /// The response is checked like [`get`](Self::get).
    ///
    /// # Errors
    /// - `Error::Io` when the file cannot be read or has no base name
    /// - `Error::Http` / `Error::Decode` / `Error::Weixin` as for `get`
    pub async fn upload<T: WeixinResponse>(
        &self,
        url: &str,
        field_name: &str,
        path: impl AsRef<Path>,
        description: Option<&str>,
    ) -> Result<T, Error> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;
        let data = tokio::fs::read(path).await?;

        let part = Part::bytes(data)
            .file_name(file_name.clone())
            .mime_str("application/octet-stream")?;
        let mut form = Form::new().part(field_name.to_string(), part);
        if let Some(description) = description {
            form = form.text("description", description.to_string());
        }

        debug!(
            "POST url={}, fieldName={}, fileName={}",
            redact_url(url),
            field_name,
            file_name
        );
        let request = self.http.post(url).multipart(form).build()?;
        let result: T = self.execute(request).await?;
        check_embedded(&result)?;
        Ok(result)
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T, Error> {
        let response = self.http.execute(request).await?;
        debug!("response status={}", response.status());

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }
}

fn check_status(status: WeixinError) -> Result<(), Error> {
    if status.is_success() {
        return Ok(());
    }
    error!("weixin error {}: {}", status.errcode, status.errmsg);
    Err(Error::Weixin(status))
}

fn check_embedded<T: WeixinResponse>(result: &T) -> Result<(), Error> {
    match result.weixin_error() {
        Some(status) => check_status(status),
        None => Ok(()),
    }
}

/// Builder for RpcClient
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use weixin_mp::client::RpcClient;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RpcClient::builder()
///         .timeout(Duration::from_secs(10))
///         .build()?;
///     # let _ = client;
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct RpcClientBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RpcClientBuilder {
    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header
    ///
    /// Default: `weixin-mp/<version>`
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the RpcClient
    ///
    /// # Errors
    /// Returns an error if a timeout is zero or the HTTP client cannot be
    /// constructed
    pub fn build(self) -> Result<RpcClient, Error> {
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
        if timeout.is_zero() || connect_timeout.is_zero() {
            return Err(Error::Config("timeouts must be non-zero".to_string()));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(RpcClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_values() {
        let client = RpcClient::builder().build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_custom_timeouts() {
        let client = RpcClient::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("my-app/1.0")
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = RpcClient::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(WeixinError::new(0, "ok")).is_ok());
        let err = check_status(WeixinError::new(45009, "api freq out of limit")).unwrap_err();
        assert_eq!(err.weixin_code(), Some(45009));
    }

    #[test]
    fn test_check_embedded_skips_plain_values() {
        let value = serde_json::json!({"errcode": 40001, "errmsg": "invalid credential"});
        assert!(check_embedded(&value).is_ok());

        let status = WeixinError::new(40001, "invalid credential");
        assert!(check_embedded(&status).is_err());
    }
}
