//! Platform status primitives
//!
//! Most Weixin APIs answer with HTTP 200 and report business failure inside
//! the JSON body through the `errcode` / `errmsg` pair. This module provides:
//!
//! - [`WeixinError`], the decoded status pair and the domain error value
//! - [`WeixinResponse`], the capability a response shape implements to let
//!   [`RpcClient`](crate::client::RpcClient) check its embedded status
//!
//! ## Usage
//!
//! ```rust
//! use weixin_mp::types::WeixinError;
//!
//! let json = r#"{"errcode": 40001, "errmsg": "invalid credential"}"#;
//! let status: WeixinError = serde_json::from_str(json).unwrap();
//! assert!(!status.is_success());
//! assert!(status.check().is_err());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `errcode` value signalling success.
pub const WEIXIN_ERRCODE_SUCCESS: i32 = 0;
/// The platform is busy; the caller may try again later.
pub const WEIXIN_ERRCODE_SYSTEM_BUSY: i32 = -1;
/// The access token or app secret was rejected.
pub const WEIXIN_ERRCODE_INVALID_CREDENTIAL: i32 = 40001;
/// The access token has expired.
pub const WEIXIN_ERRCODE_ACCESS_TOKEN_EXPIRED: i32 = 42001;

/// Status pair embedded in Weixin API responses.
///
/// `errcode == 0` is the only success value. Missing fields decode as
/// success, matching endpoints that omit the pair on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("weixin error {errcode}: {errmsg}")]
pub struct WeixinError {
    /// Error code (`0` = success)
    #[serde(default)]
    pub errcode: i32,
    /// Error message
    #[serde(default)]
    pub errmsg: String,
}

impl WeixinError {
    pub fn new(errcode: i32, errmsg: impl Into<String>) -> Self {
        Self {
            errcode,
            errmsg: errmsg.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.errcode == WEIXIN_ERRCODE_SUCCESS
    }

    pub fn is_system_busy(&self) -> bool {
        self.errcode == WEIXIN_ERRCODE_SYSTEM_BUSY
    }

    /// `Ok(())` on success, otherwise a copy of `self` as the error.
    pub fn check(&self) -> Result<(), WeixinError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.clone())
        }
    }
}

/// Response shapes decoded by [`RpcClient`](crate::client::RpcClient).
///
/// The default implementation reports that the shape carries no platform
/// status, so `get` and `upload` skip the error-code check for it. Shapes
/// embedding `errcode` / `errmsg` override [`weixin_error`](Self::weixin_error).
///
/// # Example
///
/// ```rust
/// use weixin_mp::types::{WeixinError, WeixinResponse};
///
/// #[derive(serde::Deserialize)]
/// struct MediaUpload {
///     #[serde(default)]
///     media_id: String,
///     #[serde(flatten)]
///     status: WeixinError,
/// }
///
/// impl WeixinResponse for MediaUpload {
///     fn weixin_error(&self) -> Option<WeixinError> {
///         Some(self.status.clone())
///     }
/// }
///
/// let json = r#"{"errcode": 0, "errmsg": "ok", "media_id": "m1"}"#;
/// let resp: MediaUpload = serde_json::from_str(json).unwrap();
/// assert_eq!(resp.media_id, "m1");
/// assert!(resp.weixin_error().unwrap().is_success());
/// ```
pub trait WeixinResponse: DeserializeOwned {
    /// The embedded platform status, if this shape carries one.
    fn weixin_error(&self) -> Option<WeixinError> {
        None
    }
}

impl WeixinResponse for WeixinError {
    fn weixin_error(&self) -> Option<WeixinError> {
        Some(self.clone())
    }
}

/// Untyped bodies are returned as-is, without inspecting `errcode`.
impl WeixinResponse for serde_json::Value {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weixin_error_success() {
        let status = WeixinError::new(0, "ok");
        assert!(status.is_success());
        assert!(status.check().is_ok());
    }

    #[test]
    fn test_weixin_error_failure() {
        let status = WeixinError::new(40013, "invalid appid");
        assert!(!status.is_success());
        let err = status.check().unwrap_err();
        assert_eq!(err.errcode, 40013);
        assert_eq!(err.errmsg, "invalid appid");
    }

    #[test]
    fn test_weixin_error_defaults_on_missing_fields() {
        let status: WeixinError = serde_json::from_str("{}").unwrap();
        assert_eq!(status.errcode, 0);
        assert!(status.errmsg.is_empty());
        assert!(status.is_success());
    }

    #[test]
    fn test_weixin_error_ignores_extra_fields() {
        let json = r#"{"errcode": 0, "errmsg": "ok", "msgid": 200228332}"#;
        let status: WeixinError = serde_json::from_str(json).unwrap();
        assert!(status.is_success());
    }

    #[test]
    fn test_system_busy() {
        assert!(WeixinError::new(WEIXIN_ERRCODE_SYSTEM_BUSY, "system error").is_system_busy());
        assert!(!WeixinError::new(WEIXIN_ERRCODE_INVALID_CREDENTIAL, "").is_system_busy());
    }

    #[test]
    fn test_capability_for_status_and_plain_values() {
        let status = WeixinError::new(42001, "access_token expired");
        assert_eq!(status.weixin_error(), Some(status.clone()));

        let value = serde_json::json!({"errcode": 42001, "errmsg": "access_token expired"});
        assert_eq!(value.weixin_error(), None);
    }
}
