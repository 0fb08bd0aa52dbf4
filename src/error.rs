use thiserror::Error;

use crate::types::WeixinError;

/// Weixin SDK error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON encode error: {0}")]
    Encode(serde_json::Error),

    #[error("JSON decode error: {0}")]
    Decode(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Weixin(#[from] WeixinError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Platform error code, when this is a domain failure.
    pub fn weixin_code(&self) -> Option<i32> {
        match self {
            Error::Weixin(e) => Some(e.errcode),
            _ => None,
        }
    }
}
