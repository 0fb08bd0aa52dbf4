//! WeChat Official Account callback SDK for Rust
//!
//! Routes the notifications pushed to an Official Account callback URL to
//! typed handlers, and provides the JSON / multipart client those handlers
//! use to call back into the Weixin APIs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use weixin_mp::client::RpcClient;
//! use weixin_mp::handler::{Dispatcher, HandlerRegistry};
//! use weixin_mp::types::ReplyMsg;
//!
//! let client = Arc::new(RpcClient::builder().build()?);
//!
//! let mut registry = HandlerRegistry::new();
//! registry.on_subscribe(move |event| {
//!     let client = client.clone();
//!     async move {
//!         let body = serde_json::json!({
//!             "touser": event.common.from_user_name,
//!             "msgtype": "text",
//!             "text": {"content": "thanks for following"}
//!         });
//!         if let Err(e) = client.post_checked(&custom_send_url, &body).await {
//!             log::warn!("custom message failed: {e}");
//!         }
//!         None
//!     }
//! });
//!
//! let dispatcher = Dispatcher::new(Arc::new(registry));
//! // in the webhook handler, with `msg` decoded from the request body:
//! let reply: Option<ReplyMsg> = dispatcher.handle_message(&msg).await;
//! ```
//!
//! ## Modules
//!
//! - [`handler`] - Handler registry and two-level dispatch
//! - [`client`] - HTTP client for API calls
//! - [`error`] - Error types
//! - [`types`] - Callback envelope, typed views, replies and API status
//!
//! ## Error Handling
//!
//! Client operations return [`Error`]. Platform failures reported inside a
//! successful response are [`Error::Weixin`]:
//!
//! ```rust,ignore
//! use weixin_mp::Error;
//!
//! match result {
//!     Ok(response) => { /* handle success */ }
//!     Err(Error::Weixin(e)) => {
//!         eprintln!("API error: {} - {}", e.errcode, e.errmsg);
//!     }
//!     Err(Error::Http(e)) => {
//!         eprintln!("HTTP error: {}", e);
//!     }
//!     Err(e) => {
//!         eprintln!("Other error: {}", e);
//!     }
//! }
//! ```
//!
//! Dispatch never returns an error: unhandled notifications produce no reply.

pub mod client;
pub mod error;
pub mod handler;
pub mod types;
mod utils;

pub use client::{RpcClient, RpcClientBuilder};
pub use error::Error;
pub use handler::{Dispatcher, HandlerRegistry};
