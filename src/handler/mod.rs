//! Callback handler registration and dispatch.
//!
//! - [`HandlerRegistry`] - per-discriminator handlers plus the two defaults
//! - [`Dispatcher`] - classifies a [`Message`](crate::types::Message) and
//!   invokes exactly one handler

mod dispatch;
mod registry;

pub use dispatch::Dispatcher;
pub use registry::{BoxFuture, HandlerRegistry};
