//! Two-level callback dispatch
//!
//! A notification is classified by `MsgType`, and `event` notifications
//! again by `Event`. At each level there are three outcomes:
//!
//! - recognized with a registered handler: that handler runs
//! - recognized without a handler: the level's default handler runs with
//!   the raw envelope
//! - unrecognized: an error is logged and no reply is produced; the default
//!   handler is not called
//!
//! Dispatch never fails. The webhook response must succeed even for
//! notifications the application does not handle, otherwise the platform
//! keeps redelivering them.

use std::sync::Arc;

use log::{debug, error};

use super::registry::HandlerRegistry;
use crate::types::{Message, MsgType, ReplyMsg};

/// Routes inbound notifications to the handlers of a frozen registry.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use weixin_mp::handler::{Dispatcher, HandlerRegistry};
/// use weixin_mp::types::{Message, ReplyMsg};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut registry = HandlerRegistry::new();
/// registry.on_text(|msg| async move { Some(ReplyMsg::text(format!("echo: {}", msg.content))) });
///
/// let dispatcher = Dispatcher::new(Arc::new(registry));
///
/// let msg = Message {
///     msg_type: "text".to_string(),
///     content: "hi".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(dispatcher.handle_message(&msg).await, Some(ReplyMsg::text("echo: hi")));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<HandlerRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Dispatch one notification and return the handler's reply.
    pub async fn handle_message(&self, msg: &Message) -> Option<ReplyMsg> {
        debug!("process `{}` message", msg.msg_type);

        let Some(kind) = msg.kind() else {
            error!("unexpected receive MsgType: {}", msg.msg_type);
            return None;
        };

        if kind == MsgType::Event {
            return self.handle_event(msg).await;
        }

        match self.registry.message_handler(kind) {
            Some(handler) => handler(msg).await,
            None => (self.registry.message_default())(msg).await,
        }
    }

    /// Dispatch an `event` notification by its `Event` value.
    ///
    /// Called by [`handle_message`](Self::handle_message); exposed for
    /// webhook layers that already know the notification is an event.
    pub async fn handle_event(&self, msg: &Message) -> Option<ReplyMsg> {
        debug!("process `{}` event", msg.event);

        let Some(event) = msg.event_type() else {
            error!("unexpected receive EventType: {}", msg.event);
            return None;
        };

        match self.registry.event_handler(event) {
            Some(handler) => handler(msg).await,
            None => (self.registry.event_default())(msg).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn message(msg_type: &str, event: &str) -> Message {
        Message {
            msg_type: msg_type.to_string(),
            event: event.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_msg_type_skips_default() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut registry = HandlerRegistry::new();
        registry.set_message_default(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Some(ReplyMsg::text("default")) }
        });
        let dispatcher = Dispatcher::new(Arc::new(registry));

        assert_eq!(dispatcher.handle_message(&message("bogus", "")).await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_event_skips_event_default() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut registry = HandlerRegistry::new();
        registry.set_event_default(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Some(ReplyMsg::text("default")) }
        });
        let dispatcher = Dispatcher::new(Arc::new(registry));

        for event in ["SCAN", "MASSSENDJOBFINISH"] {
            assert_eq!(dispatcher.handle_message(&message("event", event)).await, None);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_event_kind_routes_to_event_level() {
        let mut registry = HandlerRegistry::new();
        registry.on_click(|event| async move { Some(ReplyMsg::text(event.event_key)) });
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let msg = Message {
            event_key: "V1001_TODAY_MUSIC".to_string(),
            ..message("event", "CLICK")
        };
        assert_eq!(
            dispatcher.handle_message(&msg).await,
            Some(ReplyMsg::text("V1001_TODAY_MUSIC"))
        );
    }

    #[tokio::test]
    async fn test_message_default_not_used_for_events() {
        let mut registry = HandlerRegistry::new();
        registry.set_message_default(|_| async { Some(ReplyMsg::text("message default")) });
        let dispatcher = Dispatcher::new(Arc::new(registry));

        assert_eq!(
            dispatcher.handle_message(&message("event", "subscribe")).await,
            None
        );
    }
}
