//! Handler registry for dispatching callbacks by discriminator.
//!
//! The registry maps each recognized `MsgType` / `Event` value to at most one
//! handler, and holds the two default handlers used when a recognized
//! discriminator has no entry. It is filled once at startup and then frozen
//! behind an `Arc` by [`Dispatcher::new`](super::Dispatcher::new).
//!
//! # Example
//!
//! ```rust
//! use weixin_mp::handler::HandlerRegistry;
//! use weixin_mp::types::ReplyMsg;
//!
//! let mut registry = HandlerRegistry::new();
//!
//! registry
//!     .on_text(|msg| async move { Some(ReplyMsg::text(msg.content)) })
//!     .on_subscribe(|_event| async { Some(ReplyMsg::text("welcome")) });
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use log::debug;

use crate::types::{
    EventClick, EventLocation, EventLocationSelect, EventPic, EventScancode, EventSubscribe,
    EventTemplateSendJobFinish, EventType, EventVerifyExpiry, EventVerifyFail, EventVerifySuccess,
    EventView, Message, MsgType, RecvImage, RecvLink, RecvLocation, RecvText, RecvVideo,
    RecvVoice, ReplyMsg,
};

/// Boxed future for handler results.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Type-erased handler: builds its view from the envelope and runs.
pub(crate) type ErasedHandler =
    Box<dyn Fn(&Message) -> BoxFuture<'static, Option<ReplyMsg>> + Send + Sync>;

fn typed<V, F, Fut>(handler: F) -> ErasedHandler
where
    V: for<'m> From<&'m Message> + Send + 'static,
    F: Fn(V) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
{
    Box::new(move |msg: &Message| -> BoxFuture<'static, Option<ReplyMsg>> {
        Box::pin(handler(V::from(msg)))
    })
}

fn raw<F, Fut>(handler: F) -> ErasedHandler
where
    F: Fn(Message) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
{
    Box::new(move |msg: &Message| -> BoxFuture<'static, Option<ReplyMsg>> {
        Box::pin(handler(msg.clone()))
    })
}

fn default_message_handler() -> ErasedHandler {
    Box::new(|msg: &Message| -> BoxFuture<'static, Option<ReplyMsg>> {
        debug!(
            "unregistered receive message handler {}, use message default handler",
            msg.msg_type
        );
        Box::pin(async { None })
    })
}

fn default_event_handler() -> ErasedHandler {
    Box::new(|msg: &Message| -> BoxFuture<'static, Option<ReplyMsg>> {
        debug!(
            "unregistered receive event handler {}, use event default handler",
            msg.event
        );
        Box::pin(async { None })
    })
}

/// Registry mapping discriminators to handlers.
///
/// Registering a second handler for the same discriminator replaces the
/// first. A discriminator without an entry is routed to the matching default
/// handler at dispatch time.
pub struct HandlerRegistry {
    /// Message handlers by `MsgType` (never contains `MsgType::Event`).
    messages: HashMap<MsgType, ErasedHandler>,
    /// Event handlers by `Event`.
    events: HashMap<EventType, ErasedHandler>,
    message_default: ErasedHandler,
    event_default: ErasedHandler,
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("messages", &self.messages.keys().collect::<Vec<_>>())
            .field("events", &self.events.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerRegistry {
    /// Create an empty registry with the logging default handlers.
    pub fn new() -> Self {
        Self {
            messages: HashMap::new(),
            events: HashMap::new(),
            message_default: default_message_handler(),
            event_default: default_event_handler(),
        }
    }

    pub(crate) fn message_handler(&self, kind: MsgType) -> Option<&ErasedHandler> {
        self.messages.get(&kind)
    }

    pub(crate) fn event_handler(&self, event: EventType) -> Option<&ErasedHandler> {
        self.events.get(&event)
    }

    pub(crate) fn message_default(&self) -> &ErasedHandler {
        &self.message_default
    }

    pub(crate) fn event_default(&self) -> &ErasedHandler {
        &self.event_default
    }

    /// Whether a handler is registered for `kind`.
    pub fn has_message_handler(&self, kind: MsgType) -> bool {
        self.messages.contains_key(&kind)
    }

    /// Whether a handler is registered for `event`.
    pub fn has_event_handler(&self, event: EventType) -> bool {
        self.events.contains_key(&event)
    }

    /// Remove the handler for `kind`, sending it back to the default path.
    pub fn remove_message_handler(&mut self, kind: MsgType) -> &mut Self {
        self.messages.remove(&kind);
        self
    }

    /// Remove the handler for `event`, sending it back to the default path.
    pub fn remove_event_handler(&mut self, event: EventType) -> &mut Self {
        self.events.remove(&event);
        self
    }

    /// Replace the handler used for recognized message kinds that have no
    /// registered handler. It receives the raw envelope and must always
    /// return.
    pub fn set_message_default<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(Message) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.message_default = raw(handler);
        self
    }

    /// Replace the handler used for recognized events that have no
    /// registered handler. It receives the raw envelope and must always
    /// return.
    pub fn set_event_default<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(Message) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.event_default = raw(handler);
        self
    }

    fn set_message<V, F, Fut>(&mut self, kind: MsgType, handler: F) -> &mut Self
    where
        V: for<'m> From<&'m Message> + Send + 'static,
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.messages.insert(kind, typed::<V, F, Fut>(handler));
        self
    }

    fn set_event<V, F, Fut>(&mut self, event: EventType, handler: F) -> &mut Self
    where
        V: for<'m> From<&'m Message> + Send + 'static,
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.events.insert(event, typed::<V, F, Fut>(handler));
        self
    }

    pub fn on_text<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(RecvText) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_message::<RecvText, F, Fut>(MsgType::Text, handler)
    }

    pub fn on_image<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(RecvImage) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_message::<RecvImage, F, Fut>(MsgType::Image, handler)
    }

    pub fn on_voice<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(RecvVoice) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_message::<RecvVoice, F, Fut>(MsgType::Voice, handler)
    }

    pub fn on_video<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(RecvVideo) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_message::<RecvVideo, F, Fut>(MsgType::Video, handler)
    }

    pub fn on_short_video<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(RecvVideo) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_message::<RecvVideo, F, Fut>(MsgType::ShortVideo, handler)
    }

    pub fn on_location<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(RecvLocation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_message::<RecvLocation, F, Fut>(MsgType::Location, handler)
    }

    pub fn on_link<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(RecvLink) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_message::<RecvLink, F, Fut>(MsgType::Link, handler)
    }

    pub fn on_subscribe<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventSubscribe) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventSubscribe, F, Fut>(EventType::Subscribe, handler)
    }

    pub fn on_unsubscribe<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventSubscribe) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventSubscribe, F, Fut>(EventType::Unsubscribe, handler)
    }

    pub fn on_location_report<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventLocation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventLocation, F, Fut>(EventType::Location, handler)
    }

    pub fn on_click<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventClick) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventClick, F, Fut>(EventType::Click, handler)
    }

    pub fn on_view<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventView) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventView, F, Fut>(EventType::View, handler)
    }

    pub fn on_template_send_job_finish<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventTemplateSendJobFinish) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventTemplateSendJobFinish, F, Fut>(
            EventType::TemplateSendJobFinish,
            handler,
        )
    }

    pub fn on_scancode_push<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventScancode) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventScancode, F, Fut>(EventType::ScancodePush, handler)
    }

    pub fn on_scancode_waitmsg<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventScancode) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventScancode, F, Fut>(EventType::ScancodeWaitmsg, handler)
    }

    pub fn on_pic_sysphoto<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventPic) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventPic, F, Fut>(EventType::PicSysphoto, handler)
    }

    pub fn on_pic_photo_or_album<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventPic) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventPic, F, Fut>(EventType::PicPhotoOrAlbum, handler)
    }

    pub fn on_pic_weixin<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventPic) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventPic, F, Fut>(EventType::PicWeixin, handler)
    }

    pub fn on_location_select<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventLocationSelect) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventLocationSelect, F, Fut>(EventType::LocationSelect, handler)
    }

    pub fn on_qualification_verify_success<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventVerifySuccess) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventVerifySuccess, F, Fut>(EventType::QualificationVerifySuccess, handler)
    }

    pub fn on_qualification_verify_fail<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventVerifyFail) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventVerifyFail, F, Fut>(EventType::QualificationVerifyFail, handler)
    }

    pub fn on_naming_verify_success<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventVerifySuccess) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventVerifySuccess, F, Fut>(EventType::NamingVerifySuccess, handler)
    }

    pub fn on_naming_verify_fail<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventVerifyFail) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventVerifyFail, F, Fut>(EventType::NamingVerifyFail, handler)
    }

    pub fn on_annual_renew<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventVerifyExpiry) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventVerifyExpiry, F, Fut>(EventType::AnnualRenew, handler)
    }

    pub fn on_verify_expired<F, Fut>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(EventVerifyExpiry) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ReplyMsg>> + Send + 'static,
    {
        self.set_event::<EventVerifyExpiry, F, Fut>(EventType::VerifyExpired, handler)
    }
}
