//! Passive reply values returned by handlers
//!
//! A handler answers with `Option<ReplyMsg>`; `None` means the callback is
//! acknowledged without a reply. Rendering the reply into the callback
//! response body is left to the webhook layer.

/// One article of a news reply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub pic_url: String,
    pub url: String,
}

/// Reply to an inbound notification
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyMsg {
    Text {
        content: String,
    },
    Image {
        media_id: String,
    },
    Voice {
        media_id: String,
    },
    Video {
        media_id: String,
        title: String,
        description: String,
    },
    Music {
        title: String,
        description: String,
        music_url: String,
        hq_music_url: String,
        thumb_media_id: String,
    },
    News {
        articles: Vec<Article>,
    },
    /// Hand the conversation over to customer service agents
    TransferCustomerService,
}

impl ReplyMsg {
    pub fn text(content: impl Into<String>) -> Self {
        ReplyMsg::Text {
            content: content.into(),
        }
    }

    pub fn image(media_id: impl Into<String>) -> Self {
        ReplyMsg::Image {
            media_id: media_id.into(),
        }
    }

    pub fn voice(media_id: impl Into<String>) -> Self {
        ReplyMsg::Voice {
            media_id: media_id.into(),
        }
    }

    pub fn news(articles: Vec<Article>) -> Self {
        ReplyMsg::News { articles }
    }

    /// `MsgType` value of the rendered reply
    pub fn msg_type(&self) -> &'static str {
        match self {
            ReplyMsg::Text { .. } => "text",
            ReplyMsg::Image { .. } => "image",
            ReplyMsg::Voice { .. } => "voice",
            ReplyMsg::Video { .. } => "video",
            ReplyMsg::Music { .. } => "music",
            ReplyMsg::News { .. } => "news",
            ReplyMsg::TransferCustomerService => "transfer_customer_service",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_msg_type() {
        assert_eq!(ReplyMsg::text("hi").msg_type(), "text");
        assert_eq!(ReplyMsg::image("m").msg_type(), "image");
        assert_eq!(ReplyMsg::news(vec![Article::default()]).msg_type(), "news");
        assert_eq!(
            ReplyMsg::TransferCustomerService.msg_type(),
            "transfer_customer_service"
        );
    }
}
