//! Typed views of user messages
//!
//! Each view is an owned projection of a [`Message`], built with `From<&Message>`
//! by the dispatcher before the registered handler is called.

use super::message::Message;

/// Header fields shared by every notification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonFields {
    /// Official account that received the notification
    pub to_user_name: String,
    /// OpenID of the sender
    pub from_user_name: String,
    /// Unix timestamp in seconds
    pub create_time: i64,
}

impl From<&Message> for CommonFields {
    fn from(msg: &Message) -> Self {
        Self {
            to_user_name: msg.to_user_name.clone(),
            from_user_name: msg.from_user_name.clone(),
            create_time: msg.create_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecvText {
    pub common: CommonFields,
    pub msg_id: i64,
    pub content: String,
}

impl From<&Message> for RecvText {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            msg_id: msg.msg_id,
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecvImage {
    pub common: CommonFields,
    pub msg_id: i64,
    pub pic_url: String,
    pub media_id: String,
}

impl From<&Message> for RecvImage {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            msg_id: msg.msg_id,
            pic_url: msg.pic_url.clone(),
            media_id: msg.media_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecvVoice {
    pub common: CommonFields,
    pub msg_id: i64,
    pub media_id: String,
    /// Audio codec, e.g. `amr` or `speex`
    pub format: String,
    /// Speech recognition result, empty unless enabled for the account
    pub recognition: String,
}

impl From<&Message> for RecvVoice {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            msg_id: msg.msg_id,
            media_id: msg.media_id.clone(),
            format: msg.format.clone(),
            recognition: msg.recognition.clone(),
        }
    }
}

/// Video or short video message
#[derive(Debug, Clone, PartialEq)]
pub struct RecvVideo {
    pub common: CommonFields,
    pub msg_id: i64,
    pub media_id: String,
    pub thumb_media_id: String,
}

impl From<&Message> for RecvVideo {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            msg_id: msg.msg_id,
            media_id: msg.media_id.clone(),
            thumb_media_id: msg.thumb_media_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecvLocation {
    pub common: CommonFields,
    pub msg_id: i64,
    /// Latitude
    pub location_x: f64,
    /// Longitude
    pub location_y: f64,
    /// Map zoom level
    pub scale: f64,
    pub label: String,
}

impl From<&Message> for RecvLocation {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            msg_id: msg.msg_id,
            location_x: msg.location_x,
            location_y: msg.location_y,
            scale: msg.scale,
            label: msg.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecvLink {
    pub common: CommonFields,
    pub msg_id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl From<&Message> for RecvLink {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            msg_id: msg.msg_id,
            title: msg.title.clone(),
            description: msg.description.clone(),
            url: msg.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(msg_type: &str) -> Message {
        Message {
            to_user_name: "gh_account".to_string(),
            from_user_name: "oSender".to_string(),
            create_time: 1_700_000_000,
            msg_type: msg_type.to_string(),
            msg_id: 42,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_view() {
        let msg = Message {
            content: "hi".to_string(),
            ..message("text")
        };
        let view = RecvText::from(&msg);
        assert_eq!(view.common.from_user_name, "oSender");
        assert_eq!(view.common.create_time, 1_700_000_000);
        assert_eq!(view.msg_id, 42);
        assert_eq!(view.content, "hi");
    }

    #[test]
    fn test_location_view() {
        let msg = Message {
            location_x: 23.134521,
            location_y: 113.358803,
            scale: 20.0,
            label: "somewhere".to_string(),
            ..message("location")
        };
        let view = RecvLocation::from(&msg);
        assert_eq!(view.location_x, 23.134521);
        assert_eq!(view.location_y, 113.358803);
        assert_eq!(view.label, "somewhere");
    }

    #[test]
    fn test_voice_view_keeps_recognition() {
        let msg = Message {
            media_id: "m1".to_string(),
            format: "amr".to_string(),
            recognition: "hello".to_string(),
            ..message("voice")
        };
        let view = RecvVoice::from(&msg);
        assert_eq!(view.format, "amr");
        assert_eq!(view.recognition, "hello");
    }
}
