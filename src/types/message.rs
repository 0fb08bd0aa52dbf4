//! Inbound callback envelope and its discriminators

use serde::Deserialize;

/// Primary discriminator carried in `MsgType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgType {
    Text,
    Image,
    Voice,
    Video,
    ShortVideo,
    Location,
    Link,
    /// Sentinel: the notification is a platform event, see [`EventType`].
    Event,
}

impl MsgType {
    /// Parse the wire value. `None` means the kind is not recognized.
    pub fn from_wire(value: &str) -> Option<Self> {
        let kind = match value {
            "text" => MsgType::Text,
            "image" => MsgType::Image,
            "voice" => MsgType::Voice,
            "video" => MsgType::Video,
            "shortvideo" => MsgType::ShortVideo,
            "location" => MsgType::Location,
            "link" => MsgType::Link,
            "event" => MsgType::Event,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MsgType::Text => "text",
            MsgType::Image => "image",
            MsgType::Voice => "voice",
            MsgType::Video => "video",
            MsgType::ShortVideo => "shortvideo",
            MsgType::Location => "location",
            MsgType::Link => "link",
            MsgType::Event => "event",
        }
    }
}

/// Secondary discriminator carried in `Event` when `MsgType` is `event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Subscribe,
    Unsubscribe,
    /// Periodic location report
    Location,
    /// Menu click
    Click,
    /// Menu link opened
    View,
    TemplateSendJobFinish,
    ScancodePush,
    ScancodeWaitmsg,
    PicSysphoto,
    PicPhotoOrAlbum,
    PicWeixin,
    LocationSelect,
    QualificationVerifySuccess,
    QualificationVerifyFail,
    NamingVerifySuccess,
    NamingVerifyFail,
    AnnualRenew,
    VerifyExpired,
}

impl EventType {
    /// Parse the wire value. `None` means the event is not recognized.
    pub fn from_wire(value: &str) -> Option<Self> {
        let event = match value {
            "subscribe" => EventType::Subscribe,
            "unsubscribe" => EventType::Unsubscribe,
            "LOCATION" => EventType::Location,
            "CLICK" => EventType::Click,
            "VIEW" => EventType::View,
            "TEMPLATESENDJOBFINISH" => EventType::TemplateSendJobFinish,
            "scancode_push" => EventType::ScancodePush,
            "scancode_waitmsg" => EventType::ScancodeWaitmsg,
            "pic_sysphoto" => EventType::PicSysphoto,
            "pic_photo_or_album" => EventType::PicPhotoOrAlbum,
            "pic_weixin" => EventType::PicWeixin,
            "location_select" => EventType::LocationSelect,
            "qualification_verify_success" => EventType::QualificationVerifySuccess,
            "qualification_verify_fail" => EventType::QualificationVerifyFail,
            "naming_verify_success" => EventType::NamingVerifySuccess,
            "naming_verify_fail" => EventType::NamingVerifyFail,
            "annual_renew" => EventType::AnnualRenew,
            "verify_expired" => EventType::VerifyExpired,
            _ => return None,
        };
        Some(event)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Subscribe => "subscribe",
            EventType::Unsubscribe => "unsubscribe",
            EventType::Location => "LOCATION",
            EventType::Click => "CLICK",
            EventType::View => "VIEW",
            EventType::TemplateSendJobFinish => "TEMPLATESENDJOBFINISH",
            EventType::ScancodePush => "scancode_push",
            EventType::ScancodeWaitmsg => "scancode_waitmsg",
            EventType::PicSysphoto => "pic_sysphoto",
            EventType::PicPhotoOrAlbum => "pic_photo_or_album",
            EventType::PicWeixin => "pic_weixin",
            EventType::LocationSelect => "location_select",
            EventType::QualificationVerifySuccess => "qualification_verify_success",
            EventType::QualificationVerifyFail => "qualification_verify_fail",
            EventType::NamingVerifySuccess => "naming_verify_success",
            EventType::NamingVerifyFail => "naming_verify_fail",
            EventType::AnnualRenew => "annual_renew",
            EventType::VerifyExpired => "verify_expired",
        }
    }
}

/// `ScanCodeInfo` block of scancode menu events
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScanCodeInfo {
    pub scan_type: String,
    pub scan_result: String,
}

/// One entry of `SendPicsInfo.PicList`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PicItem {
    pub pic_md5_sum: String,
}

/// `SendPicsInfo` block of photo menu events
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SendPicsInfo {
    pub count: u32,
    pub pic_list: Vec<PicItem>,
}

/// `SendLocationInfo` block of the location-select menu event
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SendLocationInfo {
    #[serde(rename = "Location_X")]
    pub location_x: f64,
    #[serde(rename = "Location_Y")]
    pub location_y: f64,
    #[serde(rename = "Scale")]
    pub scale: f64,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Poiname")]
    pub poiname: String,
}

/// Generic inbound notification, as pushed to the callback URL.
///
/// The webhook layer decodes it (with any serde format) and hands it to the
/// [`Dispatcher`](crate::handler::Dispatcher). Fields absent from a given
/// notification keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Message {
    pub to_user_name: String,
    pub from_user_name: String,
    pub create_time: i64,
    pub msg_type: String,

    // user messages
    pub content: String,
    #[serde(alias = "MsgID")]
    pub msg_id: i64,
    pub pic_url: String,
    pub media_id: String,
    pub format: String,
    pub recognition: String,
    pub thumb_media_id: String,
    #[serde(rename = "Location_X")]
    pub location_x: f64,
    #[serde(rename = "Location_Y")]
    pub location_y: f64,
    pub scale: f64,
    pub label: String,
    pub title: String,
    pub description: String,
    pub url: String,

    // events
    pub event: String,
    pub event_key: String,
    pub ticket: String,
    pub latitude: f64,
    pub longitude: f64,
    pub precision: f64,
    pub menu_id: String,
    pub status: String,
    pub scan_code_info: ScanCodeInfo,
    pub send_pics_info: SendPicsInfo,
    pub send_location_info: SendLocationInfo,
    pub expired_time: i64,
    pub fail_time: i64,
    pub fail_reason: String,
}

impl Message {
    /// Classified `MsgType`, `None` when unrecognized.
    pub fn kind(&self) -> Option<MsgType> {
        MsgType::from_wire(&self.msg_type)
    }

    /// Classified `Event`, `None` when unrecognized.
    pub fn event_type(&self) -> Option<EventType> {
        EventType::from_wire(&self.event)
    }
}
