//! Typed views of platform events

use super::message::{Message, ScanCodeInfo, SendLocationInfo, SendPicsInfo};
use super::received::CommonFields;

/// Subscribe, unsubscribe and QR scan events.
///
/// For a follow triggered by a parametric QR code, `event_key` carries the
/// `qrscene_` prefixed scene value and `ticket` the code ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSubscribe {
    pub common: CommonFields,
    pub event_key: String,
    pub ticket: String,
}

impl From<&Message> for EventSubscribe {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            event_key: msg.event_key.clone(),
            ticket: msg.ticket.clone(),
        }
    }
}

/// Location report
#[derive(Debug, Clone, PartialEq)]
pub struct EventLocation {
    pub common: CommonFields,
    pub latitude: f64,
    pub longitude: f64,
    pub precision: f64,
}

impl From<&Message> for EventLocation {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            latitude: msg.latitude,
            longitude: msg.longitude,
            precision: msg.precision,
        }
    }
}

/// Menu click
#[derive(Debug, Clone, PartialEq)]
pub struct EventClick {
    pub common: CommonFields,
    pub event_key: String,
}

impl From<&Message> for EventClick {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            event_key: msg.event_key.clone(),
        }
    }
}

/// Menu link opened. `event_key` is the target URL.
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub common: CommonFields,
    pub event_key: String,
    pub menu_id: String,
}

impl From<&Message> for EventView {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            event_key: msg.event_key.clone(),
            menu_id: msg.menu_id.clone(),
        }
    }
}

/// Template message delivery report
#[derive(Debug, Clone, PartialEq)]
pub struct EventTemplateSendJobFinish {
    pub common: CommonFields,
    pub msg_id: i64,
    /// `success`, `failed:user block` or `failed: system failed`
    pub status: String,
}

impl From<&Message> for EventTemplateSendJobFinish {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            msg_id: msg.msg_id,
            status: msg.status.clone(),
        }
    }
}

/// `scancode_push` and `scancode_waitmsg` menu events
#[derive(Debug, Clone, PartialEq)]
pub struct EventScancode {
    pub common: CommonFields,
    pub event_key: String,
    pub scan_code_info: ScanCodeInfo,
}

impl From<&Message> for EventScancode {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            event_key: msg.event_key.clone(),
            scan_code_info: msg.scan_code_info.clone(),
        }
    }
}

/// `pic_sysphoto`, `pic_photo_or_album` and `pic_weixin` menu events
#[derive(Debug, Clone, PartialEq)]
pub struct EventPic {
    pub common: CommonFields,
    pub event_key: String,
    pub send_pics_info: SendPicsInfo,
}

impl From<&Message> for EventPic {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            event_key: msg.event_key.clone(),
            send_pics_info: msg.send_pics_info.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventLocationSelect {
    pub common: CommonFields,
    pub event_key: String,
    pub send_location_info: SendLocationInfo,
}

impl From<&Message> for EventLocationSelect {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            event_key: msg.event_key.clone(),
            send_location_info: msg.send_location_info.clone(),
        }
    }
}

/// Qualification or naming verification succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct EventVerifySuccess {
    pub common: CommonFields,
    /// Unix timestamp when the verification lapses
    pub expired_time: i64,
}

impl From<&Message> for EventVerifySuccess {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            expired_time: msg.expired_time,
        }
    }
}

/// Qualification or naming verification failed
#[derive(Debug, Clone, PartialEq)]
pub struct EventVerifyFail {
    pub common: CommonFields,
    pub fail_time: i64,
    pub fail_reason: String,
}

impl From<&Message> for EventVerifyFail {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            fail_time: msg.fail_time,
            fail_reason: msg.fail_reason.clone(),
        }
    }
}

/// Annual renewal reminder or verification expiry
#[derive(Debug, Clone, PartialEq)]
pub struct EventVerifyExpiry {
    pub common: CommonFields,
    pub expired_time: i64,
}

impl From<&Message> for EventVerifyExpiry {
    fn from(msg: &Message) -> Self {
        Self {
            common: msg.into(),
            expired_time: msg.expired_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::message::PicItem;

    #[test]
    fn test_subscribe_from_qr_scene() {
        let msg = Message {
            msg_type: "event".to_string(),
            event: "subscribe".to_string(),
            event_key: "qrscene_123".to_string(),
            ticket: "TICKET".to_string(),
            ..Default::default()
        };
        let view = EventSubscribe::from(&msg);
        assert_eq!(view.event_key, "qrscene_123");
        assert_eq!(view.ticket, "TICKET");
    }

    #[test]
    fn test_pic_view_copies_pic_list() {
        let msg = Message {
            msg_type: "event".to_string(),
            event: "pic_weixin".to_string(),
            send_pics_info: SendPicsInfo {
                count: 1,
                pic_list: vec![PicItem {
                    pic_md5_sum: "5a75aaca956d97be686719218f275c6b".to_string(),
                }],
            },
            ..Default::default()
        };
        let view = EventPic::from(&msg);
        assert_eq!(view.send_pics_info.count, 1);
        assert_eq!(view.send_pics_info.pic_list.len(), 1);
    }

    #[test]
    fn test_verify_fail_view() {
        let msg = Message {
            event: "naming_verify_fail".to_string(),
            fail_time: 1_442_401_122,
            fail_reason: "by time".to_string(),
            ..Default::default()
        };
        let view = EventVerifyFail::from(&msg);
        assert_eq!(view.fail_time, 1_442_401_122);
        assert_eq!(view.fail_reason, "by time");
    }
}
