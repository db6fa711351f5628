//! JSON field shapes carried inside RPC payload slots.
//!
//! Field declaration order is the wire order: the backend performs
//! signature-like comparisons on the serialized bytes, so structs here are
//! re-emitted with exactly the key sequence the official web client uses.
//! Optional fields fall into two groups: always-emitted nullables
//! (serialized as `null` when absent) and omitted-when-empty fields
//! (`skip_serializing_if`), matching the upstream emitter.

use serde::{Deserialize, Serialize};

/// Identity block attached to most client→server RPCs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub display_name: String,
    pub guest: bool,
    pub profile_photo_uri: Option<String>,
    /// Local half-hour clock hint, `hours*100 + (0|30)`.
    pub time: i64,
    pub user_id: String,
    pub username: String,
}

/// Identity block inside server status pushes; no `time`, adds `status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUserData {
    pub display_name: String,
    pub guest: bool,
    pub profile_photo_uri: Option<String>,
    pub user_id: String,
    pub username: String,
    pub status: String,
}

/// Presence state announced by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_ids: Option<Vec<String>>,
    pub status: String,
}

/// Bare chat-room reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomId {
    pub chat_room_id: String,
}

/// Wrapper around [`StatusUserData`] in server `userStatus` pushes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatusData {
    pub data: StatusUserData,
}

/// Arguments of the `subscribe` RPC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeArgs {
    pub chat_room_ids: Vec<String>,
    pub kaji_id: Option<String>,
}

/// Room context sent with `chatEnter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomData {
    pub chat_room_id: String,
    pub last_messages: Vec<ChatMessage>,
    pub is_preview_room: bool,
}

/// A past message inside [`ChatRoomData::last_messages`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub created_at: u64,
    pub message: String,
}

/// Payload of the `chatSend` RPC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageCreate {
    pub message: ChatMessageCreateData,
    pub room_version_number: i64,
    /// Socket ids of the target room's channel, observed from a prior
    /// `join-room` activity push.
    pub room_socket_ids: Vec<String>,
}

/// The message body inside [`ChatMessageCreate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageCreateData {
    pub id: String,
    pub chat_room_id: String,
    pub user_id: String,
    pub message: String,
    pub attachment_uri: Option<String>,
}

/// Payload of the `chatSubmit` RPC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSubmitData {
    pub chat_room_id: String,
    pub messages: Vec<String>,
    pub role: SubmitRole,
    pub emoji: Option<String>,
    pub emoji_scene_id: Option<String>,
    pub platform: String,
}

/// Role marker in `chatSubmit`; always observed empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRole {}

/// Structurally empty placeholder slot.
///
/// `deny_unknown_fields` keeps a placeholder slot from swallowing a typed
/// element during best-match binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Empty {}

/// Timestamp-plus-token pair closing every authenticated RPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub timestamp: String,
    pub secret: String,
}

/// Wrapper around [`ChatActivity`] in server `chatActivity` pushes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatActivityData {
    pub data: ChatActivity,
}

/// A single room event: join-room, activity, message or petMessage.
///
/// Exactly one of the optional bodies is typically present, selected by
/// `action`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatActivity {
    pub action: String,
    pub chat_room_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ActivityMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_data: Option<ActivityPetData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ActivityChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<ActivityInteraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket_ids: Option<Vec<String>>,
}

/// Chat message inside an activity push, user- or pet-authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub chat_room_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kajiwoto_pet_id: Option<String>,
    pub message: String,
    pub attachment_uri: Option<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_uri: Option<String>,
    pub created_at: u64,
}

/// Typing/presence activity inside an activity push.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: String,
    pub display_name: String,
    pub activity_at: u64,
}

/// AI companion state delivered with join-room and petMessage events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPetData {
    pub id: String,
    pub chat_room_id: String,
    pub pet_species_id: String,
    pub kaji_id: String,
    pub owner_id: String,
    pub owner_display_name: String,
    pub owner_profile_photo_uri: Option<String>,
    pub name: String,
    pub kaji_name: String,
    pub gender: String,
    pub persona: String,
    pub stage: Option<String>,
    pub state: String,
    pub mood: String,
    pub status_photo_uri: Option<String>,
    pub dominant_colors: Vec<String>,
    pub status_message: String,
}

/// Channel roster attached to room events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityChannel {
    /// Channel version.
    pub v: u64,
    /// Channel user list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<ChannelUser>>,
}

/// A user entry in the channel roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelUser {
    pub id: String,
    pub guest_id: String,
    pub socket_ids: Vec<String>,
    pub guest: bool,
    pub display_name: String,
    pub username: String,
    pub profile_photo_uri: Option<String>,
}

/// Scene interaction hint on petMessage events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInteraction {
    pub show_scene: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Authentication request sent as the body of the connect frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub api_key: String,
}

/// Authentication reply; a non-empty `sid` confirms the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_data_key_order() {
        let user = UserData {
            display_name: "RuntimeRacer".to_string(),
            guest: false,
            profile_photo_uri: Some("a.jpg".to_string()),
            time: 2030,
            user_id: "a1b2".to_string(),
            username: "RuntimeRacer".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"a.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"}"#
        );
    }

    #[test]
    fn test_secret_key_order() {
        let secret = Secret {
            timestamp: "1675538167859".to_string(),
            secret: "MTAyMjA3ODI4MjM5Mzk5".to_string(),
        };
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"1675538167859","secret":"MTAyMjA3ODI4MjM5Mzk5"}"#
        );
    }

    #[test]
    fn test_nullable_fields_serialize_null() {
        let args = SubscribeArgs {
            chat_room_ids: vec!["c3d4".to_string()],
            kaji_id: None,
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"chatRoomIds":["c3d4"],"kajiId":null}"#
        );
    }

    #[test]
    fn test_omitted_fields_stay_absent() {
        let status = UserStatus {
            friend_ids: None,
            status: "ONLINE".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            r#"{"status":"ONLINE"}"#
        );

        let activity = ChatActivity {
            action: "activity".to_string(),
            chat_room_id: "c3d4".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&activity).unwrap(),
            r#"{"action":"activity","chatRoomId":"c3d4"}"#
        );
    }

    #[test]
    fn test_empty_placeholder_rejects_populated_objects() {
        assert!(serde_json::from_str::<Empty>("{}").is_ok());
        assert!(serde_json::from_str::<Empty>(r#"{"chatRoomId":"x"}"#).is_err());
    }

    #[test]
    fn test_submit_role_serializes_as_object() {
        assert_eq!(serde_json::to_string(&SubmitRole {}).unwrap(), "{}");
    }

    #[test]
    fn test_auth_response_sid_optional() {
        let rejected: AuthResponse = serde_json::from_str(r#"{"message":"bad key"}"#).unwrap();
        assert!(rejected.sid.is_empty());
        assert_eq!(rejected.message, "bad key");

        let granted: AuthResponse = serde_json::from_str(r#"{"sid":"s-1"}"#).unwrap();
        assert_eq!(granted.sid, "s-1");
    }
}
