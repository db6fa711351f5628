//! Typed entities returned by the GraphQL surface.
//!
//! Field names and nullability mirror the backend schema (camelCase on the
//! wire). Every struct is `#[serde(default)]` so narrower server responses
//! still decode; fields the backend may null out are `Option`.

use serde::{Deserialize, Serialize};

/// Subscription state on a user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plus {
    pub expire_at: u64,
    pub cancelled: bool,
    pub icon: i64,
    pub coins: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Creator-program flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creator {
    pub allow_subscriptions: bool,
    pub dataset_tags: Vec<String>,
}

/// Public profile of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub gender: String,
    pub birthday: String,
    pub photo_uri: Option<String>,
}

/// Email registration state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Email {
    pub address: String,
    pub verified: bool,
}

/// Account-level UI settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub personal_room_order: Vec<String>,
    pub favorite_room_ids: Vec<String>,
    pub favorite_emojis: Vec<String>,
}

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub activated: bool,
    pub moderator: bool,
    pub username: String,
    pub display_name: String,
    pub plus: Plus,
    pub creator: Creator,
    pub profile: Profile,
    pub email: Email,
}

/// Generator quota usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Usage {
    pub generator: i64,
}

/// Session data returned by both login mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Login {
    pub auth_token: String,
    pub user: User,
    pub usage: Usage,
    pub settings: Settings,
}

/// Server-side announcement banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Announcement {
    pub date: u64,
    pub title: String,
    pub emojis: String,
    pub content: Vec<String>,
    pub text_color: String,
}

/// Greeting block returned alongside logins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Welcome {
    pub web_version: String,
    pub announcement: Announcement,
}

/// Combined result of a login call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResult {
    pub login: Login,
    pub welcome: Welcome,
}

/// Upvote/comment counters on a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kudos {
    pub id: String,
    pub upvoted: bool,
    pub upvotes: i64,
    pub comments: i64,
}

/// An attached training document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiDocument {
    pub id: String,
    pub order: i64,
    pub title: String,
    pub content: String,
    pub queue_status: String,
    pub queued_at: u64,
    pub built_at: u64,
    pub created_at: u64,
    pub updated_at: u64,
}

/// An AI training dataset ("trainer group").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiTrainerGroup {
    pub id: String,
    pub name: String,
    pub count: i64,
    pub deleted: bool,
    pub description: String,
    pub documents: Vec<AiDocument>,
    pub dominant_colors: Vec<String>,
    pub kudos: Kudos,
    pub nsfw: bool,
    pub personalities: Vec<Vec<String>>,
    pub pet_species_ids: Vec<String>,
    pub price: i64,
    pub profile_photo_uri: Option<String>,
    pub purchased: bool,
    pub status: String,
    pub tags: Vec<String>,
    pub updated_at: u64,
    pub user: User,
}

/// One training line inside a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetLine {
    pub id: String,
    pub user_message: String,
    pub message: String,
    pub asm: Option<String>,
    pub endearment: Option<String>,
    pub recent: Option<String>,
    pub time: Option<String>,
    pub deleted: bool,
    pub history: Vec<String>,
    pub ai_trainer_group_id: String,
}

/// A dialogue to upload into a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiDialogueInput {
    pub conditions: AiTrainingCondition,
    pub generated: bool,
    pub history: Vec<String>,
    pub message: String,
    pub user_message: String,
}

impl AiDialogueInput {
    /// Whether two dialogues would train the same line.
    ///
    /// Dialogues are duplicates iff `message`, `user_message`, the full
    /// `history` sequence (order-sensitive) and all four optional
    /// conditions compare equal, with `None` only ever equal to `None`.
    pub fn is_duplicate(&self, other: &Self) -> bool {
        self.message == other.message
            && self.user_message == other.user_message
            && self.conditions == other.conditions
            && self.history == other.history
    }
}

/// The four optional training conditions of a dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTrainingCondition {
    pub asm: Option<String>,
    pub endearment: Option<String>,
    pub recent: Option<String>,
    pub time: Option<String>,
}

/// Result of an `addToDataset` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiEditorResult {
    pub added: Vec<DatasetLine>,
    pub ai_trainer_group_id: String,
    pub count: i64,
    pub deleted_ids: Vec<String>,
    pub generated: Vec<DatasetLine>,
    pub message: String,
    pub message_type: String,
}

/// The AI companion living in a chat room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRoomPet {
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

/// A chat room as returned by the room query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRoom {
    pub id: String,
    pub room_version_number: i64,
    pub is_preview_room: bool,
    pub pet: Option<ChatRoomPet>,
}

/// One message from the room history query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRoomMessage {
    pub id: String,
    pub chat_room_id: String,
    pub user_id: Option<String>,
    pub message: String,
    pub attachment_uri: Option<String>,
    pub display_name: Option<String>,
    pub profile_photo_uri: Option<String>,
    pub created_at: u64,
}
