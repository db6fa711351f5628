//! GraphQL query client.
//!
//! Auth-bearing façade over a single HTTP endpoint: every operation is a
//! POST of `{"query": …, "variables": …}`, and every call after login
//! attaches the `auth_token` header. The header map is shared across calls
//! on the same client and mutated under a lock.
//!
//! # Example
//!
//! ```ignore
//! use kajiwoto_client::http::KajiwotoHttpClient;
//!
//! #[tokio::main]
//! async fn main() -> kajiwoto_client::Result<()> {
//!     let client = KajiwotoHttpClient::new("https://api.example.com/graphql");
//!     let result = client.login_user_pw("racer", "hunter2").await?;
//!     println!("hello {}", result.login.user.display_name);
//!
//!     let lines = client
//!         .get_dataset_lines("gRp1", "", &result.login.auth_token, 25, 0)
//!         .await?;
//!     println!("{} dataset lines", lines.len());
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod entities;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{KajiwotoError, Result};
use entities::{
    AiDialogueInput, AiEditorResult, AiTrainerGroup, ChatRoom, ChatRoomMessage, DatasetLine,
    LoginResult,
};

/// Editor identifier sent with dataset mutations.
const EDITOR_TYPE: &str = "kajitool";

/// GraphQL-over-HTTPS client for the request/response API.
#[derive(Debug)]
pub struct KajiwotoHttpClient {
    endpoint: String,
    http: reqwest::Client,
    headers: Mutex<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlReply<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlReplyError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlReplyError {
    message: String,
}

impl KajiwotoHttpClient {
    /// Create a client for the given GraphQL endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
            headers: Mutex::new(headers),
        }
    }

    /// Snapshot of the headers attached to every request.
    pub fn headers(&self) -> HashMap<String, String> {
        self.headers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Merge headers into the shared header map.
    pub fn add_headers(&self, new_headers: HashMap<String, String>) {
        let mut headers = self.headers.lock().unwrap_or_else(PoisonError::into_inner);
        headers.extend(new_headers);
    }

    fn set_auth_token(&self, auth_token: &str) {
        let mut headers = self.headers.lock().unwrap_or_else(PoisonError::into_inner);
        headers.insert("auth_token".to_string(), auth_token.to_string());
    }

    /// Login via username / password combination.
    pub async fn login_user_pw(&self, username: &str, password: &str) -> Result<LoginResult> {
        if username.is_empty() || password.is_empty() {
            return Err(KajiwotoError::InvalidCredentials);
        }

        let variables = json!({
            "usernameOrEmail": username,
            "password": password,
        });
        self.execute(document::LOGIN_USER_PW, variables).await
    }

    /// Login via a previously issued session token.
    ///
    /// Installs the token as the `auth_token` header for subsequent calls.
    pub async fn login_auth_token(&self, auth_token: &str) -> Result<LoginResult> {
        if auth_token.is_empty() {
            return Err(KajiwotoError::InvalidCredentials);
        }

        self.set_auth_token(auth_token);
        let variables = json!({
            "authToken": auth_token,
            "action": "",
        });
        self.execute(document::LOGIN_AUTH_TOKEN, variables).await
    }

    /// Fetch an AI trainer group by id.
    pub async fn get_ai_trainer_group(
        &self,
        ai_trainer_group_id: &str,
        auth_token: &str,
    ) -> Result<AiTrainerGroup> {
        if auth_token.is_empty() {
            return Err(KajiwotoError::InvalidCredentials);
        }
        if ai_trainer_group_id.is_empty() {
            return Err(KajiwotoError::InvalidArgument(
                "invalid trainer group ID".to_string(),
            ));
        }

        self.set_auth_token(auth_token);
        let variables = json!({ "aiTrainerGroupId": ai_trainer_group_id });

        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "aiTrainerGroup")]
            ai_trainer_group: AiTrainerGroup,
        }
        let data: Data = self.execute(document::AI_TRAINER_GROUP, variables).await?;
        Ok(data.ai_trainer_group)
    }

    /// Page through the lines of a dataset.
    ///
    /// `limit` must lie in `1..=100`, `offset` must be non-negative
    /// (enforced by the unsigned type).
    pub async fn get_dataset_lines(
        &self,
        ai_trainer_group_id: &str,
        search_query: &str,
        auth_token: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<DatasetLine>> {
        if auth_token.is_empty() {
            return Err(KajiwotoError::InvalidCredentials);
        }
        if ai_trainer_group_id.is_empty() {
            return Err(KajiwotoError::InvalidArgument(
                "invalid trainer group ID".to_string(),
            ));
        }
        if !(1..=100).contains(&limit) {
            return Err(KajiwotoError::InvalidArgument(
                "limit exceeds allowed range".to_string(),
            ));
        }

        self.set_auth_token(auth_token);
        let variables = json!({
            "aiTrainerGroupId": ai_trainer_group_id,
            "searchQuery": search_query,
            "limit": limit,
            "offset": offset,
        });

        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "datasetLines")]
            dataset_lines: Vec<DatasetLine>,
        }
        let data: Data = self.execute(document::DATASET_LINES, variables).await?;
        Ok(data.dataset_lines)
    }

    /// Upload dialogues into a dataset.
    pub async fn add_to_dataset(
        &self,
        ai_trainer_group_id: &str,
        auth_token: &str,
        dialogues: &[AiDialogueInput],
    ) -> Result<AiEditorResult> {
        if auth_token.is_empty() {
            return Err(KajiwotoError::InvalidCredentials);
        }

        self.set_auth_token(auth_token);
        let variables = json!({
            "aiTrainerGroupId": ai_trainer_group_id,
            "dialogues": dialogues,
            "editorType": EDITOR_TYPE,
            "generateResults": false,
        });

        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "addToDataset")]
            add_to_dataset: AiEditorResult,
        }
        let data: Data = self.execute(document::ADD_TO_DATASET, variables).await?;
        Ok(data.add_to_dataset)
    }

    /// Fetch chat-room metadata by id.
    pub async fn get_room(&self, chat_room_id: &str, auth_token: &str) -> Result<ChatRoom> {
        if auth_token.is_empty() {
            return Err(KajiwotoError::InvalidCredentials);
        }
        if chat_room_id.is_empty() {
            return Err(KajiwotoError::InvalidArgument(
                "invalid chat room ID".to_string(),
            ));
        }

        self.set_auth_token(auth_token);
        let variables = json!({ "chatRoomId": chat_room_id });

        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "chatRoom")]
            chat_room: ChatRoom,
        }
        let data: Data = self.execute(document::CHAT_ROOM, variables).await?;
        Ok(data.chat_room)
    }

    /// Fetch room messages older than `oldest_time` (milliseconds).
    pub async fn get_room_history(
        &self,
        chat_room_id: &str,
        oldest_time: u64,
        auth_token: &str,
    ) -> Result<Vec<ChatRoomMessage>> {
        if auth_token.is_empty() {
            return Err(KajiwotoError::InvalidCredentials);
        }
        if chat_room_id.is_empty() {
            return Err(KajiwotoError::InvalidArgument(
                "invalid chat room ID".to_string(),
            ));
        }

        self.set_auth_token(auth_token);
        let variables = json!({
            "chatRoomId": chat_room_id,
            "oldestTime": oldest_time,
        });

        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "chatRoomHistory")]
            chat_room_history: Vec<ChatRoomMessage>,
        }
        let data: Data = self.execute(document::CHAT_ROOM_HISTORY, variables).await?;
        Ok(data.chat_room_history)
    }

    /// POST one GraphQL document and decode the `data` payload.
    async fn execute<T: DeserializeOwned>(&self, document: &str, variables: Value) -> Result<T> {
        let body = json!({
            "query": document,
            "variables": variables,
        });

        let mut request = self.http.post(&self.endpoint);
        for (name, value) in self.headers() {
            request = request.header(name, value);
        }

        let response = request.json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(KajiwotoError::GraphQl(format!("HTTP {status}: {text}")));
        }

        let reply: GraphQlReply<T> = response.json().await?;
        if !reply.errors.is_empty() {
            let messages: Vec<String> = reply.errors.into_iter().map(|e| e.message).collect();
            return Err(KajiwotoError::GraphQl(messages.join("; ")));
        }
        reply
            .data
            .ok_or_else(|| KajiwotoError::GraphQl("response carried no data".to_string()))
    }
}
