//! Wire types for the Web API responses the tables consume.
//!
//! Field coverage is deliberately partial: only what the table catalog
//! serves. Unknown payload fields are ignored on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Slack's integer-seconds timestamp as it appears in JSON payloads.
///
/// A distinct type rather than a bare `i64` so the wrapper encoding cannot
/// be confused with plain integer-seconds fields at call sites. Zero means
/// the field was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonTime(pub i64);

impl JsonTime {
    /// Whether this carries the unset sentinel (epoch zero).
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// The instant this value names, or `None` when chrono cannot
    /// represent it.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

/// `auth.test` payload: workspace and identity behind a token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTest {
    pub url: String,
    pub team: String,
    pub user: String,
    pub team_id: String,
    pub user_id: String,
}

/// One member from `users.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub tz: Option<String>,
    /// Last profile change; zero when never recorded.
    #[serde(default)]
    pub updated: JsonTime,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub status_emoji: String,
    /// Plain integer seconds, not the wrapper; zero when the status never
    /// expires.
    #[serde(default)]
    pub status_expiration: i64,
}

/// One channel from `conversations.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_channel: bool,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub is_im: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_general: bool,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub created: JsonTime,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub num_members: Option<i64>,
    #[serde(default)]
    pub topic: Option<ConversationTopic>,
    #[serde(default)]
    pub purpose: Option<ConversationTopic>,
}

/// Topic and purpose share one shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationTopic {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub last_set: JsonTime,
}

/// One message from `conversations.history`.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub subtype: Option<String>,
    /// Decimal-string seconds with sub-second precision,
    /// e.g. `"1612085967.000300"`. Doubles as the message ID.
    pub ts: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub thread_ts: Option<String>,
    #[serde(default)]
    pub reply_count: Option<i64>,
    #[serde(default)]
    pub edited: Option<MessageEdited>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageEdited {
    #[serde(default)]
    pub user: String,
    pub ts: String,
}

/// Pagination envelope on list methods. An empty `next_cursor` means the
/// last page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationsPage {
    #[serde(default)]
    pub channels: Vec<Conversation>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPage {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}
