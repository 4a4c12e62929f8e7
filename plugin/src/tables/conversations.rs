//! The `slack_conversation` table.

use serde_json::{Value, json};

use crate::client::types::{Conversation, JsonTime};
use crate::transform::{TransformError, json_time_to_datetime};

use super::{Column, ColumnKind, TableDef, timestamp_value};

/// Column order must match `row()` value order.
const COLUMNS: &[Column] = &[
    Column {
        name: "id",
        kind: ColumnKind::Text,
        description: "Workspace-unique conversation ID",
    },
    Column {
        name: "name",
        kind: ColumnKind::Text,
        description: "Channel name, without the leading #",
    },
    Column {
        name: "is_channel",
        kind: ColumnKind::Boolean,
        description: "Whether this is a public channel",
    },
    Column {
        name: "is_group",
        kind: ColumnKind::Boolean,
        description: "Whether this is a private channel",
    },
    Column {
        name: "is_im",
        kind: ColumnKind::Boolean,
        description: "Whether this is a direct message",
    },
    Column {
        name: "is_archived",
        kind: ColumnKind::Boolean,
        description: "Whether the conversation is archived",
    },
    Column {
        name: "is_general",
        kind: ColumnKind::Boolean,
        description: "Whether this is the workspace's general channel",
    },
    Column {
        name: "is_shared",
        kind: ColumnKind::Boolean,
        description: "Whether the conversation is shared across workspaces",
    },
    Column {
        name: "is_member",
        kind: ColumnKind::Boolean,
        description: "Whether the calling identity is a member",
    },
    Column {
        name: "creator",
        kind: ColumnKind::Text,
        description: "User ID of the creator",
    },
    Column {
        name: "num_members",
        kind: ColumnKind::Integer,
        description: "Member count, when the API provides it",
    },
    Column {
        name: "topic",
        kind: ColumnKind::Text,
        description: "Current topic text",
    },
    Column {
        name: "purpose",
        kind: ColumnKind::Text,
        description: "Current purpose text",
    },
    Column {
        name: "created",
        kind: ColumnKind::Timestamp,
        description: "When the conversation was created",
    },
    Column {
        name: "topic_last_set",
        kind: ColumnKind::Timestamp,
        description: "When the topic last changed, null when never set",
    },
];

pub fn table() -> TableDef {
    TableDef {
        name: "slack_conversation",
        description: "Channels, groups, and DMs visible to the token",
        columns: COLUMNS,
    }
}

/// Map one API conversation onto the column list.
pub fn row(conversation: &Conversation) -> Result<Vec<Value>, TransformError> {
    let topic_last_set = conversation
        .topic
        .as_ref()
        .map(|t| t.last_set)
        .unwrap_or(JsonTime(0));
    Ok(vec![
        json!(conversation.id),
        json!(conversation.name),
        json!(conversation.is_channel),
        json!(conversation.is_group),
        json!(conversation.is_im),
        json!(conversation.is_archived),
        json!(conversation.is_general),
        json!(conversation.is_shared),
        json!(conversation.is_member),
        json!(conversation.creator),
        json!(conversation.num_members),
        json!(conversation.topic.as_ref().map(|t| &t.value)),
        json!(conversation.purpose.as_ref().map(|p| &p.value)),
        timestamp_value(json_time_to_datetime(conversation.created)?),
        timestamp_value(json_time_to_datetime(topic_last_set)?),
    ])
}
