//! The `slack_message` table.

use serde_json::{Value, json};

use crate::client::types::Message;
use crate::transform::{TransformError, seconds_str_to_datetime};

use super::{Column, ColumnKind, TableDef, timestamp_value};

/// Column order must match `row()` value order.
const COLUMNS: &[Column] = &[
    Column {
        name: "channel_id",
        kind: ColumnKind::Text,
        description: "Conversation the message was posted in",
    },
    Column {
        name: "ts",
        kind: ColumnKind::Timestamp,
        description: "When the message was posted",
    },
    Column {
        name: "raw_ts",
        kind: ColumnKind::Text,
        description: "Original ts string, the message's ID within its channel",
    },
    Column {
        name: "type",
        kind: ColumnKind::Text,
        description: "Message type",
    },
    Column {
        name: "subtype",
        kind: ColumnKind::Text,
        description: "Message subtype, null for plain messages",
    },
    Column {
        name: "user_id",
        kind: ColumnKind::Text,
        description: "Author user ID, null for some bot messages",
    },
    Column {
        name: "bot_id",
        kind: ColumnKind::Text,
        description: "Posting bot ID, when applicable",
    },
    Column {
        name: "text",
        kind: ColumnKind::Text,
        description: "Message text",
    },
    Column {
        name: "thread_ts",
        kind: ColumnKind::Text,
        description: "Parent thread ts string, null outside threads",
    },
    Column {
        name: "reply_count",
        kind: ColumnKind::Integer,
        description: "Thread reply count, when the message heads a thread",
    },
    Column {
        name: "edited_ts",
        kind: ColumnKind::Timestamp,
        description: "When the message was last edited, null when never",
    },
];

pub fn table() -> TableDef {
    TableDef {
        name: "slack_message",
        description: "Message history of one conversation",
        columns: COLUMNS,
    }
}

/// Map one API message onto the column list.
///
/// `channel` rides along because the history payload does not repeat it per
/// message.
pub fn row(channel: &str, message: &Message) -> Result<Vec<Value>, TransformError> {
    // An absent edited block means never edited; the normalizer only runs
    // on present values.
    let edited_ts = match &message.edited {
        Some(edited) => timestamp_value(seconds_str_to_datetime(&edited.ts)?),
        None => Value::Null,
    };
    Ok(vec![
        json!(channel),
        timestamp_value(seconds_str_to_datetime(&message.ts)?),
        json!(message.ts),
        json!(message.kind),
        json!(message.subtype),
        json!(message.user),
        json!(message.bot_id),
        json!(message.text),
        json!(message.thread_ts),
        json!(message.reply_count),
        edited_ts,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message(ts: &str, edited_ts: Option<&str>) -> Message {
        let mut payload = json!({
            "type": "message",
            "ts": ts,
            "user": "U012AB3CDE",
            "text": "I hope the tour went well, Mr. Wonka."
        });
        if let Some(edited) = edited_ts {
            payload["edited"] = json!({"user": "U012AB3CDE", "ts": edited});
        }
        serde_json::from_value(payload).unwrap()
    }

    fn column_index(name: &str) -> usize {
        table()
            .columns
            .iter()
            .position(|c| c.name == name)
            .unwrap()
    }

    #[test]
    fn test_row_matches_column_count() {
        let row = row("C012AB3CD", &sample_message("1609459200.5", None)).unwrap();
        assert_eq!(row.len(), table().columns.len());
    }

    #[test]
    fn test_ts_normalizes_with_subsecond() {
        let row = row("C012AB3CD", &sample_message("1609459200.5", None)).unwrap();
        assert_eq!(row[column_index("ts")], json!("2021-01-01T00:00:00.500000Z"));
        // The raw string survives as the message ID.
        assert_eq!(row[column_index("raw_ts")], json!("1609459200.5"));
    }

    #[test]
    fn test_unedited_message_has_null_edited_ts() {
        let row = row("C012AB3CD", &sample_message("1609459200.5", None)).unwrap();
        assert_eq!(row[column_index("edited_ts")], Value::Null);
    }

    #[test]
    fn test_edited_ts_normalizes() {
        let row = row(
            "C012AB3CD",
            &sample_message("1609459200.5", Some("1612085967.25")),
        )
        .unwrap();
        assert_eq!(
            row[column_index("edited_ts")],
            json!("2021-01-31T09:39:27.250000Z")
        );
    }

    #[test]
    fn test_zero_ts_is_null() {
        let row = row("C012AB3CD", &sample_message("0", None)).unwrap();
        assert_eq!(row[column_index("ts")], Value::Null);
    }

    #[test]
    fn test_bad_ts_propagates_parser_error() {
        let err = row("C012AB3CD", &sample_message("not-a-number", None)).unwrap_err();
        assert_eq!(err.to_string(), "invalid float literal");
    }

    #[test]
    fn test_channel_rides_along() {
        let row = row("C9XYZ01AB", &sample_message("1609459200.5", None)).unwrap();
        assert_eq!(row[column_index("channel_id")], json!("C9XYZ01AB"));
    }
}
