//! The `slack_user` table.

use serde_json::{Value, json};

use crate::client::types::User;
use crate::transform::{TransformError, json_time_to_datetime, seconds_to_datetime};

use super::{Column, ColumnKind, TableDef, timestamp_value};

/// Column order must match `row()` value order.
const COLUMNS: &[Column] = &[
    Column {
        name: "id",
        kind: ColumnKind::Text,
        description: "Workspace-unique user ID",
    },
    Column {
        name: "name",
        kind: ColumnKind::Text,
        description: "Login name",
    },
    Column {
        name: "real_name",
        kind: ColumnKind::Text,
        description: "Full name, when shared",
    },
    Column {
        name: "display_name",
        kind: ColumnKind::Text,
        description: "Profile display name",
    },
    Column {
        name: "email",
        kind: ColumnKind::Text,
        description: "Profile email, when visible to the token",
    },
    Column {
        name: "team_id",
        kind: ColumnKind::Text,
        description: "Workspace the user belongs to",
    },
    Column {
        name: "tz",
        kind: ColumnKind::Text,
        description: "Preferred time zone",
    },
    Column {
        name: "title",
        kind: ColumnKind::Text,
        description: "Profile job title",
    },
    Column {
        name: "is_admin",
        kind: ColumnKind::Boolean,
        description: "Whether the user is a workspace admin",
    },
    Column {
        name: "is_bot",
        kind: ColumnKind::Boolean,
        description: "Whether the account belongs to a bot",
    },
    Column {
        name: "deleted",
        kind: ColumnKind::Boolean,
        description: "Whether the account is deactivated",
    },
    Column {
        name: "status_text",
        kind: ColumnKind::Text,
        description: "Custom status text",
    },
    Column {
        name: "status_expiration",
        kind: ColumnKind::Timestamp,
        description: "When the custom status clears, null when permanent",
    },
    Column {
        name: "updated",
        kind: ColumnKind::Timestamp,
        description: "Last profile change, null when never recorded",
    },
];

pub fn table() -> TableDef {
    TableDef {
        name: "slack_user",
        description: "Members of the connected workspace",
        columns: COLUMNS,
    }
}

/// Map one API user onto the column list.
pub fn row(user: &User) -> Result<Vec<Value>, TransformError> {
    Ok(vec![
        json!(user.id),
        json!(user.name),
        json!(user.real_name),
        json!(user.profile.display_name),
        json!(user.profile.email),
        json!(user.team_id),
        json!(user.tz),
        json!(user.profile.title),
        json!(user.is_admin),
        json!(user.is_bot),
        json!(user.deleted),
        json!(user.profile.status_text),
        timestamp_value(seconds_to_datetime(user.profile.status_expiration)?),
        timestamp_value(json_time_to_datetime(user.updated)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(updated: i64, status_expiration: i64) -> User {
        serde_json::from_value(json!({
            "id": "U023BECGF",
            "team_id": "T012AB3C4",
            "name": "spengler",
            "real_name": "Egon Spengler",
            "deleted": false,
            "is_admin": true,
            "is_bot": false,
            "tz": "America/New_York",
            "updated": updated,
            "profile": {
                "display_name": "egon",
                "title": "Research",
                "email": "spengler@ghostbusters.example.com",
                "status_text": "Print is dead",
                "status_emoji": ":books:",
                "status_expiration": status_expiration
            }
        }))
        .unwrap()
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
        let row = row(&sample_user(1603460000, 0)).unwrap();
        assert_eq!(row.len(), table().columns.len());
    }

    #[test]
    fn test_unset_timestamps_are_null() {
        let row = row(&sample_user(0, 0)).unwrap();
        assert_eq!(row[column_index("updated")], Value::Null);
        assert_eq!(row[column_index("status_expiration")], Value::Null);
    }

    #[test]
    fn test_set_timestamps_render_rfc3339() {
        let row = row(&sample_user(1603460000, 1577836800)).unwrap();
        assert_eq!(
            row[column_index("status_expiration")],
            json!("2020-01-01T00:00:00.000000Z")
        );
        assert_eq!(
            row[column_index("updated")],
            json!("2020-10-23T13:33:20.000000Z")
        );
    }

    #[test]
    fn test_plain_columns_carry_through() {
        let row = row(&sample_user(0, 0)).unwrap();
        assert_eq!(row[column_index("id")], json!("U023BECGF"));
        assert_eq!(row[column_index("is_admin")], json!(true));
        assert_eq!(row[column_index("display_name")], json!("egon"));
    }
}
