//! Table catalog: column definitions and row mapping.
//!
//! Each table pairs a static column list with a `row` function that turns
//! one API object into one JSON value per column. The two stay aligned by
//! position; hosts consume rows by zipping them with the column list.

pub mod conversations;
pub mod messages;
pub mod users;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Column value kinds, as hosts type them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Boolean,
    Timestamp,
    Json,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Json => "json",
        }
    }
}

/// One column of a table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub description: &'static str,
}

/// A table this adapter serves.
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [Column],
}

/// All tables, in catalog order.
pub fn all() -> Vec<TableDef> {
    vec![users::table(), conversations::table(), messages::table()]
}

/// Render an optional instant the way timestamp columns expect: RFC 3339
/// with microsecond precision, or JSON null when unset.
pub fn timestamp_value(value: Option<DateTime<Utc>>) -> Value {
    match value {
        Some(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Micros, true)),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_timestamp_value_set() {
        let dt = Utc.timestamp_opt(1577836800, 500_000).single().unwrap();
        assert_eq!(
            timestamp_value(Some(dt)),
            Value::String("2020-01-01T00:00:00.000500Z".to_string())
        );
    }

    #[test]
    fn test_timestamp_value_unset_is_null() {
        assert_eq!(timestamp_value(None), Value::Null);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let tables = all();
        let mut names: Vec<_> = tables.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tables.len());
    }

    #[test]
    fn test_column_kind_as_str() {
        assert_eq!(ColumnKind::Timestamp.as_str(), "timestamp");
        assert_eq!(ColumnKind::Text.as_str(), "text");
    }
}
