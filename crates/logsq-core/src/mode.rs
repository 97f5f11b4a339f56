//! Editor mode and query type enums.

use serde::{Deserialize, Serialize};

/// How a query is authored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Free-form LogsQL expression.
    #[default]
    Code,
    /// Structured query builder.
    Builder,
}

impl EditorMode {
    /// Wire value, as stored in preferences and query JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Code => "code",
            EditorMode::Builder => "builder",
        }
    }

    /// Parse a wire value. Anything but the exact wire strings is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "code" => Some(EditorMode::Code),
            "builder" => Some(EditorMode::Builder),
            _ => None,
        }
    }
}

/// Kind of request a query issues against the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum QueryType {
    /// Raw log lines at a point in time.
    Instant,
    /// Stats evaluated over a time range.
    StatsRange,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Instant => "instant",
            QueryType::StatsRange => "statsRange",
        }
    }
}
