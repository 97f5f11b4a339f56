//! The query value edited by the logs query editor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mode::{EditorMode, QueryType};

/// A query as held by the host editor.
///
/// Only `expr`, `editor_mode` and `query_type` are interpreted here. Every
/// other field of the host's query object (`refId`, `maxLines`, ...) is kept
/// in `extra` and carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// LogsQL expression text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_mode: Option<EditorMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<QueryType>,

    /// Host fields outside the editor's concern.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Query {
    /// Create a query with only an expression set.
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: Some(expr.into()),
            ..Self::default()
        }
    }

    pub fn with_expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    pub fn with_editor_mode(mut self, mode: EditorMode) -> Self {
        self.editor_mode = Some(mode);
        self
    }

    pub fn with_query_type(mut self, query_type: QueryType) -> Self {
        self.query_type = Some(query_type);
        self
    }

    /// Set a pass-through host field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up a pass-through host field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Check if the query carries a non-empty expression.
    pub fn has_expr(&self) -> bool {
        self.expr.as_deref().is_some_and(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_partial_query() {
        let query: Query = serde_json::from_value(json!({ "refId": "A" })).unwrap();
        assert_eq!(query.expr, None);
        assert_eq!(query.editor_mode, None);
        assert_eq!(query.query_type, None);
        assert_eq!(query.field("refId"), Some(&json!("A")));
    }

    #[test]
    fn test_host_fields_round_trip() {
        let input = json!({
            "refId": "B",
            "expr": "_time:5m error",
            "editorMode": "code",
            "queryType": "statsRange",
            "maxLines": 1000,
            "datasource": { "uid": "vlogs" }
        });
        let query: Query = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(query.editor_mode, Some(EditorMode::Code));
        assert_eq!(query.query_type, Some(QueryType::StatsRange));
        assert_eq!(query.extra.len(), 3);

        let output = serde_json::to_value(&query).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_has_expr() {
        assert!(!Query::default().has_expr());
        assert!(!Query::new("").has_expr());
        assert!(Query::new("*").has_expr());
    }
}
