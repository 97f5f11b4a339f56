//! Default resolution for partially filled queries.
//!
//! Missing fields are filled in this order:
//!
//! | Field | Source |
//! |-------|--------|
//! | `editor_mode` | `Code` if the query has an expression, else the stored preference |
//! | `expr` | empty string |
//! | `query_type` | panel type, then host app, then `StatsRange` |
//!
//! Fields already set on the input are never overwritten.

use std::sync::Arc;

use logsq_core::{CoreApp, EditorMode, InvocationContext, PanelKind, Query, QueryType};
use logsq_prefs::{EditorModePreference, PreferenceStore};

/// Fills missing editor fields of a query.
#[derive(Debug, Clone)]
pub struct DefaultsResolver {
    preference: EditorModePreference,
}

impl DefaultsResolver {
    /// Create a resolver reading the well-known preference key from `store`.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_preference(EditorModePreference::new(store))
    }

    pub fn with_preference(preference: EditorModePreference) -> Self {
        Self { preference }
    }

    /// Return `query` with `editor_mode`, `expr` and `query_type` populated.
    ///
    /// Total over all inputs. Reads the preference store at most once, and
    /// only when the editor mode has to be derived for an empty expression.
    pub fn resolve_defaults(&self, query: &Query, context: Option<&InvocationContext>) -> Query {
        let editor_mode = query
            .editor_mode
            .unwrap_or_else(|| self.default_editor_mode(query.expr.as_deref()));
        let query_type = query
            .query_type
            .unwrap_or_else(|| default_query_type(context));

        Query {
            expr: Some(query.expr.clone().unwrap_or_default()),
            editor_mode: Some(editor_mode),
            query_type: Some(query_type),
            extra: query.extra.clone(),
        }
    }

    /// Editor mode for a query that has none.
    ///
    /// Hand-written expressions always open in `Code`. Otherwise the stored
    /// preference decides, and only `Builder` is honoured.
    pub fn default_editor_mode(&self, expr: Option<&str>) -> EditorMode {
        if expr.is_some_and(|e| !e.is_empty()) {
            return EditorMode::Code;
        }

        let mode = match self.preference.load() {
            Some(EditorMode::Builder) => EditorMode::Builder,
            Some(EditorMode::Code) | None => EditorMode::Code,
        };
        tracing::debug!("Defaulted editor mode to {}", mode.as_str());
        mode
    }
}

/// Query type for a query that has none. The panel hint wins over the app hint.
pub fn default_query_type(context: Option<&InvocationContext>) -> QueryType {
    match context {
        Some(ctx) => {
            query_type_for_panel(&ctx.panel).unwrap_or_else(|| query_type_for_app(ctx.app))
        }
        None => query_type_for_app(CoreApp::Unknown),
    }
}

fn query_type_for_panel(panel: &PanelKind) -> Option<QueryType> {
    match panel {
        PanelKind::Logs | PanelKind::Table => Some(QueryType::Instant),
        PanelKind::Timeseries => Some(QueryType::StatsRange),
        PanelKind::Other(_) | PanelKind::Unspecified => None,
    }
}

fn query_type_for_app(app: CoreApp) -> QueryType {
    match app {
        CoreApp::Explore => QueryType::Instant,
        CoreApp::Dashboard
        | CoreApp::PanelEditor
        | CoreApp::PanelViewer
        | CoreApp::UnifiedAlerting
        | CoreApp::CloudAlerting
        | CoreApp::Correlations
        | CoreApp::Unknown => QueryType::StatsRange,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsq_core::{StoreError, EDITOR_MODE_DEFAULT_KEY};
    use logsq_prefs::MemoryStore;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Store {}

        impl PreferenceStore for Store {
            fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
            fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
        }
    }

    fn resolver_with(stored: Option<&str>) -> DefaultsResolver {
        let store = match stored {
            Some(value) => MemoryStore::with_entries([(EDITOR_MODE_DEFAULT_KEY, value)]),
            None => MemoryStore::new(),
        };
        DefaultsResolver::new(Arc::new(store))
    }

    fn all_contexts() -> Vec<Option<InvocationContext>> {
        let mut contexts = vec![None];
        for app in ["explore", "dashboard", "unknown-app", ""] {
            for panel in ["logs", "table", "timeseries", "dashboard", ""] {
                contexts.push(Some(InvocationContext::new().with_app(app).with_panel(panel)));
            }
        }
        contexts
    }

    #[test]
    fn test_expression_implies_code() {
        for stored in [None, Some("builder"), Some("code")] {
            let resolver = resolver_with(stored);
            let resolved = resolver.resolve_defaults(&Query::new("_time:5m error"), None);
            assert_eq!(resolved.editor_mode, Some(EditorMode::Code), "stored {:?}", stored);
        }
    }

    #[test]
    fn test_stored_builder_for_empty_expression() {
        let resolver = resolver_with(Some("builder"));

        let from_empty = resolver.resolve_defaults(&Query::new(""), None);
        assert_eq!(from_empty.editor_mode, Some(EditorMode::Builder));

        let from_absent = resolver.resolve_defaults(&Query::default(), None);
        assert_eq!(from_absent.editor_mode, Some(EditorMode::Builder));
    }

    #[test]
    fn test_code_fallback_for_other_stored_values() {
        for stored in [None, Some(""), Some("code"), Some("Builder"), Some("visual")] {
            let resolver = resolver_with(stored);
            let resolved = resolver.resolve_defaults(&Query::default(), None);
            assert_eq!(resolved.editor_mode, Some(EditorMode::Code), "stored {:?}", stored);
        }
    }

    #[test]
    fn test_existing_editor_mode_kept() {
        let resolver = resolver_with(Some("builder"));
        for expr in [None, Some(""), Some("*")] {
            for mode in [EditorMode::Code, EditorMode::Builder] {
                let query = Query {
                    expr: expr.map(String::from),
                    editor_mode: Some(mode),
                    ..Query::default()
                };
                let resolved = resolver.resolve_defaults(&query, None);
                assert_eq!(resolved.editor_mode, Some(mode));
            }
        }
    }

    #[test]
    fn test_empty_query_fully_populated() {
        let resolved = resolver_with(None).resolve_defaults(&Query::default(), None);
        assert_eq!(
            resolved,
            Query::default()
                .with_expr("")
                .with_editor_mode(EditorMode::Code)
                .with_query_type(QueryType::StatsRange)
        );
    }

    #[test]
    fn test_existing_fields_not_overwritten() {
        let query = Query::new("stats count()")
            .with_editor_mode(EditorMode::Builder)
            .with_query_type(QueryType::Instant)
            .with_field("refId", "A");
        let ctx = InvocationContext::new().with_panel("timeseries");

        let resolved = resolver_with(None).resolve_defaults(&query, Some(&ctx));
        assert_eq!(resolved, query);
    }

    #[test]
    fn test_host_fields_carried_through() {
        let query = Query::default()
            .with_field("refId", "C")
            .with_field("maxLines", 500);
        let resolved = resolver_with(None).resolve_defaults(&query, None);
        assert_eq!(resolved.extra, query.extra);
    }

    #[test]
    fn test_idempotent() {
        let queries = [
            Query::default(),
            Query::new(""),
            Query::new("level:error"),
            Query::default().with_query_type(QueryType::Instant),
            Query::default().with_editor_mode(EditorMode::Builder),
        ];
        for stored in [None, Some("builder")] {
            let resolver = resolver_with(stored);
            for query in &queries {
                for ctx in all_contexts() {
                    let once = resolver.resolve_defaults(query, ctx.as_ref());
                    let twice = resolver.resolve_defaults(&once, ctx.as_ref());
                    assert_eq!(once, twice);
                }
            }
        }
    }

    #[test]
    fn test_panel_wins_over_app() {
        let ctx = InvocationContext::new()
            .with_app("explore")
            .with_panel("timeseries");
        let resolved = resolver_with(None).resolve_defaults(&Query::default(), Some(&ctx));
        assert_eq!(resolved.query_type, Some(QueryType::StatsRange));
    }

    #[test]
    fn test_unmapped_panel_falls_through_to_app() {
        let ctx = InvocationContext::new()
            .with_app("explore")
            .with_panel("dashboard");
        let resolved = resolver_with(None).resolve_defaults(&Query::default(), Some(&ctx));
        assert_eq!(resolved.query_type, Some(QueryType::Instant));
    }

    #[test]
    fn test_query_type_fallback_without_context() {
        let resolved = resolver_with(None).resolve_defaults(&Query::default(), None);
        assert_eq!(resolved.query_type, Some(QueryType::StatsRange));
    }

    #[test]
    fn test_panel_mapping() {
        let by_panel = |panel: &str| {
            default_query_type(Some(&InvocationContext::new().with_panel(panel)))
        };
        assert_eq!(by_panel("logs"), QueryType::Instant);
        assert_eq!(by_panel("table"), QueryType::Instant);
        assert_eq!(by_panel("timeseries"), QueryType::StatsRange);
        assert_eq!(by_panel("stat"), QueryType::StatsRange);
    }

    #[test]
    fn test_app_mapping() {
        let by_app = |app: &str| default_query_type(Some(&InvocationContext::new().with_app(app)));
        assert_eq!(by_app("explore"), QueryType::Instant);
        assert_eq!(by_app("dashboard"), QueryType::StatsRange);
        assert_eq!(by_app("unified-alerting"), QueryType::StatsRange);
        assert_eq!(by_app(""), QueryType::StatsRange);
    }

    #[test]
    fn test_reads_preference_once_for_empty_expression() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .with(eq(EDITOR_MODE_DEFAULT_KEY))
            .times(1)
            .returning(|_| Ok(Some("builder".to_string())));

        let resolver = DefaultsResolver::new(Arc::new(store));
        let resolved = resolver.resolve_defaults(&Query::default(), None);
        assert_eq!(resolved.editor_mode, Some(EditorMode::Builder));
    }

    #[test]
    fn test_no_store_access_when_mode_is_decided() {
        // No expectations: any store call panics
        let resolver = DefaultsResolver::new(Arc::new(MockStore::new()));

        resolver.resolve_defaults(&Query::new("error"), None);
        resolver.resolve_defaults(&Query::new("").with_editor_mode(EditorMode::Code), None);
    }

    #[test]
    fn test_store_failure_defaults_to_code() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Err(StoreError::Unavailable("storage disabled".to_string())));

        let resolver = DefaultsResolver::new(Arc::new(store));
        assert_eq!(resolver.default_editor_mode(None), EditorMode::Code);
    }

    #[test]
    fn test_serialized_shape() {
        let query: Query = serde_json::from_str(r#"{"refId":"A","maxLines":100}"#).unwrap();
        let ctx = InvocationContext::new().with_app("explore");
        let resolved = resolver_with(Some("builder")).resolve_defaults(&query, Some(&ctx));

        insta::assert_snapshot!(serde_json::to_string_pretty(&resolved).unwrap(), @r###"
        {
          "expr": "",
          "editorMode": "builder",
          "queryType": "instant",
          "maxLines": 100,
          "refId": "A"
        }
        "###);
    }
}
