//! Invocation context hints.
//!
//! The host tells the editor where it is being opened (which app, which
//! panel type). Both hints are optional on the host side; here each has an
//! explicit unspecified case so consumers can match exhaustively.

/// Host application the editor is opened from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CoreApp {
    Explore,
    Dashboard,
    PanelEditor,
    PanelViewer,
    UnifiedAlerting,
    CloudAlerting,
    Correlations,
    /// No app tag was supplied, or the tag was not recognised.
    #[default]
    Unknown,
}

impl CoreApp {
    /// Parse a host app tag such as `"explore"` or `"panel-editor"`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "explore" => CoreApp::Explore,
            "dashboard" => CoreApp::Dashboard,
            "panel-editor" => CoreApp::PanelEditor,
            "panel-viewer" => CoreApp::PanelViewer,
            "unified-alerting" => CoreApp::UnifiedAlerting,
            "cloud-alerting" => CoreApp::CloudAlerting,
            "correlations" => CoreApp::Correlations,
            _ => CoreApp::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoreApp::Explore => "explore",
            CoreApp::Dashboard => "dashboard",
            CoreApp::PanelEditor => "panel-editor",
            CoreApp::PanelViewer => "panel-viewer",
            CoreApp::UnifiedAlerting => "unified-alerting",
            CoreApp::CloudAlerting => "cloud-alerting",
            CoreApp::Correlations => "correlations",
            CoreApp::Unknown => "unknown",
        }
    }
}

impl From<&str> for CoreApp {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Visualization type of the panel hosting the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Logs,
    Table,
    Timeseries,
    /// Any other panel plugin id, e.g. `"stat"` or `"dashboard"`.
    Other(String),
    /// No panel plugin id was supplied.
    #[default]
    Unspecified,
}

impl PanelKind {
    /// Parse a panel plugin id.
    pub fn from_plugin_id(id: &str) -> Self {
        match id {
            "" => PanelKind::Unspecified,
            "logs" => PanelKind::Logs,
            "table" => PanelKind::Table,
            "timeseries" => PanelKind::Timeseries,
            other => PanelKind::Other(other.to_string()),
        }
    }
}

impl From<&str> for PanelKind {
    fn from(id: &str) -> Self {
        Self::from_plugin_id(id)
    }
}

/// Hints available when resolving query defaults. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub app: CoreApp,
    pub panel: PanelKind,
}

impl InvocationContext {
    /// Create a context with both hints unspecified.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(mut self, app: impl Into<CoreApp>) -> Self {
        self.app = app.into();
        self
    }

    pub fn with_panel(mut self, panel: impl Into<PanelKind>) -> Self {
        self.panel = panel.into();
        self
    }
}
