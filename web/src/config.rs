//! Page wiring: where the endpoint lives and which elements to bind.
//!
//! `Default` describes the stock post-pigeon pages. A page with a different
//! layout passes a partial object to `mount`; missing keys keep their
//! defaults.

use serde::Deserialize;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Prefix for `/posts`. Empty means same origin.
    pub endpoint_base: String,
    /// The page-unique form whose fields are sent with the delete.
    pub form_selector: String,
    /// Element whose markup the delete response replaces.
    pub target_selector: String,
    /// Container of the upload widget.
    pub upload_widget_selector: String,
    /// File input, looked up inside the container.
    pub file_input_selector: String,
    /// Label showing the chosen name, looked up inside the container.
    pub file_name_selector: String,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            endpoint_base: String::new(),
            form_selector: "form".to_string(),
            target_selector: "body".to_string(),
            upload_widget_selector: "#file-post-upload".to_string(),
            file_input_selector: "input[type=file]".to_string(),
            file_name_selector: ".file-name".to_string(),
            log_level: LogLevel::Info,
        }
    }
}
