use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AutomationError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("automation command failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    #[error("automation reported: {0}")]
    Diagnostic(String),

    #[error("malformed window record: {0:?}")]
    MalformedRecord(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TilewindowsError {
    #[error("No layout found: {0}")]
    LayoutNotFound(String),

    #[error("Layout {0:?} could not be read; fix or remove it in the config file")]
    UnreadableLayout(String),

    #[error("Usage: tilewindows {0} <name>")]
    MissingLayoutName(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Automation(#[from] AutomationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
