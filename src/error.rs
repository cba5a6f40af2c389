use thiserror::Error;

/// Errors produced by the shape editor core
#[derive(Debug, Error)]
pub enum EditorError {
    /// A geometric operation would leave a shape in an inconsistent state
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A mode name that does not correspond to any editor mode
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// A color identifier that is not of the form `#RRGGBB`
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A configuration value out of its accepted range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type EditorResult<T> = Result<T, EditorError>;
