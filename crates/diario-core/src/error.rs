use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiarioError {
    #[error("not initialized: run 'diario init'")]
    NotInitialized,

    #[error("invalid role '{0}': expected technician, maintainer, cluster_manager or admin")]
    InvalidRole(String),

    #[error("invalid diary status: {0}")]
    InvalidStatus(String),

    #[error("invalid clock time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("invalid diary '{id}': {reason}")]
    InvalidDiary { id: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiarioError>;
