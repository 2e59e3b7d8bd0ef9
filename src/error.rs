// src/error.rs
// Error types for magic-folder operations and grid access

use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the node's web API
#[derive(Error, Debug)]
pub enum GridError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("error, got {status} {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a dirnode, got {0}")]
    UnexpectedNode(String),

    #[error("node did not report a {0} for the directory")]
    MissingField(&'static str),

    #[error("invalid node URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Main error type for magic-folder commands
#[derive(Error, Debug)]
pub enum MagicFolderError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("unable to read node URL from {path}: {source}")]
    NodeUrl {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid alias name '{0}'")]
    InvalidAlias(String),

    #[error("Alias '{0}' already exists!")]
    AliasExists(String),

    #[error("unknown alias '{0}'")]
    UnknownAlias(String),

    #[error("failed to mkdir: {0}")]
    Mkdir(#[source] GridError),

    #[error("failed to diminish {what} write cap: {source}")]
    Diminish {
        what: &'static str,
        #[source]
        source: GridError,
    },

    #[error("failed to create link: {0}")]
    Link(#[source] GridError),

    #[error("failed to invite after create: {0}")]
    InviteAfterCreate(#[source] Box<MagicFolderError>),

    #[error("failed to join after create: {0}")]
    JoinAfterCreate(#[source] Box<MagicFolderError>),

    #[error("malformed invite code: expected 2 '~'-separated capabilities, got {fields} field(s)")]
    MalformedInviteCode { fields: usize },

    #[error("local directory is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using MagicFolderError
pub type Result<T> = std::result::Result<T, MagicFolderError>;

impl MagicFolderError {
    /// One-line diagnostic as printed on stderr by the CLI
    pub fn diagnostic(&self) -> String {
        format!("magic-folder: {}", self)
    }
}
