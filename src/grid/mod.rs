// src/grid/mod.rs
// Storage grid primitives: mkdir, directory listing, link

pub mod http;

use crate::error::GridError;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

pub use http::WebApiClient;

/// Opaque capability string issued by the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability(String);

impl Capability {
    pub fn new(cap: impl Into<String>) -> Self {
        Self(cap.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Capability {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Caps the node reports for a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryInfo {
    pub rw_uri: Option<Capability>,
    pub ro_uri: Capability,
}

#[derive(Deserialize)]
struct DirnodeFields {
    rw_uri: Option<String>,
    ro_uri: Option<String>,
}

/// Parse the `?t=json` listing of a directory: `["dirnode", {...}]`
pub fn parse_directory_json(body: &str) -> Result<DirectoryInfo, GridError> {
    let (node_type, fields): (String, serde_json::Value) = serde_json::from_str(body)?;
    if node_type != "dirnode" {
        return Err(GridError::UnexpectedNode(node_type));
    }
    let fields: DirnodeFields = serde_json::from_value(fields)?;
    let ro_uri = fields
        .ro_uri
        .filter(|s| !s.is_empty())
        .ok_or(GridError::MissingField("ro_uri"))?;

    Ok(DirectoryInfo {
        rw_uri: fields.rw_uri.filter(|s| !s.is_empty()).map(Capability),
        ro_uri: Capability(ro_uri),
    })
}

/// Primitive operations of the storage grid used by magic-folder setup
#[async_trait]
pub trait GridClient: Send + Sync {
    /// Create a new mutable directory, returning its write cap
    async fn create_directory(&self) -> Result<Capability, GridError>;

    /// List a directory through `cap` and report its caps
    async fn describe_directory(&self, cap: &Capability) -> Result<DirectoryInfo, GridError>;

    /// Link `child` into the directory `dircap` under `name`. An existing
    /// directory child of that name is never replaced.
    async fn link(&self, dircap: &Capability, name: &str, child: &Capability)
    -> Result<(), GridError>;

    /// Read-only cap corresponding to a directory write cap
    async fn diminish(&self, write_cap: &Capability) -> Result<Capability, GridError> {
        Ok(self.describe_directory(write_cap).await?.ro_uri)
    }
}
