// src/node/mod.rs
// Local node directory layout and file access

pub mod aliases;
pub mod config;

use crate::error::{MagicFolderError, Result};
use crate::grid::Capability;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default node directory (~/.tahoe)
pub fn default_node_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".tahoe")
}

/// A Tahoe node's base directory
#[derive(Debug, Clone)]
pub struct NodeDir {
    root: PathBuf,
}

impl NodeDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn private_dir(&self) -> PathBuf {
        self.root.join("private")
    }

    pub fn node_url_path(&self) -> PathBuf {
        self.root.join("node.url")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("tahoe.cfg")
    }

    /// Where the joined participant's read-write dircap is kept
    pub fn magic_folder_dircap_path(&self) -> PathBuf {
        self.private_dir().join("magic_folder_dircap")
    }

    /// Where the collective directory's read-only cap is kept
    pub fn collective_dircap_path(&self) -> PathBuf {
        self.private_dir().join("collective_dircap")
    }

    /// Read the web API endpoint from `node.url`
    pub fn read_node_url(&self) -> Result<String> {
        let path = self.node_url_path();
        std::fs::read_to_string(&path)
            .map(|s| s.trim().to_string())
            .map_err(|source| MagicFolderError::NodeUrl { path, source })
    }

    pub fn aliases(&self) -> Result<BTreeMap<String, Capability>> {
        aliases::load_aliases(&self.private_dir())
    }

    pub fn add_alias(&self, alias: &str, cap: &Capability) -> Result<()> {
        aliases::add_alias(&self.private_dir(), alias, cap)
    }

    /// Current `tahoe.cfg` text, empty if the file does not exist
    pub fn read_config(&self) -> Result<String> {
        match std::fs::read_to_string(self.config_path()) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn write_config(&self, text: &str) -> Result<()> {
        std::fs::write(self.config_path(), text)?;
        debug!(path = %self.config_path().display(), "Wrote node config");
        Ok(())
    }

    /// Write a capability to a private file readable only by the owner
    pub fn write_private_cap(&self, path: &Path, cap: &Capability) -> Result<()> {
        std::fs::create_dir_all(self.private_dir())?;
        std::fs::write(path, cap.as_str())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }
        #[cfg(not(unix))]
        tracing::debug!(
            "Skipping capability file permission restriction on non-Unix platform: {}",
            path.display()
        );

        Ok(())
    }
}
