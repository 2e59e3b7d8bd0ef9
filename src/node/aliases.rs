// src/node/aliases.rs
// Alias registry stored in <node-dir>/private/aliases

use crate::error::{MagicFolderError, Result};
use crate::grid::Capability;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Alias registered from `private/root_dir.cap`
pub const DEFAULT_ALIAS: &str = "tahoe";

/// Normalize a user-supplied alias: one trailing ':' is dropped, and the
/// remainder must be non-empty with no ':' or whitespace.
pub fn normalize_alias(raw: &str) -> Result<String> {
    let alias = raw.strip_suffix(':').unwrap_or(raw);
    if alias.is_empty() || alias.contains(':') || alias.chars().any(char::is_whitespace) {
        return Err(MagicFolderError::InvalidAlias(raw.to_string()));
    }
    Ok(alias.to_string())
}

/// Parse alias file contents, `name: cap` per line
pub fn parse_aliases(contents: &str) -> BTreeMap<String, Capability> {
    let mut map = BTreeMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, cap)) = line.split_once(':') {
            let (name, cap) = (name.trim(), cap.trim());
            if !name.is_empty() && !cap.is_empty() {
                map.insert(name.to_string(), Capability::new(cap));
            }
        }
    }
    map
}

/// Load every alias known to the node
pub fn load_aliases(private_dir: &Path) -> Result<BTreeMap<String, Capability>> {
    let mut aliases = BTreeMap::new();

    match std::fs::read_to_string(private_dir.join("root_dir.cap")) {
        Ok(cap) if !cap.trim().is_empty() => {
            aliases.insert(DEFAULT_ALIAS.to_string(), Capability::new(cap.trim()));
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    match std::fs::read_to_string(private_dir.join("aliases")) {
        Ok(contents) => aliases.extend(parse_aliases(&contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    Ok(aliases)
}

/// Append `alias: cap` to the alias file, creating it if needed
pub fn add_alias(private_dir: &Path, alias: &str, cap: &Capability) -> Result<()> {
    std::fs::create_dir_all(private_dir)?;
    let path = private_dir.join("aliases");

    let needs_newline = match std::fs::read(&path) {
        Ok(bytes) => !bytes.is_empty() && !bytes.ends_with(b"\n"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    if needs_newline {
        file.write_all(b"\n")?;
    }
    writeln!(file, "{}: {}", alias, cap)?;
    Ok(())
}
