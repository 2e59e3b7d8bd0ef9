// src/magic_folder/invite_code.rs
// Invite code: <collective-readonly-cap>~<dmd-readwrite-cap>

use crate::error::{MagicFolderError, Result};
use crate::grid::Capability;
use std::fmt;
use std::str::FromStr;

pub const INVITE_SEPARATOR: char = '~';

/// Pair of caps handed to a new participant out-of-band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteCode {
    /// Read-only cap of the collective directory
    pub collective_readcap: Capability,
    /// Read-write cap of the participant's own directory
    pub dmd_writecap: Capability,
}

impl InviteCode {
    pub fn new(collective_readcap: Capability, dmd_writecap: Capability) -> Self {
        Self {
            collective_readcap,
            dmd_writecap,
        }
    }

    /// Split on the separator; exactly two non-empty fields are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.trim().split(INVITE_SEPARATOR).collect();
        match fields.as_slice() {
            [collective, dmd] if !collective.is_empty() && !dmd.is_empty() => Ok(Self::new(
                Capability::new(*collective),
                Capability::new(*dmd),
            )),
            _ => Err(MagicFolderError::MalformedInviteCode {
                fields: fields.len(),
            }),
        }
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.collective_readcap, INVITE_SEPARATOR, self.dmd_writecap
        )
    }
}

impl FromStr for InviteCode {
    type Err = MagicFolderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
