// src/magic_folder/mod.rs
// Magic-folder setup: create, invite, join

mod invite_code;

pub use invite_code::{INVITE_SEPARATOR, InviteCode};

use crate::error::{MagicFolderError, Result};
use crate::grid::{Capability, GridClient};
use crate::node::NodeDir;
use crate::node::aliases::normalize_alias;
use crate::node::config::enable_magic_folder;
use std::path::PathBuf;
use tracing::{info, warn};

/// Arguments of `magic-folder create`
#[derive(Debug, Clone)]
pub struct CreateParams {
    pub alias: String,
    pub nickname: Option<String>,
    pub local_dir: Option<PathBuf>,
}

/// Arguments of `magic-folder invite`
#[derive(Debug, Clone)]
pub struct InviteParams {
    pub alias: String,
    pub nickname: String,
}

/// Arguments of `magic-folder join`
#[derive(Debug, Clone)]
pub struct JoinParams {
    pub invite_code: String,
    pub local_dir: PathBuf,
}

/// What `create` did
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub alias: String,
    pub collective_writecap: Capability,
    /// Set when a nickname was given and the creator also joined
    pub invite_code: Option<InviteCode>,
}

fn validate_nickname(nickname: &str) -> Result<()> {
    if nickname.is_empty() || nickname.contains('/') {
        return Err(MagicFolderError::Usage(format!(
            "invalid nickname '{}': must be non-empty and contain no '/'",
            nickname
        )));
    }
    Ok(())
}

/// Create a collective directory under a new alias. With a nickname, the
/// creator is also invited and joined using `local_dir`.
pub async fn create(
    grid: &dyn GridClient,
    node: &NodeDir,
    params: CreateParams,
) -> Result<CreateOutcome> {
    let alias = normalize_alias(&params.alias)?;

    let join_dir = match (&params.nickname, params.local_dir) {
        (Some(nickname), Some(dir)) => {
            validate_nickname(nickname)?;
            if dir.to_str().is_none() {
                return Err(MagicFolderError::NonUtf8Path(dir));
            }
            Some(dir)
        }
        (Some(_), None) => {
            return Err(MagicFolderError::Usage(
                "If NICKNAME is specified then LOCALDIR must also be specified.".to_string(),
            ));
        }
        (None, _) => None,
    };

    if node.aliases()?.contains_key(&alias) {
        return Err(MagicFolderError::AliasExists(alias));
    }

    let collective_writecap = grid
        .create_directory()
        .await
        .map_err(MagicFolderError::Mkdir)?;
    node.add_alias(&alias, &collective_writecap)?;
    info!(alias = %alias, "Alias created");

    let mut invite_code = None;
    if let (Some(nickname), Some(local_dir)) = (params.nickname, join_dir) {
        let code = invite(
            grid,
            node,
            InviteParams {
                alias: alias.clone(),
                nickname,
            },
        )
        .await
        .map_err(|e| MagicFolderError::InviteAfterCreate(Box::new(e)))?;

        join(
            node,
            JoinParams {
                invite_code: code.to_string(),
                local_dir,
            },
        )
        .map_err(|e| MagicFolderError::JoinAfterCreate(Box::new(e)))?;

        invite_code = Some(code);
    }

    Ok(CreateOutcome {
        alias,
        collective_writecap,
        invite_code,
    })
}

/// Make a directory for a new participant, link its read-only cap into the
/// collective under `nickname`, and return the invite code.
///
/// Nothing is rolled back on failure: a directory created before a later
/// step fails stays on the grid, unreferenced.
pub async fn invite(
    grid: &dyn GridClient,
    node: &NodeDir,
    params: InviteParams,
) -> Result<InviteCode> {
    let alias = normalize_alias(&params.alias)?;
    validate_nickname(&params.nickname)?;

    let collective_writecap = node
        .aliases()?
        .remove(&alias)
        .ok_or_else(|| MagicFolderError::UnknownAlias(alias.clone()))?;

    let dmd_writecap = grid
        .create_directory()
        .await
        .map_err(MagicFolderError::Mkdir)?;

    let linked = async {
        let dmd_readcap = grid
            .diminish(&dmd_writecap)
            .await
            .map_err(|source| MagicFolderError::Diminish {
                what: "dmd",
                source,
            })?;

        let collective_readcap = grid.diminish(&collective_writecap).await.map_err(|source| {
            MagicFolderError::Diminish {
                what: "collective",
                source,
            }
        })?;

        grid.link(&collective_writecap, &params.nickname, &dmd_readcap)
            .await
            .map_err(MagicFolderError::Link)?;

        Ok::<_, MagicFolderError>(collective_readcap)
    }
    .await;

    match linked {
        Ok(collective_readcap) => {
            info!(alias = %alias, nickname = %params.nickname, "Participant invited");
            Ok(InviteCode::new(collective_readcap, dmd_writecap))
        }
        Err(e) => {
            warn!(alias = %alias, "Participant directory left orphaned");
            Err(e)
        }
    }
}

/// Persist the caps from an invite code and enable magic-folder in the
/// node config. The code is validated before anything is written.
pub fn join(node: &NodeDir, params: JoinParams) -> Result<()> {
    let code = InviteCode::parse(&params.invite_code)?;
    // tahoe.cfg is text; a lossy conversion would name a different directory
    let local_dir = params
        .local_dir
        .to_str()
        .ok_or_else(|| MagicFolderError::NonUtf8Path(params.local_dir.clone()))?;

    let config = enable_magic_folder(&node.read_config()?, local_dir);

    node.write_private_cap(&node.magic_folder_dircap_path(), &code.dmd_writecap)?;
    node.write_private_cap(&node.collective_dircap_path(), &code.collective_readcap)?;
    node.write_config(&config)?;

    info!(local_dir = %local_dir, "Joined magic folder");
    Ok(())
}
