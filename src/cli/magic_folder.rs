// src/cli/magic_folder.rs
// Handlers for `magic-folder create|invite|join`

use super::MagicFolderAction;
use crate::error::{MagicFolderError, Result};
use crate::grid::WebApiClient;
use crate::http::create_shared_client;
use crate::magic_folder::{self, CreateParams, InviteParams, JoinParams};
use crate::node::NodeDir;
use tracing::debug;

/// Build the web API client from an explicit URL or the node's `node.url`
fn connect(node: &NodeDir, node_url: Option<&str>) -> Result<WebApiClient> {
    let url = match node_url {
        Some(url) => url.to_string(),
        None => node.read_node_url()?,
    };
    debug!(node_url = %url, "Using node web API");

    WebApiClient::new(create_shared_client(), &url).map_err(|e| {
        MagicFolderError::Usage(format!("bad node URL '{}': {}", url, e))
    })
}

/// Run one magic-folder subcommand, printing its output on stdout
pub async fn run_magic_folder(
    node: &NodeDir,
    node_url: Option<&str>,
    action: MagicFolderAction,
) -> Result<()> {
    match action {
        MagicFolderAction::Create {
            alias,
            nickname,
            local_dir,
        } => {
            let grid = connect(node, node_url)?;
            let outcome = magic_folder::create(
                &grid,
                node,
                CreateParams {
                    alias,
                    nickname,
                    local_dir,
                },
            )
            .await?;
            println!("Alias '{}' created", outcome.alias);
        }
        MagicFolderAction::Invite { alias, nickname } => {
            let grid = connect(node, node_url)?;
            let code = magic_folder::invite(&grid, node, InviteParams { alias, nickname }).await?;
            println!("{}", code);
        }
        MagicFolderAction::Join {
            invite_code,
            local_dir,
        } => {
            magic_folder::join(
                node,
                JoinParams {
                    invite_code,
                    local_dir,
                },
            )?;
        }
    }
    Ok(())
}
