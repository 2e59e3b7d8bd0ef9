// src/cli/mod.rs
// Command-line definitions for tahoe-magic

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub mod magic_folder;

pub use magic_folder::run_magic_folder;

#[derive(Parser, Debug)]
#[command(name = "tahoe-magic")]
#[command(about = "Set up Tahoe-LAFS magic folders")]
#[command(version)]
pub struct Cli {
    /// Node base directory (default: ~/.tahoe)
    #[arg(short = 'd', long, env = "TAHOE_NODE_DIRECTORY", global = true)]
    pub node_directory: Option<PathBuf>,

    /// Web API URL of the node, overriding <node-directory>/node.url
    #[arg(short = 'u', long, env = "TAHOE_NODE_URL", global = true)]
    pub node_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// magic-folder subcommands
    MagicFolder {
        #[command(subcommand)]
        action: MagicFolderAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum MagicFolderAction {
    /// Create a Magic-Folder.
    Create {
        /// Alias for the new collective directory
        alias: String,

        /// Also invite and join yourself under this nickname
        #[arg(requires = "local_dir")]
        nickname: Option<String>,

        /// Local directory to synchronize (required with NICKNAME)
        local_dir: Option<PathBuf>,
    },

    /// Invite someone to a Magic-Folder.
    Invite {
        /// Alias of the collective directory
        alias: String,

        /// Nickname of the invitee
        nickname: String,
    },

    /// Join a Magic-Folder.
    Join {
        /// Invite code produced by `invite`
        invite_code: String,

        /// Local directory to synchronize
        local_dir: PathBuf,
    },
}
