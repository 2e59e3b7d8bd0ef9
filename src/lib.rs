// src/lib.rs
// Magic-folder create/invite/join tooling for a Tahoe-LAFS node

pub mod cli;
pub mod error;
pub mod grid;
pub mod http;
pub mod magic_folder;
pub mod node;

pub use error::{GridError, MagicFolderError, Result};
