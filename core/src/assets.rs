//! # Asset Directory
//!
//! Front ends draw a background and one portrait per upgrade. The background is
//! mandatory: a directory without it is rejected when opened. Portraits are
//! optional and resolve to `None` when missing.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub const BACKGROUND_FILE: &str = "background.jpg";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("background.jpg not found in {}", .0.display())]
    MissingBackground(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Opens `root`, requiring it to hold the background image.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let root: PathBuf = root.into();

        if !root.is_dir() {
            return Err(AssetError::MissingDirectory(root));
        }
        if !root.join(BACKGROUND_FILE).is_file() {
            return Err(AssetError::MissingBackground(root));
        }

        debug!(root = %root.display(), "asset directory opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of `name` if the file exists.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        if path.is_file() {
            Some(path)
        } else {
            debug!(name, "asset not found");
            None
        }
    }
}
