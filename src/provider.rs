use crate::error::{BadgeError, Result};
use crate::github::{GitHubConfig, GitHubStats};
use crate::model::StatsSnapshot;
use std::path::{Path, PathBuf};

/// Source of the one snapshot a run renders from.
pub trait StatsProvider {
    fn snapshot(&self) -> Result<StatsSnapshot>;
}

/// A snapshot previously saved as JSON, e.g. by `statbadge stats --json`.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StatsProvider for SnapshotFile {
    fn snapshot(&self) -> Result<StatsSnapshot> {
        let text = std::fs::read_to_string(&self.path)?;
        parse_snapshot(&text)
    }
}

pub fn parse_snapshot(text: &str) -> Result<StatsSnapshot> {
    serde_json::from_str(text).map_err(|e| BadgeError::MalformedSnapshot(e.to_string()))
}

/// Pick the provider for this run: a saved snapshot if given, else GitHub.
pub fn from_config(
    snapshot: Option<&Path>,
    github: GitHubConfig,
    progress: bool,
) -> Result<Box<dyn StatsProvider>> {
    match snapshot {
        Some(path) => Ok(Box::new(SnapshotFile::new(path))),
        None => Ok(Box::new(GitHubStats::new(github)?.with_progress(progress))),
    }
}
