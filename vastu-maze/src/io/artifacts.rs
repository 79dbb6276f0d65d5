//! Numbered debug artifact names.

use std::path::{Path, PathBuf};

/// Hands out `<n>_gran_<g>.txt` paths in a directory.
///
/// Owned by the caller; numbering restarts with every namer.
#[derive(Clone, Debug)]
pub struct ArtifactNamer {
    directory: PathBuf,
    next: usize,
}

impl ArtifactNamer {
    /// Create a namer writing into `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            next: 0,
        }
    }

    /// Target directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Number of names handed out so far
    pub fn count(&self) -> usize {
        self.next
    }

    /// Next artifact path for a maze built at `granularity`
    pub fn next_path(&mut self, granularity: f32) -> PathBuf {
        let name = format!("{}_gran_{}.txt", self.next, granularity);
        self.next += 1;
        self.directory.join(name)
    }
}
