//! Fixture files shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use palate_core::{LikedDishes, test_support::spread_catalog};
use tempfile::TempDir;

/// Write `contents` to `path`, creating the file.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary workspace holding a catalog of two ten-dish clusters.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let workspace = Self { _dir: dir, root };
        let catalog = serde_json::to_vec_pretty(&spread_catalog(2, 10)).expect("serialise catalog");
        write_utf8(&workspace.catalog(), &catalog);
        workspace
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn liked(&self) -> Utf8PathBuf {
        self.root.join("liked.json")
    }

    /// Write a liked-dish list to [`Self::liked`].
    pub(super) fn write_liked(&self, ids: &[&str]) {
        let liked: LikedDishes = ids.iter().copied().collect();
        let payload = serde_json::to_vec(&liked).expect("serialise liked dishes");
        write_utf8(&self.liked(), &payload);
    }
}
