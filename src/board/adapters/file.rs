//! File-backed key-value store.
//!
//! Each key maps to one `<key>.json` file inside a single directory. All
//! access goes through a `cap_std` directory handle, so keys can never
//! address files outside it.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::board::ports::{KeyValueStore, StoreError, StoreResult};

const FILE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Key-value store persisting each value as a file in one directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> StoreResult<Self> {
        let path = root.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(StoreError::backend)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(StoreError::backend)?;
        Ok(Self {
            root: path.to_owned(),
            dir,
        })
    }

    /// Returns the directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn file_name(key: &str) -> StoreResult<String> {
        let is_valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
        if !is_valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(format!("{key}.{FILE_EXTENSION}"))
    }

    fn discard_staging(&self, staging: &str) {
        match self.dir.remove_file(staging) {
            Ok(()) => tracing::debug!(staging, root = %self.root, "removed staging file"),
            Err(err) => tracing::warn!(
                staging,
                root = %self.root,
                error = %err,
                "failed to remove staging file"
            ),
        }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let name = Self::file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let name = Self::file_name(key)?;
        let staging = format!("{name}.{TEMP_SUFFIX}");
        self.dir
            .write(&staging, value)
            .map_err(StoreError::backend)?;
        if let Err(err) = self.dir.rename(&staging, &self.dir, &name) {
            self.discard_staging(&staging);
            return Err(StoreError::backend(err));
        }
        tracing::trace!(key, root = %self.root, "stored value");
        Ok(())
    }
}
