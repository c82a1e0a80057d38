//! Directory-backed key/value store.
//!
//! Each key is a file in the store directory. Writes go to a uniquely named
//! hidden temporary file which is then renamed over the target, so readers
//! only ever observe a complete previous or new value.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cap_std::fs::{Dir, OpenOptions};
use cap_std::ambient_authority;
use uuid::Uuid;

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

use super::validate_key;

/// Failure opening the store directory.
#[derive(Debug, thiserror::Error)]
#[error("failed to open storage directory {path}: {source}")]
pub struct OpenStoreError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

/// Key/value store persisting one file per key under a directory.
#[derive(Debug)]
pub struct DirKeyValueStore {
    dir: Dir,
    root: PathBuf,
}

impl DirKeyValueStore {
    /// Open (creating if needed) the store rooted at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, OpenStoreError> {
        let path = path.as_ref();
        let to_error = |source| OpenStoreError {
            path: path.to_path_buf(),
            source,
        };
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(to_error)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(to_error)?;
        Ok(Self {
            dir,
            root: path.to_path_buf(),
        })
    }

    /// Directory the store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_atomic(&self, key: &str, value: &str) -> io::Result<()> {
        let tmp_name = format!(".{key}.tmp-{}", Uuid::new_v4().simple());
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);

        let written = self.dir.open_with(&tmp_name, &options).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        let renamed = written.and_then(|()| self.dir.rename(&tmp_name, &self.dir, key));
        if renamed.is_err() {
            let _cleanup_result = self.dir.remove_file(&tmp_name);
        }
        renamed
    }
}

impl KeyValueStore for DirKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        validate_key(key)?;
        match self.dir.read_to_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(KeyValueStoreError::io(key, error.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        self.write_atomic(key, value)
            .map_err(|error| KeyValueStoreError::io(key, error.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        match self.dir.remove_file(key) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(KeyValueStoreError::io(key, error.to_string())),
        }
    }
}
