// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validation of the directory symbolic locations resolve under.

use crate::error::BaseDirectoryError;
use std::path::{Path, PathBuf};

/// The root directory symbolic locations are resolved under.
///
/// A value built with [`BaseDirectory::new`] pointed at an existing directory
/// when it was built. It is never checked again afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectory(PathBuf);

impl BaseDirectory {
    /// The base directory a cache starts with.
    pub const DEFAULT: &'static str = "assets/textures";

    /// Validates `path` and wraps it.
    ///
    /// # Errors
    /// [`BaseDirectoryError::DoesNotExist`] if nothing is at `path`,
    /// [`BaseDirectoryError::NotADirectory`] if it is a file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, BaseDirectoryError> {
        let path = path.into();
        if !path.exists() {
            return Err(BaseDirectoryError::DoesNotExist(path));
        }
        if !path.is_dir() {
            return Err(BaseDirectoryError::NotADirectory(path));
        }
        Ok(Self(path))
    }

    /// Wraps `path` without touching the filesystem.
    ///
    /// Used for relative bases, which name a location inside a resource
    /// bundle rather than a directory on disk.
    pub(crate) fn unchecked(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The wrapped path.
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Default for BaseDirectory {
    fn default() -> Self {
        Self::unchecked(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_accepts_existing_directory() {
        let dir = tempdir().unwrap();
        let base = BaseDirectory::new(dir.path()).unwrap();
        assert_eq!(base.path(), dir.path());
    }

    #[test]
    fn test_rejects_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = BaseDirectory::new(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        match err {
            BaseDirectoryError::DoesNotExist(path) => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"x").unwrap();
        let err = BaseDirectory::new(&file).unwrap_err();
        assert!(matches!(err, BaseDirectoryError::NotADirectory(_)));
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_default_is_relative() {
        let base = BaseDirectory::default();
        assert_eq!(base.path(), Path::new("assets/textures"));
        assert!(base.path().is_relative());
    }
}
