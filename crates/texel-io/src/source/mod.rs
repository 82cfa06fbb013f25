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

//! Defines where the raw bytes of an asset come from.
//!
//! Absolute paths are read straight from disk with [`FileSystemResolver`].
//! Relative paths go through a bundle instead, so packaged builds can ship
//! their textures next to the executable or compiled into it.

mod bundle;

pub use bundle::{DirectoryBundle, EmbeddedBundle};

use crate::error::BoxError;
use std::path::Path;

/// A trait for reading the raw bytes behind a resolved asset path.
pub trait ResourceResolver: Send + Sync {
    /// Reads the whole resource at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxError>;
}

/// Reads absolute paths from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemResolver;

impl ResourceResolver for FileSystemResolver {
    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxError> {
        std::fs::read(path)
            .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e).into())
    }
}
