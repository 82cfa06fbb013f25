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

use super::ResourceResolver;
use crate::error::BoxError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Resolves relative paths against a root directory.
///
/// The default root is the process working directory.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    /// Creates a bundle rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The directory relative paths are joined onto.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DirectoryBundle {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceResolver for DirectoryBundle {
    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxError> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|e| {
            format!("Failed to read bundled resource '{}': {}", full.display(), e).into()
        })
    }
}

/// An in-memory bundle, typically filled with `include_bytes!`.
///
/// Keys are relative paths with `/` separators, e.g. `assets/textures/ui/button.png`,
/// whatever separator the host platform uses.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedBundle {
    entries: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds a resource, replacing any previous one under the same path.
    pub fn insert(&mut self, path: impl AsRef<Path>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.entries.insert(bundle_key(path.as_ref()), bytes.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, path: impl AsRef<Path>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Returns `true` if a resource is stored under `path`.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.entries.contains_key(&bundle_key(path.as_ref()))
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bundle holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceResolver for EmbeddedBundle {
    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxError> {
        let key = bundle_key(path);
        self.entries
            .get(&key)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| format!("Resource '{key}' is not bundled").into())
    }
}

/// Normalizes a relative path to `a/b/c.png`. `.` components are dropped.
fn bundle_key(path: &Path) -> String {
    let mut parts: Vec<Cow<'_, str>> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            Component::ParentDir => parts.push(Cow::Borrowed("..")),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_directory_bundle_joins_root() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("ui")).unwrap();
        std::fs::write(dir.path().join("ui").join("button.png"), b"png").unwrap();

        let bundle = DirectoryBundle::new(dir.path());
        let bytes = bundle.read(&Path::new("ui").join("button.png")).unwrap();
        assert_eq!(bytes, b"png");
        assert!(bundle.read(Path::new("ui/missing.png")).is_err());
    }

    #[test]
    fn test_embedded_bundle_keys_are_separator_agnostic() {
        let bundle = EmbeddedBundle::new().with("assets/textures/ui/button.png", &b"png"[..]);
        let native = Path::new("assets")
            .join("textures")
            .join("ui")
            .join("button.png");
        assert!(bundle.contains(&native));
        assert!(bundle.contains("./assets/textures/ui/button.png"));
        assert_eq!(bundle.read(&native).unwrap(), b"png");
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_embedded_bundle_missing_resource() {
        let bundle = EmbeddedBundle::new();
        assert!(bundle.is_empty());
        let err = bundle.read(Path::new("ui/button.png")).unwrap_err();
        assert_eq!(err.to_string(), "Resource 'ui/button.png' is not bundled");
    }
}
