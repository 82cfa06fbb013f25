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

//! The memoizing asset cache.

use crate::base_directory::BaseDirectory;
use crate::config::TextureCacheConfig;
use crate::decoder::{ImageDecoder, PngDecoder};
use crate::error::{BaseDirectoryError, BoxError, CacheError};
use crate::source::{DirectoryBundle, FileSystemResolver, ResourceResolver};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockWriteGuard};
use texel_core::asset::{Asset, AssetHandle, AssetLocation, CpuImage, LocationPolicy};

/// A snapshot of the cache's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Unforced requests answered from the map.
    pub hits: u64,
    /// Unforced requests that had to load.
    pub misses: u64,
    /// Forced requests. Each one loaded.
    pub forced_loads: u64,
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    forced_loads: AtomicU64,
}

/// A central, in-memory cache of decoded images keyed by symbolic location.
///
/// Any given location is decoded once. Subsequent unforced requests for the
/// same location string receive a clone of the cached handle. A forced
/// request always decodes again and replaces the cached entry with the fresh
/// handle.
///
/// Keys are the location strings exactly as given, so `"ui:button"` and
/// `"ui:button.png"` are separate entries even if they resolve to the same file.
///
/// Changing the base directory does not invalidate existing entries.
pub struct AssetCache<A: Asset = CpuImage, D = PngDecoder> {
    base_directory: RwLock<BaseDirectory>,
    policy: LocationPolicy,
    entries: Mutex<HashMap<String, AssetHandle<A>>>,
    decoder: D,
    filesystem: FileSystemResolver,
    bundle: Box<dyn ResourceResolver>,
    counters: Counters,
}

impl AssetCache<CpuImage, PngDecoder> {
    /// Creates a PNG cache rooted at [`BaseDirectory::DEFAULT`].
    pub fn new() -> Self {
        Self::with_decoder(PngDecoder)
    }
}

impl Default for AssetCache<CpuImage, PngDecoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Asset, D: ImageDecoder<A>> AssetCache<A, D> {
    /// Creates an empty cache with the default base directory, the permissive
    /// policy, and a [`DirectoryBundle`] over the working directory.
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            base_directory: RwLock::new(BaseDirectory::default()),
            policy: LocationPolicy::default(),
            entries: Mutex::new(HashMap::new()),
            decoder,
            filesystem: FileSystemResolver,
            bundle: Box::new(DirectoryBundle::default()),
            counters: Counters::default(),
        }
    }

    /// Creates an empty cache from a configuration.
    ///
    /// # Errors
    /// An absolute `base_directory` must be an existing directory. Relative
    /// ones are bundle paths and are accepted as is.
    pub fn from_config(config: &TextureCacheConfig, decoder: D) -> Result<Self, BaseDirectoryError> {
        let base = if config.base_directory.is_absolute() {
            BaseDirectory::new(&config.base_directory)?
        } else {
            BaseDirectory::unchecked(&config.base_directory)
        };
        let cache = Self::with_decoder(decoder).with_policy(config.location_policy);
        *cache.base_directory_mut() = base;
        Ok(cache)
    }

    /// Sets the location policy.
    pub fn with_policy(mut self, policy: LocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the resolver used for relative paths.
    pub fn with_bundle(mut self, bundle: impl ResourceResolver + 'static) -> Self {
        self.bundle = Box::new(bundle);
        self
    }

    /// The policy locations are validated with.
    pub fn policy(&self) -> LocationPolicy {
        self.policy
    }

    /// Returns the asset at `location`, decoding it only on the first request.
    pub fn get(&self, location: &str) -> Result<AssetHandle<A>, CacheError> {
        self.get_with(location, false)
    }

    /// Returns the asset at `location`, bypassing the cache lookup if `force` is set.
    ///
    /// # Errors
    /// [`CacheError::InvalidLocation`] before any I/O if the location is
    /// rejected by the policy. [`CacheError::Read`] or [`CacheError::Decode`]
    /// if a collaborator fails. A failed load leaves the cache untouched.
    pub fn get_with(&self, location: &str, force: bool) -> Result<AssetHandle<A>, CacheError> {
        let location = AssetLocation::parse(location, self.policy)?;

        if !force {
            if let Some(handle) = self.entries().get(location.as_str()) {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                log::debug!("Texture cache hit for '{location}'");
                return Ok(handle.clone());
            }
        }

        // The map lock is not held while loading.
        let handle = AssetHandle::new(self.load(&location)?);

        let mut entries = self.entries();
        if force {
            self.counters.forced_loads.fetch_add(1, Ordering::Relaxed);
            log::debug!("Forced reload of '{location}'");
            entries.insert(location.as_str().to_owned(), handle.clone());
            Ok(handle)
        } else {
            self.counters.misses.fetch_add(1, Ordering::Relaxed);
            log::debug!("Texture cache miss for '{location}'");
            // First writer wins if another thread loaded the same location meanwhile.
            Ok(entries
                .entry(location.as_str().to_owned())
                .or_insert(handle)
                .clone())
        }
    }

    /// Validates `location` and returns the path it resolves to, without any I/O.
    pub fn resolve(&self, location: &str) -> Result<PathBuf, CacheError> {
        let location = AssetLocation::parse(location, self.policy)?;
        Ok(location.resolve(&self.base_directory()))
    }

    /// Replaces the base directory after checking that it is an existing directory.
    ///
    /// On error the previous base directory is kept. Cached entries are kept
    /// either way.
    pub fn set_base_directory(&self, path: impl Into<PathBuf>) -> Result<(), BaseDirectoryError> {
        let base = BaseDirectory::new(path)?;
        log::info!("Texture base directory set to '{}'", base.path().display());
        *self.base_directory_mut() = base;
        Ok(())
    }

    /// The current base directory.
    pub fn base_directory(&self) -> PathBuf {
        self.base_directory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .path()
            .to_path_buf()
    }

    /// Returns `true` if an entry exists for this exact location string.
    pub fn is_cached(&self, location: &str) -> bool {
        self.entries().contains_key(location)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// A snapshot of the hit, miss, and forced-load counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            forced_loads: self.counters.forced_loads.load(Ordering::Relaxed),
        }
    }

    fn load(&self, location: &AssetLocation) -> Result<A, CacheError> {
        let path = location.resolve(&self.base_directory());

        let bytes = self.read(&path).map_err(|source| {
            log::warn!("Could not read '{}': {}", path.display(), source);
            CacheError::Read {
                location: location.to_string(),
                path: path.clone(),
                source,
            }
        })?;

        self.decoder.decode(&bytes).map_err(|source| {
            log::warn!("Could not decode '{}': {}", path.display(), source);
            CacheError::Decode {
                location: location.to_string(),
                path,
                source,
            }
        })
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxError> {
        if path.is_absolute() {
            self.filesystem.read(path)
        } else {
            self.bundle.read(path)
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, AssetHandle<A>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn base_directory_mut(&self) -> RwLockWriteGuard<'_, BaseDirectory> {
        self.base_directory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
