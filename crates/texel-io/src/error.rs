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

//! Error types raised by the texture cache.

use std::path::PathBuf;
use texel_core::asset::LocationError;
use thiserror::Error;

/// The error type collaborators (resolvers and decoders) report with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a path was refused as the base directory.
#[derive(Debug, Error)]
pub enum BaseDirectoryError {
    /// Nothing exists at the given path.
    #[error("The directory '{}' does not exist", .0.display())]
    DoesNotExist(PathBuf),
    /// Something exists at the given path, but it is not a directory.
    #[error("The path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// An error returned by [`AssetCache`](crate::AssetCache) lookups.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The location string was rejected before any I/O took place.
    #[error(transparent)]
    InvalidLocation(#[from] LocationError),
    /// The resolver could not produce the bytes of the asset.
    #[error("Failed to read '{location}' from '{}'", path.display())]
    Read {
        /// The symbolic location that was requested.
        location: String,
        /// The resolved path.
        path: PathBuf,
        /// The resolver's error, unchanged.
        #[source]
        source: BoxError,
    },
    /// The decoder rejected the bytes.
    #[error("Failed to decode '{location}' from '{}'", path.display())]
    Decode {
        /// The symbolic location that was requested.
        location: String,
        /// The resolved path.
        path: PathBuf,
        /// The decoder's error, unchanged.
        #[source]
        source: BoxError,
    },
}
