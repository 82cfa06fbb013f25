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

//! # Texel IO
//!
//! Loads images by symbolic location and memoizes them.
//!
//! ```no_run
//! use texel_io::AssetCache;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = AssetCache::new();
//! cache.set_base_directory("/opt/game/assets/textures")?;
//!
//! // Reads /opt/game/assets/textures/ui/button.png once.
//! let button = cache.get("ui:button")?;
//! let again = cache.get("ui:button")?;
//! assert!(texel_core::asset::AssetHandle::ptr_eq(&button, &again));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod base_directory;
pub mod cache;
pub mod config;
pub mod decoder;
pub mod error;
pub mod source;

pub use base_directory::BaseDirectory;
pub use cache::{AssetCache, CacheStats};
pub use config::TextureCacheConfig;
pub use decoder::{ImageDecoder, PngDecoder};
pub use error::{BaseDirectoryError, BoxError, CacheError};
pub use source::{DirectoryBundle, EmbeddedBundle, FileSystemResolver, ResourceResolver};
