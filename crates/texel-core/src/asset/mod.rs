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

//! Provides the foundational traits and primitive types for Texel's asset system.
//!
//! The key components are:
//! - The [`Asset`] trait: A marker for all types that can be cached.
//! - [`AssetHandle`]: the shared, reference-counted handle the cache hands out.
//! - [`AssetLocation`]: a parsed symbolic location such as `"ui:button"`.
//! - [`CpuImage`]: the default decoded image type.
//!
//! None of these know how an asset is read or decoded. That is the job of
//! the collaborators in `texel-io`.

mod handle;
mod image;
mod location;

pub use handle::*;
pub use image::*;
pub use location::*;

/// A marker trait for types that can be managed by the asset cache.
///
/// The supertraits let a cache be shared between threads:
/// - `Send` + `Sync`: The asset can be handed to any thread holding the cache.
/// - `'static`: The asset does not borrow anything, so it can live as long
///   as the cache does.
///
/// # Examples
///
/// ```
/// use texel_core::asset::Asset;
///
/// struct Sprite {
///     frames: Vec<u8>,
/// }
///
/// impl Asset for Sprite {}
/// ```
pub trait Asset: Send + Sync + 'static {}
