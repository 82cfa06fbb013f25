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

//! Image decoding.

use crate::error::BoxError;
use anyhow::Context;
use texel_core::asset::{Asset, CpuImage};

/// A trait for types that can turn the raw bytes of an image file into an asset.
///
/// The cache never looks inside what a decoder returns. Each decoder is
/// specialized for a single asset type `A`.
pub trait ImageDecoder<A: Asset>: Send + Sync {
    /// Parses a byte slice and converts it into an instance of `A`.
    fn decode(&self, bytes: &[u8]) -> Result<A, BoxError>;
}

impl<A, F> ImageDecoder<A> for F
where
    A: Asset,
    F: Fn(&[u8]) -> Result<A, BoxError> + Send + Sync,
{
    fn decode(&self, bytes: &[u8]) -> Result<A, BoxError> {
        self(bytes)
    }
}

/// Decodes PNG (and any other format the `image` crate recognises) into RGBA8.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl ImageDecoder<CpuImage> for PngDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<CpuImage, BoxError> {
        let img = image::load_from_memory(bytes).context("Failed to decode image from memory")?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        Ok(CpuImage {
            width,
            height,
            pixels: rgba_img.into_raw(),
        })
    }
}
