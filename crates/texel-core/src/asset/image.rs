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

use super::Asset;

/// A CPU-side representation of a decoded image.
///
/// Pixels are tightly packed 8-bit RGBA, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// The raw RGBA8 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Asset for CpuImage {}

impl CpuImage {
    /// Bytes per RGBA8 pixel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Returns the RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        let px = self.pixels.get(start..start + Self::BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
