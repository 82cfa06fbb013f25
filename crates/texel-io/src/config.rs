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

//! Texture cache configuration, read from `Textures.toml`.

use crate::base_directory::BaseDirectory;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use texel_core::asset::LocationPolicy;

/// Represents the structure of the `Textures.toml` configuration file.
///
/// ```toml
/// base_directory = "/opt/game/assets/textures"
/// location_policy = "strict"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TextureCacheConfig {
    /// The root every symbolic location is resolved under.
    pub base_directory: PathBuf,
    /// How locations are validated.
    pub location_policy: LocationPolicy,
}

impl Default for TextureCacheConfig {
    /// Points at `assets/textures` with the permissive policy.
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from(BaseDirectory::DEFAULT),
            location_policy: LocationPolicy::default(),
        }
    }
}

impl TextureCacheConfig {
    /// The conventional file name of the configuration.
    pub const FILE_NAME: &'static str = "Textures.toml";

    /// Parses a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse texture cache configuration")
    }

    /// Loads the configuration at `path`, or the default one if no file exists there.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!(
                "No '{}' found. Using default texture cache configuration.",
                path.display()
            );
            return Ok(Self::default());
        }

        log::info!("Loading texture cache configuration from '{}'", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))
    }
}
