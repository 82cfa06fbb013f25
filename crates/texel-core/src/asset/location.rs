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

//! Symbolic asset locations of the form `"folder:subfolder:name"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// The character separating the segments of a symbolic location.
pub const LOCATION_SEPARATOR: char = ':';

/// The file extension every resolved image path ends with.
pub const IMAGE_EXTENSION: &str = "png";

/// How strictly a symbolic location is validated before it is resolved.
///
/// A cache applies exactly one policy to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPolicy {
    /// Any non-empty location is accepted. Empty segments are skipped and
    /// `.png` is appended only if the last segment does not already end with it.
    /// A location made only of separators resolves to the base directory
    /// itself with `.png` appended.
    #[default]
    Permissive,
    /// Every segment must match `[a-zA-Z]+`. `.png` is always appended.
    Strict,
}

/// An error raised while parsing a symbolic location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The location string is empty.
    Empty {
        /// The rejected location string.
        location: String,
    },
    /// A segment contains something other than ASCII letters (strict policy only).
    InvalidSegment {
        /// The rejected location string.
        location: String,
        /// The offending segment.
        segment: String,
    },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Empty { location } => {
                write!(f, "Location '{location}' does not name an asset")
            }
            LocationError::InvalidSegment { location, segment } => {
                write!(
                    f,
                    "Invalid location '{location}': segment '{segment}' must consist of letters only"
                )
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// A validated symbolic location.
///
/// The original string is kept untouched because it is the cache key: two
/// spellings that resolve to the same file are still two distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetLocation {
    raw: String,
    segments: Vec<String>,
    policy: LocationPolicy,
}

impl AssetLocation {
    /// Parses `raw` under the given policy.
    ///
    /// # Errors
    /// Returns a [`LocationError`] if `raw` is empty, or if the strict policy
    /// finds a segment that is not made of ASCII letters.
    pub fn parse(raw: &str, policy: LocationPolicy) -> Result<Self, LocationError> {
        if raw.is_empty() {
            return Err(LocationError::Empty {
                location: raw.to_owned(),
            });
        }

        let segments: Vec<String> = match policy {
            LocationPolicy::Permissive => raw
                .split(LOCATION_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
            LocationPolicy::Strict => raw
                .split(LOCATION_SEPARATOR)
                .map(|segment| {
                    if is_letters_only(segment) {
                        Ok(segment.to_owned())
                    } else {
                        Err(LocationError::InvalidSegment {
                            location: raw.to_owned(),
                            segment: segment.to_owned(),
                        })
                    }
                })
                .collect::<Result<_, _>>()?,
        };

        Ok(Self {
            raw: raw.to_owned(),
            segments,
            policy,
        })
    }

    /// The location exactly as the caller wrote it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The policy this location was validated with.
    pub fn policy(&self) -> LocationPolicy {
        self.policy
    }

    /// The path segments, in order. Empty only for a permissive location
    /// made of separators alone.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// The file path relative to a base directory, extension included.
    ///
    /// Root and prefix components inside a segment are dropped, so the result
    /// is always relative. It is not contained: `..` segments are kept and
    /// may climb above the base directory.
    ///
    /// Empty when the location has no segments.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        let (name, folders) = match self.segments.split_last() {
            Some(split) => split,
            None => return path,
        };

        for folder in folders {
            push_segment(&mut path, folder);
        }

        let suffix = format!(".{IMAGE_EXTENSION}");
        let file_name = match self.policy {
            LocationPolicy::Permissive if name.ends_with(&suffix) => name.clone(),
            _ => format!("{name}{suffix}"),
        };
        push_segment(&mut path, &file_name);
        path
    }

    /// Joins [`relative_path`](Self::relative_path) onto `base`.
    ///
    /// Without segments the extension is appended to `base` itself, so
    /// `":::"` under `assets/textures` resolves to `assets/textures.png`.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        if self.segments.is_empty() {
            let mut path = base.as_os_str().to_owned();
            path.push(format!(".{IMAGE_EXTENSION}"));
            return PathBuf::from(path);
        }
        base.join(self.relative_path())
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_letters_only(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphabetic())
}

fn push_segment(path: &mut PathBuf, segment: &str) {
    for component in Path::new(segment).components() {
        match component {
            Component::Normal(_) | Component::CurDir | Component::ParentDir => {
                path.push(component)
            }
            Component::RootDir | Component::Prefix(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(raw: &str, policy: LocationPolicy) -> PathBuf {
        AssetLocation::parse(raw, policy).unwrap().relative_path()
    }

    #[test]
    fn test_permissive_appends_extension_once() {
        let p = LocationPolicy::Permissive;
        assert_eq!(rel("folder:name", p), Path::new("folder").join("name.png"));
        assert_eq!(rel("folder:name.png", p), Path::new("folder").join("name.png"));
        assert_eq!(rel("name", p), PathBuf::from("name.png"));
    }

    #[test]
    fn test_permissive_accepts_digits_and_punctuation() {
        let p = LocationPolicy::Permissive;
        assert_eq!(rel("tiles:grass_01", p), Path::new("tiles").join("grass_01.png"));
        assert_eq!(rel("ui:bad-name!", p), Path::new("ui").join("bad-name!.png"));
    }

    #[test]
    fn test_permissive_skips_empty_segments() {
        let p = LocationPolicy::Permissive;
        assert_eq!(rel("ui::button:", p), Path::new("ui").join("button.png"));
    }

    #[test]
    fn test_permissive_rejects_only_the_empty_string() {
        let p = LocationPolicy::Permissive;
        assert!(matches!(
            AssetLocation::parse("", p),
            Err(LocationError::Empty { .. })
        ));
        let separators = AssetLocation::parse(":::", p).unwrap();
        assert_eq!(separators.as_str(), ":::");
        assert_eq!(separators.segments().count(), 0);
        assert_eq!(separators.relative_path(), PathBuf::new());
    }

    #[test]
    fn test_separators_only_resolve_next_to_base() {
        let location = AssetLocation::parse(":::", LocationPolicy::Permissive).unwrap();
        assert_eq!(
            location.resolve(Path::new("/assets/textures")),
            PathBuf::from("/assets/textures.png")
        );
    }

    #[test]
    fn test_parent_segments_are_kept() {
        let p = LocationPolicy::Permissive;
        let path = rel("..:secret", p);
        assert!(path.is_relative());
        assert_eq!(path, Path::new("..").join("secret.png"));
        assert_eq!(
            AssetLocation::parse("..:secret", p)
                .unwrap()
                .resolve(Path::new("/assets/textures")),
            Path::new("/assets/textures").join("..").join("secret.png")
        );
    }

    #[test]
    fn test_permissive_never_escapes_to_root() {
        let p = LocationPolicy::Permissive;
        let path = rel("/etc:passwd", p);
        assert!(path.is_relative());
        assert_eq!(path, Path::new("etc").join("passwd.png"));
    }

    #[test]
    fn test_strict_accepts_letters() {
        let s = LocationPolicy::Strict;
        assert_eq!(
            rel("folder:sub:name", s),
            Path::new("folder").join("sub").join("name.png")
        );
        assert_eq!(rel("name", s), PathBuf::from("name.png"));
    }

    #[test]
    fn test_strict_rejects_other_characters() {
        let s = LocationPolicy::Strict;
        for raw in ["bad-name!", "name.png", "ui:btn2", "ui::button", "ui:", ""] {
            assert!(AssetLocation::parse(raw, s).is_err(), "accepted {raw:?}");
        }
        let err = AssetLocation::parse("ui:btn2", s).unwrap_err();
        assert_eq!(
            err,
            LocationError::InvalidSegment {
                location: "ui:btn2".into(),
                segment: "btn2".into(),
            }
        );
    }

    #[test]
    fn test_resolve_and_raw_key() {
        let location = AssetLocation::parse("ui:button", LocationPolicy::Strict).unwrap();
        assert_eq!(location.as_str(), "ui:button");
        assert_eq!(location.to_string(), "ui:button");
        assert_eq!(
            location.resolve(Path::new("/assets/textures")),
            Path::new("/assets/textures").join("ui").join("button.png")
        );
        assert_eq!(location.segments().collect::<Vec<_>>(), ["ui", "button"]);
    }
}
