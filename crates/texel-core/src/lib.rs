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

//! # Texel Core
//!
//! Foundational crate containing the traits and plain types shared by the
//! texture cache: the [`Asset`](asset::Asset) marker, shared handles, decoded
//! images, and the parser for symbolic asset locations.
//!
//! Nothing in here touches the filesystem. I/O lives in `texel-io`.

#![warn(missing_docs)]

pub mod asset;
