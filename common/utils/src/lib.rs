// Copyright (C) 2025 Huawei Device Co., Ltd.
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

//! Common utilities for dynamic box helpers.
//!
//! This crate provides the small pieces shared by the dynamic box framework
//! crates: description file path and content URI handling, text conversion
//! for layout parts, and logging setup.

#![warn(missing_docs)]
#![allow(clippy::new_without_default)]

/// Description file path and content URI utilities.
pub mod file_control;

/// Text conversion utilities.
pub mod text;

pub use log::{debug, error, info, warn};
