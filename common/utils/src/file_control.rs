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

//! Description file path and content URI utilities.
//!
//! This module provides functions for deriving the path of a description
//! file from a content id, and for converting content ids to the `file://`
//! URIs used when talking to the viewer.

use std::path::Path;

/// Schema prefix of content URIs.
pub const FILE_SCHEMA: &str = "file://";

/// Suffix appended to the content id of a glance bar description file.
pub const DESC_SUFFIX: &str = ".desc";

/// Checks if a path exists in the filesystem.
///
/// # Arguments
///
/// * `path` - The path to check for existence
///
/// # Examples
///
/// ```rust
/// use dbox_utils::file_control::path_exists;
///
/// assert!(path_exists("/")); // Root directory should exist
/// assert!(!path_exists("/this/path/almost/certainly/does/not/exist"));
/// ```
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Returns the description file path for a content id.
///
/// The glance bar shares the content id of its box, so its description file
/// carries the [`DESC_SUFFIX`] to keep the two apart.
///
/// # Arguments
///
/// * `base` - The content id (a filesystem path) of the box
/// * `for_glance_bar` - Whether the description targets the glance bar
///
/// # Examples
///
/// ```rust
/// use dbox_utils::file_control::desc_file_path;
///
/// assert_eq!(desc_file_path("/tmp/clock.png", false), "/tmp/clock.png");
/// assert_eq!(desc_file_path("/tmp/clock.png", true), "/tmp/clock.png.desc");
/// ```
pub fn desc_file_path(base: &str, for_glance_bar: bool) -> String {
    if for_glance_bar {
        format!("{}{}", base, DESC_SUFFIX)
    } else {
        base.to_string()
    }
}

/// Determines whether an id already carries the `file://` schema.
///
/// # Examples
///
/// ```rust
/// use dbox_utils::file_control::has_file_schema;
///
/// assert!(has_file_schema("file:///opt/usr/share/live_magazine/a.png"));
/// assert!(!has_file_schema("/opt/usr/share/live_magazine/a.png"));
/// ```
pub fn has_file_schema(id: &str) -> bool {
    id.starts_with(FILE_SCHEMA)
}

/// Converts a content id to a `file://` URI.
///
/// The schema is prepended unconditionally.
///
/// # Examples
///
/// ```rust
/// use dbox_utils::file_control::id_to_uri;
///
/// assert_eq!(id_to_uri("/tmp/a.png"), "file:///tmp/a.png");
/// ```
pub fn id_to_uri(id: &str) -> String {
    format!("{}{}", FILE_SCHEMA, id)
}

/// Converts a content id to a `file://` URI unless it already is one.
///
/// # Examples
///
/// ```rust
/// use dbox_utils::file_control::uri_or_id;
///
/// assert_eq!(uri_or_id("/tmp/a.png"), "file:///tmp/a.png");
/// assert_eq!(uri_or_id("file:///tmp/a.png"), "file:///tmp/a.png");
/// ```
pub fn uri_or_id(id: &str) -> String {
    if has_file_schema(id) {
        id.to_string()
    } else {
        id_to_uri(id)
    }
}
