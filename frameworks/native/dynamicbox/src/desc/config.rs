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

//! Description document configuration.
//!
//! This module provides the options used when opening a description
//! document: which target it describes, how an existing file is treated and
//! how records are named.

use std::fs::OpenOptions;

use dbox_utils::file_control::desc_file_path;

/// How an existing description file is treated on open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenMode {
    /// Keep existing records and append new ones after them ("merge mode").
    Append,
    /// Discard existing records.
    Truncate,
}

impl OpenMode {
    pub(crate) fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            OpenMode::Append => options.create(true).append(true),
            OpenMode::Truncate => options.create(true).write(true).truncate(true),
        };
        options
    }
}

/// Record naming used when serializing blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flavor {
    /// Dynamic box naming, the option line is written as `option=`.
    Dynamicbox,
    /// Livebox naming, the option line is written as `group=`.
    Livebox,
}

impl Flavor {
    pub(crate) fn option_key(self) -> &'static str {
        match self {
            Flavor::Dynamicbox => "option",
            Flavor::Livebox => "group",
        }
    }
}

/// Configuration options for opening a description document.
///
/// Provides a builder-style API. By default the document describes the box
/// itself, appends to an existing file and uses the dynamic box naming.
#[derive(Clone, Debug)]
pub struct OpenConfig {
    pub(crate) id: String,
    pub(crate) glance_bar: bool,
    pub(crate) mode: OpenMode,
    pub(crate) flavor: Flavor,
}

impl OpenConfig {
    /// Creates a new configuration with default settings.
    ///
    /// # Arguments
    ///
    /// * `id` - Content id of the box, the path of its description file
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            glance_bar: false,
            mode: OpenMode::Append,
            flavor: Flavor::Dynamicbox,
        }
    }

    /// Selects the glance bar as the described target.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining
    pub fn glance_bar(&mut self, glance_bar: bool) -> &mut Self {
        self.glance_bar = glance_bar;
        self
    }

    /// Sets how an existing description file is treated.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining
    pub fn open_mode(&mut self, mode: OpenMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Sets the record naming.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    /// Path of the description file this configuration opens.
    pub fn target_path(&self) -> String {
        desc_file_path(&self.id, self.glance_bar)
    }
}
