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

//! Provider capabilities.
//!
//! The buffer, IPC and package bookkeeping of a dynamic box live in the
//! provider library and in the process hosting the box. This module declares
//! the parts of them the helper calls. Implementations are handed to
//! [`Viewer`](crate::Viewer) when it is created.

use crate::error::DboxError;

/// Damaged area of a box buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageRegion {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

/// Extra information the viewer shows for a box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtraInfo {
    /// Content string of the box.
    pub content: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Icon path.
    pub icon: Option<String>,
    /// Display name.
    pub name: Option<String>,
}

impl ExtraInfo {
    /// Overwrites the fields of `self` with the non-empty fields of `other`.
    pub fn merge(&mut self, other: &ExtraInfo) {
        fn pick(dst: &mut Option<String>, src: &Option<String>) {
            if let Some(value) = src.as_deref().filter(|value| !value.is_empty()) {
                *dst = Some(value.to_string());
            }
        }

        pick(&mut self.content, &other.content);
        pick(&mut self.title, &other.title);
        pick(&mut self.icon, &other.icon);
        pick(&mut self.name, &other.name);
    }
}

/// Channel from the box to the viewer, owned by the provider library.
pub trait Provider {
    /// Whether a box buffer exists for the package and instance.
    fn has_buffer(&self, pkgname: &str, uri: &str) -> bool;

    /// Tells the viewer that a buffer was updated.
    fn send_buffer_updated(
        &self,
        idx: i32,
        region: &DamageRegion,
        for_glance_bar: bool,
        desc_file: &str,
    ) -> Result<(), DboxError>;

    /// Asks the viewer to close the glance bar of an instance.
    fn send_request_close_glance_bar(
        &self,
        pkgname: &str,
        uri: &str,
        reason: i32,
    ) -> Result<(), DboxError>;

    /// Holds or releases the viewer scroller.
    fn send_hold_scroll(&self, pkgname: &str, uri: &str, hold: bool) -> Result<(), DboxError>;

    /// Sends the extra information of an instance to the viewer.
    fn send_extra_info(&self, pkgname: &str, uri: &str, info: &ExtraInfo) -> Result<(), DboxError>;
}

/// Services of the data provider slave hosting the box.
pub trait SlaveHost {
    /// Package owning the instance with the given URI.
    fn find_pkgname(&self, uri: &str) -> Option<String>;

    /// Requests an update of the instance with the given URI.
    fn request_update_by_id(&self, uri: &str) -> Result<(), DboxError>;

    /// Triggers the monitor checking whether the content was updated.
    fn trigger_update_monitor(&self, id: &str, for_glance_bar: bool) -> Result<(), DboxError>;

    /// Updates the extra information of an instance without a buffer.
    fn update_extra_info(&self, id: &str, info: &ExtraInfo) -> Result<(), DboxError>;

    /// Tells the viewer that a buffer was updated, through the slave connection.
    fn send_updated(
        &self,
        pkgname: &str,
        id: &str,
        idx: i32,
        region: &DamageRegion,
        for_glance_bar: bool,
        desc_file: &str,
    ) -> Result<(), DboxError>;
}

/// Services of a provider application hosting the box.
pub trait AppHost {
    /// Tells the viewer that a buffer was updated.
    fn send_updated(
        &self,
        idx: i32,
        region: &DamageRegion,
        for_glance_bar: bool,
    ) -> Result<(), DboxError>;
}

/// The process hosting the box.
pub enum Host {
    /// Loaded by the data provider slave.
    Slave(Box<dyn SlaveHost>),
    /// Running as a provider application.
    App(Box<dyn AppHost>),
    /// Neither, only the provider channel is available.
    Unavailable,
}

impl Host {
    pub(crate) fn slave(&self) -> Option<&dyn SlaveHost> {
        match self {
            Host::Slave(slave) => Some(slave.as_ref()),
            _ => None,
        }
    }
}
