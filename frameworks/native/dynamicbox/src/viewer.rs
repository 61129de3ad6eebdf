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

//! Viewer notifications.
//!
//! Thin wrappers turning box content ids into the URIs the viewer knows and
//! routing each notification to the provider or to the hosting process.

use std::collections::HashMap;

use dbox_utils::file_control::{id_to_uri, uri_or_id};

use crate::error::{DboxError, ErrorCode};
use crate::provider::{DamageRegion, ExtraInfo, Host, Provider, SlaveHost};

/// Notification entry of a box process.
pub struct Viewer {
    provider: Box<dyn Provider>,
    host: Host,
    extra_info: HashMap<String, ExtraInfo>,
}

impl Viewer {
    /// Creates a viewer notifier over the given provider and host.
    pub fn new(provider: Box<dyn Provider>, host: Host) -> Self {
        Self {
            provider,
            host,
            extra_info: HashMap::new(),
        }
    }

    /// The hosting process.
    pub fn host(&self) -> &Host {
        &self.host
    }

    fn slave(&self, operation: &str) -> Result<&dyn SlaveHost, DboxError> {
        match self.host.slave() {
            Some(slave) => Ok(slave),
            None => {
                error!("\"{}\" is not available without the provider slave", operation);
                Err(ErrorCode::Fault.into())
            }
        }
    }

    /// Requests an update of the box content.
    pub fn request_update(&self, id: &str) -> Result<(), DboxError> {
        if id.is_empty() {
            error!("Invalid argument");
            return Err(ErrorCode::InvalidParameter.into());
        }

        let uri = id_to_uri(id);
        self.slave("request_update_by_id")?.request_update_by_id(&uri)
    }

    /// Reports that the content of a box or of its glance bar was updated.
    pub fn content_is_updated(&self, id: &str, for_glance_bar: bool) -> Result<(), DboxError> {
        self.slave("trigger_update_monitor")?
            .trigger_update_monitor(id, for_glance_bar)
    }

    /// Asks the viewer to close the glance bar of an instance.
    pub fn request_close_glance_bar(
        &self,
        pkgname: &str,
        id: &str,
        reason: i32,
    ) -> Result<(), DboxError> {
        if pkgname.is_empty() || id.is_empty() {
            error!("Invalid parameters ({}) ({})", pkgname, id);
            return Err(ErrorCode::InvalidParameter.into());
        }

        let uri = uri_or_id(id);
        self.provider
            .send_request_close_glance_bar(pkgname, &uri, reason)
    }

    /// Stops the viewer scroller while the box handles a gesture.
    pub fn freeze_scroller(&self, pkgname: &str, id: &str) -> Result<(), DboxError> {
        self.provider
            .send_hold_scroll(pkgname, &id_to_uri(id), true)
    }

    /// Releases the viewer scroller.
    pub fn thaw_scroller(&self, pkgname: &str, id: &str) -> Result<(), DboxError> {
        self.provider
            .send_hold_scroll(pkgname, &id_to_uri(id), false)
    }

    /// Sets the extra information of an instance.
    ///
    /// Instances with a buffer keep the information sent so far, only the
    /// non-empty fields of `info` replace it. A failure to send it is logged
    /// and not reported. Instances without a buffer are updated through the
    /// slave. The kept information is released by
    /// [`Viewer::forget_extra_info`] when the buffer of the instance goes away.
    pub fn set_extra_info(&mut self, id: &str, info: &ExtraInfo) -> Result<(), DboxError> {
        let uri = id_to_uri(id);

        let pkgname = match self.slave("find_pkgname")?.find_pkgname(&uri) {
            Some(pkgname) => pkgname,
            None => {
                error!("Failed to find a package ({})", uri);
                return Err(ErrorCode::InvalidParameter.into());
            }
        };

        if self.provider.has_buffer(&pkgname, &uri) {
            let cached = self.extra_info.entry(uri.clone()).or_default();
            cached.merge(info);
            if let Err(e) = self.provider.send_extra_info(&pkgname, &uri, cached) {
                error!("Failed to send extra info ({}): {}", id, e);
            }
            return Ok(());
        }

        self.slave("update_extra_info")?.update_extra_info(id, info)
    }

    /// Drops the extra information kept for an instance whose buffer is
    /// released, returning it if there was any.
    pub fn forget_extra_info(&mut self, id: &str) -> Option<ExtraInfo> {
        let info = self.extra_info.remove(&id_to_uri(id));
        if info.is_some() {
            debug!("Extra info of {} is released", id);
        }
        info
    }

    /// Tells the viewer that a buffer of the box was updated.
    pub fn send_updated(
        &self,
        pkgname: &str,
        id: &str,
        idx: i32,
        region: &DamageRegion,
        for_glance_bar: bool,
        desc_file: &str,
    ) -> Result<(), DboxError> {
        match &self.host {
            Host::Slave(slave) => {
                slave.send_updated(pkgname, id, idx, region, for_glance_bar, desc_file)
            }
            Host::App(app) => app.send_updated(idx, region, for_glance_bar),
            Host::Unavailable => {
                self.provider
                    .send_buffer_updated(idx, region, for_glance_bar, desc_file)
            }
        }
    }
}
