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

//! Dynamic Box helper library.
//!
//! Widget processes use this crate to describe script based box content with
//! description files, and to notify the viewer through the provider about
//! updates, scroller holds and extra information.

#![allow(clippy::new_without_default)]
#![warn(
    missing_docs,
    clippy::redundant_static_lifetimes,
    clippy::enum_variant_names,
    clippy::clone_on_copy
)]

#[macro_use]
mod macros;

#[macro_use]
extern crate dbox_utils;

pub mod desc;
mod error;
pub mod provider;
pub mod viewer;

pub use desc::{Block, DescDocument, Flavor, OpenConfig, OpenMode};
pub use error::{DboxError, ErrorCode};
pub use provider::{AppHost, DamageRegion, ExtraInfo, Host, Provider, SlaveHost};
pub use viewer::Viewer;
