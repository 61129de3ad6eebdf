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

//! Description documents.
//!
//! A description document collects the content updates of one box (or its
//! glance bar) as an ordered list of blocks and flushes them to the
//! description file in one go when it is closed. The viewer applies the
//! records of the file in order.
//!
//! Every block gets the next index of the document when it is created, no
//! matter which operation created it. Indices are never handed out twice,
//! deleting a block does not free its index.

mod block;
mod config;

use std::fs::File;
use std::io::BufWriter;

use dbox_utils::file_control::path_exists;

pub use block::*;
pub use config::{Flavor, OpenConfig, OpenMode};

use crate::error::{DboxError, ErrorCode};

/// An open description document.
///
/// Created by [`DescDocument::open`], finished by [`DescDocument::close`].
/// A document dropped without being closed writes nothing.
pub struct DescDocument {
    path: String,
    file: Option<File>,
    flavor: Flavor,
    next_index: i32,
    blocks: Vec<Block>,
}

impl DescDocument {
    /// Opens the description document of a box or of its glance bar.
    ///
    /// Existing records of the file are kept, new ones are appended after
    /// them. Use [`DescDocument::open_with`] to choose another behavior.
    ///
    /// # Arguments
    ///
    /// * `id` - Content id of the box
    /// * `for_glance_bar` - Describe the glance bar instead of the box
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dynamicbox::DescDocument;
    ///
    /// let mut desc = DescDocument::open("/opt/usr/share/live_magazine/clock.png", false).unwrap();
    /// desc.add_block(None, Some("text"), Some("time"), Some("10:30"), None).unwrap();
    /// desc.close().unwrap();
    /// ```
    pub fn open(id: &str, for_glance_bar: bool) -> Result<Self, DboxError> {
        let mut config = OpenConfig::new(id);
        config.glance_bar(for_glance_bar);
        Self::open_with(&config)
    }

    /// Opens a description document with the given configuration.
    pub fn open_with(config: &OpenConfig) -> Result<Self, DboxError> {
        if config.id.is_empty() {
            error!("Invalid content id");
            return Err(ErrorCode::InvalidParameter.into());
        }

        let path = config.target_path();
        debug!(
            "Open a file {} with merge mode {}",
            path,
            if config.mode == OpenMode::Append && path_exists(&path) {
                "enabled"
            } else {
                "disabled"
            }
        );

        let file = cvt_res_error!(
            config.mode.options().open(&path),
            "Failed to open a file {}",
            path
        );

        Ok(Self {
            path,
            file: Some(file),
            flavor: config.flavor,
            next_index: 0,
            blocks: Vec::new(),
        })
    }

    /// Adds a block setting the category of the layout object.
    ///
    /// # Arguments
    ///
    /// * `id` - Script object the category applies to
    /// * `category` - Category name, required
    ///
    /// # Returns
    ///
    /// The index of the new block.
    pub fn set_category(
        &mut self,
        id: Option<&str>,
        category: Option<&str>,
    ) -> Result<i32, DboxError> {
        let category = match category {
            Some(category) => category,
            None => {
                error!("Category is not given");
                return Err(ErrorCode::InvalidParameter.into());
            }
        };
        self.append(TYPE_INFO, PART_CATEGORY, category.to_string(), None, id)
    }

    /// Adds a block setting the content size, written as `<width>x<height>`.
    ///
    /// # Returns
    ///
    /// The index of the new block.
    pub fn set_size(&mut self, id: Option<&str>, width: i32, height: i32) -> Result<i32, DboxError> {
        self.append(
            TYPE_INFO,
            PART_SIZE,
            format!("{}x{}", width, height),
            None,
            id,
        )
    }

    /// Adds a block of any kind.
    ///
    /// # Arguments
    ///
    /// * `id` - Script object the part belongs to
    /// * `kind` - Block kind such as [`TYPE_TEXT`] or [`TYPE_SCRIPT`], required
    /// * `part` - Target part, empty when not given
    /// * `data` - Content for the part, empty when not given
    /// * `option` - Auxiliary parameter, the script group for instance
    ///
    /// # Returns
    ///
    /// The index of the new block.
    pub fn add_block(
        &mut self,
        id: Option<&str>,
        kind: Option<&str>,
        part: Option<&str>,
        data: Option<&str>,
        option: Option<&str>,
    ) -> Result<i32, DboxError> {
        let kind = match kind {
            Some(kind) => kind,
            None => {
                error!("Block type is not given");
                return Err(ErrorCode::InvalidParameter.into());
            }
        };
        self.append(
            kind,
            part.unwrap_or(""),
            data.unwrap_or("").to_string(),
            option,
            id,
        )
    }

    /// Sets or clears the target id of a script block.
    ///
    /// `None` or an empty string clears the target id.
    pub fn set_target_id(&mut self, index: i32, target_id: Option<&str>) -> Result<(), DboxError> {
        let block = match self.blocks.iter_mut().find(|block| block.index == index) {
            Some(block) => block,
            None => {
                error!("Block {} is not found", index);
                return Err(ErrorCode::NotExist.into());
            }
        };

        if !block.is_script() {
            error!("Invalid block is used, {} is {}", index, block.kind);
            return Err(ErrorCode::InvalidParameter.into());
        }

        block.target_id = target_id
            .filter(|target| !target.is_empty())
            .map(str::to_string);
        Ok(())
    }

    /// Deletes a block. The index of the deleted block is not reused.
    pub fn del_block(&mut self, index: i32) -> Result<(), DboxError> {
        if index < 0 {
            error!("Invalid block index {}", index);
            return Err(ErrorCode::InvalidParameter.into());
        }

        match self.blocks.iter().position(|block| block.index == index) {
            Some(pos) => {
                self.blocks.remove(pos);
                Ok(())
            }
            None => {
                error!("Block {} is not found", index);
                Err(ErrorCode::NotExist.into())
            }
        }
    }

    /// Flushes all blocks to the description file and closes it.
    ///
    /// The blocks are released even if writing them fails.
    pub fn close(mut self) -> Result<(), DboxError> {
        let blocks = std::mem::take(&mut self.blocks);
        let file = match self.file.take() {
            Some(file) => file,
            None => return Err(ErrorCode::InvalidParameter.into()),
        };

        let mut writer = BufWriter::new(file);
        for block in blocks.iter() {
            debug!(
                "Flush block {} type={} part={} to {}",
                block.index, block.kind, block.part, self.path
            );
            cvt_res_error!(
                block.write_record(&mut writer, self.flavor),
                "Failed to write block {} to {}",
                block.index,
                self.path
            );
        }

        cvt_res_error!(
            writer.into_inner().map_err(|e| e.into_error()),
            "Failed to close {}",
            self.path
        );
        info!("Description {} is flushed with {} blocks", self.path, blocks.len());
        Ok(())
    }

    /// Path of the description file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Blocks in creation order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the block with the given index.
    pub fn block(&self, index: i32) -> Option<&Block> {
        self.blocks.iter().find(|block| block.index == index)
    }

    /// Index the next created block gets.
    pub fn next_index(&self) -> i32 {
        self.next_index
    }

    fn append(
        &mut self,
        kind: &str,
        part: &str,
        data: String,
        option: Option<&str>,
        id: Option<&str>,
    ) -> Result<i32, DboxError> {
        if self.next_index == i32::MAX {
            error!("Block index of {} is exhausted", self.path);
            return Err(ErrorCode::NoSpace.into());
        }
        if self.blocks.try_reserve(1).is_err() {
            error!("Heap: failed to add a {} block", kind);
            return Err(ErrorCode::OutOfMemory.into());
        }

        let index = self.next_index;
        self.blocks
            .push(Block::new(index, kind, part, data, option, id));
        self.next_index += 1;
        Ok(index)
    }
}

impl Drop for DescDocument {
    fn drop(&mut self) {
        if self.file.is_some() {
            warn!(
                "Description {} is dropped without close, {} blocks are discarded",
                self.path,
                self.blocks.len()
            );
        }
    }
}
