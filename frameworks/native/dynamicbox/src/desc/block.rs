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

//! Description blocks.

use std::io::{self, Write};

use super::Flavor;

/// Block kind for a color update.
pub const TYPE_COLOR: &str = "color";
/// Block kind for a text update.
pub const TYPE_TEXT: &str = "text";
/// Block kind for an image update.
pub const TYPE_IMAGE: &str = "image";
/// Block kind for a signal emission.
pub const TYPE_SIGNAL: &str = "signal";
/// Block kind for box information (category, size).
pub const TYPE_INFO: &str = "info";
/// Block kind for a drag position update.
pub const TYPE_DRAG: &str = "drag";
/// Block kind for a script object.
pub const TYPE_SCRIPT: &str = "script";
/// Block kind for accessibility information.
pub const TYPE_ACCESS: &str = "access";
/// Block kind for an accessibility operation.
pub const TYPE_ACCESS_OPERATION: &str = "access,operation";

/// Accessibility operation: set the highlight on a part.
pub const DATA_ACCESS_OPERATION_HL_SET: &str = "set,hl";
/// Accessibility operation: remove the highlight from a part.
pub const DATA_ACCESS_OPERATION_HL_UNSET: &str = "unset,hl";
/// Accessibility operation: move the highlight to the next part.
pub const DATA_ACCESS_OPERATION_HL_NEXT: &str = "next,hl";
/// Accessibility operation: move the highlight to the previous part.
pub const DATA_ACCESS_OPERATION_HL_PREV: &str = "prev,hl";
/// Accessibility operation: reset the highlight chain.
pub const DATA_ACCESS_OPERATION_RESET: &str = "reset,focus";

/// Highlight movement wraps around at the ends of the chain.
pub const OPTION_ACCESS_HL_LOOP: &str = "cycle";
/// Highlight movement stops at the ends of the chain.
pub const OPTION_ACCESS_HL_NOLOOP: &str = "no,cycle";

/// Reserved part of the category information block.
pub(crate) const PART_CATEGORY: &str = "category";
/// Reserved part of the size information block.
pub(crate) const PART_SIZE: &str = "size";

/// One content update record of a description document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub(crate) index: i32,
    pub(crate) kind: String,
    pub(crate) part: String,
    pub(crate) data: String,
    pub(crate) option: Option<String>,
    pub(crate) source_id: Option<String>,
    pub(crate) target_id: Option<String>,
}

impl Block {
    pub(crate) fn new(
        index: i32,
        kind: &str,
        part: &str,
        data: String,
        option: Option<&str>,
        source_id: Option<&str>,
    ) -> Self {
        Self {
            index,
            kind: kind.to_string(),
            part: part.to_string(),
            data,
            option: option.map(str::to_string),
            source_id: source_id.map(str::to_string),
            target_id: None,
        }
    }

    /// Index assigned to this block when it was created.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Kind of the block, `text`, `image`, `script`...
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Layout part this block updates.
    pub fn part(&self) -> &str {
        &self.part
    }

    /// Content for the part.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Auxiliary parameter, the script group name for instance.
    pub fn option(&self) -> Option<&str> {
        self.option.as_deref()
    }

    /// Script object the part belongs to.
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Target id of a script block.
    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    /// Whether this is a script block. Kinds compare case-insensitively.
    pub fn is_script(&self) -> bool {
        self.kind.eq_ignore_ascii_case(TYPE_SCRIPT)
    }

    /// Writes the block as one brace delimited record.
    ///
    /// Absent optional fields produce no line at all.
    pub(crate) fn write_record<W: Write>(&self, w: &mut W, flavor: Flavor) -> io::Result<()> {
        writeln!(w, "{{")?;
        writeln!(w, "type={}", self.kind)?;
        writeln!(w, "part={}", self.part)?;
        writeln!(w, "data={}", self.data)?;
        if let Some(option) = &self.option {
            writeln!(w, "{}={}", flavor.option_key(), option)?;
        }
        if let Some(id) = &self.source_id {
            writeln!(w, "id={}", id)?;
        }
        if let Some(target) = &self.target_id {
            writeln!(w, "target={}", target)?;
        }
        writeln!(w, "}}")
    }
}
