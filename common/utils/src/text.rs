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

//! Text conversion utilities.

/// Replaces every line feed of `text` with a `<br>` tag.
///
/// Layout text parts render markup rather than raw line breaks, so multi-line
/// content has to be converted before it is put into a description block.
/// Returns `None` for an empty input.
///
/// # Examples
///
/// ```rust
/// use dbox_utils::text::nl2br;
///
/// assert_eq!(nl2br("10:30\nMon").as_deref(), Some("10:30<br>Mon"));
/// assert_eq!(nl2br(""), None);
/// ```
pub fn nl2br(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let breaks = text.matches('\n').count();
    let mut ret = String::with_capacity(text.len() + breaks * 3);
    for c in text.chars() {
        match c {
            '\n' => ret.push_str("<br>"),
            c => ret.push(c),
        }
    }
    Some(ret)
}
