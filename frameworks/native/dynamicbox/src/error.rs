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

use core::fmt;
use std::io;

const STATUS_ERROR: u32 = 0x8000_0000;

/// Status codes reported to dynamic box callers.
///
/// The values match the framework status codes, an error bit plus one flag
/// per failure kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(i32)]
pub enum ErrorCode {
    /// Operation succeeded.
    ErrNone = 0,
    /// A required argument is missing or invalid.
    InvalidParameter = (STATUS_ERROR | 0x0001) as i32,
    /// A required provider capability is not available.
    Fault = (STATUS_ERROR | 0x0002) as i32,
    /// Memory for a new block could not be reserved.
    OutOfMemory = (STATUS_ERROR | 0x0004) as i32,
    /// A file operation failed.
    IoError = (STATUS_ERROR | 0x0100) as i32,
    /// No block or instance matches the given key.
    NotExist = (STATUS_ERROR | 0x0200) as i32,
    /// The block index space is exhausted.
    NoSpace = (STATUS_ERROR | 0x1000) as i32,
}

impl From<DboxError> for ErrorCode {
    fn from(value: DboxError) -> Self {
        match value {
            DboxError::IoError(_error) => ErrorCode::IoError,
            DboxError::ErrorCode(error_code) => error_code,
        }
    }
}

/// Error returned by dynamic box operations.
#[derive(Debug)]
pub enum DboxError {
    /// The backing file could not be opened, written or closed.
    IoError(io::Error),
    /// Any other failure, as a status code.
    ErrorCode(ErrorCode),
}

impl DboxError {
    /// Returns the numeric status code of this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::IoError(_) => ErrorCode::IoError as i32,
            Self::ErrorCode(code) => *code as i32,
        }
    }
}

impl Clone for DboxError {
    fn clone(&self) -> Self {
        match self {
            Self::IoError(arg0) => Self::IoError(io::Error::new(arg0.kind(), arg0.to_string())),
            Self::ErrorCode(arg0) => Self::ErrorCode(*arg0),
        }
    }
}

impl PartialEq<ErrorCode> for DboxError {
    fn eq(&self, other: &ErrorCode) -> bool {
        match self {
            Self::IoError(_) => *other == ErrorCode::IoError,
            Self::ErrorCode(code) => code == other,
        }
    }
}

impl From<ErrorCode> for DboxError {
    fn from(value: ErrorCode) -> Self {
        DboxError::ErrorCode(value)
    }
}

impl From<io::Error> for DboxError {
    fn from(value: io::Error) -> Self {
        DboxError::IoError(value)
    }
}

impl std::error::Error for DboxError {}

impl fmt::Display for DboxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
