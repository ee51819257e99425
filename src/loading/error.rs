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

//! Error types for loading operations.
//!
//! This module defines the construction-time parameter errors and the runtime
//! error surfaced through a task's deferred result, along with conversion
//! from common error sources.

use std::fmt;
use std::io;

/// Construction-time validation error.
///
/// Raised synchronously; a loading whose options fail validation is never
/// constructed. The payload names the rejected option.
#[derive(Debug, PartialEq, Eq)]
pub enum ParamError {
    /// The option is not an integer count.
    InvalidArgument(&'static str),
    /// The option is an integer but outside the accepted range.
    OutOfRange(&'static str),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::InvalidArgument(name) => write!(f, "{} is not an integer", name),
            ParamError::OutOfRange(name) => write!(f, "{} is out of range", name),
        }
    }
}

impl std::error::Error for ParamError {}

/// Categorizes how a loading task's work ended up failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Cancellation was observed through the task's signal.
    Aborted,
    /// The underlying work failed.
    Failed,
    /// The task gave up waiting on its input.
    Timeout,
}

/// Runtime error surfaced through a task's deferred result.
///
/// Carries the message of the underlying cause unclassified; the kind tells
/// the three failure arms of the lifecycle apart.
#[derive(Debug)]
pub struct LoadError {
    /// Categorizes the failure.
    kind: LoadErrorKind,
    /// Human-readable error message.
    message: String,
}

impl LoadError {
    /// Creates the error a task rejects with after observing cancellation.
    pub fn aborted() -> Self {
        Self {
            kind: LoadErrorKind::Aborted,
            message: "loading aborted".to_string(),
        }
    }

    /// Creates the error a task rejects with after exhausting its own
    /// timeout policy.
    pub fn timed_out() -> Self {
        Self {
            kind: LoadErrorKind::Timeout,
            message: "loading timed out".to_string(),
        }
    }

    /// Creates a failure error carrying the underlying cause's message.
    pub fn failed(message: &str) -> Self {
        Self {
            kind: LoadErrorKind::Failed,
            message: message.to_string(),
        }
    }

    /// Returns the failure category.
    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    /// Converts an I/O error, mapping timed-out reads onto the timeout kind
    /// and preserving the message.
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::TimedOut => LoadErrorKind::Timeout,
            _ => LoadErrorKind::Failed,
        };
        LoadError {
            kind,
            message: err.to_string(),
        }
    }
}
