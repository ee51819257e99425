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

//! Progress event kinds and payload snapshots.
//!
//! This module defines the set of lifecycle notifications a loading task can
//! emit and the immutable payload delivered with each of them.

use std::fmt;

/// Kinds of notifications emitted over the lifetime of a loading task.
///
/// The set is exhaustive; observers register for exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressEventKind {
    /// The task was aborted through its cancellation signal.
    Abort,
    /// The task failed.
    Error,
    /// The task consumed its input successfully.
    Load,
    /// The task reached a terminal status, whatever the outcome.
    LoadEnd,
    /// The task started running.
    LoadStart,
    /// The task consumed more of its input. Throttled.
    Progress,
    /// The task gave up waiting on its input.
    Timeout,
}

impl ProgressEventKind {
    /// Returns the wire name of this event kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressEventKind::Abort => "abort",
            ProgressEventKind::Error => "error",
            ProgressEventKind::Load => "load",
            ProgressEventKind::LoadEnd => "loadend",
            ProgressEventKind::LoadStart => "loadstart",
            ProgressEventKind::Progress => "progress",
            ProgressEventKind::Timeout => "timeout",
        }
    }
}

impl fmt::Display for ProgressEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot delivered to observers with every notification.
///
/// Captured at emission time; later changes to the task are not reflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Kind of notification this snapshot was emitted for.
    kind: ProgressEventKind,
    /// Amount consumed at emission time.
    loaded: u64,
    /// Expected total, or 0 when the total is unknown.
    total: u64,
    /// Whether `total` carries a real value.
    length_computable: bool,
}

impl ProgressEvent {
    pub(crate) fn new(
        kind: ProgressEventKind,
        loaded: u64,
        total: u64,
        length_computable: bool,
    ) -> Self {
        Self {
            kind,
            loaded,
            total,
            length_computable,
        }
    }

    /// Returns the kind of this event.
    pub fn kind(&self) -> ProgressEventKind {
        self.kind
    }

    /// Returns the amount consumed when this event was emitted.
    pub fn loaded(&self) -> u64 {
        self.loaded
    }

    /// Returns the expected total, or 0 when the total is unknown.
    ///
    /// Check `length_computable` to tell a zero total from an unknown one.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns whether the emitting task knows its total.
    pub fn length_computable(&self) -> bool {
        self.length_computable
    }
}
