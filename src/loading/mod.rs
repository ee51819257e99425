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

pub(crate) const READY: usize = 0;
pub(crate) const RUNNING: usize = 1;
pub(crate) const COMPLETED: usize = 2;
pub(crate) const ABORTED: usize = 3;
pub(crate) const FAILED: usize = 4;

pub(crate) mod error;
pub(crate) mod notifier;
pub(crate) mod reader;
pub(crate) mod task;

/// Lifecycle status of a loading task.
///
/// Statuses only ever move forward: `Ready` to `Running`, then to exactly one
/// of the three terminal statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Constructed, not yet run.
    Ready,
    /// The task's work is in flight.
    Running,
    /// Terminal: the work succeeded.
    Completed,
    /// Terminal: cancellation was observed.
    Aborted,
    /// Terminal: the work failed or timed out.
    Failed,
}

impl LoadStatus {
    pub(crate) fn from_code(code: usize) -> LoadStatus {
        match code {
            READY => LoadStatus::Ready,
            RUNNING => LoadStatus::Running,
            COMPLETED => LoadStatus::Completed,
            ABORTED => LoadStatus::Aborted,
            _ => LoadStatus::Failed,
        }
    }
}
