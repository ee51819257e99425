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

//! Core building block for long-running, progress-reporting load operations.
//!
//! This library provides the bookkeeping shared by loading tasks: a known or
//! unknown total, the amount consumed so far, a one-shot status lifecycle,
//! throttled progress notifications, and cooperative cancellation through an
//! externally owned token. Concrete tasks supply the actual I/O and drive the
//! lifecycle through a single mutation capability.

#![allow(clippy::new_without_default)]

// Core loading task functionality module
mod loading;

// Public modules exposing API interfaces
pub mod event; // Progress event kinds and payload snapshots
pub mod observe; // Observer registration and dispatch

pub use event::{ProgressEvent, ProgressEventKind};
pub use loading::error::{LoadError, LoadErrorKind, ParamError};
pub use loading::notifier::ProgressNotifier;
pub use loading::reader::ReadTask;
pub use loading::task::{LoadOptions, LoadTask, Loading, Progress};
pub use loading::LoadStatus;
pub use observe::{ObserverId, ProgressObserver};
