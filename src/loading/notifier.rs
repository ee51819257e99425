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

//! Mutation capability of a loading task.
//!
//! This module provides the notifier a concrete task drives its counters,
//! lifecycle and notifications through. There is exactly one notifier per
//! loading; it shares the counters with the read handles and owns the
//! progress throttle.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;

use super::{ABORTED, COMPLETED, FAILED, RUNNING};
use crate::event::{ProgressEvent, ProgressEventKind};
use crate::observe::EventRegistrar;

/// Minimum interval between delivered progress notifications.
///
/// Progress notifications inside the interval are dropped to bound the
/// notification rate during rapid data reception.
const PROGRESS_NOTIFY_INTERVAL: Duration = Duration::from_millis(50);

/// Restricts how frequently progress notifications are delivered.
#[derive(Debug)]
struct ProgressRestriction {
    /// When the last progress notification went out, on the monotonic clock.
    last_notified: Option<Instant>,
}

impl ProgressRestriction {
    fn new() -> Self {
        Self {
            last_notified: None,
        }
    }

    /// Records the current instant if the interval has passed.
    ///
    /// # Returns
    /// `true` if a notification may go out now.
    fn pass(&mut self) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_notified {
            if now.duration_since(last) < PROGRESS_NOTIFY_INTERVAL {
                return false;
            }
        }
        self.last_notified = Some(now);
        true
    }
}

/// Mutation capability over one loading task's state.
///
/// Created together with its [`Loading`](crate::Loading) read handle and not
/// obtainable any other way; whoever holds the notifier is the task
/// implementation. Terminal transitions are first-wins: once one of
/// [`complete`](Self::complete), [`abort`](Self::abort), [`fail`](Self::fail)
/// or [`timeout`](Self::timeout) has run, the others do nothing.
#[derive(Debug)]
pub struct ProgressNotifier {
    /// Sequence number for log correlation.
    seq: usize,
    /// Expected total; `None` means indeterminate.
    total: Option<u64>,
    /// Amount consumed so far, shared with the read handles.
    loaded: Arc<AtomicU64>,
    /// Atomic status code of the lifecycle.
    status: Arc<AtomicUsize>,
    /// Atomic flag set by the first terminal transition.
    finish: Arc<AtomicBool>,
    /// Registry of observers to notify.
    observers: EventRegistrar,
    /// Restricts how frequently progress notifications are delivered.
    restriction: ProgressRestriction,
}

impl ProgressNotifier {
    pub(crate) fn new(
        seq: usize,
        total: Option<u64>,
        loaded: Arc<AtomicU64>,
        status: Arc<AtomicUsize>,
        finish: Arc<AtomicBool>,
        observers: EventRegistrar,
    ) -> Self {
        Self {
            seq,
            total,
            loaded,
            status,
            finish,
            observers,
            restriction: ProgressRestriction::new(),
        }
    }

    /// Delivers a notification of the given kind to the registered
    /// observers.
    ///
    /// Progress notifications are throttled: inside the 50 ms interval since
    /// the last delivered one the call is dropped silently. Every other kind
    /// is always delivered. Best-effort; never reports an error.
    pub fn notify(&mut self, kind: ProgressEventKind) {
        if kind == ProgressEventKind::Progress && !self.restriction.pass() {
            return;
        }
        self.observers.dispatch(&self.snapshot(kind));
    }

    /// Marks the loading as running and announces the start.
    pub fn start(&mut self) {
        self.status.store(RUNNING, Ordering::Release);
        self.notify(ProgressEventKind::LoadStart);
    }

    /// Records `count` more units consumed and notifies progress, subject to
    /// throttling.
    pub fn advance(&mut self, count: u64) {
        self.loaded.fetch_add(count, Ordering::Release);
        self.notify(ProgressEventKind::Progress);
    }

    /// Marks the loading as completed and announces the outcome.
    pub fn complete(&mut self) {
        if self.finish.swap(true, Ordering::AcqRel) {
            return;
        }
        info!("loading {} completed", self.seq);
        self.status.store(COMPLETED, Ordering::Release);
        self.notify(ProgressEventKind::Load);
        self.notify(ProgressEventKind::LoadEnd);
    }

    /// Marks the loading as aborted and announces the outcome.
    pub fn abort(&mut self) {
        if self.finish.swap(true, Ordering::AcqRel) {
            return;
        }
        info!("loading {} aborted", self.seq);
        self.status.store(ABORTED, Ordering::Release);
        self.notify(ProgressEventKind::Abort);
        self.notify(ProgressEventKind::LoadEnd);
    }

    /// Marks the loading as failed and announces the outcome.
    pub fn fail(&mut self) {
        if self.finish.swap(true, Ordering::AcqRel) {
            return;
        }
        info!("loading {} failed", self.seq);
        self.status.store(FAILED, Ordering::Release);
        self.notify(ProgressEventKind::Error);
        self.notify(ProgressEventKind::LoadEnd);
    }

    /// Marks the loading as failed after the task's own timeout policy gave
    /// up, and announces the outcome.
    ///
    /// The base type starts no timer; only tasks that implement a timeout
    /// policy call this.
    pub fn timeout(&mut self) {
        if self.finish.swap(true, Ordering::AcqRel) {
            return;
        }
        info!("loading {} timed out", self.seq);
        self.status.store(FAILED, Ordering::Release);
        self.notify(ProgressEventKind::Timeout);
        self.notify(ProgressEventKind::LoadEnd);
    }

    fn snapshot(&self, kind: ProgressEventKind) -> ProgressEvent {
        ProgressEvent::new(
            kind,
            self.loaded.load(Ordering::Acquire),
            self.total.unwrap_or(0),
            self.total.is_some(),
        )
    }
}
