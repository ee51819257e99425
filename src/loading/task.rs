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

//! Loading task bookkeeping and the task contract.
//!
//! This module defines the options a loading is constructed from, the shared
//! read surface over its state, and the trait every concrete task
//! implements. Construction hands out exactly one mutation capability; see
//! [`ProgressNotifier`](crate::ProgressNotifier).

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use tokio_util::sync::CancellationToken;

use super::error::{LoadError, ParamError};
use super::notifier::ProgressNotifier;
use super::{LoadStatus, READY};
use crate::event::ProgressEventKind;
use crate::observe::{EventRegistrar, ObserverId, ProgressObserver};

/// Sequence counter for log correlation across loading instances.
static NEXT_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Builder-style options for constructing a loading.
///
/// # Examples
///
/// ```rust
/// use loading_core::LoadOptions;
///
/// let mut options = LoadOptions::new();
/// options.total(1024);
/// ```
pub struct LoadOptions {
    /// Expected total, if the loading has a computable length.
    total: Option<i64>,
    /// Cancellation signal the task observes.
    signal: Option<CancellationToken>,
}

impl LoadOptions {
    /// Creates options for an indeterminate loading with no signal.
    pub fn new() -> Self {
        Self {
            total: None,
            signal: None,
        }
    }

    /// Sets the expected total.
    ///
    /// Validated at construction time; a negative value fails
    /// [`Loading::new`] with [`ParamError::OutOfRange`].
    pub fn total(&mut self, total: i64) -> &mut Self {
        self.total = Some(total);
        self
    }

    /// Sets the cancellation signal.
    ///
    /// The signal stays owned by the caller; the loading only ever polls it
    /// or subscribes to it, it never triggers or closes it.
    pub fn signal(&mut self, signal: CancellationToken) -> &mut Self {
        self.signal = Some(signal);
        self
    }

    /// Parses a total arriving as text, e.g. a content-length header value.
    ///
    /// A non-numeric string fails with [`ParamError::InvalidArgument`], a
    /// negative value with [`ParamError::OutOfRange`].
    pub fn parse_total(text: &str) -> Result<i64, ParamError> {
        let total = text
            .trim()
            .parse::<i64>()
            .map_err(|_| ParamError::InvalidArgument("options.total"))?;
        if total < 0 {
            return Err(ParamError::OutOfRange("options.total"));
        }
        Ok(total)
    }
}

/// Shared read surface over one loading task's state.
///
/// Cloning shares the underlying state; clones and the task's notifier
/// observe the same counters. All accessors are side-effect-free. Mutation
/// happens only through the [`ProgressNotifier`] handed out together with
/// this handle by [`Loading::new`].
///
/// # Examples
///
/// ```rust
/// use loading_core::{LoadOptions, LoadStatus, Loading};
///
/// let mut options = LoadOptions::new();
/// options.total(100);
/// let (loading, _notifier) = Loading::new(options).unwrap();
/// assert_eq!(loading.total(), 100);
/// assert_eq!(loading.loaded(), 0);
/// assert_eq!(loading.status(), LoadStatus::Ready);
/// ```
#[derive(Clone, Debug)]
pub struct Loading {
    /// Sequence number for log correlation.
    seq: usize,
    /// Expected total; `None` means indeterminate.
    total: Option<u64>,
    /// Amount consumed so far.
    loaded: Arc<AtomicU64>,
    /// Atomic status code of the lifecycle.
    status: Arc<AtomicUsize>,
    /// Atomic flag set by the first terminal transition.
    finish: Arc<AtomicBool>,
    /// Registry of observers to notify.
    observers: EventRegistrar,
    /// Cancellation signal, owned by the caller.
    signal: Option<CancellationToken>,
}

impl Loading {
    /// Validates the options and creates the bookkeeping pair.
    ///
    /// The returned [`ProgressNotifier`] is the only way to advance the
    /// counters or the lifecycle; a concrete task keeps it private and hands
    /// the `Loading` out to whoever wants to observe the work.
    pub fn new(options: LoadOptions) -> Result<(Loading, ProgressNotifier), ParamError> {
        let total = match options.total {
            Some(total) if total < 0 => return Err(ParamError::OutOfRange("options.total")),
            Some(total) => Some(total as u64),
            None => None,
        };
        let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
        info!("new loading {} total {:?}", seq, total);
        let loading = Loading {
            seq,
            total,
            loaded: Arc::new(AtomicU64::new(0)),
            status: Arc::new(AtomicUsize::new(READY)),
            finish: Arc::new(AtomicBool::new(false)),
            observers: EventRegistrar::new(),
            signal: options.signal,
        };
        let notifier = ProgressNotifier::new(
            seq,
            total,
            loading.loaded_flag(),
            loading.status_flag(),
            loading.finish_flag(),
            loading.observers.clone(),
        );
        Ok((loading, notifier))
    }

    /// Returns the sequence number of this loading, for log correlation.
    pub fn seq(&self) -> usize {
        self.seq
    }

    /// Returns the expected total, or 0 when the loading is indeterminate.
    ///
    /// Check [`indeterminate`](Self::indeterminate) to tell a zero total
    /// from an unknown one.
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }

    /// Returns whether the loading has no computable length.
    pub fn indeterminate(&self) -> bool {
        self.total.is_none()
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> LoadStatus {
        LoadStatus::from_code(self.status.load(Ordering::Acquire))
    }

    /// Returns the amount consumed so far.
    pub fn loaded(&self) -> u64 {
        self.loaded.load(Ordering::Acquire)
    }

    /// Returns whether the loading has reached a terminal status.
    pub fn is_finish(&self) -> bool {
        self.finish.load(Ordering::Acquire)
    }

    /// Returns a live view over the loading's counters.
    ///
    /// The view reads through the shared state, so it reflects increments
    /// made after it was obtained.
    pub fn progress(&self) -> Progress {
        Progress {
            loaded: self.loaded.clone(),
            total: self.total,
        }
    }

    /// Returns the cancellation signal, if one was supplied.
    pub fn signal(&self) -> Option<&CancellationToken> {
        self.signal.as_ref()
    }

    /// Registers an observer for one event kind.
    ///
    /// # Returns
    /// The id to remove the registration with.
    pub fn add_observer(
        &self,
        kind: ProgressEventKind,
        observer: impl ProgressObserver + 'static,
    ) -> ObserverId {
        self.observers.add(kind, false, Box::new(observer))
    }

    /// Registers an observer dropped again after its first delivery.
    pub fn add_once(
        &self,
        kind: ProgressEventKind,
        observer: impl ProgressObserver + 'static,
    ) -> ObserverId {
        self.observers.add(kind, true, Box::new(observer))
    }

    /// Removes a registration by id.
    ///
    /// # Returns
    /// `false` when the id was already removed or spent.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    #[inline]
    fn loaded_flag(&self) -> Arc<AtomicU64> {
        self.loaded.clone()
    }

    #[inline]
    fn status_flag(&self) -> Arc<AtomicUsize> {
        self.status.clone()
    }

    #[inline]
    fn finish_flag(&self) -> Arc<AtomicBool> {
        self.finish.clone()
    }
}

/// Live view over a loading's counters.
#[derive(Clone)]
pub struct Progress {
    loaded: Arc<AtomicU64>,
    total: Option<u64>,
}

impl Progress {
    /// Returns the amount consumed so far.
    pub fn loaded(&self) -> u64 {
        self.loaded.load(Ordering::Acquire)
    }

    /// Returns the expected total, or 0 when the total is unknown.
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }

    /// Returns whether the total carries a real value.
    pub fn length_computable(&self) -> bool {
        self.total.is_some()
    }
}

/// Contract implemented by every concrete loading task.
///
/// Implementations transition the lifecycle through their private
/// [`ProgressNotifier`]: [`start`](ProgressNotifier::start) before the work,
/// [`advance`](ProgressNotifier::advance) per consumed chunk, and exactly one
/// of [`complete`](ProgressNotifier::complete),
/// [`abort`](ProgressNotifier::abort), [`fail`](ProgressNotifier::fail) or
/// [`timeout`](ProgressNotifier::timeout) at the end, resolving or rejecting
/// the returned future to match. `run` must not be invoked more than once
/// per instance.
#[async_trait]
pub trait LoadTask: Send {
    /// Value the task produces on success.
    type Output: Send;

    /// Returns the read surface over this task's state.
    fn loading(&self) -> &Loading;

    /// Runs this loading task.
    async fn run(&mut self) -> Result<Self::Output, LoadError>;
}
