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

//! Observer registration and dispatch for loading notifications.
//!
//! This module provides the registry a loading task uses to deliver its
//! notifications: observers register for one event kind, optionally as
//! one-shot, and can be removed again through the id handed out at
//! registration time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::event::{ProgressEvent, ProgressEventKind};

/// Receiver of loading notifications.
///
/// Implemented for every `FnMut(&ProgressEvent) + Send` closure, so plain
/// closures can be registered directly.
pub trait ProgressObserver: Send {
    /// Called with the snapshot of every notification the observer is
    /// registered for. Dispatch is synchronous on the notifying thread;
    /// observers must not register or remove observers from here.
    fn on_event(&mut self, event: &ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressEvent) + Send,
{
    fn on_event(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Handle identifying one registration, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// One registration held by the registrar.
struct Entry {
    id: u64,
    kind: ProgressEventKind,
    once: bool,
    observer: Box<dyn ProgressObserver>,
}

/// Registry of observers shared between a task's read handles and its
/// notifier.
///
/// Cloning shares the underlying registry.
#[derive(Clone)]
pub(crate) struct EventRegistrar {
    entries: Arc<Mutex<Vec<Entry>>>,
    next_id: Arc<AtomicU64>,
}

impl std::fmt::Debug for EventRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistrar")
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl EventRegistrar {
    pub(crate) fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registers an observer for one event kind.
    ///
    /// A `once` registration is dropped after its first delivery.
    pub(crate) fn add(
        &self,
        kind: ProgressEventKind,
        once: bool,
        observer: Box<dyn ProgressObserver>,
    ) -> ObserverId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().unwrap().push(Entry {
            id,
            kind,
            once,
            observer,
        });
        ObserverId(id)
    }

    /// Removes a registration by id.
    ///
    /// Returns `false` when the id was already removed or spent.
    pub(crate) fn remove(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.lock().unwrap();
        let count = entries.len();
        entries.retain(|entry| entry.id != id.0);
        entries.len() != count
    }

    /// Delivers an event to every observer registered for its kind, in
    /// registration order, then drops the spent one-shot registrations.
    pub(crate) fn dispatch(&self, event: &ProgressEvent) {
        let mut entries = self.entries.lock().unwrap();
        for entry in entries.iter_mut() {
            if entry.kind == event.kind() {
                entry.observer.on_event(event);
            }
        }
        entries.retain(|entry| !(entry.once && entry.kind == event.kind()));
    }
}
