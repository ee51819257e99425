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

use super::*;

// @tc.name: ut_event_kind_as_str
// @tc.desc: Test wire names of every event kind
// @tc.precon: NA
// @tc.step: 1. Call as_str on each kind
// @tc.expect: Names match the exhaustive event name set
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 0
#[test]
fn ut_event_kind_as_str() {
    assert_eq!(ProgressEventKind::Abort.as_str(), "abort");
    assert_eq!(ProgressEventKind::Error.as_str(), "error");
    assert_eq!(ProgressEventKind::Load.as_str(), "load");
    assert_eq!(ProgressEventKind::LoadEnd.as_str(), "loadend");
    assert_eq!(ProgressEventKind::LoadStart.as_str(), "loadstart");
    assert_eq!(ProgressEventKind::Progress.as_str(), "progress");
    assert_eq!(ProgressEventKind::Timeout.as_str(), "timeout");
}

// @tc.name: ut_event_kind_display
// @tc.desc: Test Display formatting of event kinds
// @tc.precon: NA
// @tc.step: 1. Format a kind with to_string
// @tc.expect: Formatted name equals the wire name
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 2
#[test]
fn ut_event_kind_display() {
    assert_eq!(ProgressEventKind::LoadEnd.to_string(), "loadend");
}

// @tc.name: ut_event_snapshot
// @tc.desc: Test event snapshot accessors
// @tc.precon: NA
// @tc.step: 1. Create a snapshot with known values
//           2. Read every accessor
// @tc.expect: Accessors return the captured values
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 0
#[test]
fn ut_event_snapshot() {
    let event = ProgressEvent::new(ProgressEventKind::Progress, 25, 100, true);
    assert_eq!(event.kind(), ProgressEventKind::Progress);
    assert_eq!(event.loaded(), 25);
    assert_eq!(event.total(), 100);
    assert!(event.length_computable());
}

// @tc.name: ut_event_snapshot_indeterminate
// @tc.desc: Test event snapshot for an unknown total
// @tc.precon: NA
// @tc.step: 1. Create a snapshot with total 0 and length_computable false
// @tc.expect: Total reads 0 and length_computable reads false
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 1
#[test]
fn ut_event_snapshot_indeterminate() {
    let event = ProgressEvent::new(ProgressEventKind::Load, 7, 0, false);
    assert_eq!(event.total(), 0);
    assert!(!event.length_computable());
}
