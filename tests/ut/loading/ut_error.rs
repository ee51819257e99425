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

// @tc.name: ut_param_error_display
// @tc.desc: Test parameter error messages
// @tc.precon: NA
// @tc.step: 1. Format both variants
// @tc.expect: Messages name the rejected option and the reason
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 1
#[test]
fn ut_param_error_display() {
    assert_eq!(
        ParamError::InvalidArgument("options.total").to_string(),
        "options.total is not an integer"
    );
    assert_eq!(
        ParamError::OutOfRange("options.total").to_string(),
        "options.total is out of range"
    );
}

// @tc.name: ut_load_error_constructors
// @tc.desc: Test load error constructors
// @tc.precon: NA
// @tc.step: 1. Create each kind through its constructor
// @tc.expect: Kinds and messages match
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 0
#[test]
fn ut_load_error_constructors() {
    let aborted = LoadError::aborted();
    assert_eq!(aborted.kind(), LoadErrorKind::Aborted);
    assert_eq!(aborted.message(), "loading aborted");

    let timed_out = LoadError::timed_out();
    assert_eq!(timed_out.kind(), LoadErrorKind::Timeout);
    assert_eq!(timed_out.message(), "loading timed out");

    let failed = LoadError::failed("connection reset");
    assert_eq!(failed.kind(), LoadErrorKind::Failed);
    assert_eq!(failed.message(), "connection reset");
}

// @tc.name: ut_load_error_from_io
// @tc.desc: Test conversion from I/O errors
// @tc.precon: NA
// @tc.step: 1. Convert a timed-out and a generic I/O error
// @tc.expect: Timed-out maps to the Timeout kind, everything else to
//             Failed with the message preserved
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 1
#[test]
fn ut_load_error_from_io() {
    let timed_out = LoadError::from(io::Error::from(io::ErrorKind::TimedOut));
    assert_eq!(timed_out.kind(), LoadErrorKind::Timeout);

    let failed = LoadError::from(io::Error::new(io::ErrorKind::Other, "broken source"));
    assert_eq!(failed.kind(), LoadErrorKind::Failed);
    assert_eq!(failed.message(), "broken source");
}

// @tc.name: ut_load_error_display
// @tc.desc: Test load error formatting
// @tc.precon: NA
// @tc.step: 1. Format an error through Display
// @tc.expect: The message is printed as is
// @tc.type: FUNC
// @tc.require: NA
// @tc.level: Level 2
#[test]
fn ut_load_error_display() {
    assert_eq!(LoadError::aborted().to_string(), "loading aborted");
}
