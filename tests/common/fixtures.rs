// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
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

//! Test fixtures for common test scenarios

use std::io::Cursor;

use z80_harness::core::engine::{CaptureSink, Diagnostics, FetchEngine};
use z80_harness::core::system::System;

/// Bytes used by the memory dump scenarios
#[allow(dead_code)]
pub const DUMP_PATTERN: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];

/// Create a System whose diagnostic output is captured
#[allow(dead_code)]
pub fn create_capturing_system() -> (System<FetchEngine>, CaptureSink) {
    let capture = CaptureSink::new();
    let engine = FetchEngine::new(Diagnostics::new(Some(Box::new(capture.clone()))));
    (System::new(engine), capture)
}

/// Run one console session from a script, returning the total and the
/// console output
#[allow(dead_code)]
pub fn run_script(system: &mut System<FetchEngine>, script: &str) -> (u64, String) {
    let mut output = Vec::new();
    let total = system
        .run_console(Cursor::new(script.as_bytes()), &mut output)
        .expect("Console session failed");
    (total, String::from_utf8(output).expect("Console output is not UTF-8"))
}
