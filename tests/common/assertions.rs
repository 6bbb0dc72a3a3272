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

//! Custom assertions for harness testing

use z80_harness::core::engine::CaptureSink;
use z80_harness::core::memory::AddressSpace;

/// Assert memory contains expected value at address
#[allow(dead_code)]
pub fn assert_memory_byte(space: &AddressSpace, addr: u32, expected: u8) {
    let actual = space.read_memory(addr);
    assert_eq!(
        actual, expected,
        "Memory at 0x{:04X} mismatch: expected 0x{:02X}, got 0x{:02X}",
        addr, expected, actual
    );
}

/// Assert the diagnostic sink received exactly these lines
#[allow(dead_code)]
pub fn assert_diagnostics(capture: &CaptureSink, expected: &[&str]) {
    let actual = capture.lines();
    assert_eq!(
        actual, expected,
        "Diagnostic output mismatch:\n{}",
        capture.contents()
    );
}

/// Assert the console ended by printing the expected cycle total
#[allow(dead_code)]
pub fn assert_reported_total(output: &str, expected: u64) {
    let suffix = format!("executed {}Hz\n", expected);
    assert!(
        output.ends_with(&suffix),
        "Console output {:?} does not end with {:?}",
        output,
        suffix
    );
}
