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

//! Console execution tests through the System

use super::super::*;
use crate::core::engine::{CaptureSink, Diagnostics, FetchEngine};
use std::io::Cursor;

fn create_capturing_system() -> (System<FetchEngine>, CaptureSink) {
    let capture = CaptureSink::new();
    let engine = FetchEngine::new(Diagnostics::new(Some(Box::new(capture.clone()))));
    (System::new(engine), capture)
}

#[test]
fn test_run_console_accumulates_cycles() {
    let (mut system, _) = create_capturing_system();

    let first = system.run_console(Cursor::new("40\n\n"), Vec::new()).unwrap();
    let second = system.run_console(Cursor::new("8\n"), Vec::new()).unwrap();

    assert_eq!(first, 40);
    assert_eq!(second, 8);
    assert_eq!(system.cycles(), 48);
    assert_eq!(system.engine().registers().pc, 12);
}

#[test]
fn test_run_console_stops_on_halt() {
    let (mut system, _) = create_capturing_system();
    system.load_program(0x0000, &[0x00, 0x76]).unwrap();
    let mut output = Vec::new();

    let total = system
        .run_console(Cursor::new("4\n100\n100\n"), &mut output)
        .unwrap();

    assert_eq!(total, 4);
    assert!(system.engine().is_halted());
    assert_eq!(String::from_utf8(output).unwrap(), "> > executed 4Hz\n");
}

#[test]
fn test_dumps_reach_engine_diagnostics() {
    let (mut system, capture) = create_capturing_system();
    system
        .load_program(0x8000, &[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0])
        .unwrap();
    system.engine_mut().registers_mut().a = 0x12;

    system
        .run_console(Cursor::new("m8000\nr\n\n"), Vec::new())
        .unwrap();

    let lines = capture.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "[8000] 12 34 56 78 - 9A BC DE F0");
    assert!(lines[2].starts_with("A:12"));
}

#[test]
fn test_run_console_with_tracing_matches_untraced() {
    let (mut traced, _) = create_capturing_system();
    let (mut plain, _) = create_capturing_system();
    traced.set_bus_tracing(true);

    let a = traced.run_console(Cursor::new("20\n"), Vec::new()).unwrap();
    let b = plain.run_console(Cursor::new("20\n"), Vec::new()).unwrap();

    assert_eq!(a, b);
    assert_eq!(
        traced.engine().registers().pc,
        plain.engine().registers().pc
    );
}
