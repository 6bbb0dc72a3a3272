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

//! Console command classification

use super::hex::{hex_to_int, is_hex_digit};

/// One console input line, classified
///
/// | First character | Command        |
/// |-----------------|----------------|
/// | `0`-`9`         | `Run`          |
/// | `R` / `r`       | `RegisterDump` |
/// | `M` / `m`       | `MemoryDump`   |
/// | end of line     | `Exit`         |
/// | anything else   | `Ignored`      |
///
/// Leading spaces and tabs are skipped before classifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the engine for this many cycles
    Run(u32),
    /// Dump the engine's registers
    RegisterDump,
    /// Dump 8 bytes of memory starting at this address
    MemoryDump(u16),
    /// Leave the console
    Exit,
    /// Unrecognized line, nothing to do
    Ignored,
}

impl Command {
    /// Classify a line as read from the console, newline included
    ///
    /// # Example
    ///
    /// ```
    /// use z80_harness::core::console::Command;
    ///
    /// assert_eq!(Command::parse("100\n"), Command::Run(100));
    /// assert_eq!(Command::parse("r\n"), Command::RegisterDump);
    /// assert_eq!(Command::parse("M 8000\n"), Command::MemoryDump(0x8000));
    /// assert_eq!(Command::parse("\n"), Command::Exit);
    /// assert_eq!(Command::parse("?\n"), Command::Ignored);
    /// ```
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start_matches([' ', '\t']);

        match line.chars().next() {
            None | Some('\r') | Some('\n') => Command::Exit,
            Some(c) if c.is_ascii_digit() => Command::Run(leading_decimal(line)),
            Some('R') | Some('r') => Command::RegisterDump,
            // The leading letter is ASCII, so slicing past it is safe
            Some('M') | Some('m') => Command::MemoryDump(dump_address(&line[1..])),
            Some(_) => Command::Ignored,
        }
    }
}

/// Value of the leading decimal digits, saturating at `u32::MAX`
fn leading_decimal(s: &str) -> u32 {
    s.chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(digit)
        })
}

/// Address of a memory dump: the first hex run in `rest`, or 0 if none
fn dump_address(rest: &str) -> u16 {
    match rest.find(is_hex_digit) {
        Some(start) => (hex_to_int(&rest[start..]) & 0xFFFF) as u16,
        None => 0,
    }
}
