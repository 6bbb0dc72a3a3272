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

//! Hexadecimal parsing helpers for console commands

use crate::core::error::{HarnessError, Result};

/// Check whether `c` is an ASCII hexadecimal digit (`0-9`, `a-f`, `A-F`)
///
/// # Example
///
/// ```
/// use z80_harness::core::console::is_hex_digit;
///
/// assert!(is_hex_digit('7'));
/// assert!(is_hex_digit('c'));
/// assert!(is_hex_digit('F'));
/// assert!(!is_hex_digit('G'));
/// assert!(!is_hex_digit(' '));
/// ```
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Convert the run of hex digits at the start of `s` to an integer
///
/// Digits are accumulated big-endian until the first non-hex character or
/// the end of the string. An empty run yields 0. The number of characters
/// consumed is not reported; callers that need it track the position
/// themselves. Digits beyond the eighth shift the oldest ones out.
///
/// # Example
///
/// ```
/// use z80_harness::core::console::hex_to_int;
///
/// assert_eq!(hex_to_int("1A2b"), 0x1A2B);
/// assert_eq!(hex_to_int("ff zz"), 0xFF);
/// assert_eq!(hex_to_int(""), 0);
/// assert_eq!(hex_to_int("G"), 0);
/// ```
pub fn hex_to_int(s: &str) -> u32 {
    s.chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, digit| (acc << 4) | digit)
}

/// Strictly parse a 16-bit address for configuration and the command line
///
/// Accepts an optional `0x`, `0X` or `$` prefix followed by one to four hex
/// digits and nothing else.
///
/// # Errors
///
/// Returns `HarnessError::InvalidAddress` for anything else.
///
/// # Example
///
/// ```
/// use z80_harness::core::console::parse_address;
///
/// assert_eq!(parse_address("8000").unwrap(), 0x8000);
/// assert_eq!(parse_address("0x00ff").unwrap(), 0x00FF);
/// assert_eq!(parse_address("$C000").unwrap(), 0xC000);
/// assert!(parse_address("10000").is_err());
/// ```
pub fn parse_address(s: &str) -> Result<u16> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(is_hex_digit) {
        return Err(HarnessError::InvalidAddress(s.to_string()));
    }

    Ok(hex_to_int(digits) as u16)
}
