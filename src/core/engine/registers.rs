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

//! Z80 register file
//!
//! Every register is a public field so a harness can set up a known state
//! before running. Nothing here has behavior beyond pairing and display.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Bits of the F register
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        /// Carry
        const C = 0b0000_0001;
        /// Add/subtract
        const N = 0b0000_0010;
        /// Parity/overflow
        const PV = 0b0000_0100;
        /// Undocumented bit 3
        const X = 0b0000_1000;
        /// Half carry
        const H = 0b0001_0000;
        /// Undocumented bit 5
        const Y = 0b0010_0000;
        /// Zero
        const Z = 0b0100_0000;
        /// Sign
        const S = 0b1000_0000;
    }
}

/// Z80 register file
///
/// All registers default to 0.
///
/// # Example
///
/// ```
/// use z80_harness::core::engine::Registers;
///
/// let mut regs = Registers::default();
/// regs.a = 0x12;
/// regs.set_hl(0x0001);
/// assert_eq!(regs.l, 0x01);
/// assert_eq!(regs.hl(), 0x0001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    /// Shadow set (AF', BC', DE', HL')
    pub a_alt: u8,
    pub f_alt: u8,
    pub b_alt: u8,
    pub c_alt: u8,
    pub d_alt: u8,
    pub e_alt: u8,
    pub h_alt: u8,
    pub l_alt: u8,

    /// Interrupt vector
    pub i: u8,
    /// Memory refresh
    pub r: u8,

    pub ix: u16,
    pub iy: u16,
    pub sp: u16,
    pub pc: u16,
}

fn pair(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

impl Registers {
    pub fn af(&self) -> u16 {
        pair(self.a, self.f)
    }

    pub fn bc(&self) -> u16 {
        pair(self.b, self.c)
    }

    pub fn de(&self) -> u16 {
        pair(self.d, self.e)
    }

    pub fn hl(&self) -> u16 {
        pair(self.h, self.l)
    }

    pub fn set_af(&mut self, value: u16) {
        [self.a, self.f] = value.to_be_bytes();
    }

    pub fn set_bc(&mut self, value: u16) {
        [self.b, self.c] = value.to_be_bytes();
    }

    pub fn set_de(&mut self, value: u16) {
        [self.d, self.e] = value.to_be_bytes();
    }

    pub fn set_hl(&mut self, value: u16) {
        [self.h, self.l] = value.to_be_bytes();
    }

    /// F decoded as flag bits
    pub fn flags(&self) -> Flags {
        Flags::from_bits_retain(self.f)
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.f = flags.bits();
    }
}

/// Render F as eight letters, upper-case when the bit is set
fn flag_letters(f: u8) -> String {
    const LETTERS: [(Flags, char); 8] = [
        (Flags::S, 'S'),
        (Flags::Z, 'Z'),
        (Flags::Y, 'Y'),
        (Flags::H, 'H'),
        (Flags::X, 'X'),
        (Flags::PV, 'P'),
        (Flags::N, 'N'),
        (Flags::C, 'C'),
    ];
    let flags = Flags::from_bits_retain(f);
    LETTERS
        .iter()
        .map(|&(flag, letter)| {
            if flags.contains(flag) {
                letter
            } else {
                letter.to_ascii_lowercase()
            }
        })
        .collect()
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PC:{:04X} SP:{:04X} IX:{:04X} IY:{:04X} I:{:02X} R:{:02X}",
            self.pc, self.sp, self.ix, self.iy, self.i, self.r
        )?;
        writeln!(
            f,
            "A:{:02X} F:{:02X}({}) B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X}",
            self.a,
            self.f,
            flag_letters(self.f),
            self.b,
            self.c,
            self.d,
            self.e,
            self.h,
            self.l
        )?;
        write!(
            f,
            "A':{:02X} F':{:02X}({}) B':{:02X} C':{:02X} D':{:02X} E':{:02X} H':{:02X} L':{:02X}",
            self.a_alt,
            self.f_alt,
            flag_letters(self.f_alt),
            self.b_alt,
            self.c_alt,
            self.d_alt,
            self.e_alt,
            self.h_alt,
            self.l_alt
        )
    }
}
