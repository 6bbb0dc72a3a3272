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

//! Opcode-fetch engine
//!
//! A stand-in engine for driving the harness without a real CPU core. It
//! performs only the M1 fetch of each opcode: every byte is treated as a
//! 4-cycle NOP, except HALT (0x76), which stops execution.

use super::{Diagnostics, Engine, Registers, RunOutcome};
use crate::core::memory::Bus;

/// HALT opcode
const HALT: u8 = 0x76;

/// Cycles per opcode fetch (one M1 cycle)
const FETCH_CYCLES: u32 = 4;

/// Engine that fetches opcodes and executes nothing but HALT
///
/// # Example
/// ```
/// use z80_harness::core::engine::{Diagnostics, Engine, FetchEngine, RunOutcome};
/// use z80_harness::core::memory::AddressSpace;
///
/// let mut space = AddressSpace::new();
/// let mut engine = FetchEngine::new(Diagnostics::disabled());
///
/// assert_eq!(engine.run(&mut space, 10), RunOutcome::Consumed(12));
/// assert_eq!(engine.registers().pc, 3);
/// ```
#[derive(Debug)]
pub struct FetchEngine {
    registers: Registers,
    diagnostics: Diagnostics,
    halted: bool,
}

impl FetchEngine {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self {
            registers: Registers::default(),
            diagnostics,
            halted: false,
        }
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Fetch the opcode at PC and advance PC and the refresh counter
    fn fetch(&mut self, bus: &mut dyn Bus) -> u8 {
        let opcode = bus.read(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        // Only the low 7 bits of R count; bit 7 is preserved
        let r = self.registers.r;
        self.registers.r = (r & 0x80) | (r.wrapping_add(1) & 0x7F);
        opcode
    }
}

impl Engine for FetchEngine {
    fn run(&mut self, bus: &mut dyn Bus, cycles: u32) -> RunOutcome {
        if self.halted {
            return RunOutcome::Halted;
        }

        let mut consumed = 0u32;
        while consumed < cycles {
            let pc = self.registers.pc;
            let opcode = self.fetch(bus);
            consumed = consumed.saturating_add(FETCH_CYCLES);

            if opcode == HALT {
                log::debug!("HALT at 0x{:04X} after {} cycles", pc, consumed);
                self.halted = true;
                return RunOutcome::Halted;
            }
        }

        RunOutcome::Consumed(consumed)
    }

    fn registers(&self) -> &Registers {
        &self.registers
    }

    fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    fn diagnostics(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Clear every register and leave the halted state
    fn reset(&mut self) {
        self.registers = Registers::default();
        self.halted = false;
    }
}
