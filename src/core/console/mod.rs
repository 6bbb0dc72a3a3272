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

//! Interactive step console
//!
//! A line-oriented loop over any `BufRead`/`Write` pair. Each line is
//! classified into a [`Command`] and executed to completion before the next
//! line is read:
//!
//! ```text
//! > 100          run the engine for 100 cycles
//! > r            dump registers
//! > m 8000       dump 8 bytes from 0x8000
//! >              (empty line) leave
//! executed 100Hz
//! ```
//!
//! The loop also ends when the engine halts or the input runs out. On the
//! way out it prints the total number of cycles executed.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use z80_harness::core::console::Console;
//! use z80_harness::core::engine::{Diagnostics, FetchEngine};
//! use z80_harness::core::memory::AddressSpace;
//!
//! let mut engine = FetchEngine::new(Diagnostics::disabled());
//! let mut space = AddressSpace::new();
//! let mut console = Console::new(Cursor::new("40\n\n"), Vec::new());
//!
//! let total = console.run(&mut engine, &mut space).unwrap();
//! assert_eq!(total, 40);
//! ```

use std::io::{BufRead, Write};

use crate::core::engine::{Engine, RunOutcome};
use crate::core::error::Result;
use crate::core::memory::{AddressSpace, TracingBus};

mod command;
mod hex;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use hex::{hex_to_int, is_hex_digit, parse_address};

/// Prompt written before every read
pub const PROMPT: &str = "> ";

/// Number of bytes shown by a memory dump
pub const DUMP_WIDTH: usize = 8;

/// Whether the loop continues after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Leave the loop and report the total
    Stop,
}

/// Console session
///
/// Holds the input and output streams and the running cycle total. The
/// engine and address space are borrowed per call, so the owner can inspect
/// them between sessions.
pub struct Console<R, W> {
    input: R,
    output: W,

    /// Cycles executed by every Run command so far
    total_cycles: u64,

    /// Wrap the address space in a `TracingBus` during Run commands
    trace_bus: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            total_cycles: 0,
            trace_bus: false,
        }
    }

    /// Enable or disable bus tracing for Run commands
    ///
    /// Accesses are reported with `log::trace!` from the memory module, so
    /// they only show up when that level is enabled.
    pub fn with_bus_tracing(mut self, enabled: bool) -> Self {
        self.trace_bus = enabled;
        self
    }

    /// Cycles executed so far
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Give back the input and output streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Run the loop until exit, halt, or end of input
    ///
    /// # Returns
    ///
    /// Total cycles executed during the session.
    ///
    /// # Errors
    ///
    /// Only failures of the input or output stream are reported. Engine
    /// halts, unrecognized lines and missing dump addresses are part of
    /// normal operation.
    pub fn run<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
        space: &mut AddressSpace,
    ) -> Result<u64> {
        let mut buffer = Vec::new();

        loop {
            self.output.write_all(PROMPT.as_bytes())?;
            self.output.flush()?;

            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                log::debug!("End of input");
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            let command = Command::parse(&line);
            log::debug!("Command: {:?}", command);

            if self.execute(command, engine, space) == Flow::Stop {
                break;
            }
        }

        writeln!(self.output, "executed {}Hz", self.total_cycles)?;
        self.output.flush()?;

        log::info!("Console finished after {} cycles", self.total_cycles);
        Ok(self.total_cycles)
    }

    /// Execute one command
    ///
    /// Diagnostic output (register and memory dumps) goes to the engine's
    /// diagnostic sink, not to the console output stream.
    pub fn execute<E: Engine + ?Sized>(
        &mut self,
        command: Command,
        engine: &mut E,
        space: &mut AddressSpace,
    ) -> Flow {
        match command {
            Command::Run(budget) => match self.run_engine(engine, space, budget) {
                RunOutcome::Consumed(cycles) => {
                    self.total_cycles += u64::from(cycles);
                    Flow::Continue
                }
                RunOutcome::Halted => {
                    log::info!(
                        "Engine halted at PC=0x{:04X} ({} cycles executed)",
                        engine.registers().pc,
                        self.total_cycles
                    );
                    Flow::Stop
                }
            },
            Command::RegisterDump => {
                engine.register_dump();
                Flow::Continue
            }
            Command::MemoryDump(address) => {
                let b: [u8; DUMP_WIDTH] = space.read_window(u32::from(address));
                engine.log(format_args!(
                    "[{:04X}] {:02X} {:02X} {:02X} {:02X} - {:02X} {:02X} {:02X} {:02X}",
                    address, b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]
                ));
                Flow::Continue
            }
            Command::Exit => Flow::Stop,
            Command::Ignored => Flow::Continue,
        }
    }

    fn run_engine<E: Engine + ?Sized>(
        &self,
        engine: &mut E,
        space: &mut AddressSpace,
        budget: u32,
    ) -> RunOutcome {
        if !self.trace_bus {
            return engine.run(space, budget);
        }

        let mut bus = TracingBus::new(&mut *space);
        let outcome = engine.run(&mut bus, budget);
        let counts = bus.counts();
        log::debug!(
            "Bus accesses: {} reads, {} writes, {} inputs, {} outputs",
            counts.reads,
            counts.writes,
            counts.inputs,
            counts.outputs
        );
        outcome
    }
}
