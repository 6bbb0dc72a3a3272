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

//! Execution engine contract
//!
//! The harness does not decode instructions itself. It drives any type that
//! implements [`Engine`]: the engine is handed a [`Bus`] for the length of
//! one [`Engine::run`] call, executes until its cycle budget is used up or it
//! halts, and reports what happened as a [`RunOutcome`].
//!
//! Engines also own a [`Diagnostics`] sink. Register dumps and the console's
//! memory dumps are written there, one line at a time. An engine built with
//! [`Diagnostics::disabled`] produces no diagnostic output at all.
//!
//! # Example
//!
//! ```
//! use z80_harness::core::engine::{Diagnostics, Engine, FetchEngine, RunOutcome};
//! use z80_harness::core::memory::AddressSpace;
//!
//! let mut space = AddressSpace::new();
//! space.write_memory(0x0002, 0x76); // HALT
//!
//! let mut engine = FetchEngine::new(Diagnostics::disabled());
//! assert_eq!(engine.run(&mut space, 8), RunOutcome::Consumed(8));
//! assert_eq!(engine.run(&mut space, 8), RunOutcome::Halted);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use crate::core::memory::Bus;

mod fetch;
mod registers;

#[cfg(test)]
mod tests;

pub use fetch::FetchEngine;
pub use registers::{Flags, Registers};

/// Result of one [`Engine::run`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Execution stopped after consuming this many cycles
    ///
    /// May be less than the budget if the engine stopped early, or slightly
    /// more when the last instruction straddles the budget.
    Consumed(u32),

    /// The engine cannot continue (halt instruction, fatal decode error,
    /// breakpoint). Cycles spent in the call are not reported.
    Halted,
}

impl RunOutcome {
    /// Map the integer convention used by engines that report a raw count
    ///
    /// Negative values mean the engine halted.
    ///
    /// # Example
    ///
    /// ```
    /// use z80_harness::core::engine::RunOutcome;
    ///
    /// assert_eq!(RunOutcome::from_raw(100), RunOutcome::Consumed(100));
    /// assert_eq!(RunOutcome::from_raw(-1), RunOutcome::Halted);
    /// ```
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            RunOutcome::Halted
        } else {
            RunOutcome::Consumed(raw.unsigned_abs())
        }
    }

    /// Cycles consumed, or `None` if the engine halted
    pub fn cycles(self) -> Option<u32> {
        match self {
            RunOutcome::Consumed(cycles) => Some(cycles),
            RunOutcome::Halted => None,
        }
    }
}

/// Contract an execution engine must satisfy to be driven by the harness
///
/// # Bus access
///
/// Every memory and port access made during [`run`](Engine::run) must go
/// through the supplied bus. The engine must treat the bus as synchronous and
/// infallible and must not keep it past the call.
///
/// # Register access
///
/// [`registers_mut`](Engine::registers_mut) allows the harness to establish
/// a known starting state before execution begins. Reading registers or
/// dumping them must not change engine state.
pub trait Engine {
    /// Execute until at least `cycles` cycles have elapsed or the engine halts
    fn run(&mut self, bus: &mut dyn Bus, cycles: u32) -> RunOutcome;

    /// Register file
    fn registers(&self) -> &Registers;

    /// Register file, for setting up a starting state
    fn registers_mut(&mut self) -> &mut Registers;

    /// Diagnostic sink used by [`register_dump`](Engine::register_dump) and
    /// [`log`](Engine::log)
    fn diagnostics(&mut self) -> &mut Diagnostics;

    /// Return to the power-on state
    ///
    /// The default clears the register file. Engines with state beyond the
    /// registers (a halt latch, pending interrupts) must clear that too.
    fn reset(&mut self) {
        *self.registers_mut() = Registers::default();
    }

    /// Write a snapshot of every register and flag to the diagnostic sink
    fn register_dump(&mut self) {
        let dump = self.registers().to_string();
        let diagnostics = self.diagnostics();
        for line in dump.lines() {
            diagnostics.line(format_args!("{line}"));
        }
    }

    /// Write one formatted line to the diagnostic sink
    ///
    /// Usually invoked through `format_args!`:
    ///
    /// ```
    /// use z80_harness::core::engine::{Diagnostics, Engine, FetchEngine};
    ///
    /// let mut engine = FetchEngine::new(Diagnostics::disabled());
    /// engine.log(format_args!("[{:04X}] {:02X}", 0x1234, 0x56));
    /// ```
    fn log(&mut self, args: fmt::Arguments<'_>) {
        self.diagnostics().line(args);
    }
}

/// Optional line-oriented output channel of an engine
///
/// Diagnostics never fail: a write error is reported through `log::warn!`
/// and the line is dropped.
pub struct Diagnostics {
    sink: Option<Box<dyn Write>>,
}

impl Diagnostics {
    /// Create diagnostics writing to `sink`, or disabled if `None`
    pub fn new(sink: Option<Box<dyn Write>>) -> Self {
        Self { sink }
    }

    /// Diagnostics that discard every line
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Diagnostics written to standard output
    pub fn stdout() -> Self {
        Self::new(Some(Box::new(io::stdout())))
    }

    /// Whether lines are written anywhere
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Write one line
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(e) = writeln!(sink, "{args}").and_then(|_| sink.flush()) {
            log::warn!("Failed to write diagnostic line: {}", e);
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// In-memory diagnostic sink
///
/// Clones share the same buffer, so one clone can be boxed into
/// [`Diagnostics`] while another is kept to inspect what was written.
///
/// # Example
///
/// ```
/// use z80_harness::core::engine::{CaptureSink, Diagnostics};
///
/// let capture = CaptureSink::new();
/// let mut diagnostics = Diagnostics::new(Some(Box::new(capture.clone())));
/// diagnostics.line(format_args!("hello"));
///
/// assert_eq!(capture.contents(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl CaptureSink {
    /// Create an empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    /// Captured output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discard everything captured so far
    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
