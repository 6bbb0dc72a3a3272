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

//! System integration module
//!
//! This module ties the harness together: one address space, one engine,
//! and the console that drives them. It also handles the setup done before
//! a session starts (program image, initial registers).

use std::fs::File;
use std::io::{BufRead, Read, Write};
use std::path::Path;

use super::config::{HarnessConfig, RegisterOverrides};
use super::console::Console;
use super::engine::Engine;
use super::error::{HarnessError, Result};
use super::memory::AddressSpace;

#[cfg(test)]
mod tests;

/// Emulation session
///
/// Owns the address space and the engine. The engine only reaches memory
/// through the bus handed to it by the console during Run commands.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use z80_harness::core::engine::{Diagnostics, FetchEngine};
/// use z80_harness::core::system::System;
///
/// let mut system = System::new(FetchEngine::new(Diagnostics::disabled()));
/// system.load_program(0x0000, &[0x00, 0x00, 0x76]).unwrap();
///
/// // Two NOP fetches, then HALT ends the session
/// let total = system.run_console(Cursor::new("8\n100\n"), Vec::new()).unwrap();
/// assert_eq!(total, 8);
/// ```
pub struct System<E: Engine> {
    /// RAM and I/O ports
    memory: AddressSpace,
    /// Execution engine
    engine: E,
    /// Trace bus accesses during Run commands
    trace_bus: bool,
    /// Total cycles executed across console sessions
    cycles: u64,
}

impl<E: Engine> System<E> {
    /// Create a new System around `engine` with zeroed memory
    pub fn new(engine: E) -> Self {
        Self {
            memory: AddressSpace::new(),
            engine,
            trace_bus: false,
            cycles: 0,
        }
    }

    /// Build a System from a configuration
    ///
    /// Loads the configured program image, applies register overrides and
    /// console options.
    ///
    /// # Errors
    ///
    /// Fails if the origin is not a valid address or the image cannot be
    /// loaded.
    pub fn from_config(engine: E, config: &HarnessConfig) -> Result<Self> {
        let mut system = Self::new(engine);
        let origin = config.program.origin()?;

        if let Some(path) = &config.program.path {
            system.load_program_file(path, origin)?;
        }

        system.apply_registers(&config.registers);
        system.set_bus_tracing(config.console.trace_bus);
        Ok(system)
    }

    /// Power-cycle the session: zero memory, reset the engine
    pub fn reset(&mut self) {
        self.memory.reset();
        self.engine.reset();
        self.cycles = 0;
    }

    /// Copy a program image into memory at `origin`
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::ProgramTooLarge` if the image does not fit in
    /// 64KB. Memory is left untouched in that case.
    pub fn load_program(&mut self, origin: u16, bytes: &[u8]) -> Result<()> {
        if bytes.len() > AddressSpace::MEMORY_SIZE {
            return Err(HarnessError::ProgramTooLarge {
                size: bytes.len(),
                max: AddressSpace::MEMORY_SIZE,
            });
        }

        self.memory.load(origin, bytes);
        log::info!(
            "Loaded {} bytes at 0x{:04X}",
            bytes.len(),
            origin
        );
        Ok(())
    }

    /// Load a raw binary image from a file
    ///
    /// # Returns
    ///
    /// Number of bytes loaded.
    ///
    /// # Errors
    ///
    /// - `HarnessError::ProgramNotFound` if the file cannot be opened
    /// - `HarnessError::ProgramTooLarge` if it is larger than 64KB
    /// - `HarnessError::Io` if reading fails
    pub fn load_program_file(&mut self, path: impl AsRef<Path>, origin: u16) -> Result<usize> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|_| HarnessError::ProgramNotFound(path.display().to_string()))?;

        let metadata = file.metadata()?;
        if metadata.len() > AddressSpace::MEMORY_SIZE as u64 {
            return Err(HarnessError::ProgramTooLarge {
                size: metadata.len() as usize,
                max: AddressSpace::MEMORY_SIZE,
            });
        }

        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut bytes)?;

        log::info!("Loading program image from: {}", path.display());
        self.load_program(origin, &bytes)?;
        Ok(bytes.len())
    }

    /// Set initial register values
    pub fn apply_registers(&mut self, overrides: &RegisterOverrides) {
        overrides.apply(self.engine.registers_mut());
    }

    /// Enable or disable bus tracing for later console sessions
    pub fn set_bus_tracing(&mut self, enabled: bool) {
        self.trace_bus = enabled;
    }

    /// Whether bus tracing is enabled
    pub fn is_bus_tracing(&self) -> bool {
        self.trace_bus
    }

    /// Run an interactive console session over `input` and `output`
    ///
    /// # Returns
    ///
    /// Cycles executed during this session.
    pub fn run_console<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<u64> {
        let mut console = Console::new(input, output).with_bus_tracing(self.trace_bus);
        let executed = console.run(&mut self.engine, &mut self.memory)?;
        self.cycles += executed;
        Ok(executed)
    }

    /// Total cycles executed since creation or the last reset
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Get reference to the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get mutable reference to the engine
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Get reference to the address space
    pub fn memory(&self) -> &AddressSpace {
        &self.memory
    }

    /// Get mutable reference to the address space
    pub fn memory_mut(&mut self) -> &mut AddressSpace {
        &mut self.memory
    }
}
