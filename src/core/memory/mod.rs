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

//! Address space and bus for the emulated machine
//!
//! The [`AddressSpace`] is the passive backing store of the harness: 64 KiB
//! of RAM and 256 I/O ports. Engines never touch it directly; they go
//! through the [`Bus`] trait, which `AddressSpace` implements.
//!
//! # Memory Map
//!
//! | Range         | Region   | Size  | Access |
//! |---------------|----------|-------|--------|
//! | 0x0000-0xFFFF | RAM      | 64KB  | R/W    |
//! | 0x00-0xFF     | I/O Port | 256B  | IN/OUT |
//!
//! Every address is reduced modulo its region size, so no access can fall
//! outside a region and none of the operations can fail.
//!
//! # Example
//!
//! ```
//! use z80_harness::core::memory::AddressSpace;
//!
//! let mut space = AddressSpace::new();
//! space.write_memory(0x1234, 0xAB);
//!
//! // Addresses wrap around the top of the space
//! assert_eq!(space.read_memory(0x1_1234), 0xAB);
//! ```

mod bus;

#[cfg(test)]
mod tests;

pub use bus::{AccessCounts, Bus, TracingBus};

/// Fixed-size RAM and I/O port storage
///
/// Owned by a single session. Both regions are zero-filled at construction
/// and never change size.
#[derive(Clone)]
pub struct AddressSpace {
    /// Main RAM (64KB)
    memory: Vec<u8>,

    /// I/O port registers (256 bytes)
    ports: [u8; AddressSpace::PORT_COUNT],
}

impl AddressSpace {
    /// RAM size (64KB)
    pub const MEMORY_SIZE: usize = 0x10000;

    /// Number of I/O ports
    pub const PORT_COUNT: usize = 0x100;

    /// Create a new address space with both regions zeroed
    ///
    /// # Example
    ///
    /// ```
    /// use z80_harness::core::memory::AddressSpace;
    ///
    /// let space = AddressSpace::new();
    /// assert_eq!(space.read_memory(0), 0);
    /// assert_eq!(space.read_port(0xFF), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            memory: vec![0u8; Self::MEMORY_SIZE],
            ports: [0u8; Self::PORT_COUNT],
        }
    }

    /// Reset both regions to zero, simulating a power-cycle
    pub fn reset(&mut self) {
        self.memory.fill(0);
        self.ports.fill(0);
    }

    #[inline(always)]
    fn memory_index(address: u32) -> usize {
        address as usize % Self::MEMORY_SIZE
    }

    #[inline(always)]
    fn port_index(port: u32) -> usize {
        port as usize % Self::PORT_COUNT
    }

    /// Read a byte of RAM
    ///
    /// The address is taken modulo 65536.
    #[inline(always)]
    pub fn read_memory(&self, address: u32) -> u8 {
        self.memory[Self::memory_index(address)]
    }

    /// Write a byte of RAM
    ///
    /// The address is taken modulo 65536.
    #[inline(always)]
    pub fn write_memory(&mut self, address: u32, value: u8) {
        self.memory[Self::memory_index(address)] = value;
    }

    /// Read an I/O port
    ///
    /// The port number is taken modulo 256.
    #[inline(always)]
    pub fn read_port(&self, port: u32) -> u8 {
        self.ports[Self::port_index(port)]
    }

    /// Write an I/O port
    ///
    /// The port number is taken modulo 256.
    #[inline(always)]
    pub fn write_port(&mut self, port: u32, value: u8) {
        self.ports[Self::port_index(port)] = value;
    }

    /// Read `N` consecutive bytes starting at `start`
    ///
    /// Each byte address wraps independently, so a window that starts near
    /// 0xFFFF continues at 0x0000 instead of running past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use z80_harness::core::memory::AddressSpace;
    ///
    /// let mut space = AddressSpace::new();
    /// space.write_memory(0xFFFF, 0xAA);
    /// space.write_memory(0x0000, 0xBB);
    ///
    /// let window: [u8; 2] = space.read_window(0xFFFF);
    /// assert_eq!(window, [0xAA, 0xBB]);
    /// ```
    pub fn read_window<const N: usize>(&self, start: u32) -> [u8; N] {
        std::array::from_fn(|offset| self.read_memory(start.wrapping_add(offset as u32)))
    }

    /// Copy an image into RAM starting at `origin`
    ///
    /// Bytes that would pass 0xFFFF wrap to the bottom of the space. Callers
    /// that need to reject oversized images do so before calling this.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.write_memory(u32::from(origin).wrapping_add(offset as u32), byte);
        }
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}
