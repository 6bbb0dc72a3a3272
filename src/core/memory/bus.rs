// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Bus Trait
//!
//! This module defines the indirection layer between an execution engine and
//! whatever store backs the emulated machine. An engine only ever sees a
//! `&mut dyn Bus`; it never knows whether the other side is plain RAM, a
//! memory-mapped device, or an instrumented store.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   read / write    ┌──────────────┐
//! │    Engine    │ ────────────────▶ │  dyn Bus     │
//! │  (external)  │   input / output  │              │
//! └──────────────┘                   └──────┬───────┘
//!                                           │
//!                         ┌─────────────────┼─────────────────┐
//!                         ▼                                   ▼
//!                 ┌──────────────┐                   ┌──────────────────┐
//!                 │ AddressSpace │ ◀──── forwards ── │ TracingBus<B>    │
//!                 └──────────────┘                   └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use z80_harness::core::memory::{Bus, TracingBus, AddressSpace};
//!
//! let mut space = AddressSpace::new();
//! let mut bus = TracingBus::new(&mut space);
//!
//! bus.write(0x8000, 0x42);
//! assert_eq!(bus.read(0x8000), 0x42);
//! assert_eq!(bus.counts().reads, 1);
//! assert_eq!(bus.counts().writes, 1);
//! ```

use super::AddressSpace;

/// Memory and port access interface consumed by execution engines
///
/// All four operations are synchronous and total. Implementations forward
/// to their backing store without filtering or validating the address or
/// value; the parameter widths already keep every access in range.
///
/// # Implementing a Bus
///
/// ```
/// use z80_harness::core::memory::Bus;
///
/// /// ROM that ignores writes and reads 0xFF from every port
/// struct Rom(Vec<u8>);
///
/// impl Bus for Rom {
///     fn read(&mut self, address: u16) -> u8 {
///         self.0[address as usize % self.0.len()]
///     }
///     fn write(&mut self, _address: u16, _value: u8) {}
///     fn input(&mut self, _port: u8) -> u8 {
///         0xFF
///     }
///     fn output(&mut self, _port: u8, _value: u8) {}
/// }
/// ```
pub trait Bus {
    /// Read a byte of memory
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte of memory
    fn write(&mut self, address: u16, value: u8);

    /// Read an I/O port (the engine's IN operation)
    fn input(&mut self, port: u8) -> u8;

    /// Write an I/O port (the engine's OUT operation)
    fn output(&mut self, port: u8, value: u8);
}

impl Bus for AddressSpace {
    #[inline(always)]
    fn read(&mut self, address: u16) -> u8 {
        self.read_memory(u32::from(address))
    }

    #[inline(always)]
    fn write(&mut self, address: u16, value: u8) {
        self.write_memory(u32::from(address), value);
    }

    #[inline(always)]
    fn input(&mut self, port: u8) -> u8 {
        self.read_port(u32::from(port))
    }

    #[inline(always)]
    fn output(&mut self, port: u8, value: u8) {
        self.write_port(u32::from(port), value);
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn read(&mut self, address: u16) -> u8 {
        (**self).read(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        (**self).write(address, value);
    }

    fn input(&mut self, port: u8) -> u8 {
        (**self).input(port)
    }

    fn output(&mut self, port: u8, value: u8) {
        (**self).output(port, value);
    }
}

/// Number of accesses seen by a [`TracingBus`], by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessCounts {
    /// Memory reads
    pub reads: u64,
    /// Memory writes
    pub writes: u64,
    /// Port inputs
    pub inputs: u64,
    /// Port outputs
    pub outputs: u64,
}

impl AccessCounts {
    /// Total number of accesses of every kind
    pub fn total(&self) -> u64 {
        self.reads + self.writes + self.inputs + self.outputs
    }
}

/// Bus decorator that logs every access
///
/// Each access is forwarded unchanged to the wrapped bus and reported with
/// `log::trace!`, so tracing costs nothing unless the `trace` level is
/// enabled for this module. Access counts are kept regardless.
pub struct TracingBus<B: Bus> {
    inner: B,
    counts: AccessCounts,
}

impl<B: Bus> TracingBus<B> {
    /// Wrap a bus
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            counts: AccessCounts::default(),
        }
    }

    /// Accesses seen so far
    pub fn counts(&self) -> AccessCounts {
        self.counts
    }

    /// Unwrap, returning the inner bus
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Bus> Bus for TracingBus<B> {
    fn read(&mut self, address: u16) -> u8 {
        let value = self.inner.read(address);
        self.counts.reads += 1;
        log::trace!("MEM  [{:04X}] -> {:02X}", address, value);
        value
    }

    fn write(&mut self, address: u16, value: u8) {
        self.inner.write(address, value);
        self.counts.writes += 1;
        log::trace!("MEM  [{:04X}] <- {:02X}", address, value);
    }

    fn input(&mut self, port: u8) -> u8 {
        let value = self.inner.input(port);
        self.counts.inputs += 1;
        log::trace!("IN   ({:02X}) -> {:02X}", port, value);
        value
    }

    fn output(&mut self, port: u8, value: u8) {
        self.inner.output(port, value);
        self.counts.outputs += 1;
        log::trace!("OUT  ({:02X}) <- {:02X}", port, value);
    }
}
