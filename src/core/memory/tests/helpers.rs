// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Helper functions for address space tests

use super::*;

/// Creates an address space with `bytes` stored from address 0
#[allow(dead_code)]
pub fn create_space_with_bytes(bytes: &[u8]) -> AddressSpace {
    let mut space = AddressSpace::new();
    space.load(0x0000, bytes);
    space
}

/// Engine-side view of a bus: runs a closure against `&mut dyn Bus`
#[allow(dead_code)]
pub fn with_dyn_bus<R>(bus: &mut dyn Bus, f: impl FnOnce(&mut dyn Bus) -> R) -> R {
    f(bus)
}
