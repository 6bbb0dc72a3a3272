// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Bus forwarding tests
//!
//! Tests that every bus operation reaches the backing store unchanged,
//! through the plain implementation, a `&mut dyn Bus`, and the tracing
//! decorator.

use super::helpers::with_dyn_bus;
use super::*;

#[test]
fn test_bus_forwards_to_address_space() {
    let mut space = AddressSpace::new();

    space.write(0x2000, 0x5A);
    space.output(0x07, 0xA5);

    assert_eq!(space.read_memory(0x2000), 0x5A);
    assert_eq!(space.read_port(0x07), 0xA5);
    assert_eq!(space.read(0x2000), 0x5A);
    assert_eq!(space.input(0x07), 0xA5);
}

#[test]
fn test_dyn_bus_reaches_backing_store() {
    let mut space = AddressSpace::new();

    let value = with_dyn_bus(&mut space, |bus| {
        bus.write(0xC000, 0x12);
        bus.output(0xFE, 0x34);
        bus.read(0xC000)
    });

    assert_eq!(value, 0x12);
    assert_eq!(space.read_memory(0xC000), 0x12);
    assert_eq!(space.read_port(0xFE), 0x34);
}

#[test]
fn test_bus_reads_at_top_of_space() {
    let mut space = AddressSpace::new();
    space.write_memory(0xFFFF, 0xEE);

    assert_eq!(space.read(0xFFFF), 0xEE);
    assert_eq!(space.read(0xFFFFu16.wrapping_add(1)), 0x00);
}

#[test]
fn test_tracing_bus_forwards_unchanged() {
    let mut space = AddressSpace::new();
    space.write_memory(0x0010, 0x77);
    space.write_port(0x20, 0x88);

    let mut bus = TracingBus::new(&mut space);
    assert_eq!(bus.read(0x0010), 0x77);
    assert_eq!(bus.input(0x20), 0x88);
    bus.write(0x0011, 0x99);
    bus.output(0x21, 0xAA);
    drop(bus);

    assert_eq!(space.read_memory(0x0011), 0x99);
    assert_eq!(space.read_port(0x21), 0xAA);
}

#[test]
fn test_tracing_bus_counts_accesses() {
    let mut space = AddressSpace::new();
    let mut bus = TracingBus::new(&mut space);

    bus.read(0x0000);
    bus.read(0x0001);
    bus.write(0x0002, 0x01);
    bus.input(0x03);
    bus.output(0x04, 0x02);
    bus.output(0x05, 0x03);

    let counts = bus.counts();
    assert_eq!(counts.reads, 2);
    assert_eq!(counts.writes, 1);
    assert_eq!(counts.inputs, 1);
    assert_eq!(counts.outputs, 2);
    assert_eq!(counts.total(), 6);
}

#[test]
fn test_tracing_bus_into_inner() {
    let mut bus = TracingBus::new(AddressSpace::new());
    bus.write(0x1234, 0x56);

    let space = bus.into_inner();

    assert_eq!(space.read_memory(0x1234), 0x56);
}
