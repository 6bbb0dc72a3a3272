// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Address Space Tests
//!
//! This module contains tests for the address space and the bus layer,
//! organized into logical categories:
//!
//! - `basic`: Initialization, read-after-write, reset and program loading
//! - `bus`: Bus forwarding and the tracing decorator
//! - `properties`: Property-based checks over the whole address range
//! - `helpers`: Common test utilities

use super::*;

mod bus;
mod helpers;
