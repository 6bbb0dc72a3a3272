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

//! Z80 bus harness and step console
//!
//! This library connects a pluggable CPU-emulation engine to a simulated
//! machine (64KB of RAM plus 256 I/O ports) and drives it from a
//! line-oriented debugging console.
//!
//! # Example
//!
//! ```
//! use z80_harness::core::engine::{Diagnostics, Engine, FetchEngine, RunOutcome};
//! use z80_harness::core::memory::AddressSpace;
//!
//! let mut engine = FetchEngine::new(Diagnostics::disabled());
//! let mut space = AddressSpace::new();
//!
//! // Run for 16 cycles
//! assert_eq!(engine.run(&mut space, 16), RunOutcome::Consumed(16));
//! ```

pub mod core;
