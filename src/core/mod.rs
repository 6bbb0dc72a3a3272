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

//! Core harness components
//!
//! This module contains the pieces that connect an execution engine to the
//! emulated machine:
//! - Memory (address space and bus)
//! - Engine contract (plus a fetch-only stand-in engine)
//! - Console (interactive step loop)
//! - Configuration
//! - System integration

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod memory;
pub mod system;

// Re-export commonly used types
pub use config::HarnessConfig;
pub use console::{Command, Console};
pub use engine::{Diagnostics, Engine, FetchEngine, Registers, RunOutcome};
pub use error::{HarnessError, Result};
pub use memory::{AddressSpace, Bus, TracingBus};
pub use system::System;
