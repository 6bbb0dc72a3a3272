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

/// Harness error types
use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Main error type for the harness
///
/// Memory and port accesses never fail, so nothing here describes a bus
/// fault. Errors only come from the launcher surface (files, configuration)
/// and from the console's input/output streams.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Program image not found: {0}")]
    ProgramNotFound(String),

    #[error("Program image too large: {size} bytes (maximum {max})")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("Invalid address: {0:?} (expected 1-4 hexadecimal digits)")]
    InvalidAddress(String),
}
