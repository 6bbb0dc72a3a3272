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

//! Harness configuration
//!
//! Sessions can be described in a TOML file: which program image to load
//! and where, the initial register state, and console options.
//!
//! ```toml
//! [program]
//! path = "ld_test.bin"
//! origin = "0000"
//!
//! [registers]
//! a = 0x12
//! b = 0x34
//! l = 0x01
//! iy = 1
//!
//! [console]
//! trace_bus = false
//! ```
//!
//! Every section and key is optional. Unknown keys are rejected so typos do
//! not silently leave a register at 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::console::parse_address;
use crate::core::engine::Registers;
use crate::core::error::{HarnessError, Result};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub program: ProgramConfig,
    pub registers: RegisterOverrides,
    pub console: ConsoleConfig,
}

/// Program image to load before the console starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgramConfig {
    /// Raw binary image. Relative paths are resolved against the directory
    /// of the configuration file.
    pub path: Option<PathBuf>,

    /// Load address as a hex string (`"8000"`, `"0x8000"`, `"$8000"`)
    pub origin: Option<String>,
}

impl ProgramConfig {
    /// Parsed load address, 0 if none was given
    pub fn origin(&self) -> Result<u16> {
        match &self.origin {
            Some(text) => parse_address(text),
            None => Ok(0),
        }
    }
}

/// Console options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Log every bus access during Run commands at `trace` level
    pub trace_bus: bool,
}

/// Initial register values; unset registers keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterOverrides {
    pub a: Option<u8>,
    pub f: Option<u8>,
    pub b: Option<u8>,
    pub c: Option<u8>,
    pub d: Option<u8>,
    pub e: Option<u8>,
    pub h: Option<u8>,
    pub l: Option<u8>,
    pub i: Option<u8>,
    pub r: Option<u8>,
    pub ix: Option<u16>,
    pub iy: Option<u16>,
    pub sp: Option<u16>,
    pub pc: Option<u16>,
}

impl RegisterOverrides {
    /// Whether no register is overridden
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every overridden register into `regs`
    pub fn apply(&self, regs: &mut Registers) {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut regs.a, self.a);
        set(&mut regs.f, self.f);
        set(&mut regs.b, self.b);
        set(&mut regs.c, self.c);
        set(&mut regs.d, self.d);
        set(&mut regs.e, self.e);
        set(&mut regs.h, self.h);
        set(&mut regs.l, self.l);
        set(&mut regs.i, self.i);
        set(&mut regs.r, self.r);
        set(&mut regs.ix, self.ix);
        set(&mut regs.iy, self.iy);
        set(&mut regs.sp, self.sp);
        set(&mut regs.pc, self.pc);
    }
}

impl HarnessConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use z80_harness::core::config::HarnessConfig;
    ///
    /// let config = HarnessConfig::from_toml_str("[registers]\na = 0x12\n").unwrap();
    /// assert_eq!(config.registers.a, Some(0x12));
    /// assert_eq!(config.program.origin().unwrap(), 0);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// - `HarnessError::ConfigNotFound` if the file does not exist
    /// - `HarnessError::ConfigParse` if it is not valid configuration TOML
    /// - `HarnessError::Io` for other read failures
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => HarnessError::ConfigNotFound(path.display().to_string()),
            _ => HarnessError::Io(e),
        })?;

        let mut config = Self::from_toml_str(&text)?;

        if let (Some(program), Some(dir)) = (config.program.path.as_mut(), path.parent()) {
            if program.is_relative() {
                *program = dir.join(&*program);
            }
        }

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
