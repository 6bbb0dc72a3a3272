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

//! Interactive Z80 step console
//!
//! Loads an optional program image and configuration, then reads console
//! commands from standard input:
//!
//! - `<n>`: run for n cycles
//! - `r`: dump registers
//! - `m <addr>`: dump 8 bytes of memory
//! - empty line: exit

use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use z80_harness::core::config::HarnessConfig;
use z80_harness::core::engine::{Diagnostics, FetchEngine};
use z80_harness::core::error::Result;
use z80_harness::core::system::System;

/// Step-granular Z80 debugging console
#[derive(Parser)]
#[command(name = "z80-harness")]
#[command(about = "Step-granular Z80 debugging console", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Raw binary program image to load (overrides the configuration)
    #[arg(short = 'p', long)]
    program: Option<PathBuf>,

    /// Load address in hex, e.g. 8000 or 0x8000 (overrides the configuration)
    #[arg(short = 'o', long)]
    origin: Option<String>,

    /// Log every bus access at trace level (RUST_LOG=trace to see them)
    #[arg(long)]
    trace_bus: bool,

    /// Disable register and memory dump output
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Pick up RUST_LOG from a .env file if present
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("z80-harness v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => HarnessConfig::load(path).inspect_err(|e| {
            error!("Failed to load configuration: {}", e);
        })?,
        None => HarnessConfig::default(),
    };

    // Command line wins over the configuration file
    if let Some(program) = args.program {
        config.program.path = Some(program);
    }
    if let Some(origin) = args.origin {
        config.program.origin = Some(origin);
    }
    config.console.trace_bus |= args.trace_bus;

    let diagnostics = if args.quiet {
        Diagnostics::disabled()
    } else {
        Diagnostics::stdout()
    };

    let mut system = match System::from_config(FetchEngine::new(diagnostics), &config) {
        Ok(system) => system,
        Err(e) => {
            error!("Failed to set up session: {}", e);
            return Err(e);
        }
    };

    let stdin = io::stdin();
    let total = system.run_console(stdin.lock(), io::stdout())?;

    info!("Session finished: {} cycles executed", total);
    Ok(())
}
