// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Helpers for console tests

use std::collections::VecDeque;
use std::io::Cursor;

use super::super::*;
use crate::core::engine::{CaptureSink, Diagnostics, Registers};

/// Engine that replays queued outcomes
///
/// Once the queue is empty every run consumes exactly its budget. Budgets
/// passed to `run` are recorded in order.
pub struct ScriptedEngine {
    pub outcomes: VecDeque<RunOutcome>,
    pub requested: Vec<u32>,
    registers: Registers,
    diagnostics: Diagnostics,
}

impl ScriptedEngine {
    pub fn new(outcomes: &[RunOutcome]) -> (Self, CaptureSink) {
        let capture = CaptureSink::new();
        let engine = Self {
            outcomes: outcomes.iter().copied().collect(),
            requested: Vec::new(),
            registers: Registers::default(),
            diagnostics: Diagnostics::new(Some(Box::new(capture.clone()))),
        };
        (engine, capture)
    }
}

impl Engine for ScriptedEngine {
    fn run(&mut self, _bus: &mut dyn crate::core::memory::Bus, cycles: u32) -> RunOutcome {
        self.requested.push(cycles);
        self.outcomes
            .pop_front()
            .unwrap_or(RunOutcome::Consumed(cycles))
    }

    fn registers(&self) -> &Registers {
        &self.registers
    }

    fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    fn diagnostics(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}

/// Outcome of one scripted console session
pub struct SessionResult {
    pub total: u64,
    pub output: String,
    pub input_consumed: u64,
}

/// Run a console session over `input`
pub fn run_session(
    input: &str,
    engine: &mut ScriptedEngine,
    space: &mut AddressSpace,
) -> SessionResult {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let total = console.run(engine, space).unwrap();
    let (input, output) = console.into_inner();
    SessionResult {
        total,
        output: String::from_utf8(output).unwrap(),
        input_consumed: input.position(),
    }
}
