//! Deterministic scripted engine.
//!
//! [`ScriptedEngine`] stands in for a real interpreter: it "executes" a
//! program of a fixed instruction count, retiring `min(budget, remaining)`
//! instructions per run and advancing the PC by four bytes each. A
//! configurable dispatch block size reproduces the batching behavior of
//! block-dispatching engines, which may retire more instructions than the
//! requested budget.
//!
//! Hosts without a real engine can use it as a stand-in; the facade's unit
//! and integration tests are built on it.

use super::state::registers::{resume, RegisterFile, PC};
use super::traits::ExecutionEngine;

/// Engine that executes a fixed-length program of 4-byte instructions.
#[derive(Debug, Clone)]
pub struct ScriptedEngine {
    /// Total instructions in the scripted program.
    program_len: u64,
    /// Instructions retired so far across all runs.
    retired: u64,
    /// Dispatch granularity: each dispatch retires up to this many
    /// instructions, so a run can overshoot the budget by up to
    /// `block_size - 1`. A budget of 1 always single-steps.
    block_size: u64,
}

impl ScriptedEngine {
    /// Create an engine for a program of `program_len` instructions,
    /// single-stepping (block size 1).
    pub fn new(program_len: u64) -> Self {
        Self {
            program_len,
            retired: 0,
            block_size: 1,
        }
    }

    /// Use a dispatch block size larger than one.
    pub fn with_block_size(mut self, block_size: u64) -> Self {
        assert!(block_size > 0, "block size must be positive");
        self.block_size = block_size;
        self
    }

    /// Instructions remaining in the scripted program.
    pub fn remaining(&self) -> u64 {
        self.program_len - self.retired
    }
}

impl ExecutionEngine for ScriptedEngine {
    fn run(&mut self, state: &mut RegisterFile) -> u64 {
        let budget = state.pending_instrs;
        if budget == 0 || self.remaining() == 0 {
            return 0;
        }

        // Dispatch whole blocks until the budget boundary is reached or
        // crossed, like a block interpreter that only breaks between
        // dispatches. Budget 1 degenerates to an exact single step.
        let mut count = 0u64;
        while count < budget && self.remaining() > count {
            let block = if budget == 1 {
                1
            } else {
                self.block_size.min(self.remaining() - count)
            };
            count += block;
        }

        self.retired += count;
        state.pending_instrs = 0;
        let pc = state.pc.wrapping_add((count * 4) as u32);
        state.pc = pc;
        state.gpr[PC] = pc;
        state.next_instr = resume::SEQUENTIAL;
        count
    }
}
