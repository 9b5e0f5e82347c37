//! arm11-emu library
//!
//! Core state model for an emulated ARM11 (ARMv6) processor. This crate owns
//! one processor's architectural state, drives bounded instruction batches
//! through a pluggable execution engine, and provides exact save/restore of
//! that state so a host scheduler can multiplex several logical threads onto
//! a single core instance.
//!
//! Instruction semantics live behind the [`ExecutionEngine`] trait; this
//! crate only manages the register file, reset sequencing, tick accounting,
//! and the thread-context transfer protocol.

pub mod config;
pub mod cpu;

// Re-export key types for convenience
pub use cpu::core::Arm11Core;
pub use cpu::engine::ScriptedEngine;
pub use cpu::model::{CacheType, CpuModel, ARM11};
pub use cpu::state::{RegisterFile, ThreadContext, NUM_EXT_REGS, NUM_GPR};
pub use cpu::traits::{CoreError, ExecutionEngine};
pub use cpu::FeatureProfile;
