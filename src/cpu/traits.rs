//! Core traits and errors.
//!
//! The execution engine lives behind [`ExecutionEngine`] so the facade's
//! tests can substitute a deterministic engine (see
//! [`ScriptedEngine`](crate::cpu::engine::ScriptedEngine)) without
//! depending on real instruction semantics.

use thiserror::Error;

use super::features::FeatureProfile;
use super::state::RegisterFile;

/// Errors that abort core construction.
///
/// There is no partial or degraded core: construction either yields a
/// fully reset core or fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested capability profile cannot be selected.
    #[error("unsupported feature profile {profile} for model {model}")]
    UnsupportedProfile {
        /// The rejected profile.
        profile: FeatureProfile,
        /// Name of the model the profile was requested for.
        model: &'static str,
    },
}

/// Instruction decode/dispatch/execution engine.
///
/// The engine consumes `state.pending_instrs` as an *advisory* budget and
/// returns the number of instructions actually retired. It may mutate all
/// architectural state, including memory side effects it models itself.
///
/// # Budget contract
///
/// - With a budget of 1 the engine executes exactly one instruction.
/// - With larger budgets it may execute *more* than requested when it
///   dispatches a whole translated block; it never executes fewer unless a
///   terminating condition (halt, fault) occurs first.
pub trait ExecutionEngine {
    /// Run until the pending budget is spent or a terminating condition
    /// occurs. Returns the number of instructions retired.
    fn run(&mut self, state: &mut RegisterFile) -> u64;
}
