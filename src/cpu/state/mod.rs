//! Architectural state for an ARM11 core.
//!
//! - [`registers`]: the exclusively-owned register file
//! - [`context`]: the fixed-layout thread-context transfer buffer

pub mod context;
pub mod registers;

pub use context::ThreadContext;
pub use registers::{
    ExecMode, RegisterFile, LR, NUM_EXT_REGS, NUM_GPR, PC, SP,
};
