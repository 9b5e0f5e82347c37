//! ARM11 processor core.
//!
//! The core is a thin facade over an exclusively-owned [`RegisterFile`].
//! It is organized into several submodules:
//!
//! - [`state`]: architectural state (register file, thread context)
//! - [`model`]: immutable per-variant processor descriptors
//! - [`features`]: architecture-version capability profiles
//! - [`traits`]: the execution-engine boundary and core errors
//! - [`engine`]: a deterministic scripted engine for tests and stand-ins
//! - [`vfp`]: VFP subsystem reset values
//! - [`core`]: the facade itself
//!
//! # Example
//!
//! ```
//! use arm11_emu::cpu::core::Arm11Core;
//! use arm11_emu::cpu::engine::ScriptedEngine;
//! use arm11_emu::cpu::FeatureProfile;
//!
//! let engine = ScriptedEngine::new(64);
//! let mut core = Arm11Core::new(engine, FeatureProfile::ARM11).unwrap();
//!
//! core.execute(8);
//! assert_eq!(core.ticks(), 8);
//! ```

pub mod core;
pub mod engine;
pub mod features;
pub mod model;
pub mod state;
pub mod traits;
pub mod vfp;

// Re-export key types for convenience
pub use self::core::Arm11Core;
pub use engine::ScriptedEngine;
pub use features::FeatureProfile;
pub use model::{CacheType, CpuModel, ARM11};
pub use state::{RegisterFile, ThreadContext};
pub use traits::{CoreError, ExecutionEngine};
