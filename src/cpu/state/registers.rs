//! Register file for an ARM11 core.
//!
//! One `RegisterFile` per core, exclusively owned, heap-allocated, and
//! zero-filled before the reset sequence runs. It holds everything the
//! execution engine reads and writes:
//!
//! - **GPR**: 16 × 32-bit general registers (r0-r15)
//! - **PC**: mirrored in r15 at every observable point
//! - **CPSR**: mode and condition flag bits
//! - **Extended**: 64 × 32-bit VFP single-precision bank, opaque here
//! - **VFP system**: FPSID/FPSCR/FPEXC auxiliary control words
//!
//! Special registers by convention: r13 is the stack pointer, r14 the link
//! register, r15 the program counter alias.

use crate::cpu::features::FeatureProfile;
use crate::cpu::model::{CpuModel, ARM11};

/// Number of general purpose registers.
pub const NUM_GPR: usize = 16;

/// Number of extended (VFP single-precision) registers.
pub const NUM_EXT_REGS: usize = 64;

/// Number of VFP system registers (FPSID, FPSCR, FPEXC).
pub const NUM_VFP_SYS_REGS: usize = 3;

/// Stack pointer register index.
pub const SP: usize = 13;

/// Link register index.
pub const LR: usize = 14;

/// Program counter register index.
pub const PC: usize = 15;

/// Reset CPSR: supervisor mode, IRQ and FIQ masked.
pub const CPSR_RESET: u32 = 0x0000_00D3;

/// Reset stack pointer: top-of-stack sentinel, expected to be overwritten
/// by the owning system before first real execution.
pub const STACK_TOP: u32 = 0x1000_0000;

/// Service-call (SVC) dispatch entry address.
pub const SERVICE_ENTRY: u32 = 0xFFFF_0000;

/// Resume-marker values produced and consumed by the execution engine.
///
/// The register file preserves the marker verbatim across context
/// save/load and never interprets it.
pub mod resume {
    /// Next fetch is sequential.
    pub const SEQUENTIAL: u32 = 0;
    /// Next fetch is non-sequential (branch taken).
    pub const NON_SEQUENTIAL: u32 = 1;
    /// PC already advanced past the fetched instruction.
    pub const PC_ADVANCED: u32 = 2;
    /// Pipeline must be refilled before the next fetch.
    pub const PRIME_PIPE: u32 = 3;
    /// Ready to fetch the next instruction.
    pub const RESUME: u32 = 4;
}

/// Operating mode selector for the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecMode {
    /// Engine is stopped.
    Stop,
    /// Engine is switching processor mode.
    ChangeMode,
    /// Engine single-steps exactly one instruction.
    Once,
    /// Engine runs freely (default interpret mode).
    #[default]
    Run,
}

/// Complete architectural state for one core.
///
/// The facade owns exactly one `RegisterFile`, boxed so the block has a
/// stable address for the lifetime of the core. The engine mutates it
/// freely during [`ExecutionEngine::run`](crate::cpu::traits::ExecutionEngine::run).
#[derive(Clone)]
pub struct RegisterFile {
    /// General registers r0-r15.
    pub gpr: [u32; NUM_GPR],

    /// Program counter. Invariant: equal to `gpr[15]` at every externally
    /// observable point; use [`RegisterFile::set_pc`] to update both.
    pub pc: u32,

    /// Current program status register.
    pub cpsr: u32,

    /// Extended (VFP) register bank. Opaque to the core beyond byte-copy
    /// semantics in context transfer.
    pub ext_regs: [u32; NUM_EXT_REGS],

    /// VFP system registers, indexed by `vfp::VFP_FPSID` etc.
    pub vfp_sys: [u32; NUM_VFP_SYS_REGS],

    /// Opaque resume marker, see [`resume`].
    pub next_instr: u32,

    /// Instruction budget for the next engine run. Transient: set before
    /// each run, consumed by the engine, not part of persisted context.
    pub pending_instrs: u64,

    /// Engine operating mode.
    pub exec_mode: ExecMode,

    /// Big-endian data accesses selected. ARM11 cores here run
    /// little-endian, so this resets deasserted.
    pub big_endian: bool,

    /// Abort model selector (0 = base restored abort model).
    pub abort_model: u32,

    /// Late-abort fault signaling asserted.
    pub late_abort: bool,

    /// Service-call dispatch entry address.
    pub service_base: u32,

    /// External interrupt-request line. Active-low: `true` means no IRQ
    /// pending.
    pub nirq_high: bool,

    /// Shared read-only descriptor of the modeled variant.
    pub model: &'static CpuModel,

    /// Capability profile selected at construction.
    pub features: FeatureProfile,
}

impl RegisterFile {
    /// Create a zero-filled register file for the given model.
    ///
    /// This is the pre-reset state; the facade's reset sequence brings it
    /// to the architectural starting state.
    pub fn new(model: &'static CpuModel) -> Self {
        Self {
            gpr: [0; NUM_GPR],
            pc: 0,
            cpsr: 0,
            ext_regs: [0; NUM_EXT_REGS],
            vfp_sys: [0; NUM_VFP_SYS_REGS],
            next_instr: 0,
            pending_instrs: 0,
            exec_mode: ExecMode::Stop,
            big_endian: false,
            abort_model: 0,
            late_abort: false,
            service_base: 0,
            nirq_high: false,
            model,
            features: FeatureProfile::empty(),
        }
    }

    /// Set the program counter, updating r15 in the same operation.
    #[inline]
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
        self.gpr[PC] = pc;
    }

    /// Read a general register (0-15). Out of range is a caller bug.
    #[inline]
    pub fn reg(&self, index: usize) -> u32 {
        assert!(index < NUM_GPR, "register index {} out of range", index);
        self.gpr[index]
    }

    /// Write a general register (0-15). Writing r15 also updates the
    /// program counter, keeping the alias invariant. Out of range is a
    /// caller bug.
    #[inline]
    pub fn set_reg(&mut self, index: usize, value: u32) {
        assert!(index < NUM_GPR, "register index {} out of range", index);
        if index == PC {
            self.pc = value;
        }
        self.gpr[index] = value;
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(&ARM11)
    }
}

impl std::fmt::Debug for RegisterFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterFile")
            .field("pc", &format_args!("0x{:08X}", self.pc))
            .field("cpsr", &format_args!("0x{:08X}", self.cpsr))
            .field("sp", &format_args!("0x{:08X}", self.gpr[SP]))
            .field("lr", &format_args!("0x{:08X}", self.gpr[LR]))
            .field("next_instr", &self.next_instr)
            .field("exec_mode", &self.exec_mode)
            .field("model", &self.model.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let state = RegisterFile::new(&ARM11);
        assert!(state.gpr.iter().all(|r| *r == 0));
        assert!(state.ext_regs.iter().all(|r| *r == 0));
        assert_eq!(state.pc, 0);
        assert_eq!(state.cpsr, 0);
        assert_eq!(state.pending_instrs, 0);
        assert!(!state.big_endian);
    }

    #[test]
    fn test_reg_read_write() {
        let mut state = RegisterFile::default();

        state.set_reg(0, 0xDEAD_BEEF);
        assert_eq!(state.reg(0), 0xDEAD_BEEF);

        state.set_reg(SP, 0x1000);
        assert_eq!(state.reg(13), 0x1000);
    }

    #[test]
    fn test_set_pc_updates_r15() {
        let mut state = RegisterFile::default();

        state.set_pc(0x0010_0000);
        assert_eq!(state.pc, 0x0010_0000);
        assert_eq!(state.gpr[PC], 0x0010_0000);
    }

    #[test]
    fn test_set_r15_updates_pc() {
        let mut state = RegisterFile::default();

        state.set_reg(PC, 0x0020_0000);
        assert_eq!(state.pc, 0x0020_0000);
        assert_eq!(state.reg(15), 0x0020_0000);
    }

    #[test]
    #[should_panic(expected = "register index 16 out of range")]
    fn test_reg_out_of_range_panics() {
        let state = RegisterFile::default();
        let _ = state.reg(16);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_reg_out_of_range_panics() {
        let mut state = RegisterFile::default();
        state.set_reg(42, 1);
    }
}
