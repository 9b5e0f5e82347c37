//! ARM11 core facade.
//!
//! [`Arm11Core`] owns one [`RegisterFile`], brings it to the architectural
//! reset state at construction, and mediates all access to it: register
//! accessors, bounded execution through the engine, and the thread-context
//! save/load protocol a host scheduler uses to time-slice logical threads
//! over one core.
//!
//! Everything here is single-threaded and synchronous: each operation runs
//! to completion on the calling thread, and callers multiplexing several
//! logical threads over one core must serialize execute/save/load
//! themselves.

use crate::cpu::features::FeatureProfile;
use crate::cpu::model::{CpuModel, ARM11};
use crate::cpu::state::context::ThreadContext;
use crate::cpu::state::registers::{
    resume, ExecMode, RegisterFile, CPSR_RESET, LR, PC, SERVICE_ENTRY, SP,
    STACK_TOP,
};
use crate::cpu::traits::{CoreError, ExecutionEngine};
use crate::cpu::vfp::{self, VFP_FPEXC, VFP_FPSCR};

/// One emulated ARM11 processor core.
///
/// The register file is exclusively owned and destroyed with the core.
/// `ticks` counts instructions retired since construction; it is per-core,
/// not per-logical-thread, and is never touched by context transfer.
#[derive(Debug)]
pub struct Arm11Core<E: ExecutionEngine> {
    state: Box<RegisterFile>,
    engine: E,
    ticks: u64,
}

impl<E: ExecutionEngine> Arm11Core<E> {
    /// Create a core for the ARM11 model with the given engine and
    /// capability profile.
    pub fn new(engine: E, profile: FeatureProfile) -> Result<Self, CoreError> {
        Self::with_model(engine, &ARM11, profile)
    }

    /// Create a core for an explicit model descriptor.
    ///
    /// Runs the full reset sequence; an unsupported profile fails
    /// construction and no core is produced.
    pub fn with_model(
        engine: E,
        model: &'static CpuModel,
        profile: FeatureProfile,
    ) -> Result<Self, CoreError> {
        let mut state = Box::new(RegisterFile::new(model));
        reset(&mut state, profile)?;

        log::debug!(
            "core reset: model={} profile={} sp=0x{:08X}",
            model.name,
            profile,
            state.gpr[SP]
        );

        Ok(Self {
            state,
            engine,
            ticks: 0,
        })
    }

    /// Create a core configured from [`EmuConfig`](crate::config::EmuConfig):
    /// variant selection and optional initial stack-top override.
    pub fn from_config(
        engine: E,
        config: &crate::config::EmuConfig,
    ) -> Result<Self, CoreError> {
        let model = config.model();
        let mut core = Self::with_model(engine, model, FeatureProfile::ARM11)?;
        if let Some(stack_top) = config.stack_top {
            core.set_reg(SP, stack_top);
        }
        Ok(core)
    }

    /// Current program counter.
    #[inline]
    pub fn pc(&self) -> u32 {
        self.state.gpr[PC]
    }

    /// Set the program counter. Updates r15 in the same operation.
    #[inline]
    pub fn set_pc(&mut self, pc: u32) {
        self.state.set_pc(pc);
    }

    /// Current CPSR.
    #[inline]
    pub fn cpsr(&self) -> u32 {
        self.state.cpsr
    }

    /// Set the CPSR.
    #[inline]
    pub fn set_cpsr(&mut self, cpsr: u32) {
        self.state.cpsr = cpsr;
    }

    /// Read a general register (0-15). Out of range is a caller bug and
    /// asserts immediately.
    #[inline]
    pub fn reg(&self, index: usize) -> u32 {
        self.state.reg(index)
    }

    /// Write a general register (0-15). Writing r15 updates the PC as one
    /// logical operation. Out of range asserts immediately.
    #[inline]
    pub fn set_reg(&mut self, index: usize, value: u32) {
        self.state.set_reg(index, value);
    }

    /// Instructions retired since construction. Monotonic; resets only by
    /// reconstructing the core.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Borrow the register file, e.g. for display.
    pub fn state(&self) -> &RegisterFile {
        &self.state
    }

    /// Execute up to `num_instructions` instructions.
    ///
    /// The budget is advisory: a block-dispatching engine may retire more
    /// than requested (exact stepping is only guaranteed for a budget of
    /// 1), and a terminating condition may retire fewer. A budget of zero
    /// or less executes nothing and leaves all state unchanged.
    ///
    /// Returns the number of instructions retired, which is also added to
    /// [`ticks`](Self::ticks).
    pub fn execute(&mut self, num_instructions: i64) -> u64 {
        if num_instructions <= 0 {
            return 0;
        }

        self.state.pending_instrs = num_instructions as u64;
        let executed = self.engine.run(&mut self.state);
        self.ticks += executed;
        executed
    }

    /// Save the full externally-visible register set into `ctx`.
    ///
    /// Whole-set copy: every field the context covers is written, nothing
    /// outside it (in particular `ticks`) is read or written.
    pub fn save_context(&self, ctx: &mut ThreadContext) {
        let state = &self.state;

        ctx.cpu_registers = state.gpr;
        ctx.fpu_registers = state.ext_regs;

        ctx.sp = state.gpr[SP];
        ctx.lr = state.gpr[LR];
        ctx.pc = state.gpr[PC];
        ctx.cpsr = state.cpsr;

        ctx.fpscr = state.vfp_sys[VFP_FPSCR];
        ctx.fpexc = state.vfp_sys[VFP_FPEXC];

        ctx.reg_15 = state.gpr[PC];
        ctx.mode = state.next_instr;

        log::trace!("saved context: pc=0x{:08X} mode={}", ctx.pc, ctx.mode);
    }

    /// Load the full externally-visible register set from `ctx`.
    ///
    /// Exact inverse of [`save_context`](Self::save_context): afterwards
    /// the core resumes as if it had always been executing that logical
    /// thread, with the PC and its r15 alias in agreement.
    pub fn load_context(&mut self, ctx: &ThreadContext) {
        let state = &mut self.state;

        state.gpr = ctx.cpu_registers;
        state.ext_regs = ctx.fpu_registers;

        state.gpr[SP] = ctx.sp;
        state.gpr[LR] = ctx.lr;
        state.pc = ctx.pc;
        state.cpsr = ctx.cpsr;

        state.vfp_sys[VFP_FPSCR] = ctx.fpscr;
        state.vfp_sys[VFP_FPEXC] = ctx.fpexc;

        state.gpr[PC] = ctx.reg_15;
        state.next_instr = ctx.mode;

        log::trace!("loaded context: pc=0x{:08X} mode={}", ctx.pc, ctx.mode);
    }

    /// Prepare for a thread reschedule: clear the pending instruction
    /// budget so the engine stops at the next dispatch boundary.
    ///
    /// Touches nothing else; the caller saves the context separately if it
    /// needs the state persisted. Idempotent.
    pub fn prepare_reschedule(&mut self) {
        log::trace!("prepare reschedule at pc=0x{:08X}", self.state.pc);
        self.state.pending_instrs = 0;
    }
}

/// Bring a freshly zero-filled register file to the architectural reset
/// state.
fn reset(state: &mut RegisterFile, profile: FeatureProfile) -> Result<(), CoreError> {
    if !profile.is_supported() {
        return Err(CoreError::UnsupportedProfile {
            profile,
            model: state.model.name,
        });
    }

    // Endianness and abort signaling.
    state.big_endian = false;
    state.abort_model = 0;
    state.late_abort = false;

    state.features = profile;
    state.cpsr = CPSR_RESET;

    vfp::init(state);

    state.set_pc(0);
    state.gpr[SP] = STACK_TOP;
    state.service_base = SERVICE_ENTRY;

    // IRQ line idles high (inactive).
    state.nirq_high = true;

    // Overwritten by the first context load in normal use.
    state.next_instr = resume::RESUME;
    state.exec_mode = ExecMode::Run;

    Ok(())
}
