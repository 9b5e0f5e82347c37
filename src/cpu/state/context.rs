//! Thread-context transfer buffer.
//!
//! A [`ThreadContext`] is the fixed-layout snapshot of one logical thread's
//! externally-visible register set. Host schedulers keep one per logical
//! thread and swap them through a core with
//! [`Arm11Core::save_context`](crate::cpu::core::Arm11Core::save_context) /
//! [`Arm11Core::load_context`](crate::cpu::core::Arm11Core::load_context).
//!
//! The layout is architecture-defined and bit-exact: `#[repr(C)]` with only
//! `u32` fields, so the zerocopy derives expose the persisted byte form
//! without padding surprises.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use super::registers::{NUM_EXT_REGS, NUM_GPR};

/// Saved register set for one logical thread.
///
/// Field order is the transfer format; do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ThreadContext {
    /// General registers r0-r15.
    pub cpu_registers: [u32; NUM_GPR],
    /// Extended (VFP) register bank.
    pub fpu_registers: [u32; NUM_EXT_REGS],
    /// Stack pointer (r13).
    pub sp: u32,
    /// Link register (r14).
    pub lr: u32,
    /// Program counter.
    pub pc: u32,
    /// Program status register.
    pub cpsr: u32,
    /// Floating-point status and control register.
    pub fpscr: u32,
    /// Floating-point exception control register.
    pub fpexc: u32,
    /// Duplicate of r15, kept for host-scheduler bookkeeping.
    pub reg_15: u32,
    /// Opaque resume marker, preserved verbatim.
    pub mode: u32,
}

impl ThreadContext {
    /// A zeroed context, the state a scheduler hands to a brand-new thread
    /// before filling in its entry point and stack.
    pub const fn zeroed() -> Self {
        Self {
            cpu_registers: [0; NUM_GPR],
            fpu_registers: [0; NUM_EXT_REGS],
            sp: 0,
            lr: 0,
            pc: 0,
            cpsr: 0,
            fpscr: 0,
            fpexc: 0,
            reg_15: 0,
            mode: 0,
        }
    }
}

impl Default for ThreadContext {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::{FromBytes, IntoBytes};

    #[test]
    fn test_layout_is_packed_u32s() {
        // 16 GPRs + 64 ext regs + 8 scalar words, no padding.
        assert_eq!(
            std::mem::size_of::<ThreadContext>(),
            (NUM_GPR + NUM_EXT_REGS + 8) * 4
        );
    }

    #[test]
    fn test_byte_view_round_trip() {
        let mut ctx = ThreadContext::zeroed();
        ctx.cpu_registers[3] = 0xDEAD_BEEF;
        ctx.fpu_registers[63] = 0x0BAD_F00D;
        ctx.pc = 0x0010_0000;
        ctx.mode = 4;

        let bytes = ctx.as_bytes().to_vec();
        let restored = ThreadContext::read_from_bytes(&bytes).unwrap();
        assert_eq!(restored, ctx);
    }

    #[test]
    fn test_gpr_block_leads_the_layout() {
        let mut ctx = ThreadContext::zeroed();
        ctx.cpu_registers[0] = 0x0403_0201;

        // r0 occupies the first four bytes, little-endian.
        assert_eq!(&ctx.as_bytes()[..4], &[0x01, 0x02, 0x03, 0x04]);
    }
}
