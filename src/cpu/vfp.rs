//! VFP subsystem reset.
//!
//! The core treats the VFP bank as opaque data, but the reset sequence must
//! bring the VFP system registers to their architectural reset values, and
//! the context-transfer protocol carries two of them (FPSCR, FPEXC).

use super::state::registers::RegisterFile;

/// `vfp_sys` index of the FP system ID register.
pub const VFP_FPSID: usize = 0;

/// `vfp_sys` index of the FP status and control register.
pub const VFP_FPSCR: usize = 1;

/// `vfp_sys` index of the FP exception control register.
pub const VFP_FPEXC: usize = 2;

/// FPSID value identifying the ARM11 VFPv2 implementation.
pub const FPSID_ARM11: u32 = 0x4101_20B4;

/// Bring the VFP subsystem to its architectural reset state.
///
/// Invoked once during the core reset sequence: the ID word is fixed,
/// status/control and exception control start cleared (VFP disabled until
/// the owning system enables it).
pub fn init(state: &mut RegisterFile) {
    state.vfp_sys[VFP_FPSID] = FPSID_ARM11;
    state.vfp_sys[VFP_FPSCR] = 0;
    state.vfp_sys[VFP_FPEXC] = 0;
}
