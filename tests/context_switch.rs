//! End-to-end test of the thread-context switching protocol: one core,
//! several logical threads, a host-style time-slicing loop.

use anyhow::Result;

use arm11_emu::config::EmuConfig;
use arm11_emu::cpu::state::registers::{CPSR_RESET, STACK_TOP};
use arm11_emu::{Arm11Core, FeatureProfile, ScriptedEngine, ThreadContext};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_core(program_len: u64) -> Result<Arm11Core<ScriptedEngine>> {
    Ok(Arm11Core::new(
        ScriptedEngine::new(program_len),
        FeatureProfile::ARM11,
    )?)
}

#[test]
fn fresh_threads_inherit_reset_state() -> Result<()> {
    init_logging();
    let core = make_core(0)?;

    assert_eq!(core.pc(), 0);
    assert_eq!(core.reg(13), STACK_TOP);
    assert_eq!(core.cpsr(), CPSR_RESET);
    assert_eq!(core.ticks(), 0);
    Ok(())
}

#[test]
fn two_threads_time_sliced_on_one_core() -> Result<()> {
    init_logging();
    let mut core = make_core(1_000)?;

    // Thread A starts at the reset state; thread B gets its own entry
    // point, stack, and register values.
    let mut ctx_a = ThreadContext::zeroed();
    core.save_context(&mut ctx_a);

    let mut ctx_b = ctx_a;
    ctx_b.pc = 0x0000_4000;
    ctx_b.reg_15 = 0x0000_4000;
    ctx_b.sp = 0x0800_0000;
    ctx_b.cpu_registers[0] = 0xB000_0000;

    // Round-robin a few slices.
    for _ in 0..4 {
        core.load_context(&ctx_a);
        core.execute(10);
        core.prepare_reschedule();
        core.save_context(&mut ctx_a);

        core.load_context(&ctx_b);
        core.execute(10);
        core.prepare_reschedule();
        core.save_context(&mut ctx_b);
    }

    // Each thread advanced independently: 4 slices x 10 instructions x 4
    // bytes from its own starting PC.
    assert_eq!(ctx_a.pc, 160);
    assert_eq!(ctx_b.pc, 0x0000_4000 + 160);
    assert_eq!(ctx_a.pc, ctx_a.reg_15);
    assert_eq!(ctx_b.pc, ctx_b.reg_15);

    // Thread-private registers never leaked across the switch.
    assert_eq!(ctx_a.cpu_registers[0], 0);
    assert_eq!(ctx_b.cpu_registers[0], 0xB000_0000);
    assert_eq!(ctx_a.sp, STACK_TOP);
    assert_eq!(ctx_b.sp, 0x0800_0000);

    // Ticks are per-core: both threads' work accumulated.
    assert_eq!(core.ticks(), 80);
    Ok(())
}

#[test]
fn save_load_round_trip_preserves_modified_state() -> Result<()> {
    init_logging();
    let mut core = make_core(100)?;

    core.set_reg(13, 0x1000_0000);
    let mut ctx = ThreadContext::zeroed();
    core.save_context(&mut ctx);

    core.set_reg(13, 0);
    core.load_context(&ctx);

    assert_eq!(core.reg(13), 0x1000_0000);
    Ok(())
}

#[test]
fn core_from_default_config() -> Result<()> {
    init_logging();

    let config = EmuConfig::default();
    let core = Arm11Core::from_config(ScriptedEngine::new(0), &config)?;
    assert_eq!(core.reg(13), STACK_TOP);

    let config = EmuConfig {
        variant: Some("arm11".to_string()),
        stack_top: Some(0x0400_0000),
    };
    let core = Arm11Core::from_config(ScriptedEngine::new(0), &config)?;
    assert_eq!(core.reg(13), 0x0400_0000);
    Ok(())
}
