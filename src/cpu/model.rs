//! Processor model descriptors.
//!
//! A [`CpuModel`] identifies one modeled processor variant: its architecture
//! and core names, the main-ID register value/mask pair, and the cache
//! policy the engine should assume. Descriptors are immutable configuration,
//! not runtime state: every core instance of a given variant references the
//! same `&'static CpuModel`, it is never copied into the register file.

/// Cache policy assumed by the execution engine for a modeled variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheType {
    /// No cache is modeled.
    None,
    /// Data cache with write-through policy.
    WriteThrough,
    /// Data cache with write-back policy.
    WriteBack,
}

/// Immutable descriptor for one processor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuModel {
    /// Architecture name ("armv6", ...).
    pub architecture: &'static str,
    /// Core name ("arm11", ...).
    pub name: &'static str,
    /// Main-ID register value for this variant.
    pub id_value: u32,
    /// Mask of significant bits in the main-ID value.
    pub id_mask: u32,
    /// Cache policy.
    pub cache_type: CacheType,
}

/// The ARM11 (ARMv6) variant, shared read-only by every ARM11 core.
pub static ARM11: CpuModel = CpuModel {
    architecture: "armv6",
    name: "arm11",
    id_value: 0x0007_B000,
    id_mask: 0x0007_F000,
    cache_type: CacheType::None,
};

impl CpuModel {
    /// Look up a built-in model by core name.
    pub fn by_name(name: &str) -> Option<&'static CpuModel> {
        match name {
            "arm11" => Some(&ARM11),
            _ => None,
        }
    }
}
