//! Architecture-version capability profiles.
//!
//! A [`FeatureProfile`] is the set of instruction-set capability flags
//! selected for a core at construction. It determines which engine
//! behaviors are legal; an unsupported profile aborts construction
//! rather than producing a degraded core.

use std::fmt;

/// Set of architecture capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureProfile(u32);

impl FeatureProfile {
    /// ARMv4 baseline instruction set.
    pub const V4: FeatureProfile = FeatureProfile(1 << 0);
    /// Thumb support (v4T).
    pub const V4T: FeatureProfile = FeatureProfile(1 << 1);
    /// ARMv5 instruction set.
    pub const V5: FeatureProfile = FeatureProfile(1 << 2);
    /// v5 Thumb interworking (BLX).
    pub const V5T: FeatureProfile = FeatureProfile(1 << 3);
    /// v5E DSP extensions.
    pub const V5E: FeatureProfile = FeatureProfile(1 << 4);
    /// ARMv6 instruction set.
    pub const V6: FeatureProfile = FeatureProfile(1 << 5);

    /// Profile selected for the ARM11 core: v6 with the v5/v5E baseline.
    pub const ARM11: FeatureProfile =
        FeatureProfile(Self::V6.0 | Self::V5.0 | Self::V5E.0);

    const ALL: u32 = (1 << 6) - 1;

    /// An empty profile (no capabilities).
    pub const fn empty() -> Self {
        FeatureProfile(0)
    }

    /// Raw flag bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is present in this profile.
    pub const fn contains(self, other: FeatureProfile) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether this profile can be selected at construction.
    ///
    /// The interpreter requires at least the v5 instruction set, and any
    /// flag bit outside the defined set is rejected outright.
    pub const fn is_supported(self) -> bool {
        self.0 & !Self::ALL == 0 && self.contains(Self::V5)
    }
}

impl std::ops::BitOr for FeatureProfile {
    type Output = FeatureProfile;

    fn bitor(self, rhs: FeatureProfile) -> FeatureProfile {
        FeatureProfile(self.0 | rhs.0)
    }
}

impl fmt::Display for FeatureProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u32, &str); 6] = [
            (1 << 0, "v4"),
            (1 << 1, "v4T"),
            (1 << 2, "v5"),
            (1 << 3, "v5T"),
            (1 << 4, "v5E"),
            (1 << 5, "v6"),
        ];

        let mut first = true;
        for (bit, name) in NAMES {
            if self.0 & bit != 0 {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}
