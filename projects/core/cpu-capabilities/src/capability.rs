//! Names and bit locations of the capabilities reported by CPUID leaf 7, sub-leaf 0.
//!
//! [`Capability::location`] is the single table mapping each capability to the register and bit
//! it is read from. Every predicate in the crate goes through it.

use crate::error::CapabilityError;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// One of the four output registers of a CPUID query, in the order the query returns them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    /// EAX
    Eax = 0,
    /// EBX
    Ebx = 1,
    /// ECX
    Ecx = 2,
    /// EDX
    Edx = 3,
}

impl Register {
    /// Index of this register within a `[eax, ebx, ecx, edx]` array.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Where a capability bit lives inside a snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BitLocation {
    /// The register holding the bit.
    pub register: Register,
    /// Bit index within the register, `0..32`.
    pub bit: u32,
}

impl BitLocation {
    /// Mask selecting this bit within its register.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        1 << self.bit
    }
}

/// A hardware capability reported by CPUID leaf 7, sub-leaf 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum Capability {
    /// 512-bit vector extension (AVX-512 Foundation).
    Avx512f,
    /// Population count extension for 512-bit vectors (AVX-512 VPOPCNTDQ).
    Avx512Vpopcntdq,
    /// 256-bit integer vector extension (AVX2).
    Avx2,
    /// Streaming SIMD Extensions.
    Sse,
    /// Streaming SIMD Extensions 2.
    Sse2,
    /// Streaming SIMD Extensions 4.1.
    Sse41,
}

impl Capability {
    /// Returns the register and bit this capability is read from.
    ///
    /// All bits are read from the leaf 7 / sub-leaf 0 query; this table is what callers of the
    /// predicates in [`crate::cpu_detect`] rely on, so it must not drift.
    #[inline(always)]
    pub const fn location(self) -> BitLocation {
        use Register::*;
        #[rustfmt::skip]
        let (register, bit) = match self {
            Capability::Avx512f         => (Ebx, 16),
            Capability::Avx512Vpopcntdq => (Ebx, 30),
            Capability::Avx2            => (Ebx, 5),
            Capability::Sse             => (Edx, 25),
            Capability::Sse2            => (Edx, 26),
            Capability::Sse41           => (Ecx, 19),
        };
        BitLocation { register, bit }
    }

    /// Canonical lower-case name, matching the `target_feature` spelling used by rustc.
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Avx512f => "avx512f",
            Capability::Avx512Vpopcntdq => "avx512vpopcntdq",
            Capability::Avx2 => "avx2",
            Capability::Sse => "sse",
            Capability::Sse2 => "sse2",
            Capability::Sse41 => "sse4.1",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = CapabilityError;

    /// Parses a canonical name, ignoring ASCII case. `sse41` is accepted for `sse4.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sse41") {
            return Ok(Capability::Sse41);
        }

        Capability::all_values()
            .iter()
            .copied()
            .find(|capability| capability.name().eq_ignore_ascii_case(s))
            .ok_or(CapabilityError::UnknownCapability)
    }
}
