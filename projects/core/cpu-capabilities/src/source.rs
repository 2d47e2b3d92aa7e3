//! Sources of CPUID leaf 7 register values.
//!
//! [`CpuidSource`] is the seam between the oracle and the processor. The process-wide oracle
//! always uses [`HardwareCpuid`], which executes a single `cpuid` instruction per query, so
//! [`crate::snapshot`] is always a real CPUID result. [`CompileTimeCpuid`] reports the target
//! features the crate was compiled with instead; it is only used by oracles built explicitly
//! with [`CapabilityOracle::new`](crate::CapabilityOracle::new).
//!
//! The trait is sealed: snapshots only ever come from the sources defined here.

use crate::capability::Capability;

/// CPUID leaf every capability in this crate is read from.
pub const CPUID_LEAF: u32 = 7;

/// CPUID sub-leaf every capability in this crate is read from.
pub const CPUID_SUB_LEAF: u32 = 0;

pub(crate) mod private {
    pub trait Sealed {}
}

/// Something that can answer a CPUID query.
///
/// Implementations return `[eax, ebx, ecx, edx]` for the requested leaf and sub-leaf.
/// A [`CapabilityOracle`](crate::CapabilityOracle) calls [`CpuidSource::query`] at most once,
/// always with [`CPUID_LEAF`] and [`CPUID_SUB_LEAF`].
///
/// This trait is sealed and cannot be implemented outside this crate.
///
/// ```compile_fail
/// use cpu_capabilities::CpuidSource;
///
/// struct Forged;
/// impl CpuidSource for Forged {
///     fn query(&self, _leaf: u32, _sub_leaf: u32) -> [u32; 4] {
///         [u32::MAX; 4]
///     }
/// }
/// ```
pub trait CpuidSource: private::Sealed {
    /// Executes the query for `leaf` / `sub_leaf`.
    fn query(&self, leaf: u32, sub_leaf: u32) -> [u32; 4];
}

impl<S: CpuidSource + ?Sized> private::Sealed for &S {}

impl<S: CpuidSource + ?Sized> CpuidSource for &S {
    #[inline(always)]
    fn query(&self, leaf: u32, sub_leaf: u32) -> [u32; 4] {
        (**self).query(leaf, sub_leaf)
    }
}

/// Queries the executing processor with the `cpuid` instruction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct HardwareCpuid;

impl private::Sealed for HardwareCpuid {}

impl CpuidSource for HardwareCpuid {
    #[inline]
    fn query(&self, leaf: u32, sub_leaf: u32) -> [u32; 4] {
        // SAFETY: `cpuid` is part of the x86_64 baseline; the crate refuses to build elsewhere.
        #[allow(unused_unsafe)]
        let result = unsafe { core::arch::x86_64::__cpuid_count(leaf, sub_leaf) };
        [result.eax, result.ebx, result.ecx, result.edx]
    }
}

/// Reports the `target_feature`s enabled at compile time, laid out as CPUID leaf 7 registers.
///
/// Each enabled feature sets the bit [`Capability::location`] assigns to it. Queries for any
/// leaf other than [`CPUID_LEAF`] / [`CPUID_SUB_LEAF`] return all zeroes.
///
/// These registers are not a CPUID result. In particular the SSE rows reflect `target_feature`
/// flags, not the leaf 7 EDX/ECX bits the hardware reports, so the process-wide oracle never
/// uses this source.
///
/// ```
/// use cpu_capabilities::{CapabilityOracle, CompileTimeCpuid};
///
/// let compiled_for = CapabilityOracle::new(CompileTimeCpuid);
/// assert_eq!(compiled_for.snapshot().registers(), &CompileTimeCpuid::REGISTERS);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CompileTimeCpuid;

impl private::Sealed for CompileTimeCpuid {}

impl CompileTimeCpuid {
    /// Registers derived from the compile-time target features.
    pub const REGISTERS: [u32; 4] = {
        let mut registers = [0u32; 4];
        registers = with_bit(registers, Capability::Avx512f, cfg!(target_feature = "avx512f"));
        registers = with_bit(
            registers,
            Capability::Avx512Vpopcntdq,
            cfg!(target_feature = "avx512vpopcntdq"),
        );
        registers = with_bit(registers, Capability::Avx2, cfg!(target_feature = "avx2"));
        registers = with_bit(registers, Capability::Sse, cfg!(target_feature = "sse"));
        registers = with_bit(registers, Capability::Sse2, cfg!(target_feature = "sse2"));
        registers = with_bit(registers, Capability::Sse41, cfg!(target_feature = "sse4.1"));
        registers
    };
}

const fn with_bit(mut registers: [u32; 4], capability: Capability, enabled: bool) -> [u32; 4] {
    if enabled {
        let location = capability.location();
        registers[location.register.index()] |= location.mask();
    }
    registers
}

impl CpuidSource for CompileTimeCpuid {
    #[inline(always)]
    fn query(&self, leaf: u32, sub_leaf: u32) -> [u32; 4] {
        if leaf == CPUID_LEAF && sub_leaf == CPUID_SUB_LEAF {
            Self::REGISTERS
        } else {
            [0; 4]
        }
    }
}
