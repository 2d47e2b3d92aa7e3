//! The capability oracle: one CPUID query, captured once, read forever after.
//!
//! The oracle has two states, not yet captured and captured. The first call to
//! [`CapabilityOracle::snapshot`] (or any predicate) moves it from the first to the second by
//! running its [`CpuidSource`] exactly once. Threads that race on that first call wait for the
//! winner to publish the snapshot; once published, every read is a plain load with no locking.

use crate::capability::Capability;
use crate::error::CapabilityError;
use crate::snapshot::CapabilitySnapshot;
use crate::source::{CpuidSource, HardwareCpuid, CPUID_LEAF, CPUID_SUB_LEAF};
use spin::Once;

/// Owns a [`CpuidSource`] and the snapshot it produces.
///
/// The process-wide instance is reached through [`oracle`]; separate instances are mainly
/// useful for supplying a custom source.
///
/// Oracles are neither `Copy` nor `Clone`, so the captured state has exactly one owner.
///
/// ```compile_fail
/// let copy = (*cpu_capabilities::oracle()).clone();
/// ```
pub struct CapabilityOracle<S = HardwareCpuid> {
    source: S,
    snapshot: Once<CapabilitySnapshot>,
}

static PROCESS_ORACLE: CapabilityOracle<HardwareCpuid> = CapabilityOracle::new(HardwareCpuid);

/// The process-wide oracle backing the free functions in [`crate::cpu_detect`].
///
/// Always backed by [`HardwareCpuid`], so its snapshot is the processor's leaf 7 / sub-leaf 0
/// result.
#[inline(always)]
pub fn oracle() -> &'static CapabilityOracle<HardwareCpuid> {
    &PROCESS_ORACLE
}

impl<S> CapabilityOracle<S> {
    /// Creates an oracle which has not yet queried `source`.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            snapshot: Once::new(),
        }
    }

    /// Returns `true` once the snapshot has been captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.snapshot.is_completed()
    }
}

impl<S: CpuidSource> CapabilityOracle<S> {
    /// Returns the captured snapshot, querying the source if this is the first access.
    ///
    /// The source is queried at most once for the lifetime of the oracle, no matter how many
    /// threads call this concurrently.
    #[inline]
    pub fn snapshot(&self) -> &CapabilitySnapshot {
        self.snapshot.call_once(|| self.capture())
    }

    #[cold]
    fn capture(&self) -> CapabilitySnapshot {
        let registers = self.source.query(CPUID_LEAF, CPUID_SUB_LEAF);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            leaf = CPUID_LEAF,
            sub_leaf = CPUID_SUB_LEAF,
            eax = registers[0],
            ebx = registers[1],
            ecx = registers[2],
            edx = registers[3],
            "captured CPUID snapshot"
        );

        CapabilitySnapshot::from_registers(registers)
    }

    /// Returns `true` if the CPU reports `capability`.
    #[inline]
    pub fn supports(&self, capability: Capability) -> bool {
        self.snapshot().supports(capability)
    }

    /// Returns `Ok(())` if the CPU reports `capability`, or [`CapabilityError::Unsupported`].
    pub fn require(&self, capability: Capability) -> Result<(), CapabilityError> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(CapabilityError::Unsupported(capability))
        }
    }

    /// AVX-512 Foundation (EBX bit 16).
    #[inline]
    pub fn has_avx512f(&self) -> bool {
        self.supports(Capability::Avx512f)
    }

    /// AVX-512 VPOPCNTDQ (EBX bit 30).
    #[inline]
    pub fn has_avx512vpopcntdq(&self) -> bool {
        self.supports(Capability::Avx512Vpopcntdq)
    }

    /// AVX2 (EBX bit 5).
    #[inline]
    pub fn has_avx2(&self) -> bool {
        self.supports(Capability::Avx2)
    }

    /// SSE (EDX bit 25).
    #[inline]
    pub fn has_sse(&self) -> bool {
        self.supports(Capability::Sse)
    }

    /// SSE2 (EDX bit 26).
    #[inline]
    pub fn has_sse2(&self) -> bool {
        self.supports(Capability::Sse2)
    }

    /// SSE4.1 (ECX bit 19).
    #[inline]
    pub fn has_sse41(&self) -> bool {
        self.supports(Capability::Sse41)
    }
}

impl<S> core::fmt::Debug for CapabilityOracle<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CapabilityOracle")
            .field("snapshot", &self.snapshot.get())
            .finish_non_exhaustive()
    }
}
