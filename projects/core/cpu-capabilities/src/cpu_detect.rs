//! Process-wide CPU feature detection without using std.
//!
//! These functions are used to determine at runtime which optimized code paths can be safely
//! executed on the current CPU. They all read the same [`CapabilitySnapshot`], captured by the
//! process-wide [`oracle`] with a single CPUID leaf 7 / sub-leaf 0 query.
//!
//! The functions are minimal overhead: the first call performs the query, and every subsequent
//! call simply loads the captured registers and tests a bit.

use crate::capability::Capability;
use crate::error::CapabilityError;
use crate::oracle::oracle;
use crate::snapshot::CapabilitySnapshot;

/// Returns the raw CPUID leaf 7 / sub-leaf 0 registers captured for this process.
///
/// The query is executed on the first call to this or any other function in this module; the
/// same snapshot is returned for the rest of the process lifetime.
#[inline]
pub fn snapshot() -> &'static CapabilitySnapshot {
    oracle().snapshot()
}

/// Checks if the CPU supports `capability`.
#[inline]
pub fn supports(capability: Capability) -> bool {
    oracle().supports(capability)
}

/// Checks if the CPU supports `capability`, returning [`CapabilityError::Unsupported`] if not.
///
/// Useful at the entry point of code that has no fallback for a missing instruction set.
#[inline]
pub fn require(capability: Capability) -> Result<(), CapabilityError> {
    oracle().require(capability)
}

/// Checks if the CPU supports AVX512F (AVX-512 Foundation) instructions.
///
/// AVX-512F provides 512-bit wide vectors and operations.
///
/// # Returns
/// `true` if EBX bit 16 of CPUID leaf 7 is set, `false` otherwise.
#[inline]
pub fn has_avx512f() -> bool {
    oracle().has_avx512f()
}

/// Checks if the CPU supports the AVX-512 population count extension (VPOPCNTDQ).
///
/// # Returns
/// `true` if EBX bit 30 of CPUID leaf 7 is set, `false` otherwise.
#[inline]
pub fn has_avx512vpopcntdq() -> bool {
    oracle().has_avx512vpopcntdq()
}

/// Checks if the CPU supports AVX2 (Advanced Vector Extensions 2) instructions.
///
/// AVX2 extends AVX by providing 256-bit integer SIMD instructions.
///
/// # Returns
/// `true` if EBX bit 5 of CPUID leaf 7 is set, `false` otherwise.
#[inline]
pub fn has_avx2() -> bool {
    oracle().has_avx2()
}

/// Checks if the CPU supports SSE (Streaming SIMD Extensions) instructions.
///
/// # Returns
/// `true` if EDX bit 25 of CPUID leaf 7 is set, `false` otherwise.
#[inline]
pub fn has_sse() -> bool {
    oracle().has_sse()
}

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// # Returns
/// `true` if EDX bit 26 of CPUID leaf 7 is set, `false` otherwise.
#[inline]
pub fn has_sse2() -> bool {
    oracle().has_sse2()
}

/// Checks if the CPU supports SSE4.1 instructions.
///
/// # Returns
/// `true` if ECX bit 19 of CPUID leaf 7 is set, `false` otherwise.
#[inline]
pub fn has_sse41() -> bool {
    oracle().has_sse41()
}
