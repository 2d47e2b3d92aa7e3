//! Picking an implementation of a routine based on the capabilities the CPU reports.
//!
//! Candidates are given best-first as `(required capability, implementation)` pairs, typically
//! function pointers. The first candidate whose capability is present wins; otherwise the
//! fallback (usually a portable implementation) is returned.
//!
//! ```
//! use cpu_capabilities::{select, Capability};
//!
//! fn sum_avx2(values: &[u32]) -> u32 { values.iter().sum() }
//! fn sum_sse2(values: &[u32]) -> u32 { values.iter().sum() }
//! fn sum_portable(values: &[u32]) -> u32 { values.iter().sum() }
//!
//! let sum = select(
//!     &[
//!         (Capability::Avx2, sum_avx2 as fn(&[u32]) -> u32),
//!         (Capability::Sse2, sum_sse2 as fn(&[u32]) -> u32),
//!     ],
//!     sum_portable as fn(&[u32]) -> u32,
//! );
//! assert_eq!(sum(&[1, 2, 3]), 6);
//! ```

use crate::capability::Capability;
use crate::oracle::{oracle, CapabilityOracle};
use crate::source::CpuidSource;

impl<S: CpuidSource> CapabilityOracle<S> {
    /// Returns the first implementation in `candidates` whose capability this oracle reports,
    /// or `fallback` if there is none.
    #[inline]
    pub fn select<T: Copy>(&self, candidates: &[(Capability, T)], fallback: T) -> T {
        let snapshot = self.snapshot();
        for &(capability, implementation) in candidates {
            if snapshot.supports(capability) {
                #[cfg(feature = "tracing")]
                tracing::trace!(%capability, "selected implementation");
                return implementation;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("selected fallback implementation");
        fallback
    }
}

/// [`CapabilityOracle::select`] against the process-wide oracle.
#[inline]
pub fn select<T: Copy>(candidates: &[(Capability, T)], fallback: T) -> T {
    oracle().select(candidates, fallback)
}
