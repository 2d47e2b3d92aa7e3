//! Error types for capability lookups.
//!
//! Capability predicates never fail; these errors only arise from parsing capability names and
//! from callers explicitly requiring a capability.

use crate::capability::Capability;
use thiserror::Error;

/// Errors returned by the fallible helpers around the capability predicates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// A string did not name any known capability.
    #[error("Unknown capability name. Expected one of: avx512f, avx512vpopcntdq, avx2, sse, sse2, sse4.1.")]
    UnknownCapability,

    /// A required capability is not reported by the CPU.
    #[error("The CPU does not support {0}.")]
    Unsupported(Capability),
}
