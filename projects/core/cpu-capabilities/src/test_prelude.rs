//! Common test imports and utilities for capability tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export std items for tests that need them
pub use std::format;
pub use std::sync::atomic::{AtomicUsize, Ordering};
pub use std::sync::{Arc, Barrier, Mutex};
pub use std::thread;
pub use std::vec;
pub use std::vec::Vec;

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::capability::{BitLocation, Capability, Register};
pub use crate::cpu_detect::*;
pub use crate::error::CapabilityError;
pub use crate::oracle::CapabilityOracle;
pub use crate::snapshot::CapabilitySnapshot;
pub use crate::source::{CompileTimeCpuid, CpuidSource, HardwareCpuid, CPUID_LEAF, CPUID_SUB_LEAF};

/// A [`CpuidSource`] returning fixed registers and recording how often it was queried.
pub(crate) struct CountingCpuid {
    registers: [u32; 4],
    calls: AtomicUsize,
    last_query: Mutex<Option<(u32, u32)>>,
}

impl CountingCpuid {
    pub(crate) fn new(registers: [u32; 4]) -> Self {
        Self {
            registers,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Number of times [`CpuidSource::query`] has run.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The `(leaf, sub_leaf)` of the most recent query.
    pub(crate) fn last_query(&self) -> Option<(u32, u32)> {
        *self.last_query.lock().unwrap()
    }
}

impl crate::source::private::Sealed for CountingCpuid {}

impl CpuidSource for CountingCpuid {
    fn query(&self, leaf: u32, sub_leaf: u32) -> [u32; 4] {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some((leaf, sub_leaf));
        // Widen the window in which racing first callers could observe an uncaptured oracle.
        thread::yield_now();
        self.registers
    }
}
