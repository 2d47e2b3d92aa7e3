#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(not(target_arch = "x86_64"))]
compile_error!(
    "cpu-capabilities reads CPUID leaf 7 and only supports x86_64 targets. \
     Gate the dependency behind `cfg(target_arch = \"x86_64\")` instead of building it here."
);

#[cfg(test)]
pub(crate) mod test_prelude;

pub mod capability;
pub mod cpu_detect;
pub mod dispatch;
pub mod error;
pub mod oracle;
pub mod snapshot;
pub mod source;

pub use capability::{BitLocation, Capability, Register};
pub use cpu_detect::*;
pub use dispatch::select;
pub use error::CapabilityError;
pub use oracle::{oracle, CapabilityOracle};
pub use snapshot::CapabilitySnapshot;
pub use source::{
    CompileTimeCpuid, CpuidSource, HardwareCpuid, CPUID_LEAF, CPUID_SUB_LEAF,
};
