//! The raw result of the one CPUID query performed per process.

use crate::capability::{Capability, Register};

/// The four output registers of CPUID leaf 7, sub-leaf 0, as captured by a
/// [`CapabilityOracle`](crate::CapabilityOracle).
///
/// A snapshot can only be created by an oracle and is only ever handed out by shared reference,
/// so the captured value cannot be copied out, reassigned or changed after capture.
///
/// ```compile_fail
/// // Snapshots are neither `Copy` nor `Clone`.
/// let owned = *cpu_capabilities::snapshot();
/// ```
///
/// ```compile_fail
/// // The process-wide snapshot cannot be reassigned.
/// *cpu_capabilities::snapshot() = *cpu_capabilities::snapshot();
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CapabilitySnapshot {
    registers: [u32; 4],
}

impl CapabilitySnapshot {
    #[inline(always)]
    pub(crate) const fn from_registers(registers: [u32; 4]) -> Self {
        Self { registers }
    }

    /// All four registers, in `[eax, ebx, ecx, edx]` order.
    #[inline(always)]
    pub const fn registers(&self) -> &[u32; 4] {
        &self.registers
    }

    /// Value of a single register.
    #[inline(always)]
    pub const fn register(&self, register: Register) -> u32 {
        self.registers[register.index()]
    }

    /// EAX
    #[inline(always)]
    pub const fn eax(&self) -> u32 {
        self.register(Register::Eax)
    }

    /// EBX
    #[inline(always)]
    pub const fn ebx(&self) -> u32 {
        self.register(Register::Ebx)
    }

    /// ECX
    #[inline(always)]
    pub const fn ecx(&self) -> u32 {
        self.register(Register::Ecx)
    }

    /// EDX
    #[inline(always)]
    pub const fn edx(&self) -> u32 {
        self.register(Register::Edx)
    }

    /// Returns `true` if the bit assigned to `capability` is set in this snapshot.
    #[inline(always)]
    pub const fn supports(&self, capability: Capability) -> bool {
        let location = capability.location();
        (self.register(location.register) & location.mask()) != 0
    }

    /// Iterates over every capability this snapshot reports as present.
    pub fn supported(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::all_values()
            .iter()
            .copied()
            .filter(move |&capability| self.supports(capability))
    }
}
