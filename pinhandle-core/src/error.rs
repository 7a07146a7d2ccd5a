//! Error types

use core::fmt;

/// Errors from pin handle creation
///
/// Creation is the only fallible operation. Every other registry
/// operation is total over a handle the registry produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AllocError {
    /// No slot left in the static pool, or the heap refused the allocation
    AllocationExhausted,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::AllocationExhausted => f.write_str("pin handle allocation exhausted"),
        }
    }
}
