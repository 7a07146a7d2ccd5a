//! Heap-backed allocation
//!
//! Records live in a growable vector on the global heap. The firmware must
//! provide a `#[global_allocator]` (e.g. `embedded-alloc`).

use alloc::vec::Vec;

use super::PinAllocator;
use crate::error::AllocError;
use crate::handle::PinRecord;

/// Unbounded allocator on the global heap
///
/// Reservation is fallible: an out-of-memory heap yields
/// [`AllocError::AllocationExhausted`] instead of aborting.
#[derive(Debug, Default)]
pub struct HeapAllocator {
    records: Vec<PinRecord>,
}

impl HeapAllocator {
    /// Create an empty allocator (no heap memory used until the first pin)
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl super::sealed::Sealed for HeapAllocator {}

impl PinAllocator for HeapAllocator {
    fn allocate(&mut self, record: PinRecord) -> Result<usize, AllocError> {
        // Amortized growth asks for double the buffer; fall back to room for
        // exactly one more record before giving up
        self.records
            .try_reserve(1)
            .or_else(|_| self.records.try_reserve_exact(1))
            .map_err(|_| AllocError::AllocationExhausted)?;

        let index = self.records.len();
        self.records.push(record);
        Ok(index)
    }

    fn record(&self, index: usize) -> &PinRecord {
        &self.records[index]
    }

    fn record_mut(&mut self, index: usize) -> &mut PinRecord {
        &mut self.records[index]
    }

    fn allocated(&self) -> usize {
        self.records.len()
    }
}
