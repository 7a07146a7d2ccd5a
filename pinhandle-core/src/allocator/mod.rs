//! Pin record allocation
//!
//! Two interchangeable strategies back the registry:
//!
//! - [`HeapAllocator`] grows on the global heap, one record per request
//! - [`StaticPool`] reserves a fixed array of slots up front
//!
//! Neither strategy releases slots. A record, once allocated, stays in
//! place for the life of the allocator.

#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
mod heap;
mod pool;

#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
pub use heap::HeapAllocator;
pub use pool::StaticPool;

use crate::error::AllocError;
use crate::handle::PinRecord;

mod sealed {
    pub trait Sealed {}
}

/// Storage for pin records
///
/// Indices returned by [`allocate`](PinAllocator::allocate) stay valid for
/// the life of the allocator. Looking up an index that was never returned
/// is a caller bug; implementations panic on out-of-range indices.
///
/// Sealed: only the strategies in this module implement it.
///
/// ```compile_fail
/// use pinhandle_core::{AllocError, PinAllocator, PinRecord};
///
/// struct Mine;
///
/// impl PinAllocator for Mine {
///     fn allocate(&mut self, _: PinRecord) -> Result<usize, AllocError> {
///         Err(AllocError::AllocationExhausted)
///     }
///     fn record(&self, _: usize) -> &PinRecord {
///         unimplemented!()
///     }
///     fn record_mut(&mut self, _: usize) -> &mut PinRecord {
///         unimplemented!()
///     }
///     fn allocated(&self) -> usize {
///         0
///     }
/// }
/// ```
pub trait PinAllocator: sealed::Sealed {
    /// Store a record and return its slot index
    fn allocate(&mut self, record: PinRecord) -> Result<usize, AllocError>;

    /// Get the record in a slot
    fn record(&self, index: usize) -> &PinRecord;

    /// Get the record in a slot for modification
    fn record_mut(&mut self, index: usize) -> &mut PinRecord;

    /// Number of occupied slots
    fn allocated(&self) -> usize;
}

/// Allocator selected by the `static-pool` feature
#[cfg(feature = "static-pool")]
pub type DefaultAllocator = StaticPool<{ crate::config::MAX_PIN_INSTANCES }>;

/// Allocator selected by the `alloc` feature
#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
pub type DefaultAllocator = HeapAllocator;
