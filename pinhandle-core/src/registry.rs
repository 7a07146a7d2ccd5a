//! Pin handle registry
//!
//! Creates pin handles and answers direction/state queries for them.
//!
//! # Contract
//!
//! - `create` is the only fallible operation
//! - All other operations are total for a handle this registry produced
//! - A handle from another registry is a caller bug: it panics if its slot
//!   index is out of range and otherwise addresses whatever pin owns that
//!   slot here
//!
//! There is no internal locking. Wrap the registry in a
//! [`SharedRegistry`](crate::SharedRegistry) when pins are created or
//! driven from more than one execution context.

#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
use crate::allocator::HeapAllocator;
use crate::allocator::{DefaultAllocator, PinAllocator, StaticPool};
use crate::digital::Pin;
use crate::error::AllocError;
use crate::handle::{PinHandle, PinRecord};

/// Registry backed by the build-time selected allocator
pub type Registry = PinRegistry<DefaultAllocator>;

/// Creates and manages pin handles
#[derive(Debug, Default)]
pub struct PinRegistry<A = DefaultAllocator> {
    allocator: A,
}

#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
impl PinRegistry<HeapAllocator> {
    /// Create an empty heap-backed registry
    pub const fn new() -> Self {
        Self::with_allocator(HeapAllocator::new())
    }
}

impl<const N: usize> PinRegistry<StaticPool<N>> {
    /// Create a registry over a pool of `N` vacant slots
    pub const fn new() -> Self {
        Self::with_allocator(StaticPool::new())
    }
}

impl<A: PinAllocator> PinRegistry<A> {
    /// Create a registry over an existing allocator
    pub const fn with_allocator(allocator: A) -> Self {
        Self { allocator }
    }

    /// Create a handle for `port`/`pin`
    ///
    /// The pin starts as an input at logic low. Port and pin numbers are not
    /// checked against any hardware topology.
    ///
    /// # Errors
    /// [`AllocError::AllocationExhausted`] if the allocator has no room.
    pub fn create(&mut self, port: u8, pin: u8) -> Result<PinHandle, AllocError> {
        match self.allocator.allocate(PinRecord::new(port, pin)) {
            Ok(index) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("pin P{=u8}.{=u8} -> slot {=usize}", port, pin, index);
                Ok(PinHandle::new(index))
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "no slot for pin P{=u8}.{=u8} ({=usize} allocated)",
                    port,
                    pin,
                    self.allocator.allocated()
                );
                Err(e)
            }
        }
    }

    /// Set the direction (`true` = output)
    ///
    /// Leaves the stored level untouched.
    pub fn set_direction(&mut self, handle: &PinHandle, output: bool) {
        self.allocator.record_mut(handle.index()).set_direction(output);
    }

    /// Get the direction (`true` = output)
    pub fn direction(&self, handle: &PinHandle) -> bool {
        self.record(handle).is_output()
    }

    /// Set the logic level
    ///
    /// Only takes effect while the pin is an output. Writing an input pin
    /// is silently ignored.
    pub fn set_state(&mut self, handle: &PinHandle, high: bool) {
        self.allocator.record_mut(handle.index()).set_state(high);
    }

    /// Get the last stored logic level, whatever the direction
    ///
    /// This is the software value, never a sensed voltage.
    pub fn state(&self, handle: &PinHandle) -> bool {
        self.record(handle).state()
    }

    /// Port group the handle was created with
    pub fn port(&self, handle: &PinHandle) -> u8 {
        self.record(handle).port()
    }

    /// Bit within the port the handle was created with
    pub fn pin(&self, handle: &PinHandle) -> u8 {
        self.record(handle).pin()
    }

    /// Borrow a handle as a [`Pin`] for trait-based drivers
    pub fn pin_mut(&mut self, handle: &PinHandle) -> Pin<'_> {
        Pin::new(self.allocator.record_mut(handle.index()))
    }

    /// Number of handles created so far
    pub fn allocated(&self) -> usize {
        self.allocator.allocated()
    }

    /// Access the underlying allocator
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    fn record(&self, handle: &PinHandle) -> &PinRecord {
        self.allocator.record(handle.index())
    }
}
