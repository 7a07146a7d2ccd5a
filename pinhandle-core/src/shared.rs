//! Registry shared between execution contexts
//!
//! The plain [`PinRegistry`] has no locking. `SharedRegistry` puts it
//! behind an `embassy-sync` blocking mutex so one registry can be reached
//! from interrupt handlers and the main loop, or from several threads on a
//! host.
//!
//! ```text
//! static PINS: SharedRegistry<CriticalSectionRawMutex, StaticPool<16>> =
//!     SharedRegistry::new(PinRegistry::<StaticPool<16>>::new());
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::allocator::{DefaultAllocator, PinAllocator};
use crate::error::AllocError;
use crate::handle::PinHandle;
use crate::registry::PinRegistry;

/// Pin registry guarded by a blocking mutex
///
/// Every operation holds the lock for its whole duration. Calling back into
/// the same `SharedRegistry` from inside [`lock`](Self::lock) panics.
pub struct SharedRegistry<M: RawMutex, A = DefaultAllocator> {
    inner: Mutex<M, RefCell<PinRegistry<A>>>,
}

impl<M: RawMutex, A: PinAllocator> SharedRegistry<M, A> {
    /// Wrap a registry
    pub const fn new(registry: PinRegistry<A>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(registry)),
        }
    }

    /// Run `f` with exclusive access to the registry
    pub fn lock<R>(&self, f: impl FnOnce(&mut PinRegistry<A>) -> R) -> R {
        self.inner.lock(|cell| {
            let mut registry = cell.borrow_mut();
            f(&mut *registry)
        })
    }

    /// Create a handle for `port`/`pin`
    ///
    /// The pool scan runs under the lock.
    pub fn create(&self, port: u8, pin: u8) -> Result<PinHandle, AllocError> {
        self.lock(|registry| registry.create(port, pin))
    }

    /// Set the direction (`true` = output)
    pub fn set_direction(&self, handle: &PinHandle, output: bool) {
        self.lock(|registry| registry.set_direction(handle, output));
    }

    /// Get the direction (`true` = output)
    pub fn direction(&self, handle: &PinHandle) -> bool {
        self.lock(|registry| registry.direction(handle))
    }

    /// Set the logic level, ignored while the pin is an input
    pub fn set_state(&self, handle: &PinHandle, high: bool) {
        self.lock(|registry| registry.set_state(handle, high));
    }

    /// Get the last stored logic level
    pub fn state(&self, handle: &PinHandle) -> bool {
        self.lock(|registry| registry.state(handle))
    }

    /// Number of handles created so far
    pub fn allocated(&self) -> usize {
        self.lock(|registry| registry.allocated())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::allocator::StaticPool;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use pinhandle_hal::DigitalPin;
    use std::thread;
    use std::vec::Vec;

    static PINS: SharedRegistry<CriticalSectionRawMutex, StaticPool<8>> =
        SharedRegistry::new(PinRegistry::<StaticPool<8>>::new());

    #[test]
    fn test_shared_operations() {
        let pins: SharedRegistry<NoopRawMutex, StaticPool<2>> =
            SharedRegistry::new(PinRegistry::<StaticPool<2>>::new());
        let h = pins.create(2, 3).unwrap();

        pins.set_state(&h, true);
        assert!(!pins.state(&h));

        pins.set_direction(&h, true);
        assert!(pins.direction(&h));
        pins.set_state(&h, true);
        assert!(pins.state(&h));
        assert_eq!(pins.allocated(), 1);
    }

    #[test]
    fn test_lock_gives_pin_view() {
        let pins: SharedRegistry<NoopRawMutex, StaticPool<1>> =
            SharedRegistry::new(PinRegistry::<StaticPool<1>>::new());
        let h = pins.create(0, 0).unwrap();

        pins.lock(|registry| {
            let mut pin = registry.pin_mut(&h);
            pin.make_output();
            pin.set_high();
        });
        assert!(pins.state(&h));

        assert_eq!(pins.create(0, 1), Err(AllocError::AllocationExhausted));
    }

    #[test]
    fn test_static_pool_across_threads() {
        let workers: Vec<_> = (0..4u8)
            .map(|port| {
                thread::spawn(move || {
                    let mut handles = Vec::new();
                    while let Ok(h) = PINS.create(port, handles.len() as u8) {
                        PINS.set_direction(&h, true);
                        PINS.set_state(&h, true);
                        handles.push(h);
                    }
                    handles
                })
            })
            .collect();

        let mut total = 0;
        for worker in workers {
            let handles = worker.join().unwrap();
            for h in &handles {
                assert!(PINS.direction(h));
                assert!(PINS.state(h));
            }
            total += handles.len();
        }

        // Every slot handed out exactly once
        assert_eq!(total, 8);
        assert_eq!(PINS.allocated(), 8);
    }
}
