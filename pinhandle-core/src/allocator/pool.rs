//! Fixed-size static pool
//!
//! Tracks which slots are in use with a per-slot flag, the same way the
//! board HALs track claimed GPIO lines.

use super::PinAllocator;
use crate::error::AllocError;
use crate::handle::PinRecord;

/// One pool entry
#[derive(Debug, Clone, Copy)]
struct Slot {
    record: PinRecord,
    /// Slot has been handed out
    in_use: bool,
}

impl Slot {
    const VACANT: Self = Self {
        record: PinRecord::new(0, 0),
        in_use: false,
    };
}

/// Pool of `N` pin slots reserved up front
///
/// Allocation is a first-fit scan over the occupancy flags. There is no
/// release: once all `N` slots are taken every further allocation fails.
///
/// `new` is `const`, so a pool (or a registry around one) can be placed in
/// a `static`.
#[derive(Debug)]
pub struct StaticPool<const N: usize> {
    slots: [Slot; N],
}

impl<const N: usize> Default for StaticPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StaticPool<N> {
    /// Create a pool with every slot vacant
    pub const fn new() -> Self {
        Self {
            slots: [Slot::VACANT; N],
        }
    }

    /// Total number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check if every slot is in use
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.in_use)
    }

    fn occupied(&self, index: usize) -> &Slot {
        let slot = &self.slots[index];
        debug_assert!(slot.in_use, "pin slot {} was never allocated", index);
        slot
    }
}

impl<const N: usize> super::sealed::Sealed for StaticPool<N> {}

impl<const N: usize> PinAllocator for StaticPool<N> {
    fn allocate(&mut self, record: PinRecord) -> Result<usize, AllocError> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| !slot.in_use)
            .ok_or(AllocError::AllocationExhausted)?;

        slot.in_use = true;
        slot.record = record;
        Ok(index)
    }

    fn record(&self, index: usize) -> &PinRecord {
        &self.occupied(index).record
    }

    fn record_mut(&mut self, index: usize) -> &mut PinRecord {
        let slot = &mut self.slots[index];
        debug_assert!(slot.in_use, "pin slot {} was never allocated", index);
        &mut slot.record
    }

    fn allocated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.in_use).count()
    }
}
