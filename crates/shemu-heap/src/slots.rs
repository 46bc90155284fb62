//! Generational slot storage behind [`TypedHeap`](crate::TypedHeap).
//!
//! Every slot carries an epoch. A handle names a slot and the epoch it was
//! minted in; once the value is removed the epoch moves on, so an old handle
//! misses rather than reaching the slot's next occupant.

use shemu_core::RawHandle;

struct Slot<T> {
    epoch: u32,
    value: Option<T>,
}

impl<T> Slot<T> {
    fn matches(&self, handle: RawHandle) -> bool {
        self.epoch == handle.generation()
    }
}

/// Owned values addressed by [`RawHandle`]; vacated slots are recycled.
pub(crate) struct SlotTable<T> {
    slots: Vec<Slot<T>>,
    vacant: Vec<u32>,
    live: usize,
}

impl<T> SlotTable<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Store `value`, returning `None` once the `u32` slot index space is
    /// used up.
    pub(crate) fn insert(&mut self, value: T) -> Option<RawHandle> {
        let index = match self.vacant.pop() {
            Some(index) => index,
            None => {
                let index = u32::try_from(self.slots.len()).ok()?;
                self.slots.push(Slot {
                    epoch: 0,
                    value: None,
                });
                index
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.value = Some(value);
        self.live += 1;
        Some(RawHandle::new(index, slot.epoch))
    }

    fn slot(&self, handle: RawHandle) -> Option<&Slot<T>> {
        self.slots
            .get(handle.slot() as usize)
            .filter(|s| s.matches(handle))
    }

    fn slot_mut(&mut self, handle: RawHandle) -> Option<&mut Slot<T>> {
        self.slots
            .get_mut(handle.slot() as usize)
            .filter(|s| s.matches(handle))
    }

    pub(crate) fn get(&self, handle: RawHandle) -> Option<&T> {
        self.slot(handle)?.value.as_ref()
    }

    pub(crate) fn get_mut(&mut self, handle: RawHandle) -> Option<&mut T> {
        self.slot_mut(handle)?.value.as_mut()
    }

    /// Take the value out and advance the slot's epoch.
    ///
    /// An epoch that wraps to 0 retires the slot for good.
    pub(crate) fn remove(&mut self, handle: RawHandle) -> Option<T> {
        let slot = self.slot_mut(handle)?;
        let value = slot.value.take()?;
        slot.epoch = slot.epoch.wrapping_add(1);
        let reusable = slot.epoch != 0;
        if reusable {
            self.vacant.push(handle.slot());
        }
        self.live -= 1;
        Some(value)
    }

    /// Occupied values in slot order.
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|s| s.value.as_ref())
    }
}
