//! The type-tagged vector heap.
//!
//! [`TypedHeap`] owns every heap-resident share vector. Callers hold opaque
//! handles; every access re-validates the handle's slot, generation, and
//! type id, so a handle from the host is safe to try even when it is stale,
//! forged, or claimed under the wrong tag.

use std::any::Any;

use indexmap::IndexMap;
use shemu_core::{HeapTypeId, RawHandle, ValueTag};
use tracing::{debug, trace};

use crate::config::{ConfigError, HeapConfig};
use crate::error::HeapError;
use crate::handle::{Handle, HandleOf};
use crate::slots::SlotTable;
use crate::vector::OwnedVector;

/// One registered vector.
struct Entry {
    type_id: HeapTypeId,
    len: usize,
    byte_len: usize,
    /// `None` while the vector is checked out by [`TypedHeap::with_output`].
    vector: Option<Box<dyn Any + Send>>,
}

/// Per-tag occupancy, as reported by [`TypedHeap::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeStats {
    /// Live vectors of the tag.
    pub vectors: usize,
    /// Total shares across those vectors.
    pub elements: usize,
    /// Total share bytes across those vectors.
    pub bytes: usize,
}

/// Registry owning all heap-resident share vectors.
///
/// Single-threaded: mutation needs `&mut self`, and callers serialize access.
/// Dropping the heap frees every vector still registered.
pub struct TypedHeap {
    config: HeapConfig,
    slots: SlotTable<Entry>,
}

impl TypedHeap {
    /// Create a heap with the default configuration.
    pub fn new() -> Self {
        Self::build(HeapConfig::default())
    }

    /// Create a heap with a validated configuration.
    pub fn with_config(config: HeapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: HeapConfig) -> Self {
        let slots = SlotTable::with_capacity(config.initial_slots);
        Self { config, slots }
    }

    /// The heap's configuration.
    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// Number of registered vectors.
    pub fn len(&self) -> usize {
        self.slots.live()
    }

    /// Whether no vectors are registered.
    pub fn is_empty(&self) -> bool {
        self.slots.live() == 0
    }

    /// Register `vector` under tag `T` and mint a handle for it.
    ///
    /// On failure the heap is unchanged and `vector` is dropped.
    pub fn insert<T: ValueTag>(&mut self, vector: OwnedVector<T>) -> Result<Handle<T>, HeapError> {
        self.check_len(vector.len())?;
        let live = self.slots.live();
        let max = self.config.max_live_vectors;
        if live >= max {
            return Err(HeapError::CapacityExceeded { live, max });
        }

        let len = vector.len();
        let entry = Entry {
            type_id: T::TYPE_ID,
            len,
            byte_len: vector.byte_len(),
            vector: Some(Box::new(vector)),
        };
        let raw = self
            .slots
            .insert(entry)
            .ok_or(HeapError::CapacityExceeded { live, max })?;
        trace!(handle = %raw, tag = T::NAME, len, "vector inserted");
        Ok(Handle::from_raw(raw))
    }

    /// Allocate `len` default-valued shares of tag `T` and register them.
    pub fn alloc<T: ValueTag>(&mut self, len: usize) -> Result<Handle<T>, HeapError> {
        self.check_len(len)?;
        self.insert(OwnedVector::<T>::new(len))
    }

    fn check_len(&self, len: usize) -> Result<(), HeapError> {
        let max = self.config.max_vector_len;
        if len > max {
            return Err(HeapError::VectorTooLong { len, max });
        }
        Ok(())
    }

    /// Resolve a handle claimed to hold tag `T`, without touching the vector.
    fn entry<T: ValueTag>(&self, handle: RawHandle) -> Result<&Entry, HeapError> {
        let entry = self
            .slots
            .get(handle)
            .ok_or(HeapError::HandleNotFound { handle })?;
        if entry.type_id != T::TYPE_ID {
            return Err(HeapError::TypeMismatch {
                handle,
                expected: T::TYPE_ID,
                found: entry.type_id,
            });
        }
        Ok(entry)
    }

    /// Whether `handle` is registered with tag `T`.
    ///
    /// A handle registered under another tag is reported absent.
    pub fn contains<T: ValueTag>(&self, handle: impl HandleOf<T>) -> bool {
        self.entry::<T>(handle.to_raw()).is_ok()
    }

    /// The tag id `handle` is registered with, if it is registered at all.
    pub fn type_of(&self, handle: impl Into<RawHandle>) -> Option<HeapTypeId> {
        self.slots.get(handle.into()).map(|e| e.type_id)
    }

    /// Borrow the vector behind `handle`.
    pub fn get<T: ValueTag>(&self, handle: impl HandleOf<T>) -> Result<&OwnedVector<T>, HeapError> {
        let handle = handle.to_raw();
        let entry = self.entry::<T>(handle)?;
        entry
            .vector
            .as_deref()
            .ok_or(HeapError::HandleBusy { handle })?
            .downcast_ref::<OwnedVector<T>>()
            .ok_or(HeapError::TypeMismatch {
                handle,
                expected: T::TYPE_ID,
                found: entry.type_id,
            })
    }

    /// Mutably borrow the vector behind `handle`.
    pub fn get_mut<T: ValueTag>(
        &mut self,
        handle: impl HandleOf<T>,
    ) -> Result<&mut OwnedVector<T>, HeapError> {
        let handle = handle.to_raw();
        let entry = self
            .slots
            .get_mut(handle)
            .ok_or(HeapError::HandleNotFound { handle })?;
        let found = entry.type_id;
        let mismatch = HeapError::TypeMismatch {
            handle,
            expected: T::TYPE_ID,
            found,
        };
        if found != T::TYPE_ID {
            return Err(mismatch);
        }
        entry
            .vector
            .as_deref_mut()
            .ok_or(HeapError::HandleBusy { handle })?
            .downcast_mut::<OwnedVector<T>>()
            .ok_or(mismatch)
    }

    /// Free the vector behind `handle` and retire the handle.
    ///
    /// Fails without effect if the handle is unknown, stale, or registered
    /// under a tag other than `T`.
    pub fn erase<T: ValueTag>(&mut self, handle: impl HandleOf<T>) -> Result<(), HeapError> {
        let handle = handle.to_raw();
        self.entry::<T>(handle)?;
        let entry = self
            .slots
            .remove(handle)
            .ok_or(HeapError::HandleNotFound { handle })?;
        trace!(handle = %handle, tag = T::NAME, len = entry.len, "vector erased");
        Ok(())
    }

    /// Run `f` with the vector behind `handle` checked out for writing.
    ///
    /// The rest of the heap stays readable through the `&TypedHeap` passed to
    /// `f`, so an operation can read heap inputs and write a heap output in
    /// one call. While checked out, the output handle resolves to
    /// [`HeapError::HandleBusy`]; the vector is restored when `f` returns or
    /// unwinds.
    pub fn with_output<O, R, E, F>(&mut self, handle: impl HandleOf<O>, f: F) -> Result<R, E>
    where
        O: ValueTag,
        E: From<HeapError>,
        F: FnOnce(&Self, &mut OwnedVector<O>) -> Result<R, E>,
    {
        let handle = handle.to_raw();
        let vector = {
            let entry = self
                .slots
                .get_mut(handle)
                .ok_or(HeapError::HandleNotFound { handle })?;
            let mismatch = HeapError::TypeMismatch {
                handle,
                expected: O::TYPE_ID,
                found: entry.type_id,
            };
            if entry.type_id != O::TYPE_ID {
                return Err(mismatch.into());
            }
            let boxed = entry
                .vector
                .take()
                .ok_or(HeapError::HandleBusy { handle })?;
            match boxed.downcast::<OwnedVector<O>>() {
                Ok(vector) => vector,
                Err(boxed) => {
                    entry.vector = Some(boxed);
                    return Err(mismatch.into());
                }
            }
        };

        let mut checkout = Checkout {
            heap: self,
            handle,
            vector: Some(vector),
        };
        let Checkout { heap, vector, .. } = &mut checkout;
        let result = match vector.as_deref_mut() {
            Some(out) => f(&**heap, out),
            None => Err(HeapError::HandleBusy { handle }.into()),
        };
        result
    }

    /// Live vectors, shares, and bytes per tag, in first-registered order.
    pub fn stats(&self) -> IndexMap<HeapTypeId, TypeStats> {
        let mut stats: IndexMap<HeapTypeId, TypeStats> = IndexMap::new();
        for entry in self.slots.values() {
            let s = stats.entry(entry.type_id).or_default();
            s.vectors += 1;
            s.elements += entry.len;
            s.bytes += entry.byte_len;
        }
        stats
    }
}

impl Default for TypedHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TypedHeap {
    fn drop(&mut self) {
        let live = self.slots.live();
        if live > 0 {
            debug!(live, "freeing vectors left on heap");
        }
    }
}

/// A vector checked out of its slot by [`TypedHeap::with_output`].
///
/// Dropping puts the vector back into its slot, on unwind too.
struct Checkout<'h, O: ValueTag> {
    heap: &'h mut TypedHeap,
    handle: RawHandle,
    vector: Option<Box<OwnedVector<O>>>,
}

impl<O: ValueTag> Drop for Checkout<'_, O> {
    fn drop(&mut self) {
        let Some(vector) = self.vector.take() else {
            return;
        };
        let vector: Box<dyn Any + Send> = vector;
        if let Some(entry) = self.heap.slots.get_mut(self.handle) {
            entry.vector = Some(vector);
        }
    }
}
