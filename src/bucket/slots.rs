//! Slab-style slot arena used as backing storage by the positional list.
//!
//! Entries live in a single `Vec` and are addressed by index, so handles
//! are plain `usize` values instead of pointers. Removed slots go onto an
//! intrusive free list and are reused in LIFO order, which keeps the arena
//! dense under the insert/remove churn the bucket structures generate.
//! Reuse revalidates any stale id still pointing at the slot, the same
//! aliasing that holders of `slab` keys accept.

const NIL: usize = usize::MAX;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: usize },
}

/// Vec-backed arena with O(1) insert, remove, and lookup.
#[derive(Debug, Clone)]
pub struct Slots<T> {
    slots: Vec<Slot<T>>,
    free_head: usize,
    len: usize,
}

impl<T> Slots<T> {
    pub fn new() -> Self {
        Slots {
            slots: Vec::new(),
            free_head: NIL,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Slots {
            slots: Vec::with_capacity(capacity),
            free_head: NIL,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The id the next call to [`insert`](Self::insert) will return.
    ///
    /// Lets a caller store the id inside the value being inserted.
    pub fn vacant_id(&self) -> usize {
        if self.free_head == NIL {
            self.slots.len()
        } else {
            self.free_head
        }
    }

    /// Stores `value` and returns its id, reusing a vacant slot if one
    /// exists.
    pub fn insert(&mut self, value: T) -> usize {
        self.len += 1;
        if self.free_head == NIL {
            self.slots.push(Slot::Occupied(value));
            self.slots.len() - 1
        } else {
            let id = self.free_head;
            if let Slot::Vacant { next_free } = self.slots[id] {
                self.free_head = next_free;
            }
            self.slots[id] = Slot::Occupied(value);
            id
        }
    }

    /// Removes the value at `id`, returning `None` if the slot is vacant
    /// or the id was never issued.
    pub fn remove(&mut self, id: usize) -> Option<T> {
        if id >= self.slots.len() || matches!(self.slots[id], Slot::Vacant { .. }) {
            return None;
        }
        let slot = std::mem::replace(
            &mut self.slots[id],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = id;
        self.len -= 1;
        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        match self.slots.get(id) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut T> {
        match self.slots.get_mut(id) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Whether `id` refers to an occupied slot.
    pub fn contains(&self, id: usize) -> bool {
        matches!(self.slots.get(id), Some(Slot::Occupied(_)))
    }
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self::new()
    }
}
