//! Fixed range of buckets, one positional list per integer key.
//!
//! The range `[bottom, top)` is set at construction and never grows. Bucket
//! lookup is a bounds check and an array index, so structures built on top
//! (the degree-indexed graph, the priority deque) get O(1) access to the
//! bucket for any key. An aggregate length is maintained across all
//! buckets; every mutation funnels through [`add`](BucketRange::add),
//! [`remove`](BucketRange::remove), and [`move_entry`](BucketRange::move_entry)
//! so the count never drifts from the per-bucket sums.

use crate::bucket::list::{Pos, PositionalList};
use crate::error::{BucketError, Result};

/// Handle to one entry of a [`BucketRange`], tagged with the bucket that
/// currently holds it.
///
/// The tag is what makes the handle self-locating: given only an `Entry`,
/// the range can find and unlink the underlying list node in O(1). A handle
/// is invalidated by removing its entry, including the removal half of
/// `move_entry`, which returns the replacement handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    bucket: usize,
    pos: Pos,
}

impl Entry {
    /// The bucket this entry was in when the handle was issued.
    pub fn bucket(&self) -> usize {
        self.bucket
    }
}

/// Array of buckets over the key range `[bottom, top)`.
#[derive(Debug, Clone)]
pub struct BucketRange<T> {
    lists: Vec<PositionalList<T>>,
    bottom: usize,
    top: usize,
    len: usize,
}

impl<T> BucketRange<T> {
    /// Creates an empty range of buckets for keys in `[bottom, top)`.
    ///
    /// `bottom == top` is allowed and yields a range that rejects every
    /// key, which is occasionally useful as a placeholder.
    ///
    /// # Panics
    ///
    /// Panics if `top < bottom`.
    pub fn new(bottom: usize, top: usize) -> Self {
        assert!(bottom <= top, "bucket range requires bottom <= top");
        let mut lists = Vec::with_capacity(top - bottom);
        lists.resize_with(top - bottom, PositionalList::new);
        BucketRange {
            lists,
            bottom,
            top,
            len: 0,
        }
    }

    /// Lowest key the range accepts.
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    /// One past the highest key the range accepts.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Number of buckets, `top - bottom`.
    pub fn buckets(&self) -> usize {
        self.top - self.bottom
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the bucket for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `key` is outside
    /// `[bottom, top)`.
    pub fn bucket(&self, key: usize) -> Result<&PositionalList<T>> {
        let offset = self.offset(key)?;
        Ok(&self.lists[offset])
    }

    /// Appends `value` to the bucket for `key` and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `key` is outside
    /// `[bottom, top)`.
    pub fn add(&mut self, key: usize, value: T) -> Result<Entry> {
        let offset = self.offset(key)?;
        let pos = self.lists[offset].add_last(value);
        self.len += 1;
        Ok(Entry { bucket: key, pos })
    }

    /// Removes the entry behind `handle` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if the entry was already
    /// removed, and [`BucketError::OutOfRange`] if the handle belongs to a
    /// range with different bounds.
    pub fn remove(&mut self, handle: Entry) -> Result<T> {
        let offset = self.offset(handle.bucket)?;
        let value = self.lists[offset].remove(handle.pos)?;
        self.len -= 1;
        Ok(value)
    }

    /// Moves the entry behind `handle` to the bucket for `to`, returning
    /// the handle for its new position. The entry is appended, so within
    /// the target bucket it ranks behind everything already there.
    ///
    /// Both checks run before either bucket is touched; on error the range
    /// is unchanged and `handle` stays valid.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `to` is outside
    /// `[bottom, top)`, and [`BucketError::InvalidHandle`] if the entry was
    /// already removed.
    pub fn move_entry(&mut self, handle: Entry, to: usize) -> Result<Entry> {
        let from = self.offset(handle.bucket)?;
        let target = self.offset(to)?;
        let value = self.lists[from].remove(handle.pos)?;
        let pos = self.lists[target].add_last(value);
        Ok(Entry { bucket: to, pos })
    }

    /// Handle of the first entry in the bucket for `key`, or `None` if
    /// that bucket is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `key` is outside
    /// `[bottom, top)`.
    pub fn first_entry(&self, key: usize) -> Result<Option<Entry>> {
        let offset = self.offset(key)?;
        Ok(self.lists[offset]
            .first()
            .map(|pos| Entry { bucket: key, pos }))
    }

    /// Handle of the last entry in the bucket for `key`, or `None` if
    /// that bucket is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `key` is outside
    /// `[bottom, top)`.
    pub fn last_entry(&self, key: usize) -> Result<Option<Entry>> {
        let offset = self.offset(key)?;
        Ok(self.lists[offset]
            .last()
            .map(|pos| Entry { bucket: key, pos }))
    }

    /// Borrows the value behind `handle`.
    pub fn get(&self, handle: Entry) -> Result<&T> {
        let offset = self.offset(handle.bucket)?;
        self.lists[offset].get(handle.pos)
    }

    /// Mutably borrows the value behind `handle`.
    pub fn get_mut(&mut self, handle: Entry) -> Result<&mut T> {
        let offset = self.offset(handle.bucket)?;
        self.lists[offset].get_mut(handle.pos)
    }

    fn offset(&self, key: usize) -> Result<usize> {
        if key < self.bottom || key >= self.top {
            return Err(BucketError::OutOfRange {
                index: key,
                bottom: self.bottom,
                top: self.top,
            });
        }
        Ok(key - self.bottom)
    }
}
