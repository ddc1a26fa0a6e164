//! Double-ended priority queue over a fixed range of integer keys.
//!
//! Values sit in the bucket for their key; two cursors track the highest
//! and lowest buckets that might be occupied. Insertion widens the cursors
//! eagerly (a comparison each), while peeks and pops narrow them lazily,
//! stepping past empty buckets until they hit an occupied one. A cursor
//! only ever retreats when an insert or adapt lands beyond it, so across a
//! monotone workload such as degrees that only decrease, the total scan
//! work is bounded by the key range and each pop is amortized O(1).
//!
//! There is no in-place decrease-key. Changing a value's priority goes
//! through [`adapt`](BucketDeque::adapt), which relocates the entry to the
//! new key's bucket and hands back a fresh handle; the old handle dies
//! with the move.
//!
//! Ties share a bucket and leave it in arrival order from both ends, so
//! equal-priority values come out FIFO whether popped from the top or the
//! bottom.

use crate::bucket::range::{BucketRange, Entry};
use crate::error::{BucketError, Result};

/// Adaptable double-ended priority queue keyed by `usize` priorities in a
/// fixed range.
#[derive(Debug, Clone)]
pub struct BucketDeque<T> {
    buckets: BucketRange<T>,
    /// Highest bucket that may hold an entry. Starts below every legal
    /// key; the first insert snaps it to that key.
    top: usize,
    /// Lowest bucket that may hold an entry. Starts above every legal key.
    bottom: usize,
}

impl<T> BucketDeque<T> {
    /// Creates an empty deque accepting keys in `[bottom, top)`.
    ///
    /// The cursors start crossed (top at `bottom`, bottom at `top`) so
    /// that the first insertion positions both exactly.
    ///
    /// # Panics
    ///
    /// Panics if `top < bottom`.
    pub fn new(bottom: usize, top: usize) -> Self {
        BucketDeque {
            buckets: BucketRange::new(bottom, top),
            top: bottom,
            bottom: top,
        }
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The legal key range as `(bottom, top)`, keys being `bottom..top`.
    pub fn bounds(&self) -> (usize, usize) {
        (self.buckets.bottom(), self.buckets.top())
    }

    /// Queues `value` at priority `key` and returns a handle to it.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `key` is outside the range
    /// fixed at construction.
    pub fn insert(&mut self, key: usize, value: T) -> Result<Entry> {
        let entry = self.buckets.add(key, value)?;
        if key > self.top {
            self.top = key;
        }
        if key < self.bottom {
            self.bottom = key;
        }
        Ok(entry)
    }

    /// Borrows the oldest value with the maximum key.
    ///
    /// Takes `&mut self` because locating the maximum may advance the top
    /// cursor past drained buckets.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::Empty`] if the deque is empty.
    pub fn peek_top(&mut self) -> Result<&T> {
        self.settle_top()?;
        self.buckets
            .bucket(self.top)?
            .front()
            .ok_or(BucketError::Empty)
    }

    /// Borrows the oldest value with the minimum key.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::Empty`] if the deque is empty.
    pub fn peek_bottom(&mut self) -> Result<&T> {
        self.settle_bottom()?;
        self.buckets
            .bucket(self.bottom)?
            .front()
            .ok_or(BucketError::Empty)
    }

    /// Removes and returns the oldest value with the maximum key.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::Empty`] if the deque is empty.
    pub fn pop_top(&mut self) -> Result<T> {
        self.settle_top()?;
        match self.buckets.first_entry(self.top)? {
            Some(entry) => self.buckets.remove(entry),
            None => Err(BucketError::Empty),
        }
    }

    /// Removes and returns the oldest value with the minimum key.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::Empty`] if the deque is empty.
    pub fn pop_bottom(&mut self) -> Result<T> {
        self.settle_bottom()?;
        match self.buckets.first_entry(self.bottom)? {
            Some(entry) => self.buckets.remove(entry),
            None => Err(BucketError::Empty),
        }
    }

    /// Moves the entry behind `handle` to priority `new_key` and returns
    /// its replacement handle. The entry joins the new bucket as its
    /// youngest member.
    ///
    /// The new key is validated before the entry is touched; on error the
    /// deque is unchanged and `handle` stays valid.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::OutOfRange`] if `new_key` is outside the
    /// range, and [`BucketError::InvalidHandle`] if the entry was already
    /// removed.
    pub fn adapt(&mut self, handle: Entry, new_key: usize) -> Result<Entry> {
        let moved = self.buckets.move_entry(handle, new_key)?;
        if new_key > self.top {
            self.top = new_key;
        }
        if new_key < self.bottom {
            self.bottom = new_key;
        }
        Ok(moved)
    }

    /// Removes the entry behind `handle` from wherever it is queued and
    /// returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if the entry was already
    /// removed.
    pub fn remove(&mut self, handle: Entry) -> Result<T> {
        self.buckets.remove(handle)
    }

    /// Borrows the value behind `handle`.
    pub fn get(&self, handle: Entry) -> Result<&T> {
        self.buckets.get(handle)
    }

    /// Walks the top cursor down to the highest occupied bucket.
    fn settle_top(&mut self) -> Result<()> {
        if self.buckets.is_empty() {
            return Err(BucketError::Empty);
        }
        // Non-empty, so an occupied bucket at or below the cursor exists
        // and the walk stays inside the range.
        while self.buckets.bucket(self.top)?.is_empty() {
            self.top -= 1;
        }
        Ok(())
    }

    /// Walks the bottom cursor up to the lowest occupied bucket.
    fn settle_bottom(&mut self) -> Result<()> {
        if self.buckets.is_empty() {
            return Err(BucketError::Empty);
        }
        while self.buckets.bucket(self.bottom)?.is_empty() {
            self.bottom += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deque_refuses_peek_and_pop() {
        let mut deque: BucketDeque<i32> = BucketDeque::new(0, 10);
        assert!(deque.is_empty());
        assert!(matches!(deque.peek_top(), Err(BucketError::Empty)));
        assert!(matches!(deque.peek_bottom(), Err(BucketError::Empty)));
        assert!(matches!(deque.pop_top(), Err(BucketError::Empty)));
        assert!(matches!(deque.pop_bottom(), Err(BucketError::Empty)));
    }

    #[test]
    fn test_insert_outside_range_is_rejected() {
        let mut deque = BucketDeque::new(2, 5);
        assert!(matches!(
            deque.insert(5, 'x'),
            Err(BucketError::OutOfRange {
                index: 5,
                bottom: 2,
                top: 5
            })
        ));
        assert!(matches!(
            deque.insert(1, 'x'),
            Err(BucketError::OutOfRange { .. })
        ));
        assert!(deque.is_empty());
    }

    #[test]
    fn test_pop_top_takes_maximum_key() {
        let mut deque = BucketDeque::new(0, 10);
        deque.insert(3, "three").unwrap();
        deque.insert(7, "seven").unwrap();
        deque.insert(5, "five").unwrap();
        assert_eq!(deque.peek_top(), Ok(&"seven"));
        assert_eq!(deque.pop_top(), Ok("seven"));
        assert_eq!(deque.pop_top(), Ok("five"));
        assert_eq!(deque.pop_top(), Ok("three"));
        assert!(deque.is_empty());
    }

    #[test]
    fn test_pop_bottom_takes_minimum_key() {
        let mut deque = BucketDeque::new(0, 10);
        deque.insert(3, "three").unwrap();
        deque.insert(7, "seven").unwrap();
        deque.insert(5, "five").unwrap();
        assert_eq!(deque.peek_bottom(), Ok(&"three"));
        assert_eq!(deque.pop_bottom(), Ok("three"));
        assert_eq!(deque.pop_bottom(), Ok("five"));
        assert_eq!(deque.pop_bottom(), Ok("seven"));
    }

    #[test]
    fn test_both_ends_interleave() {
        let mut deque = BucketDeque::new(0, 6);
        for key in 0..6 {
            deque.insert(key, key).unwrap();
        }
        assert_eq!(deque.pop_top(), Ok(5));
        assert_eq!(deque.pop_bottom(), Ok(0));
        assert_eq!(deque.pop_top(), Ok(4));
        assert_eq!(deque.pop_bottom(), Ok(1));
        assert_eq!(deque.pop_top(), Ok(3));
        assert_eq!(deque.pop_bottom(), Ok(2));
        assert!(matches!(deque.pop_top(), Err(BucketError::Empty)));
    }

    #[test]
    fn test_ties_pop_fifo_from_top() {
        let mut deque = BucketDeque::new(0, 4);
        deque.insert(2, "first").unwrap();
        deque.insert(2, "second").unwrap();
        deque.insert(2, "third").unwrap();
        assert_eq!(deque.pop_top(), Ok("first"));
        assert_eq!(deque.pop_top(), Ok("second"));
        assert_eq!(deque.pop_top(), Ok("third"));
    }

    #[test]
    fn test_ties_pop_fifo_from_bottom() {
        let mut deque = BucketDeque::new(0, 4);
        deque.insert(2, "first").unwrap();
        deque.insert(2, "second").unwrap();
        assert_eq!(deque.pop_bottom(), Ok("first"));
        assert_eq!(deque.pop_bottom(), Ok("second"));
    }

    #[test]
    fn test_single_key_deque() {
        let mut deque = BucketDeque::new(3, 4);
        deque.insert(3, 'a').unwrap();
        deque.insert(3, 'b').unwrap();
        assert_eq!(deque.pop_top(), Ok('a'));
        assert_eq!(deque.pop_bottom(), Ok('b'));
    }

    #[test]
    fn test_empty_key_range_rejects_inserts() {
        let mut deque: BucketDeque<i32> = BucketDeque::new(0, 0);
        assert!(matches!(
            deque.insert(0, 1),
            Err(BucketError::OutOfRange { .. })
        ));
        assert!(matches!(deque.pop_top(), Err(BucketError::Empty)));
    }

    #[test]
    fn test_adapt_moves_between_keys() {
        let mut deque = BucketDeque::new(0, 10);
        let entry = deque.insert(8, "v").unwrap();
        deque.insert(5, "w").unwrap();
        let entry = deque.adapt(entry, 2).unwrap();
        assert_eq!(entry.bucket(), 2);
        assert_eq!(deque.peek_top(), Ok(&"w"));
        assert_eq!(deque.peek_bottom(), Ok(&"v"));
        assert_eq!(deque.len(), 2);
    }

    #[test]
    fn test_adapt_invalidates_old_handle() {
        let mut deque = BucketDeque::new(0, 10);
        let old = deque.insert(4, 1).unwrap();
        let new = deque.adapt(old, 6).unwrap();
        assert!(matches!(deque.remove(old), Err(BucketError::InvalidHandle)));
        assert_eq!(deque.remove(new), Ok(1));
    }

    #[test]
    fn test_adapt_round_trip_returns_to_original_bucket() {
        let mut deque = BucketDeque::new(0, 10);
        let entry = deque.insert(6, "wanderer").unwrap();
        let away = deque.adapt(entry, 1).unwrap();
        deque.insert(6, "settled").unwrap();
        let back = deque.adapt(away, 6).unwrap();
        assert_eq!(back.bucket(), 6);
        // Coming back is an append, so the tie that arrived while the
        // entry was away now ranks ahead of it.
        assert_eq!(deque.pop_top(), Ok("settled"));
        assert_eq!(deque.pop_top(), Ok("wanderer"));
    }

    #[test]
    fn test_adapt_to_same_key_requeues_behind_ties() {
        let mut deque = BucketDeque::new(0, 4);
        let a = deque.insert(1, 'a').unwrap();
        deque.insert(1, 'b').unwrap();
        deque.adapt(a, 1).unwrap();
        assert_eq!(deque.pop_bottom(), Ok('b'));
        assert_eq!(deque.pop_bottom(), Ok('a'));
    }

    #[test]
    fn test_adapt_out_of_range_leaves_entry_queued() {
        let mut deque = BucketDeque::new(0, 5);
        let entry = deque.insert(2, 9).unwrap();
        assert!(matches!(
            deque.adapt(entry, 5),
            Err(BucketError::OutOfRange { .. })
        ));
        assert_eq!(deque.get(entry), Ok(&9));
        assert_eq!(deque.pop_top(), Ok(9));
    }

    #[test]
    fn test_adapt_above_top_cursor_is_found() {
        let mut deque = BucketDeque::new(0, 10);
        deque.insert(3, "low").unwrap();
        let entry = deque.insert(2, "riser").unwrap();
        assert_eq!(deque.peek_top(), Ok(&"low"));
        deque.adapt(entry, 9).unwrap();
        assert_eq!(deque.pop_top(), Ok("riser"));
    }

    #[test]
    fn test_remove_unqueues_anywhere() {
        let mut deque = BucketDeque::new(0, 10);
        deque.insert(1, "keep").unwrap();
        let entry = deque.insert(5, "drop").unwrap();
        assert_eq!(deque.remove(entry), Ok("drop"));
        assert_eq!(deque.len(), 1);
        assert_eq!(deque.pop_top(), Ok("keep"));
        assert!(matches!(deque.remove(entry), Err(BucketError::InvalidHandle)));
    }

    #[test]
    fn test_cursors_recover_after_drain_and_refill() {
        let mut deque = BucketDeque::new(0, 10);
        deque.insert(9, 1).unwrap();
        assert_eq!(deque.pop_top(), Ok(1));
        deque.insert(4, 2).unwrap();
        assert_eq!(deque.peek_top(), Ok(&2));
        assert_eq!(deque.pop_bottom(), Ok(2));
        deque.insert(0, 3).unwrap();
        assert_eq!(deque.pop_top(), Ok(3));
    }

    #[test]
    fn test_monotone_drain_touches_each_bucket_once() {
        // Degrees-only-decrease workload: pops from the top keep working
        // as adapts slide entries downward.
        let mut deque = BucketDeque::new(0, 8);
        let mut handles: Vec<_> = (0..4)
            .map(|i| deque.insert(7, i).map(Some))
            .collect::<Result<_>>()
            .unwrap();
        for round in (0..4).rev() {
            let popped: usize = deque.pop_top().unwrap();
            handles[popped] = None;
            for slot in handles.iter_mut() {
                if let Some(handle) = slot.take() {
                    *slot = Some(deque.adapt(handle, round).unwrap());
                }
            }
        }
        assert!(deque.is_empty());
    }
}
