//! Growable double-ended queue backed by a power-of-two ring buffer.
//!
//! # Storage
//! [`RingDeque`] keeps its elements in a boxed slice of `MaybeUninit<T>` slots whose length
//! (the capacity) is always a power of two, or zero before the first insertion.  Four
//! counters describe the live window:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `mask` | `capacity - 1` (zero while the buffer is empty) |
//! | `begin` | physical slot of the front element |
//! | `end` | physical slot the next `push_back` writes to |
//! | `len` | number of live elements |
//!
//! Logical element `i` lives at `(begin + i) & mask` and `end == (begin + len) & mask`
//! always holds.  Masking replaces the modulo, which is why capacities are never anything
//! but powers of two.
//!
//! # Growth
//! A push into a full buffer calls [`grow`](RingDeque::grow) with
//! [`RelocationOption::Center`]: a new buffer of `next_pow2(len + 1)` slots is allocated,
//! the live elements are moved into it in logical order starting at the option's offset,
//! and the old buffer is released.  Capacity at least doubles relative to the live count at
//! every trigger, so a run of `n` pushes spends `O(n)` in total on relocation.
//!
//! # Dead slots
//! Slots outside the live window are raw memory.  Construction and growth never fill them,
//! and popping moves the value out without touching the slot again, so no stale element is
//! ever retained or dropped twice.
//!
//! # Threading
//! There is no internal synchronisation.  A `RingDeque<T>` is `Send`/`Sync` exactly when `T`
//! is, and shared mutation needs an external lock like any other `&mut` API.

mod iter;
mod relocation;
#[cfg(feature = "serde")]
mod serde_impl;
mod traits;

pub use iter::{IntoIter, Iter, IterMut};
pub use relocation::RelocationOption;
pub use traits::AnyDeque;

use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::error::RingDequeError;
use crate::utils::{checked_next_pow2, next_pow2};

/// A double-ended queue stored in a circular buffer whose capacity is a power of two.
///
/// Pushes and pops at either end are amortized `O(1)`; indexing by logical position is
/// `O(1)` and branch-free apart from the bounds check.
///
/// ```
/// use ring_deque::RingDeque;
///
/// let mut d = RingDeque::new();
/// d.push_back(1);
/// d.push_back(2);
/// d.push_front(0);
/// assert_eq!(d, [0, 1, 2]);
///
/// assert_eq!(d.pop_front(), Some(0));
/// assert_eq!(d[1], 2);
/// assert_eq!(d.len(), 2);
/// ```
pub struct RingDeque<T> {
    buf: Box<[MaybeUninit<T>]>,
    mask: usize,
    begin: usize,
    end: usize,
    len: usize,
}

/// Allocates `capacity` uninitialised slots without aborting on failure.
fn allocate<T>(capacity: usize) -> Result<Box<[MaybeUninit<T>]>, RingDequeError> {
    let mut slots: Vec<MaybeUninit<T>> = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, MaybeUninit::uninit);
    Ok(slots.into_boxed_slice())
}

/// Storage failures are fatal on the infallible paths.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn storage_failure(err: RingDequeError) -> ! {
    panic!("{err}")
}

impl<T> RingDeque<T> {
    /// Creates an empty deque.  Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self::from_storage(Box::new([]))
    }

    /// Creates an empty deque with room for at least `capacity` elements.
    ///
    /// The capacity is rounded up to the next power of two; `0` allocates nothing.
    ///
    /// # Panics
    /// Panics if the rounded capacity overflows or the allocation fails.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| storage_failure(err))
    }

    /// Fallible form of [`with_capacity`](RingDeque::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, RingDequeError> {
        let slots = checked_next_pow2(capacity).ok_or(RingDequeError::CapacityOverflow {
            requested: capacity,
        })?;
        Ok(Self::from_storage(allocate(slots)?))
    }

    fn from_storage(buf: Box<[MaybeUninit<T>]>) -> Self {
        debug_assert!(buf.is_empty() || buf.len().is_power_of_two());
        let mask = buf.len().saturating_sub(1);
        Self {
            buf,
            mask,
            begin: 0,
            end: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the deque.
    #[doc(alias = "size")]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the buffer.  Always zero or a power of two.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        idx.wrapping_add(add) & self.mask
    }

    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        idx.wrapping_sub(sub) & self.mask
    }

    #[inline(always)]
    fn slots(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    /// Appends `value` at the back, growing with [`RelocationOption::Center`] when full.
    ///
    /// # Panics
    /// Panics if growing the buffer fails.
    #[doc(alias = "emplace_back")]
    #[inline(always)]
    pub fn push_back(&mut self, value: T) {
        self.push_back_with(|| value);
    }

    /// Like [`push_back`](RingDeque::push_back), but builds the element only after any
    /// growth has happened, directly into its slot.
    ///
    /// If `make` panics the deque keeps its previous contents (possibly in a larger buffer).
    #[inline(always)]
    pub fn push_back_with<F: FnOnce() -> T>(&mut self, make: F) {
        if self.len == self.capacity() {
            self.grow(RelocationOption::Center);
        }
        let end = self.end;
        unsafe {
            ptr::write(self.slots_mut().add(end), make());
        }
        self.end = self.wrap_add(end, 1);
        self.len += 1;
    }

    /// Prepends `value` at the front, growing with [`RelocationOption::Center`] when full.
    ///
    /// # Panics
    /// Panics if growing the buffer fails.
    #[doc(alias = "emplace_front")]
    #[inline(always)]
    pub fn push_front(&mut self, value: T) {
        self.push_front_with(|| value);
    }

    /// Front counterpart of [`push_back_with`](RingDeque::push_back_with).
    #[inline(always)]
    pub fn push_front_with<F: FnOnce() -> T>(&mut self, make: F) {
        if self.len == self.capacity() {
            self.grow(RelocationOption::Center);
        }
        let begin = self.wrap_sub(self.begin, 1);
        unsafe {
            ptr::write(self.slots_mut().add(begin), make());
        }
        self.begin = begin;
        self.len += 1;
    }

    /// Removes and returns the back element, or `None` if the deque is empty.
    #[inline(always)]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.end = self.wrap_sub(self.end, 1);
        unsafe { Some(ptr::read(self.slots().add(self.end))) }
    }

    /// Removes and returns the front element, or `None` if the deque is empty.
    #[inline(always)]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let old_begin = self.begin;
        self.begin = self.wrap_add(old_begin, 1);
        unsafe { Some(ptr::read(self.slots().add(old_begin))) }
    }

    /// Returns a reference to the element at logical `index` (0 is the front), or `None`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            unsafe { Some(self.get_unchecked(index)) }
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            unsafe { Some(self.get_unchecked_mut(index)) }
        } else {
            None
        }
    }

    /// Returns a reference to the element at logical `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`len`](RingDeque::len).  Only debug builds verify this.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "RingDeque::get_unchecked: index {index} out of range for length {}",
            self.len
        );
        unsafe { &*self.slots().add(self.wrap_add(self.begin, index)) }
    }

    /// Exclusive form of [`get_unchecked`](RingDeque::get_unchecked).
    ///
    /// # Safety
    /// `index` must be less than [`len`](RingDeque::len).  Only debug builds verify this.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "RingDeque::get_unchecked_mut: index {index} out of range for length {}",
            self.len
        );
        let slot = self.wrap_add(self.begin, index);
        unsafe { &mut *self.slots_mut().add(slot) }
    }

    /// Returns a reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Returns the live elements as at most two slices, in logical order.
    ///
    /// The second slice is empty unless the live window wraps past the end of the buffer.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let ptr = self.slots();
        unsafe {
            if self.begin + self.len <= self.capacity() {
                (slice::from_raw_parts(ptr.add(self.begin), self.len), &[])
            } else {
                let head_len = self.capacity() - self.begin;
                (
                    slice::from_raw_parts(ptr.add(self.begin), head_len),
                    slice::from_raw_parts(ptr, self.len - head_len),
                )
            }
        }
    }

    /// Mutable counterpart of [`as_slices`](RingDeque::as_slices).
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (begin, len, capacity) = (self.begin, self.len, self.capacity());
        let ptr = self.slots_mut();
        unsafe {
            if begin + len <= capacity {
                (slice::from_raw_parts_mut(ptr.add(begin), len), &mut [])
            } else {
                let head_len = capacity - begin;
                (
                    slice::from_raw_parts_mut(ptr.add(begin), head_len),
                    slice::from_raw_parts_mut(ptr, len - head_len),
                )
            }
        }
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.as_slices();
        Iter::new(head, tail)
    }

    /// Front-to-back iterator over exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (head, tail) = self.as_mut_slices();
        IterMut::new(head, tail)
    }

    /// Keeps the first `len` elements and drops the rest.  Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = self.len;
        self.len = len;
        self.end = self.wrap_add(self.begin, len);
        let ptr = self.slots_mut();
        for i in len..old_len {
            let slot = self.wrap_add(self.begin, i);
            unsafe {
                ptr::drop_in_place(ptr.add(slot));
            }
        }
    }

    /// Drops every element.  Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Moves the live elements into a new buffer of `next_pow2(len + 1)` slots, placing the
    /// front element at the offset chosen by `option`.
    ///
    /// The new buffer always has at least one free slot.  It is sized from the live count,
    /// not the current capacity, so calling this on a sparsely filled deque can return a
    /// smaller buffer.  Logical order and values are unchanged.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[track_caller]
    pub fn grow(&mut self, option: RelocationOption) {
        if let Err(err) = self.try_grow(option) {
            storage_failure(err);
        }
    }

    /// Fallible form of [`grow`](RingDeque::grow).  On error the deque is left untouched.
    pub fn try_grow(&mut self, option: RelocationOption) -> Result<(), RingDequeError> {
        let requested = self.len + 1;
        let new_capacity =
            checked_next_pow2(requested).ok_or(RingDequeError::CapacityOverflow { requested })?;
        let mut new_buf = allocate::<T>(new_capacity)?;
        let offset = option.offset(new_capacity, self.len);
        let old_capacity = self.capacity();
        unsafe {
            self.move_live_into(&mut new_buf, offset);
        }
        self.install(new_buf, offset);
        log::trace!(
            "ring deque grew {} -> {} slots ({:?}), {} live, begin={}",
            old_capacity,
            new_capacity,
            option,
            self.len,
            self.begin
        );
        Ok(())
    }

    /// Reallocates to exactly `next_pow2(len)` slots when that is smaller than the current
    /// capacity, packing the elements from slot 0.  No-op otherwise.
    ///
    /// An empty deque releases its buffer entirely.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[track_caller]
    pub fn shrink_to_fit(&mut self) {
        if let Err(err) = self.try_shrink_to_fit() {
            storage_failure(err);
        }
    }

    /// Fallible form of [`shrink_to_fit`](RingDeque::shrink_to_fit).
    pub fn try_shrink_to_fit(&mut self) -> Result<(), RingDequeError> {
        let target = next_pow2(self.len);
        let old_capacity = self.capacity();
        if target >= old_capacity {
            return Ok(());
        }
        let mut new_buf = allocate::<T>(target)?;
        unsafe {
            self.move_live_into(&mut new_buf, 0);
        }
        self.install(new_buf, 0);
        log::trace!(
            "ring deque shrank {} -> {} slots, {} live",
            old_capacity,
            target,
            self.len
        );
        Ok(())
    }

    /// Bitwise-moves the live window, in logical order, into `dst[offset..offset + len]`.
    ///
    /// # Safety
    /// `offset + len <= dst.len()`, and the caller must [`install`](RingDeque::install) `dst`
    /// right after: the elements now belong to `dst` and the old slots must not be read or
    /// dropped again.
    unsafe fn move_live_into(&self, dst: &mut [MaybeUninit<T>], offset: usize) {
        debug_assert!(offset + self.len <= dst.len());
        let (head, tail) = self.as_slices();
        unsafe {
            let dst = (dst.as_mut_ptr() as *mut T).add(offset);
            ptr::copy_nonoverlapping(head.as_ptr(), dst, head.len());
            ptr::copy_nonoverlapping(tail.as_ptr(), dst.add(head.len()), tail.len());
        }
    }

    /// Swaps in `buf` as the storage with the live window starting at `begin`.
    /// The old buffer is released; its slots hold no drop obligations any more.
    fn install(&mut self, buf: Box<[MaybeUninit<T>]>, begin: usize) {
        self.buf = buf;
        self.mask = self.buf.len().saturating_sub(1);
        self.begin = begin & self.mask;
        self.end = self.wrap_add(self.begin, self.len);
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        let (head, tail) = self.as_mut_slices();
        unsafe {
            ptr::drop_in_place(head);
            ptr::drop_in_place(tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    fn assert_invariants<T>(d: &RingDeque<T>) {
        let cap = d.capacity();
        assert!(cap == 0 || cap.is_power_of_two(), "capacity {cap}");
        assert!(d.len() <= cap);
        assert_eq!(d.mask, cap.saturating_sub(1));
        assert_eq!(d.end, (d.begin + d.len) & d.mask);
        if cap > 0 {
            assert!(d.begin < cap && d.end < cap);
        }
    }

    fn contents<T: Clone>(d: &RingDeque<T>) -> Vec<T> {
        (0..d.len()).map(|i| d[i].clone()).collect()
    }

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    // ─── construction ────────────────────────────────────────────────────────
    #[test]
    fn test_deque_new_is_unallocated() {
        let d: RingDeque<i32> = RingDeque::new();
        assert_eq!(d.capacity(), 0);
        assert_eq!(d.len(), 0);
        assert!(d.is_empty());
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_with_capacity_rounds_up() {
        assert_eq!(RingDeque::<u8>::with_capacity(0).capacity(), 0);
        assert_eq!(RingDeque::<u8>::with_capacity(1).capacity(), 1);
        assert_eq!(RingDeque::<u8>::with_capacity(5).capacity(), 8);
        assert_eq!(RingDeque::<u8>::with_capacity(16).capacity(), 16);
        assert_invariants(&RingDeque::<u8>::with_capacity(100));
    }

    #[test]
    fn test_deque_try_with_capacity_overflow() {
        let err = RingDeque::<u8>::try_with_capacity(usize::MAX).err();
        assert_eq!(
            err,
            Some(RingDequeError::CapacityOverflow {
                requested: usize::MAX
            })
        );
        let huge = 1usize << (usize::BITS - 2);
        assert!(matches!(
            RingDeque::<u64>::try_with_capacity(huge),
            Err(RingDequeError::Alloc(_))
        ));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_deque_with_capacity_overflow_panics() {
        let _ = RingDeque::<u8>::with_capacity(usize::MAX);
    }

    // ─── push / pop ──────────────────────────────────────────────────────────
    #[test]
    fn test_deque_round_trip_scenario() {
        let mut d = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        d.push_front(0);
        assert_eq!(d.len(), 3);
        assert_eq!(contents(&d), vec![0, 1, 2]);
        assert_eq!(d.pop_front(), Some(0));
        assert_eq!(d.len(), 2);
        assert_eq!(contents(&d), vec![1, 2]);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_pop_empty() {
        let mut d: RingDeque<i32> = RingDeque::new();
        assert_eq!(d.pop_front(), None);
        assert_eq!(d.pop_back(), None);
        d.push_back(7);
        assert_eq!(d.pop_back(), Some(7));
        assert_eq!(d.pop_back(), None);
        assert_eq!(d.pop_front(), None);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_first_push_allocates_one_slot() {
        let mut d = RingDeque::new();
        d.push_front('a');
        assert_eq!(d.capacity(), 1);
        assert_eq!(d.begin, 0);
        assert_eq!(d.end, 0);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_push_with_builds_after_growth() {
        let mut d = RingDeque::with_capacity(1);
        d.push_back(String::from("a"));
        d.push_back_with(|| String::from("b"));
        d.push_front_with(|| String::from("z"));
        assert_eq!(contents(&d), ["z", "a", "b"]);
        assert_eq!(d.capacity(), 4);
    }

    #[test]
    fn test_deque_push_with_panic_keeps_contents() {
        let mut d = RingDeque::new();
        d.push_back(1);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            d.push_back_with(|| panic!("boom"));
        }));
        assert!(res.is_err());
        assert_eq!(d.len(), 1);
        assert_eq!(d[0], 1);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_symmetry_front_push_back_pop() {
        let mut d = RingDeque::new();
        for i in 0..100 {
            d.push_front(i);
            assert_eq!(d.pop_back(), Some(i));
            assert_invariants(&d);
        }
        assert_eq!(d.len(), 0);
        assert_eq!(d.capacity(), 1);

        let mut peak = 0;
        for i in 0..200 {
            d.push_front(i);
            if i % 3 == 0 {
                d.pop_back();
            }
            assert!(d.capacity() >= peak);
            peak = d.capacity();
            assert_invariants(&d);
        }
        while d.pop_back().is_some() {}
        assert!(d.is_empty());
        assert_eq!(d.capacity(), peak);
    }

    // ─── wrap-around ─────────────────────────────────────────────────────────
    #[test]
    fn test_deque_wrap_around_indexing() {
        let mut d = RingDeque::with_capacity(4);
        d.push_back(0);
        d.push_back(0);
        d.pop_front();
        d.pop_front();
        // begin = 2
        d.push_back(10);
        d.push_back(11);
        d.push_back(12);
        assert_eq!(d.begin, 2);
        assert_eq!(d.len(), 3);
        assert_eq!(d.capacity(), 4);
        assert_eq!(d[2], 12);
        let physical = unsafe { d.buf[0].assume_init_read() };
        assert_eq!(physical, 12);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_push_front_wraps_to_last_slot() {
        let mut d = RingDeque::with_capacity(8);
        d.push_back(1);
        d.push_front(0);
        assert_eq!(d.begin, 7);
        assert_eq!(d.as_slices(), (&[0][..], &[1][..]));
        assert_invariants(&d);
    }

    // ─── grow ────────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_grow_center_offset() {
        let mut d = RingDeque::with_capacity(4);
        d.extend([1, 2, 3, 4]);
        d.push_back(5);
        // grew at len 4 into 8 slots: offset 8/2 - 4/2
        assert_eq!(d.capacity(), 8);
        assert_eq!(d.begin, 2);
        assert_eq!(contents(&d), vec![1, 2, 3, 4, 5]);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_grow_center_from_single_slot() {
        let mut d = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        assert_eq!(d.capacity(), 2);
        assert_eq!(d.begin, 1);
        assert_eq!(d.end, 1);
        assert_eq!(contents(&d), vec![1, 2]);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_grow_left_and_right_bound() {
        let mut d: RingDeque<i32> = (0..8).collect();
        d.pop_front();
        d.push_back(8);
        assert_eq!(d.capacity(), 8);

        let mut left = RingDeque::with_capacity(8);
        left.extend(d.iter().copied());
        left.grow(RelocationOption::LeftBound);
        assert_eq!(left.capacity(), 16);
        assert_eq!(left.begin, 0);
        assert_eq!(left.end, 8);
        assert_eq!(contents(&left), contents(&d));
        assert_invariants(&left);

        let mut right = d.clone();
        right.grow(RelocationOption::RightBound);
        assert_eq!(right.capacity(), 16);
        assert_eq!(right.begin, 8);
        assert_eq!(right.end, 0);
        assert_eq!(contents(&right), contents(&d));
        assert_invariants(&right);
    }

    #[test]
    fn test_deque_grow_from_wrapped_window() {
        let mut d = RingDeque::with_capacity(4);
        d.push_back(2);
        d.push_back(3);
        d.push_front(1);
        d.push_front(0);
        assert_eq!(d.len(), d.capacity());
        assert!(!d.as_slices().1.is_empty());
        d.push_back(4);
        assert_eq!(contents(&d), vec![0, 1, 2, 3, 4]);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_grow_sizes_from_live_count() {
        let mut d = RingDeque::with_capacity(16);
        d.extend([1, 2, 3]);
        d.grow(RelocationOption::Center);
        assert_eq!(d.capacity(), 4);
        assert_eq!(d.begin, 1);
        assert_eq!(contents(&d), vec![1, 2, 3]);
        assert_invariants(&d);

        let mut empty: RingDeque<u8> = RingDeque::new();
        empty.grow(RelocationOption::RightBound);
        assert_eq!(empty.capacity(), 1);
        assert_invariants(&empty);
    }

    #[test]
    fn test_deque_growth_work_is_linear() {
        let mut d = RingDeque::new();
        let mut moved = 0usize;
        let n = 10_000;
        for i in 0..n {
            if d.len() == d.capacity() {
                moved += d.len();
            }
            if i % 2 == 0 {
                d.push_back(i);
            } else {
                d.push_front(i);
            }
        }
        assert!(moved < 2 * n, "moved {moved} elements for {n} pushes");
    }

    // ─── shrink ──────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_shrink_to_fit() {
        let mut d: RingDeque<i32> = (0..100).collect();
        for _ in 0..90 {
            d.pop_front();
        }
        d.push_front(-1);
        let before = contents(&d);
        assert_eq!(d.capacity(), 128);
        d.shrink_to_fit();
        assert_eq!(d.capacity(), 16);
        assert_eq!(d.begin, 0);
        assert_eq!(d.end, 11);
        assert_eq!(contents(&d), before);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_shrink_exact_power_wraps_end() {
        let mut d: RingDeque<i32> = (0..5).collect();
        d.pop_back();
        assert_eq!(d.capacity(), 8);
        d.shrink_to_fit();
        assert_eq!(d.capacity(), 4);
        assert_eq!(d.end, 0);
        assert_eq!(contents(&d), vec![0, 1, 2, 3]);
        assert_invariants(&d);
        d.push_back(4);
        assert_eq!(contents(&d), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_deque_shrink_noop_and_empty() {
        let mut d: RingDeque<i32> = (0..4).collect();
        let cap = d.capacity();
        d.shrink_to_fit();
        assert_eq!(d.capacity(), cap);

        d.clear();
        d.shrink_to_fit();
        assert_eq!(d.capacity(), 0);
        assert_invariants(&d);
        d.push_back(1);
        assert_eq!(d[0], 1);
    }

    // ─── truncate / clear / drop ─────────────────────────────────────────────
    #[test]
    fn test_deque_truncate() {
        let mut d: RingDeque<i32> = (0..6).collect();
        d.truncate(10);
        assert_eq!(d.len(), 6);
        d.truncate(2);
        assert_eq!(contents(&d), vec![0, 1]);
        assert_invariants(&d);
        d.push_back(9);
        assert_eq!(contents(&d), vec![0, 1, 9]);
    }

    #[test]
    fn test_deque_drops_each_element_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut d = RingDeque::new();
            for i in 0..20 {
                if i % 3 == 0 {
                    d.push_front(DropCounter(drops.clone()));
                } else {
                    d.push_back(DropCounter(drops.clone()));
                }
            }
            drop(d.pop_front());
            drop(d.pop_back());
            assert_eq!(drops.get(), 2);
            d.truncate(10);
            assert_eq!(drops.get(), 10);
            d.shrink_to_fit();
            d.grow(RelocationOption::RightBound);
            assert_eq!(drops.get(), 10);
        }
        assert_eq!(drops.get(), 20);
    }

    #[test]
    fn test_deque_zero_sized_elements() {
        let mut d = RingDeque::new();
        for _ in 0..10 {
            d.push_back(());
        }
        d.push_front(());
        assert_eq!(d.len(), 11);
        assert_eq!(d.capacity(), 16);
        assert_eq!(d.pop_back(), Some(()));
        assert_invariants(&d);
    }

    // ─── reference model ─────────────────────────────────────────────────────
    #[test]
    fn test_deque_matches_vecdeque_scripted() {
        let mut d = RingDeque::new();
        let mut reference = VecDeque::new();
        let mut state = 0x2545_f491u32;
        for step in 0..5_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            match state % 5 {
                0 | 1 => {
                    d.push_back(step);
                    reference.push_back(step);
                }
                2 => {
                    d.push_front(step);
                    reference.push_front(step);
                }
                3 => assert_eq!(d.pop_front(), reference.pop_front()),
                _ => assert_eq!(d.pop_back(), reference.pop_back()),
            }
            if step % 997 == 0 {
                d.shrink_to_fit();
            }
            assert_invariants(&d);
        }
        assert_eq!(d.len(), reference.len());
        assert!(d.iter().eq(reference.iter()));
    }
}
