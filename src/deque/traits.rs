//! Standard trait implementations for [`RingDeque`] and the [`AnyDeque`] abstraction.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};
use core::ptr;
use std::collections::VecDeque;

use super::{RingDeque, allocate, storage_failure};

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` and [`RingDeque<T>`] so one driver can replay the
/// same push/pop sequence against either and compare the results.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Returns a shared reference to the element at logical `index`, or `None`.
    fn get(&self, index: usize) -> Option<&T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T> {
        self.get(0)
    }
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> AnyDeque<T> for RingDeque<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

// ─── indexing ─────────────────────────────────────────────────────────────────

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("RingDeque index out of bounds: the len is {len} but the index is {index}")
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => index_out_of_bounds(index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => index_out_of_bounds(index, len),
        }
    }
}

// ─── construction / conversion ────────────────────────────────────────────────

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones into a buffer of the same capacity, keeping every element in its physical slot.
impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        let buf = allocate(self.capacity()).unwrap_or_else(|err| storage_failure(err));
        let mut out = Self::from_storage(buf);
        out.begin = self.begin;
        out.end = self.begin;
        for item in self.iter() {
            let slot = out.end;
            unsafe {
                ptr::write(out.slots_mut().add(slot), item.clone());
            }
            out.end = out.wrap_add(slot, 1);
            out.len += 1;
        }
        out
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(items: Vec<T>) -> Self {
        let mut deque = Self::with_capacity(items.len());
        deque.extend(items);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for RingDeque<T> {
    fn from(items: [T; N]) -> Self {
        let mut deque = Self::with_capacity(N);
        deque.extend(items);
        deque
    }
}

impl<T> From<RingDeque<T>> for VecDeque<T> {
    fn from(deque: RingDeque<T>) -> Self {
        let mut out = VecDeque::with_capacity(deque.len());
        out.extend(deque);
        out
    }
}

// ─── formatting / comparison ──────────────────────────────────────────────────

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: PartialEq> PartialEq<VecDeque<T>> for RingDeque<T> {
    fn eq(&self, other: &VecDeque<T>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for RingDeque<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<&[T]> for RingDeque<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for RingDeque<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.len == N && self.iter().eq(other.iter())
    }
}

impl<T: PartialOrd> PartialOrd for RingDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}
