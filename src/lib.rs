//! # Ring Deque
//!
//! A growable double-ended queue stored in a single power-of-two ring buffer.
//!
//! [`RingDeque`] is a leaner sibling of `std::collections::VecDeque`: elements live in one
//! contiguous block whose capacity is always a power of two, so wrapping a logical index onto
//! a physical slot is a single bitwise AND.  When the buffer fills up, it is reallocated and
//! the live elements are moved into the new block at a position chosen by a
//! [`RelocationOption`].
//!
//! ## Key Features
//!
//! * **O(1) both ends:** `push_back`, `push_front`, `pop_back`, `pop_front` are amortized
//!   constant time; indexing is constant time.
//! * **Relocation policies:** growth can leave all free room at the back
//!   ([`RelocationOption::LeftBound`]), at the front ([`RelocationOption::RightBound`]), or
//!   split evenly ([`RelocationOption::Center`], used by pushes).
//! * **Construct-on-write storage:** unused slots are never initialised, so `T` needs no
//!   `Default` and no stale value is kept in a dead slot.
//! * **Explicit compaction:** capacity never shrinks on its own; call
//!   [`RingDeque::shrink_to_fit`].
//! * **Interoperability:** [`AnyDeque`] is implemented by both `RingDeque` and `VecDeque`,
//!   allowing the same operation sequence to be replayed against either.
//!
//! ## Capacity Rules
//!
//! * A new deque has capacity `0` and allocates on the first push.
//! * `with_capacity(n)` rounds `n` up with [`utils::next_pow2`].
//! * A push into a full deque grows it to `next_pow2(len + 1)` slots.
//!
//! ## Errors
//!
//! Popping from an empty deque returns `None`; indexing out of range panics.  Allocation
//! failure panics on the regular methods and is returned as [`RingDequeError`] by the `try_*`
//! variants.
//!
//! ## Features
//!
//! * `serde`: `Serialize`/`Deserialize` as a front-to-back sequence.
//!
//! ## Examples
//!
//! ### Both ends
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut d = RingDeque::new();
//! d.push_back(1);
//! d.push_back(2);
//! d.push_front(0);
//!
//! assert_eq!(d.len(), 3);
//! assert_eq!(d[0], 0);
//! assert_eq!(d.pop_front(), Some(0));
//! assert_eq!(d, [1, 2]);
//! ```
//!
//! ### Choosing where new room goes
//!
//! ```rust
//! use ring_deque::{RelocationOption, RingDeque};
//!
//! let mut d: RingDeque<u32> = (0..4).collect();
//! assert_eq!(d.capacity(), 4);
//!
//! // Expecting a burst of push_front calls: keep the free slots at the head.
//! d.grow(RelocationOption::RightBound);
//! assert_eq!(d.capacity(), 8);
//! for i in 0..4 {
//!     d.push_front(100 + i);
//! }
//! assert_eq!(d.capacity(), 8);
//! ```
//!
//! ### Compaction
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut d: RingDeque<u32> = (0..100).collect();
//! d.truncate(3);
//! assert_eq!(d.capacity(), 128);
//!
//! d.shrink_to_fit();
//! assert_eq!(d.capacity(), 4);
//! assert_eq!(d, [0, 1, 2]);
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod error;
pub mod utils;

// --- Re-exports ---

pub use deque::{AnyDeque, RelocationOption, RingDeque};
pub use error::RingDequeError;
