//! Small stateless helpers shared by the collections.

pub mod pow2;

pub use pow2::{checked_next_pow2, next_pow2};
