//! # Forward List
//!
//! An owning singly linked list supporting forward-only insertion, deletion,
//! traversal and in-place reversal.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the backend seam, `RawForwardList`, and the `Link` trait.
//! - [`list::ForwardList`]: The public interface, generic over the backend.
//! - [`null_terminated::NullTerminated`]: Head and tail pointers, the last node's
//!   `next` is null. `before_begin()` and `end()` are both the null marker.
//! - [`circular::Circular`]: One sentinel link closes the ring. `before_begin()` and
//!   `end()` are both the sentinel.
//! - [`cursor::CursorMut`]: Safe access to positions.
//! - [`shared::SharedForwardList`]: A lock around one list for cross-thread use.
//!
//! ## Safety
//!
//! Nodes are heap allocated and linked with raw pointers. The list owns every
//! node it can reach and releases a node the moment it is spliced out.
//! [`Position`] markers are borrowed views into that graph: the position-taking
//! methods are `unsafe` and trust the caller to pass a marker that came from the
//! same list and has not been invalidated by a removal since. Debug builds check
//! this on every call.

pub mod circular;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
pub mod null_terminated;
pub mod position;
pub mod print;
pub mod shared;
pub mod traits;

mod node;
mod registry;

#[cfg(test)]
mod tests;

pub use circular::{Circular, RingLink};
pub use cursor::CursorMut;
pub use error::ListError;
pub use list::{ForwardList, ListPosition};
pub use null_terminated::{NullLink, NullTerminated};
pub use position::Position;
pub use shared::SharedForwardList;
pub use traits::{Link, RawForwardList};

/// A forward list whose last node points at nothing.
pub type NullTerminatedList<T> = ForwardList<T, NullTerminated<T>>;

/// A forward list closed into a ring by a sentinel link.
pub type CircularList<T> = ForwardList<T, Circular<T>>;

pub mod prelude {
    pub use super::traits::*;
    pub use super::{CircularList, ForwardList, ListError, NullTerminatedList, Position};
}
