use core::ptr::NonNull;

use super::error::ListError;
use super::position::Position;

/// A trait for the successor reference of a node.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

pub(crate) mod sealed {
    /// Restricts [`RawForwardList`](super::RawForwardList) to the backends of
    /// this crate.
    pub trait Sealed {}
}

/// A trait for a forward list node topology.
///
/// A backend owns its node graph and its length counter. Everything that only
/// needs positions and links (pushing, clearing, printing, reversing) is built
/// on top of this trait by [`ForwardList`](super::list::ForwardList), so both
/// topologies share one public contract.
///
/// The trait is sealed. The safe parts of `ForwardList` (`front`, `back`,
/// `iter`, rendering) dereference whatever `begin()`, `tail()`, `next_of()`
/// and `len()` report, so only [`NullTerminated`](super::NullTerminated) and
/// [`Circular`](super::Circular) implement it.
///
/// A wrapper that over-reports its length is rejected:
///
/// ```compile_fail
/// use mola_forward_list::linked_list::forward::{
///     Circular, ListError, Position, RawForwardList, RingLink,
/// };
///
/// #[derive(Default)]
/// struct Padded(Circular<u64>);
///
/// impl RawForwardList<u64> for Padded {
///     type Link = RingLink;
///
///     fn before_begin(&self) -> Position<RingLink, u64> { self.0.before_begin() }
///     fn begin(&self) -> Position<RingLink, u64> { self.0.begin() }
///     fn end(&self) -> Position<RingLink, u64> { self.0.end() }
///     fn tail(&self) -> Position<RingLink, u64> { self.0.tail() }
///     fn len(&self) -> usize { self.0.len() + 3 }
///
///     unsafe fn insert_after(&mut self, at: Position<RingLink, u64>, value: u64)
///         -> Position<RingLink, u64> {
///         unsafe { self.0.insert_after(at, value) }
///     }
///     unsafe fn erase_after(&mut self, at: Position<RingLink, u64>)
///         -> Result<Option<u64>, ListError> {
///         unsafe { self.0.erase_after(at) }
///     }
///     unsafe fn next_of(&self, at: Position<RingLink, u64>) -> Position<RingLink, u64> {
///         unsafe { self.0.next_of(at) }
///     }
///     unsafe fn relink(&mut self, at: Position<RingLink, u64>, next: Position<RingLink, u64>) {
///         unsafe { self.0.relink(at, next) }
///     }
///     unsafe fn set_ends(&mut self, head: Position<RingLink, u64>, tail: Position<RingLink, u64>) {
///         unsafe { self.0.set_ends(head, tail) }
///     }
///     fn is_well_formed(&self) -> bool { self.0.is_well_formed() }
/// }
/// ```
pub trait RawForwardList<T>: Default + sealed::Sealed {
    /// The link type threaded through every node of this backend.
    type Link: Link<Target = Self::Link>;

    /// The anchor that affects the first element when passed to
    /// `insert_after`/`erase_after`. Never dereferenceable.
    fn before_begin(&self) -> Position<Self::Link, T>;

    /// The position of the first element, or `end()` when empty.
    fn begin(&self) -> Position<Self::Link, T>;

    /// The one-past-the-last marker. Never dereferenceable.
    fn end(&self) -> Position<Self::Link, T>;

    /// The position of the last element, or the terminator when empty.
    fn tail(&self) -> Position<Self::Link, T>;

    /// Get the number of elements
    fn len(&self) -> usize;

    /// Check if the list is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `value` right after `position` and return the new node's position.
    ///
    /// # Safety
    ///
    /// `position` must come from this list and must not have been removed since.
    unsafe fn insert_after(&mut self, position: Position<Self::Link, T>, value: T)
        -> Position<Self::Link, T>;

    /// Remove the node right after `position`.
    ///
    /// Returns `Ok(None)` without touching anything when `position` is the tail.
    ///
    /// # Errors
    ///
    /// [`ListError::Underflow`] if the list is empty. Nothing is mutated.
    ///
    /// # Safety
    ///
    /// `position` must come from this list and must not have been removed since.
    unsafe fn erase_after(
        &mut self,
        position: Position<Self::Link, T>,
    ) -> Result<Option<T>, ListError>;

    /// Get the successor of `position`. The successor of `before_begin()` is
    /// `begin()`, the successor of the tail is `end()`.
    ///
    /// # Safety
    ///
    /// Same contract as [`insert_after`](Self::insert_after).
    unsafe fn next_of(&self, position: Position<Self::Link, T>) -> Position<Self::Link, T>;

    /// Point the link at `position` to `next` without touching anything else.
    ///
    /// # Safety
    ///
    /// `position` must be a live element of this list and `next` must be a live
    /// element or the terminator. The caller restores the invariants, usually
    /// with [`set_ends`](Self::set_ends).
    unsafe fn relink(&mut self, position: Position<Self::Link, T>, next: Position<Self::Link, T>);

    /// Overwrite the head and tail designation.
    ///
    /// # Safety
    ///
    /// After the call the chain starting at `head` must reach `tail` in
    /// `len() - 1` steps and `tail` must be linked to the terminator.
    unsafe fn set_ends(&mut self, head: Position<Self::Link, T>, tail: Position<Self::Link, T>);

    /// Walk the whole chain and check the structural invariants. O(n).
    fn is_well_formed(&self) -> bool;
}
