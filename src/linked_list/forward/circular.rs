use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::error::ListError;
use super::node::ListNode;
use super::position::Position;
use super::registry::NodeRegistry;
use super::traits::{Link, RawForwardList, sealed::Sealed};

type Node<T> = ListNode<RingLink, T>;
type Pos<T> = Position<RingLink, T>;

/// A link that always points somewhere. An isolated link points to itself.
#[derive(Debug)]
pub struct RingLink {
    next: NonNull<Self>,
}

impl RingLink {
    /// A link whose `next` is not yet meaningful. It must be closed onto
    /// itself or spliced into a ring before anything follows it.
    fn unlinked() -> Self {
        Self {
            next: NonNull::dangling(),
        }
    }
}

impl Link for RingLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        Some(self.next)
    }

    /// Setting `None` closes the link onto itself.
    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next.unwrap_or_else(|| NonNull::from(&mut *self));
    }
}

/// The successor of a link inside a ring.
///
/// # Safety
///
/// `link` must be live and spliced into a ring.
#[inline]
unsafe fn successor(link: NonNull<RingLink>) -> NonNull<RingLink> {
    unsafe { (*link.as_ptr()).next() }.unwrap_or(link)
}

/// A forward list backend closed into a ring by a sentinel link.
///
/// The sentinel carries no element and lives as long as the list. It is both
/// `before_begin()` and `end()`, and the head is nothing but the sentinel's
/// successor, so insert and erase each have a single code path.
pub struct Circular<T> {
    sentinel: NonNull<RingLink>,
    tail: NonNull<RingLink>,
    len: usize,
    registry: NodeRegistry<RingLink>,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Circular<T> {
    /// Creates a new, empty backend.
    pub fn new() -> Self {
        let sentinel = NonNull::from(Box::leak(Box::new(RingLink::unlinked())));
        // closed through the heap pointer so the self-reference keeps its provenance
        unsafe { (*sentinel.as_ptr()).next = sentinel };
        Self {
            sentinel,
            tail: sentinel,
            len: 0,
            registry: NodeRegistry::new(),
            _marker: PhantomData,
        }
    }

    /// The first element's link, or the sentinel when empty.
    #[inline]
    fn head(&self) -> NonNull<RingLink> {
        unsafe { successor(self.sentinel) }
    }

    /// Resolve a position to a link. Ring positions are never null, but a
    /// null marker is read as the sentinel.
    #[inline]
    fn anchor(&self, position: Pos<T>) -> NonNull<RingLink> {
        let link = position.link().unwrap_or(self.sentinel);
        if link != self.sentinel {
            self.registry.check(link);
        }
        link
    }
}

impl<T> Default for Circular<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sealed for Circular<T> {}

impl<T> RawForwardList<T> for Circular<T> {
    type Link = RingLink;

    #[inline]
    fn before_begin(&self) -> Pos<T> {
        Position::from_link(self.sentinel)
    }

    #[inline]
    fn begin(&self) -> Pos<T> {
        Position::from_link(self.head())
    }

    #[inline]
    fn end(&self) -> Pos<T> {
        Position::from_link(self.sentinel)
    }

    #[inline]
    fn tail(&self) -> Pos<T> {
        Position::from_link(self.tail)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    unsafe fn insert_after(&mut self, position: Pos<T>, value: T) -> Pos<T> {
        let anchor = self.anchor(position);

        let node = Node::alloc(RingLink::unlinked(), value);
        self.registry.admit(node);

        unsafe {
            (*node.as_ptr()).set_next((*anchor.as_ptr()).next());
            (*anchor.as_ptr()).set_next(Some(node));
            if successor(node) == self.sentinel {
                self.tail = node;
            }
        }

        self.len += 1;
        Position::from_link(node)
    }

    unsafe fn erase_after(&mut self, position: Pos<T>) -> Result<Option<T>, ListError> {
        if self.is_empty() {
            return Err(ListError::Underflow);
        }
        let anchor = self.anchor(position);

        if anchor == self.tail {
            return Ok(None);
        }

        let removed = unsafe {
            let removed = successor(anchor);
            (*anchor.as_ptr()).set_next((*removed.as_ptr()).next());
            removed
        };

        self.len -= 1;
        if removed == self.tail {
            self.tail = anchor;
        }
        self.registry.release(removed);
        Ok(Some(unsafe { Node::free(removed) }))
    }

    unsafe fn next_of(&self, position: Pos<T>) -> Pos<T> {
        let link = self.anchor(position);
        Position::from_link(unsafe { successor(link) })
    }

    unsafe fn relink(&mut self, position: Pos<T>, next: Pos<T>) {
        let link = self.anchor(position);
        let next = self.anchor(next);
        unsafe { (*link.as_ptr()).set_next(Some(next)) };
    }

    unsafe fn set_ends(&mut self, head: Pos<T>, tail: Pos<T>) {
        let head = self.anchor(head);
        let tail = self.anchor(tail);
        unsafe { (*self.sentinel.as_ptr()).set_next(Some(head)) };
        self.tail = tail;
    }

    fn is_well_formed(&self) -> bool {
        if (self.len == 0) != (self.head() == self.sentinel) {
            return false;
        }

        let mut current = self.sentinel;
        for _ in 0..self.len {
            current = unsafe { successor(current) };
            if current == self.sentinel {
                return false;
            }
        }
        current == self.tail && unsafe { successor(current) } == self.sentinel
    }
}

impl<T> Drop for Circular<T> {
    fn drop(&mut self) {
        while self.len > 0 {
            let _ = unsafe { self.erase_after(Position::from_link(self.sentinel)) };
        }
        drop(unsafe { Box::from_raw(self.sentinel.as_ptr()) });
    }
}

unsafe impl<T: Send> Send for Circular<T> {}
unsafe impl<T: Sync> Sync for Circular<T> {}
