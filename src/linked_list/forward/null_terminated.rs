use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::error::ListError;
use super::node::ListNode;
use super::position::Position;
use super::registry::NodeRegistry;
use super::traits::{Link, RawForwardList, sealed::Sealed};

type Node<T> = ListNode<NullLink, T>;
type Pos<T> = Position<NullLink, T>;

/// A link whose absence marks the end of the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLink {
    next: Option<NonNull<Self>>,
}

impl Link for NullLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

/// A forward list backend with explicit head and tail pointers.
///
/// The null marker doubles as `before_begin()` and `end()`. Inserting and
/// erasing branch on whether the anchor is the null marker, the tail, or an
/// interior node.
pub struct NullTerminated<T> {
    head: Option<NonNull<NullLink>>,
    tail: Option<NonNull<NullLink>>,
    len: usize,
    registry: NodeRegistry<NullLink>,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> NullTerminated<T> {
    /// Creates a new, empty backend.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            registry: NodeRegistry::new(),
            _marker: PhantomData,
        }
    }

    #[inline]
    fn check(&self, position: Pos<T>) {
        if let Some(link) = position.link() {
            self.registry.check(link);
        }
    }
}

impl<T> Default for NullTerminated<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sealed for NullTerminated<T> {}

impl<T> RawForwardList<T> for NullTerminated<T> {
    type Link = NullLink;

    #[inline]
    fn before_begin(&self) -> Pos<T> {
        Position::null()
    }

    #[inline]
    fn begin(&self) -> Pos<T> {
        Position::new(self.head)
    }

    #[inline]
    fn end(&self) -> Pos<T> {
        Position::null()
    }

    #[inline]
    fn tail(&self) -> Pos<T> {
        Position::new(self.tail)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    unsafe fn insert_after(&mut self, position: Pos<T>, value: T) -> Pos<T> {
        self.check(position);

        let node = Node::alloc(NullLink::default(), value);
        self.registry.admit(node);

        unsafe {
            match position.link() {
                // insert at front, which is also the only case for an empty list
                None => {
                    (*node.as_ptr()).set_next(self.head);
                    self.head = Some(node);
                    if self.tail.is_none() {
                        self.tail = Some(node);
                    }
                }
                Some(anchor) if Some(anchor) == self.tail => {
                    (*anchor.as_ptr()).set_next(Some(node));
                    self.tail = Some(node);
                }
                Some(anchor) => {
                    (*node.as_ptr()).set_next((*anchor.as_ptr()).next());
                    (*anchor.as_ptr()).set_next(Some(node));
                }
            }
        }

        self.len += 1;
        Position::from_link(node)
    }

    unsafe fn erase_after(&mut self, position: Pos<T>) -> Result<Option<T>, ListError> {
        if self.is_empty() {
            return Err(ListError::Underflow);
        }
        self.check(position);

        if position.link() == self.tail {
            return Ok(None);
        }

        let removed = unsafe {
            match position.link() {
                None => {
                    let Some(removed) = self.head else {
                        return Err(ListError::Underflow);
                    };
                    self.head = (*removed.as_ptr()).next();
                    if self.head.is_none() {
                        self.tail = None;
                    }
                    removed
                }
                Some(anchor) => {
                    // an anchor that is not the tail always has a successor
                    let Some(removed) = (*anchor.as_ptr()).next() else {
                        return Ok(None);
                    };
                    (*anchor.as_ptr()).set_next((*removed.as_ptr()).next());
                    if Some(removed) == self.tail {
                        self.tail = Some(anchor);
                    }
                    removed
                }
            }
        };

        self.len -= 1;
        self.registry.release(removed);
        Ok(Some(unsafe { Node::free(removed) }))
    }

    unsafe fn next_of(&self, position: Pos<T>) -> Pos<T> {
        self.check(position);
        match position.link() {
            None => Position::new(self.head),
            Some(link) => Position::new(unsafe { (*link.as_ptr()).next() }),
        }
    }

    unsafe fn relink(&mut self, position: Pos<T>, next: Pos<T>) {
        self.check(position);
        self.check(next);
        if let Some(link) = position.link() {
            unsafe { (*link.as_ptr()).set_next(next.link()) };
        }
    }

    unsafe fn set_ends(&mut self, head: Pos<T>, tail: Pos<T>) {
        self.check(head);
        self.check(tail);
        self.head = head.link();
        self.tail = tail.link();
    }

    fn is_well_formed(&self) -> bool {
        if (self.len == 0) != self.head.is_none() || self.head.is_none() != self.tail.is_none() {
            return false;
        }

        let mut last = None;
        let mut current = self.head;
        let mut seen = 0;
        while let Some(link) = current {
            seen += 1;
            if seen > self.len {
                return false;
            }
            last = Some(link);
            current = unsafe { (*link.as_ptr()).next() };
        }
        seen == self.len && last == self.tail
    }
}

impl<T> Drop for NullTerminated<T> {
    fn drop(&mut self) {
        while self.head.is_some() {
            let _ = unsafe { self.erase_after(Position::null()) };
        }
    }
}

unsafe impl<T: Send> Send for NullTerminated<T> {}
unsafe impl<T: Sync> Sync for NullTerminated<T> {}
