use alloc::boxed::Box;
use core::ptr::NonNull;

/// A heap node of a forward list.
///
/// The link is the first field, so a pointer to the link is a pointer to the
/// node. Backends pass link pointers around and only cast back to the node to
/// reach the element or to release the allocation.
#[repr(C)]
pub struct ListNode<L, T> {
    link: L,
    data: T,
}

impl<L, T> ListNode<L, T> {
    /// Allocate a node and hand ownership over as a link pointer.
    pub(crate) fn alloc(link: L, data: T) -> NonNull<L> {
        NonNull::from(Box::leak(Box::new(Self { link, data }))).cast()
    }

    /// Release a node and move its element out.
    ///
    /// # Safety
    ///
    /// `link` must come from [`alloc`](Self::alloc) with the same `L` and `T`
    /// and must not have been released already.
    pub(crate) unsafe fn free(link: NonNull<L>) -> T {
        unsafe { Box::from_raw(link.cast::<Self>().as_ptr()).data }
    }

    /// # Safety
    ///
    /// `link` must point into a live node allocated with the same `L` and `T`.
    pub(crate) unsafe fn data<'a>(link: NonNull<L>) -> &'a T {
        unsafe { &(*link.cast::<Self>().as_ptr()).data }
    }

    /// # Safety
    ///
    /// Same as [`data`](Self::data), and no other reference to the element may
    /// be alive for `'a`.
    pub(crate) unsafe fn data_mut<'a>(link: NonNull<L>) -> &'a mut T {
        unsafe { &mut (*link.cast::<Self>().as_ptr()).data }
    }
}
