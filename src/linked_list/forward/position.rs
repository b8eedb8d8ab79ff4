use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// An opaque marker for a place in a forward list's node chain.
///
/// A position does not own anything. It is only meaningful for the list that
/// handed it out, and only until the node it refers to is removed.
pub struct Position<L, T> {
    link: Option<NonNull<L>>,
    _marker: PhantomData<*const T>,
}

impl<L, T> Position<L, T> {
    pub(crate) const fn new(link: Option<NonNull<L>>) -> Self {
        Self {
            link,
            _marker: PhantomData,
        }
    }

    pub(crate) const fn null() -> Self {
        Self::new(None)
    }

    pub(crate) const fn from_link(link: NonNull<L>) -> Self {
        Self::new(Some(link))
    }

    pub(crate) const fn link(self) -> Option<NonNull<L>> {
        self.link
    }

    /// Check if this is the null marker. Only the null-terminated topology
    /// hands out null markers.
    pub const fn is_null(self) -> bool {
        self.link.is_none()
    }
}

impl<L, T> Clone for Position<L, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, T> Copy for Position<L, T> {}

impl<L, T> PartialEq for Position<L, T> {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl<L, T> Eq for Position<L, T> {}

impl<L, T> fmt::Debug for Position<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.link {
            Some(link) => f.debug_tuple("Position").field(&link).finish(),
            None => f.write_str("Position(null)"),
        }
    }
}
