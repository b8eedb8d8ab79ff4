use core::marker::PhantomData;
use core::ptr::NonNull;

#[cfg(debug_assertions)]
use hashbrown::HashSet;

/// The set of nodes a list currently owns.
///
/// Only debug builds track anything. Release builds get a zero-sized registry
/// whose methods compile to nothing, so positions are trusted there.
pub(crate) struct NodeRegistry<L> {
    #[cfg(debug_assertions)]
    live: HashSet<NonNull<L>>,
    _marker: PhantomData<NonNull<L>>,
}

impl<L> NodeRegistry<L> {
    pub(crate) fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            live: HashSet::new(),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn admit(&mut self, node: NonNull<L>) {
        #[cfg(debug_assertions)]
        self.live.insert(node);
        #[cfg(not(debug_assertions))]
        let _ = node;
    }

    #[inline]
    pub(crate) fn release(&mut self, node: NonNull<L>) {
        #[cfg(debug_assertions)]
        self.live.remove(&node);
        #[cfg(not(debug_assertions))]
        let _ = node;
    }

    /// Panics in debug builds if `node` is not owned by this list.
    #[inline]
    pub(crate) fn check(&self, node: NonNull<L>) {
        #[cfg(debug_assertions)]
        assert!(
            self.live.contains(&node),
            "position does not belong to this list"
        );
        #[cfg(not(debug_assertions))]
        let _ = node;
    }
}

impl<L> Default for NodeRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}
