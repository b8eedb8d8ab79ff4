use crossbeam_utils::CachePadded;
use spin::{Mutex, MutexGuard};

use super::error::ListError;
use super::list::ForwardList;
use super::traits::RawForwardList;

/// A forward list behind one exclusive lock.
///
/// The list itself is not synchronized. This wrapper serializes every access
/// to one list instance so it can be shared between threads, e.g. behind an
/// `Arc`.
pub struct SharedForwardList<T, B>
where
    B: RawForwardList<T>,
{
    inner: CachePadded<Mutex<ForwardList<T, B>>>,
}

impl<T, B> SharedForwardList<T, B>
where
    B: RawForwardList<T>,
{
    /// Creates a new, empty shared list.
    pub fn new() -> Self {
        Self::from_list(ForwardList::new())
    }

    /// Wrap an existing list.
    pub fn from_list(list: ForwardList<T, B>) -> Self {
        Self {
            inner: CachePadded::new(Mutex::new(list)),
        }
    }

    /// Lock the list. The guard releases the lock when dropped.
    pub fn lock(&self) -> MutexGuard<'_, ForwardList<T, B>> {
        self.inner.lock()
    }

    /// Run `f` with the list locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut ForwardList<T, B>) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    pub fn push_front(&self, value: T) {
        self.lock().push_front(value);
    }

    pub fn push_back(&self, value: T) {
        self.lock().push_back(value);
    }

    /// # Errors
    ///
    /// [`ListError::Underflow`] if the list is empty.
    pub fn pop_front(&self) -> Result<T, ListError> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Unwrap the list.
    pub fn into_inner(self) -> ForwardList<T, B> {
        CachePadded::into_inner(self.inner).into_inner()
    }
}

impl<T, B> Default for SharedForwardList<T, B>
where
    B: RawForwardList<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> From<ForwardList<T, B>> for SharedForwardList<T, B>
where
    B: RawForwardList<T>,
{
    fn from(list: ForwardList<T, B>) -> Self {
        Self::from_list(list)
    }
}
