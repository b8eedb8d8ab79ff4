use core::fmt;
use core::marker::PhantomData;

use super::cursor::CursorMut;
use super::error::ListError;
use super::iter::{IntoIter, Iter, IterMut};
use super::node::ListNode;
use super::position::Position;
use super::traits::RawForwardList;

/// An owning singly linked list over the node topology `B`.
///
/// Every operation that would need a backward step is left out. In particular
/// there is no `pop_back`: finding the new tail means walking the whole list.
pub struct ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    raw: B,
    _marker: PhantomData<T>,
}

/// The position type handed out by a list over backend `B`.
pub type ListPosition<T, B> = Position<<B as RawForwardList<T>>::Link, T>;

impl<T, B> ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            raw: B::default(),
            _marker: PhantomData,
        }
    }

    /// Borrow the backend.
    pub fn raw(&self) -> &B {
        &self.raw
    }

    // -- positions --

    /// The anchor to pass to [`insert_after`](Self::insert_after) or
    /// [`erase_after`](Self::erase_after) to affect the first element.
    #[inline]
    pub fn before_begin(&self) -> ListPosition<T, B> {
        self.raw.before_begin()
    }

    #[inline]
    pub fn begin(&self) -> ListPosition<T, B> {
        self.raw.begin()
    }

    #[inline]
    pub fn end(&self) -> ListPosition<T, B> {
        self.raw.end()
    }

    /// The position of the last element, or the terminator when empty.
    /// Inserting after it appends.
    #[inline]
    pub fn tail(&self) -> ListPosition<T, B> {
        self.raw.tail()
    }

    // -- accessors --

    pub fn front(&self) -> Option<&T> {
        unsafe { self.get(self.begin()) }
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.get_mut(self.begin()) }
    }

    pub fn back(&self) -> Option<&T> {
        unsafe { self.get(self.tail()) }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.get_mut(self.tail()) }
    }

    /// Get the element at `position`, or `None` for `before_begin()`/`end()`.
    ///
    /// # Safety
    ///
    /// `position` must come from this list and must not have been removed since.
    pub unsafe fn get(&self, position: ListPosition<T, B>) -> Option<&T> {
        let link = self.element_link(position)?;
        Some(unsafe { ListNode::<B::Link, T>::data(link) })
    }

    /// Mutable version of [`get`](Self::get).
    ///
    /// # Safety
    ///
    /// Same as [`get`](Self::get).
    pub unsafe fn get_mut(&mut self, position: ListPosition<T, B>) -> Option<&mut T> {
        let link = self.element_link(position)?;
        Some(unsafe { ListNode::<B::Link, T>::data_mut(link) })
    }

    /// Get the position after `position`.
    ///
    /// # Safety
    ///
    /// Same as [`get`](Self::get).
    pub unsafe fn next(&self, position: ListPosition<T, B>) -> ListPosition<T, B> {
        unsafe { self.raw.next_of(position) }
    }

    fn element_link(
        &self,
        position: ListPosition<T, B>,
    ) -> Option<core::ptr::NonNull<B::Link>> {
        if position == self.end() || position == self.before_begin() {
            return None;
        }
        position.link()
    }

    // -- queries --

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Get the number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    // -- modifiers --

    pub fn push_front(&mut self, value: T) {
        unsafe { self.raw.insert_after(self.raw.before_begin(), value) };
    }

    pub fn push_back(&mut self, value: T) {
        unsafe { self.raw.insert_after(self.raw.tail(), value) };
    }

    /// Remove the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::Underflow`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        match unsafe { self.raw.erase_after(self.raw.before_begin()) }? {
            Some(value) => Ok(value),
            None => Err(ListError::Underflow),
        }
    }

    /// Remove every element, first to last.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Insert `value` right after `position` and return the new element's
    /// position.
    ///
    /// # Safety
    ///
    /// `position` must come from this list (`before_begin()`, `begin()`,
    /// `tail()`, `end()` or a previous `insert_after`) and its node must not
    /// have been removed since. Debug builds panic on a foreign or stale marker.
    pub unsafe fn insert_after(
        &mut self,
        position: ListPosition<T, B>,
        value: T,
    ) -> ListPosition<T, B> {
        unsafe { self.raw.insert_after(position, value) }
    }

    /// Remove the element right after `position` and return it.
    ///
    /// Returns `Ok(None)` and leaves the list untouched when `position` is the
    /// tail, since nothing follows it.
    ///
    /// # Errors
    ///
    /// [`ListError::Underflow`] if the list is empty.
    ///
    /// # Safety
    ///
    /// Same as [`insert_after`](Self::insert_after).
    pub unsafe fn erase_after(
        &mut self,
        position: ListPosition<T, B>,
    ) -> Result<Option<T>, ListError> {
        unsafe { self.raw.erase_after(position) }
    }

    /// Reverse the direction of every link in place and swap head and tail.
    pub fn reverse(&mut self) {
        let end = self.raw.end();
        let old_head = self.raw.begin();

        let mut prev = end;
        let mut current = old_head;
        while current != end {
            unsafe {
                let next = self.raw.next_of(current);
                self.raw.relink(current, prev);
                prev = current;
                current = next;
            }
        }

        unsafe { self.raw.set_ends(prev, old_head) };
        debug_assert!(self.raw.is_well_formed());
    }

    // -- traversal --

    pub fn iter(&self) -> Iter<'_, T, B> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T, B> {
        IterMut::new(self)
    }

    /// A cursor resting on `before_begin()`.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, B> {
        let position = self.before_begin();
        CursorMut::new(self, position)
    }

    /// A cursor resting on the tail.
    pub fn cursor_tail_mut(&mut self) -> CursorMut<'_, T, B> {
        let position = self.tail();
        CursorMut::new(self, position)
    }
}

impl<T, B> Default for ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Drop for ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, B> FromIterator<T> for ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, B> Extend<T> for ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, B, const N: usize> From<[T; N]> for ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, B> Clone for ForwardList<T, B>
where
    T: Clone,
    B: RawForwardList<T>,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, B, C> PartialEq<ForwardList<T, C>> for ForwardList<T, B>
where
    T: PartialEq,
    B: RawForwardList<T>,
    C: RawForwardList<T>,
{
    fn eq(&self, other: &ForwardList<T, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, B> Eq for ForwardList<T, B>
where
    T: Eq,
    B: RawForwardList<T>,
{
}

impl<T, B> fmt::Debug for ForwardList<T, B>
where
    T: fmt::Debug,
    B: RawForwardList<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, B> IntoIterator for ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, B> IntoIterator for &'a ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, B> IntoIterator for &'a mut ForwardList<T, B>
where
    B: RawForwardList<T>,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
