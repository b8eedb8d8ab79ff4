use super::error::ListError;
use super::list::{ForwardList, ListPosition};
use super::traits::RawForwardList;

/// A cursor over a forward list that can insert and erase after itself.
///
/// The cursor holds the list exclusively, so its position can never go stale:
/// it only removes the element after itself, never the one it rests on.
pub struct CursorMut<'a, T, B>
where
    B: RawForwardList<T>,
{
    list: &'a mut ForwardList<T, B>,
    position: ListPosition<T, B>,
}

impl<'a, T, B> CursorMut<'a, T, B>
where
    B: RawForwardList<T>,
{
    pub(crate) fn new(list: &'a mut ForwardList<T, B>, position: ListPosition<T, B>) -> Self {
        Self { list, position }
    }

    /// The position the cursor rests on.
    pub fn position(&self) -> ListPosition<T, B> {
        self.position
    }

    /// Check if the cursor rests on the terminator (`end()`, which is also
    /// `before_begin()`).
    pub fn is_at_end(&self) -> bool {
        self.position == self.list.end()
    }

    /// The element under the cursor, `None` on the terminator.
    pub fn current(&mut self) -> Option<&mut T> {
        unsafe { self.list.get_mut(self.position) }
    }

    /// The element after the cursor, `None` if the cursor is on the tail.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = unsafe { self.list.next(self.position) };
        unsafe { self.list.get_mut(next) }
    }

    /// Step to the next position. Stepping off the tail lands on the
    /// terminator, stepping off the terminator lands on the first element.
    pub fn move_next(&mut self) {
        self.position = unsafe { self.list.next(self.position) };
    }

    /// Insert `value` after the cursor. The cursor does not move.
    pub fn insert_after(&mut self, value: T) {
        unsafe { self.list.insert_after(self.position, value) };
    }

    /// Remove the element after the cursor. The cursor does not move.
    ///
    /// # Errors
    ///
    /// [`ListError::Underflow`] if the list is empty.
    pub fn erase_after(&mut self) -> Result<Option<T>, ListError> {
        unsafe { self.list.erase_after(self.position) }
    }
}
