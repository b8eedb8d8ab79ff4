use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::list::{ForwardList, ListPosition};
use super::node::ListNode;
use super::traits::RawForwardList;

/// An iterator over shared references to the elements of a forward list.
pub struct Iter<'a, T, B>
where
    B: RawForwardList<T>,
{
    list: &'a ForwardList<T, B>,
    current: ListPosition<T, B>,
    remaining: usize,
}

impl<'a, T, B> Iter<'a, T, B>
where
    B: RawForwardList<T>,
{
    pub(crate) fn new(list: &'a ForwardList<T, B>) -> Self {
        Self {
            current: list.begin(),
            remaining: list.len(),
            list,
        }
    }
}

impl<'a, T, B> Iterator for Iter<'a, T, B>
where
    B: RawForwardList<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.current == self.list.end() {
            return None;
        }
        let link = self.current.link()?;
        self.remaining -= 1;
        unsafe {
            self.current = self.list.raw().next_of(self.current);
            Some(ListNode::<B::Link, T>::data(link))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, B> ExactSizeIterator for Iter<'_, T, B> where B: RawForwardList<T> {}

impl<T, B> FusedIterator for Iter<'_, T, B> where B: RawForwardList<T> {}

impl<T, B> Clone for Iter<'_, T, B>
where
    B: RawForwardList<T>,
{
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An iterator over mutable references to the elements of a forward list.
pub struct IterMut<'a, T, B>
where
    B: RawForwardList<T>,
{
    raw: &'a B,
    current: ListPosition<T, B>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, B> IterMut<'a, T, B>
where
    B: RawForwardList<T>,
{
    pub(crate) fn new(list: &'a mut ForwardList<T, B>) -> Self {
        let list: &'a ForwardList<T, B> = list;
        Self {
            raw: list.raw(),
            current: list.begin(),
            remaining: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T, B> Iterator for IterMut<'a, T, B>
where
    B: RawForwardList<T>,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.current == self.raw.end() {
            return None;
        }
        let link = self.current.link()?;
        self.remaining -= 1;
        unsafe {
            self.current = self.raw.next_of(self.current);
            Some(ListNode::<B::Link, T>::data_mut(link))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, B> ExactSizeIterator for IterMut<'_, T, B> where B: RawForwardList<T> {}

impl<T, B> FusedIterator for IterMut<'_, T, B> where B: RawForwardList<T> {}

/// An owning iterator that drains a forward list from the front.
pub struct IntoIter<T, B>
where
    B: RawForwardList<T>,
{
    list: ForwardList<T, B>,
}

impl<T, B> IntoIter<T, B>
where
    B: RawForwardList<T>,
{
    pub(crate) fn new(list: ForwardList<T, B>) -> Self {
        Self { list }
    }
}

impl<T, B> Iterator for IntoIter<T, B>
where
    B: RawForwardList<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, B> ExactSizeIterator for IntoIter<T, B> where B: RawForwardList<T> {}

impl<T, B> FusedIterator for IntoIter<T, B> where B: RawForwardList<T> {}
