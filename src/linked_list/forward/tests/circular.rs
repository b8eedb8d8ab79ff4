extern crate std;

use std::vec;
use std::vec::Vec;

use crate::linked_list::forward::{
    Circular, CircularList, ForwardList, ListError, Position, RawForwardList, RingLink,
};

fn values(list: &CircularList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_sentinel_is_both_ends() {
    let list = CircularList::<i32>::new();
    assert!(!list.before_begin().is_null());
    assert_eq!(list.before_begin(), list.end());
    assert_eq!(list.begin(), list.end());
    assert_eq!(list.tail(), list.end());
    assert!(list.raw().is_well_formed());
}

#[test]
fn test_empty_ring_points_to_itself() {
    let list = CircularList::<i32>::new();
    let sentinel = list.end();
    assert_eq!(unsafe { list.next(sentinel) }, sentinel);
}

#[test]
fn test_ring_stays_closed() {
    let mut list = CircularList::from([1, 2, 3]);
    let end = list.end();
    unsafe {
        assert_eq!(list.next(list.tail()), end);
        assert_eq!(list.next(end), list.begin());
    }

    list.reverse();
    unsafe {
        assert_eq!(list.next(list.tail()), end);
        assert_eq!(list.next(end), list.begin());
    }
    assert_eq!(values(&list), vec![3, 2, 1]);
    assert!(list.raw().is_well_formed());
}

#[test]
fn test_tail_falls_back_to_sentinel() {
    let mut list = CircularList::from([1, 2]);
    list.pop_front().unwrap();
    assert_ne!(list.tail(), list.end());
    list.pop_front().unwrap();
    assert_eq!(list.tail(), list.end());
    assert_eq!(list.begin(), list.end());
    assert!(list.raw().is_well_formed());
}

#[test]
fn test_insert_at_tail_moves_tail() {
    let mut list = CircularList::from([1]);
    let old_tail = list.tail();
    let new_tail = unsafe { list.insert_after(old_tail, 2) };
    assert_eq!(list.tail(), new_tail);
    assert_eq!(unsafe { list.next(new_tail) }, list.end());

    let middle = unsafe { list.insert_after(old_tail, 5) };
    assert_eq!(list.tail(), new_tail);
    assert_eq!(unsafe { list.get(middle) }, Some(&5));
    assert_eq!(values(&list), vec![1, 5, 2]);
}

#[test]
fn test_erase_tail_moves_tail_back() {
    let mut list = CircularList::from([1, 2, 3]);
    let second = unsafe { list.next(list.begin()) };
    assert_eq!(unsafe { list.erase_after(second) }, Ok(Some(3)));
    assert_eq!(list.tail(), second);
    assert!(list.raw().is_well_formed());
}

#[test]
fn test_backend_used_directly() {
    let mut raw = Circular::<i32>::new();
    unsafe {
        let one = raw.insert_after(raw.before_begin(), 1);
        raw.insert_after(one, 2);
        assert_eq!(raw.next_of(raw.tail()), raw.end());
        assert_eq!(raw.erase_after(raw.before_begin()), Ok(Some(1)));
    }
    assert_eq!(raw.len(), 1);
    assert!(raw.is_well_formed());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "position does not belong to this list")]
fn test_foreign_position_panics() {
    let other = CircularList::from([1]);
    let mut list = CircularList::from([2]);
    unsafe { list.insert_after(other.begin(), 3) };
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "position does not belong to this list")]
fn test_foreign_sentinel_panics() {
    let other = CircularList::<i32>::new();
    let mut list = CircularList::from([2]);
    unsafe { list.insert_after(other.end(), 3) };
}

/// A ring backend whose counter runs ahead of its nodes.
#[derive(Default)]
struct Overcounted(Circular<u64>);

impl crate::linked_list::forward::traits::sealed::Sealed for Overcounted {}

impl RawForwardList<u64> for Overcounted {
    type Link = RingLink;

    fn before_begin(&self) -> Position<RingLink, u64> {
        self.0.before_begin()
    }

    fn begin(&self) -> Position<RingLink, u64> {
        self.0.begin()
    }

    fn end(&self) -> Position<RingLink, u64> {
        self.0.end()
    }

    fn tail(&self) -> Position<RingLink, u64> {
        self.0.tail()
    }

    fn len(&self) -> usize {
        self.0.len() + 3
    }

    unsafe fn insert_after(
        &mut self,
        position: Position<RingLink, u64>,
        value: u64,
    ) -> Position<RingLink, u64> {
        unsafe { self.0.insert_after(position, value) }
    }

    unsafe fn erase_after(
        &mut self,
        position: Position<RingLink, u64>,
    ) -> Result<Option<u64>, ListError> {
        unsafe { self.0.erase_after(position) }
    }

    unsafe fn next_of(&self, position: Position<RingLink, u64>) -> Position<RingLink, u64> {
        unsafe { self.0.next_of(position) }
    }

    unsafe fn relink(&mut self, position: Position<RingLink, u64>, next: Position<RingLink, u64>) {
        unsafe { self.0.relink(position, next) }
    }

    unsafe fn set_ends(&mut self, head: Position<RingLink, u64>, tail: Position<RingLink, u64>) {
        unsafe { self.0.set_ends(head, tail) }
    }

    fn is_well_formed(&self) -> bool {
        self.0.is_well_formed()
    }
}

#[test]
fn test_iteration_stops_at_sentinel() {
    let mut list = ForwardList::<u64, Overcounted>::new();
    list.push_back(7);
    assert_eq!(list.len(), 4);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![7]);
    for value in list.iter_mut() {
        *value += 1;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![8]);
}
