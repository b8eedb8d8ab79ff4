extern crate std;

use std::sync::Arc;
use std::thread;
use std::vec::Vec;

use crate::linked_list::forward::{
    Circular, ForwardList, ListError, NullTerminated, RawForwardList, SharedForwardList,
};

const THREADS: usize = 4;
const PER_THREAD: usize = 250;

fn concurrent_pushes<B>()
where
    B: RawForwardList<usize> + Send + 'static,
{
    let shared: Arc<SharedForwardList<usize, B>> = Arc::new(SharedForwardList::new());

    thread::scope(|s| {
        for t in 0..THREADS {
            let shared = Arc::clone(&shared);
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    if i % 2 == 0 {
                        shared.push_back(t * PER_THREAD + i);
                    } else {
                        shared.push_front(t * PER_THREAD + i);
                    }
                }
            });
        }
    });

    assert_eq!(shared.len(), THREADS * PER_THREAD);
    assert!(shared.with(|list| list.raw().is_well_formed()));

    let list = Arc::into_inner(shared).unwrap().into_inner();
    let mut seen: Vec<usize> = list.into_iter().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..THREADS * PER_THREAD).collect::<Vec<_>>());
}

fn concurrent_drain<B>()
where
    B: RawForwardList<usize> + Send + 'static,
{
    let list: ForwardList<usize, B> = (0..1_000).collect();
    let shared = SharedForwardList::from(list);
    let shared = &shared;

    let popped: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(move || {
                    let mut count = 0usize;
                    while shared.pop_front().is_ok() {
                        count += 1;
                    }
                    count
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(popped, 1_000);
    assert!(shared.is_empty());
    assert_eq!(shared.pop_front(), Err(ListError::Underflow));
}

#[test]
fn test_null_terminated_concurrent_pushes() {
    concurrent_pushes::<NullTerminated<usize>>();
}

#[test]
fn test_circular_concurrent_pushes() {
    concurrent_pushes::<Circular<usize>>();
}

#[test]
fn test_null_terminated_concurrent_drain() {
    concurrent_drain::<NullTerminated<usize>>();
}

#[test]
fn test_circular_concurrent_drain() {
    concurrent_drain::<Circular<usize>>();
}
