//! An owning singly linked list with two interchangeable node topologies.
//!
//! Both topologies sit behind one interface, [`forward::ForwardList`]. The
//! backend is picked by a type parameter, so the null-terminated and the
//! circular variant can live side by side in one binary.
//!
//! # Examples
//!
//! ```
//! use mola_forward_list::linked_list::forward::{CircularList, NullTerminatedList};
//!
//! let mut ring = CircularList::from(["item1", "item2", "item3", "item4"]);
//! let mut chain = NullTerminatedList::from(["item1", "item2", "item3", "item4"]);
//!
//! assert_eq!(ring.len(), 4);
//! assert_eq!(ring, chain);
//!
//! ring.pop_front().unwrap();
//! ring.pop_front().unwrap();
//! chain.pop_front().unwrap();
//! chain.pop_front().unwrap();
//!
//! let mut out = String::new();
//! ring.write_backward(&mut out).unwrap();
//! assert_eq!(out, "item4 <- item3\n");
//!
//! chain.reverse();
//! assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec!["item4", "item3"]);
//!
//! // `pop_back` does not exist, the front is the only end that can shrink
//! assert_eq!(chain.pop_front(), Ok("item4"));
//! ```
pub mod forward;
