//! Text rendering of a forward list.
//!
//! Forward rendering separates elements with `" -> "`, backward rendering with
//! `" <- "` from last to first. Every rendering ends in a single newline, and
//! an empty list renders as that newline alone.

#[cfg(feature = "std")]
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

use super::list::ForwardList;
use super::traits::RawForwardList;

const FORWARD_SEPARATOR: &str = " -> ";
const BACKWARD_SEPARATOR: &str = " <- ";

impl<T, B> ForwardList<T, B>
where
    T: Display,
    B: RawForwardList<T>,
{
    /// Render first to last with a plain loop.
    pub fn write_forward<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut iter = self.iter().peekable();
        while let Some(value) = iter.next() {
            write!(out, "{value}")?;
            if iter.peek().is_some() {
                out.write_str(FORWARD_SEPARATOR)?;
            }
        }
        out.write_char('\n')
    }

    /// Render first to last as a pre-order walk over positions: visit a node,
    /// then step to its successor. A tail walk needs no stack, so the
    /// descent is a loop.
    pub fn write_forward_recursive<W: Write>(&self, out: &mut W) -> fmt::Result {
        let end = self.end();
        let mut position = self.begin();
        while position != end {
            let (value, next) = unsafe { (self.get(position), self.next(position)) };
            if let Some(value) = value {
                write!(out, "{value}")?;
            }
            if next != end {
                out.write_str(FORWARD_SEPARATOR)?;
            }
            position = next;
        }
        out.write_char('\n')
    }

    /// Render last to first as a post-order walk: descend to the end first,
    /// then visit on the way back.
    pub fn write_backward<W: Write>(&self, out: &mut W) -> fmt::Result {
        if self.is_empty() {
            return out.write_char('\n');
        }

        let mut unwind: Vec<&T> = Vec::with_capacity(self.len());
        unwind.extend(self.iter());

        while let Some(value) = unwind.pop() {
            write!(out, "{value}")?;
            if unwind.is_empty() {
                out.write_char('\n')?;
            } else {
                out.write_str(BACKWARD_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

/// Printing to stdout.
///
/// Each call renders into a buffer first and prints whatever was rendered.
/// If an element's `Display` impl fails, the line is cut off after the last
/// complete piece and the error is returned.
#[cfg(feature = "std")]
impl<T, B> ForwardList<T, B>
where
    T: Display,
    B: RawForwardList<T>,
{
    /// Print [`write_forward`](Self::write_forward) to stdout.
    pub fn forward_print(&self) -> fmt::Result {
        self.print_with(Self::write_forward::<String>)
    }

    /// Print [`write_forward_recursive`](Self::write_forward_recursive) to stdout.
    pub fn forward_print_recursive(&self) -> fmt::Result {
        self.print_with(Self::write_forward_recursive::<String>)
    }

    /// Print [`write_backward`](Self::write_backward) to stdout.
    pub fn backward_print(&self) -> fmt::Result {
        self.print_with(Self::write_backward::<String>)
    }

    fn print_with(&self, render: fn(&Self, &mut String) -> fmt::Result) -> fmt::Result {
        let mut out = String::new();
        let rendered = render(self, &mut out);
        std::print!("{out}");
        rendered
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::fmt;
    use std::string::String;

    use crate::linked_list::forward::{CircularList, NullTerminatedList};

    /// Renders its value, or fails when the value is negative.
    struct Checked(i32);

    impl fmt::Display for Checked {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if self.0 < 0 {
                return Err(fmt::Error);
            }
            write!(f, "{}", self.0)
        }
    }

    #[test]
    fn test_single_element_has_no_separator() {
        let list = NullTerminatedList::from([42]);
        let mut out = String::new();
        list.write_forward(&mut out).unwrap();
        list.write_forward_recursive(&mut out).unwrap();
        list.write_backward(&mut out).unwrap();
        assert_eq!(out, "42\n42\n42\n");
    }

    #[test]
    fn test_empty_renders_newline() {
        let list = CircularList::<u8>::new();
        let mut out = String::new();
        list.write_forward(&mut out).unwrap();
        list.write_forward_recursive(&mut out).unwrap();
        list.write_backward(&mut out).unwrap();
        assert_eq!(out, "\n\n\n");
    }

    #[test]
    fn test_render_stops_at_failing_element() {
        let list = NullTerminatedList::from([Checked(1), Checked(-2), Checked(3)]);

        let mut out = String::new();
        assert_eq!(list.write_forward(&mut out), Err(fmt::Error));
        assert_eq!(out, "1 -> ");

        let mut out = String::new();
        assert_eq!(list.write_forward_recursive(&mut out), Err(fmt::Error));
        assert_eq!(out, "1 -> ");

        let mut out = String::new();
        assert_eq!(list.write_backward(&mut out), Err(fmt::Error));
        assert_eq!(out, "3 <- ");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_print_reports_render_error() {
        let failing = CircularList::from([Checked(-1)]);
        assert_eq!(failing.forward_print(), Err(fmt::Error));
        assert_eq!(failing.forward_print_recursive(), Err(fmt::Error));
        assert_eq!(failing.backward_print(), Err(fmt::Error));

        let fine = CircularList::from([Checked(4), Checked(5)]);
        assert_eq!(fine.forward_print(), Ok(()));
        assert_eq!(fine.backward_print(), Ok(()));
    }

    #[test]
    fn test_recursive_render_matches_plain_render() {
        let list = CircularList::from([3, 1, 4, 1, 5]);
        let mut plain = String::new();
        let mut recursive = String::new();
        list.write_forward(&mut plain).unwrap();
        list.write_forward_recursive(&mut recursive).unwrap();
        assert_eq!(recursive, "3 -> 1 -> 4 -> 1 -> 5\n");
        assert_eq!(plain, recursive);
    }
}
