use thiserror::Error;

/// Errors reported by the mutating operations of a forward list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// `erase_after` or `pop_front` on an empty list.
    #[error("attempting to remove from an empty list")]
    Underflow,
}
