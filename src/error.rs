use thiserror::Error;

/// Error returned by [`ArrayView::new`](crate::ArrayView::new) when the given
/// length and backing storage do not describe a valid array-like value
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum NotArrayLike {
    /// The length was negative or could not be represented as a `usize`
    #[error("array-like length must be a non-negative integer")]
    InvalidLength,

    /// The length claims more elements than the backing storage holds
    #[error("array-like length {length} exceeds backing storage of {available} elements")]
    LengthExceedsStorage { length: usize, available: usize },
}
