use crate::array_like::ArrayLike;
use crate::error::NotArrayLike;

/// An array-like value assembled at runtime from an explicit length and a
/// backing store, such as a record decoded from foreign data that carries its
/// own `length` field.
///
/// The length is validated once, on construction; afterwards an `ArrayView`
/// behaves like a slice of the first `length` elements of the store.
///
/// # Example
///
/// ```
/// use any_by_right::{any_by_right, ArrayView, NotArrayLike};
///
/// let storage = [3, 8, 1, 9];
/// let view = ArrayView::new(&storage, 3i64)?;
/// assert!(!any_by_right(&view, |&v, _, _| v == 9));
///
/// assert_eq!(ArrayView::new(&storage, -1i64), Err(NotArrayLike::InvalidLength));
/// # Ok::<(), NotArrayLike>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ArrayView<'a, T> {
    items: &'a [T],
}

impl<'a, T> ArrayView<'a, T> {
    /// Construct a view over the first `length` elements of `storage`.
    ///
    /// # Errors
    ///
    /// Returns [`NotArrayLike::InvalidLength`] if `length` is negative or
    /// otherwise not representable as a `usize`, and
    /// [`NotArrayLike::LengthExceedsStorage`] if `length` is greater than
    /// `storage.len()`.
    pub fn new<L: TryInto<usize>>(storage: &'a [T], length: L) -> Result<Self, NotArrayLike> {
        let length: Option<usize> = length.try_into().ok();
        let Some(length) = length else {
            log::debug!("Rejecting array-like value: length is not a non-negative integer");
            return Err(NotArrayLike::InvalidLength);
        };
        match storage.get(..length) {
            Some(items) => Ok(ArrayView { items }),
            None => {
                log::debug!(
                    "Rejecting array-like value: length {length} exceeds {} stored elements",
                    storage.len()
                );
                Err(NotArrayLike::LengthExceedsStorage {
                    length,
                    available: storage.len(),
                })
            }
        }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<'a, T> From<&'a [T]> for ArrayView<'a, T> {
    fn from(items: &'a [T]) -> ArrayView<'a, T> {
        ArrayView { items }
    }
}

impl<T> ArrayLike for ArrayView<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn at(&self, index: usize) -> &T {
        &self.items[index]
    }
}
