use crate::scan::{any_by_right, try_any_by_right};
use crate::array_like::ArrayLike;

/// Method-call syntax for the right-to-left scans, available on every
/// [`ArrayLike`] type
pub trait AnyByRightExt: ArrayLike {
    /// Tests whether any element satisfies `predicate`, scanning from the
    /// last element to the first.  See [`any_by_right()`].
    ///
    /// # Example
    ///
    /// ```
    /// use any_by_right::AnyByRightExt;
    ///
    /// let words = ["apple", "Banana", "cherry"];
    /// assert!(words.any_by_right(|w, _, _| w.starts_with(char::is_uppercase)));
    /// ```
    fn any_by_right<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item, usize, &Self) -> bool,
    {
        any_by_right(self, predicate)
    }

    /// Fallible version of [`AnyByRightExt::any_by_right()`].  See
    /// [`try_any_by_right()`].
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `predicate`.
    fn try_any_by_right<P, E>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&Self::Item, usize, &Self) -> Result<bool, E>,
    {
        try_any_by_right(self, predicate)
    }
}

impl<A: ArrayLike + ?Sized> AnyByRightExt for A {}
