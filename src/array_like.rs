//! The [`ArrayLike`] capability trait: anything with a length and
//! integer-indexed element access
#[cfg(feature = "alloc")]
use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

/// A finite, ordered collection whose elements can be accessed by index.
///
/// Implementors must return an element from [`at()`](ArrayLike::at) for
/// every `index < self.len()`.
pub trait ArrayLike {
    type Item;

    /// Returns the number of elements in the collection
    fn len(&self) -> usize;

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.len()`
    fn at(&self, index: usize) -> &Self::Item;

    /// Returns `true` if the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ArrayLike for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> ArrayLike for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for &A {
    type Item = A::Item;

    fn len(&self) -> usize {
        A::len(self)
    }

    fn at(&self, index: usize) -> &A::Item {
        A::at(self, index)
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for &mut A {
    type Item = A::Item;

    fn len(&self) -> usize {
        A::len(self)
    }

    fn at(&self, index: usize) -> &A::Item {
        A::at(self, index)
    }
}

#[cfg(feature = "alloc")]
impl<T> ArrayLike for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

#[cfg(feature = "alloc")]
impl<A: ArrayLike + ?Sized> ArrayLike for Box<A> {
    type Item = A::Item;

    fn len(&self) -> usize {
        A::len(self)
    }

    fn at(&self, index: usize) -> &A::Item {
        A::at(self, index)
    }
}

#[cfg(feature = "alloc")]
impl<T> ArrayLike for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}
