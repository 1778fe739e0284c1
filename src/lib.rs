//! Test whether any element of a sequence, scanned from the right, satisfies
//! a predicate.
//!
//! [`any_by_right()`] visits the elements of an [`ArrayLike`] sequence from
//! the last index down to the first, handing each element, its index, and
//! the whole sequence to a predicate, and returns `true` as soon as the
//! predicate does.  An empty sequence yields `false` without calling the
//! predicate.
//!
//! ```
//! use any_by_right::{any_by_right, AnyByRightExt, ArrayView};
//!
//! assert!(any_by_right(&[1, 2, 3, 4], |&v, _, _| v > 3));
//! assert!(![1, 2, 3, 4].any_by_right(|&v, _, _| v > 10));
//!
//! let view = ArrayView::new(&[5, 6, 7], 2)?;
//! assert!(!view.any_by_right(|&v, _, _| v == 7));
//! # Ok::<(), any_by_right::NotArrayLike>(())
//! ```
//!
//! # Features
//!
//! - `alloc` (enabled by default): implement [`ArrayLike`] for `Vec`,
//!   `VecDeque`, and `Box`.  Without it, the crate is `no_std` and needs no
//!   allocator.
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod array_like;
pub mod array_view;
pub mod error;
pub mod ext;
pub mod scan;

pub use crate::array_like::ArrayLike;
pub use crate::array_view::ArrayView;
pub use crate::error::NotArrayLike;
pub use crate::ext::AnyByRightExt;
pub use crate::scan::{any_by_right, any_by_right_with, try_any_by_right};
