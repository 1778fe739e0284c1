use crate::array_like::ArrayLike;

/// Tests whether any element of `sequence` satisfies `predicate`, scanning
/// from the last element to the first and stopping at the first match.
///
/// `predicate` is called with a reference to the element, its index, and the
/// sequence itself.  It is invoked at most once per element, in strictly
/// decreasing index order, and never at all if `sequence` is empty.
///
/// # Example
///
/// ```
/// use any_by_right::any_by_right;
///
/// let mut visited = Vec::new();
/// let found = any_by_right(&[1.0, f64::NAN, 2.0], |v: &f64, i, _| {
///     visited.push(i);
///     v.is_nan()
/// });
/// assert!(found);
/// assert_eq!(visited, [2, 1]);
/// ```
pub fn any_by_right<S, P>(sequence: &S, mut predicate: P) -> bool
where
    S: ArrayLike + ?Sized,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    let len = sequence.len();
    for i in (0..len).rev() {
        if predicate(sequence.at(i), i, sequence) {
            log::trace!("any_by_right: predicate satisfied at index {i} of {len}");
            return true;
        }
    }
    false
}

/// Like [`any_by_right()`], but `predicate` also receives `context` as its
/// first argument on every call.
///
/// `context` plays no part in the scan itself; it exists so that predicates
/// defined as plain functions can be handed shared state without a closure.
///
/// # Example
///
/// ```
/// use any_by_right::any_by_right_with;
///
/// fn above(limit: &i32, v: &i32, _: usize, _: &[i32]) -> bool {
///     v > limit
/// }
///
/// let data: &[i32] = &[4, 9, 2];
/// assert!(any_by_right_with(data, &8, above));
/// assert!(!any_by_right_with(data, &9, above));
/// ```
pub fn any_by_right_with<S, C, P>(sequence: &S, context: &C, mut predicate: P) -> bool
where
    S: ArrayLike + ?Sized,
    C: ?Sized,
    P: FnMut(&C, &S::Item, usize, &S) -> bool,
{
    any_by_right(sequence, |value, index, seq| {
        predicate(context, value, index, seq)
    })
}

/// Fallible version of [`any_by_right()`].  Short circuits on the first
/// `Ok(true)` or on the first error, which is returned unchanged.
///
/// # Errors
///
/// Returns the first `Err` produced by `predicate`.
///
/// # Example
///
/// ```
/// use any_by_right::try_any_by_right;
///
/// let fields = ["12", "x", "40"];
/// let r = try_any_by_right(&fields, |s, _, _| s.parse::<u32>().map(|n| n > 30));
/// assert_eq!(r, Ok(true));
///
/// let r = try_any_by_right(&fields, |s, _, _| s.parse::<u32>().map(|n| n > 50));
/// assert!(r.is_err());
/// ```
pub fn try_any_by_right<S, P, E>(sequence: &S, mut predicate: P) -> Result<bool, E>
where
    S: ArrayLike + ?Sized,
    P: FnMut(&S::Item, usize, &S) -> Result<bool, E>,
{
    let len = sequence.len();
    for i in (0..len).rev() {
        if predicate(sequence.at(i), i, sequence)? {
            log::trace!("try_any_by_right: predicate satisfied at index {i} of {len}");
            return Ok(true);
        }
    }
    Ok(false)
}
