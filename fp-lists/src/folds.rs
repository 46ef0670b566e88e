//! Folds as the universal list combinator.
//!
//! Most list operations are one fold away: sums, lengths, reversal,
//! appending, flattening, and mapping all fall out of `fold_left` or
//! `fold_right` with the right combining function. This module shows:
//! - The textbook call-recursive `fold_right` and its stack cost
//! - Derived operations expressed as folds
//! - How fold direction changes the result for non-commutative operations

use fp_common::PersistentList;

// ============================================================================
// The recursive right fold
// ============================================================================

/// Right fold by structural recursion.
///
/// `fold_right_recursive([a, b, c], z, f)` computes `f(a, f(b, f(c, z)))`:
/// the recursion walks to the end of the list before the first combine runs,
/// so the stack grows with the list length. The library's
/// [`PersistentList::fold_right`] trades that stack for one reversal pass
/// and computes the same result.
///
/// # Example
/// ```
/// # use fp_common::plist;
/// # use fp_lists::folds::fold_right_recursive;
/// let list = plist![1, 2, 3];
/// assert_eq!(fold_right_recursive(&list, 0, |x, acc| x + acc), 6);
/// ```
pub fn fold_right_recursive<T, B, F>(list: &PersistentList<T>, seed: B, combine: F) -> B
where
    F: Fn(&T, B) -> B,
{
    fn go<T, B, F>(list: &PersistentList<T>, seed: B, combine: &F) -> B
    where
        F: Fn(&T, B) -> B,
    {
        match list.uncons() {
            None => seed,
            Some((head, rest)) => combine(head, go(rest, seed, combine)),
        }
    }
    go(list, seed, &combine)
}

// ============================================================================
// Operations derived from folds
// ============================================================================

/// Sum as a left fold.
pub fn sum_via_fold(list: &PersistentList<i64>) -> i64 {
    list.fold_left(0, |accumulator, x| accumulator + x)
}

/// Product as a left fold.
///
/// Note what this formulation gives up: the fold visits every element, so a
/// 0.0 in the list does not stop the scan the way
/// [`crate::pattern_matching::product`] does. A NAN after a zero still
/// poisons this product.
pub fn product_via_fold(list: &PersistentList<f64>) -> f64 {
    list.fold_left(1.0, |accumulator, x| accumulator * x)
}

/// Length as a right fold that ignores the elements.
pub fn length_via_fold<T>(list: &PersistentList<T>) -> usize {
    list.fold_right(0, |_, accumulator| accumulator + 1)
}

/// Reversal as a left fold consing onto the empty list.
///
/// Folding left visits elements front to back, so each cons lands the next
/// element in front of the previously reversed prefix — linear time, unlike
/// repeated appends.
pub fn reverse_via_fold<T: Clone>(list: &PersistentList<T>) -> PersistentList<T> {
    list.fold_left(PersistentList::new(), |accumulator, element| {
        accumulator.cons(element.clone())
    })
}

/// Appending as a right fold with the second list as the seed.
///
/// Consing `left`'s elements back to front onto `right` reproduces
/// [`PersistentList::append`] exactly.
pub fn append_via_fold<T: Clone>(
    left: &PersistentList<T>,
    right: &PersistentList<T>,
) -> PersistentList<T> {
    left.fold_right(right.clone(), |element, accumulator| {
        accumulator.cons(element.clone())
    })
}

/// Flattening as a right fold of append.
///
/// Each inner list is appended exactly once, so the total work is linear in
/// the combined element count.
pub fn concat_via_fold<T: Clone>(
    lists: &PersistentList<PersistentList<T>>,
) -> PersistentList<T> {
    lists.fold_right(PersistentList::new(), |list, accumulator| {
        append_via_fold(list, &accumulator)
    })
}

/// Mapping as a right fold consing transformed elements.
pub fn map_via_fold<T, B, F>(list: &PersistentList<T>, transform: F) -> PersistentList<B>
where
    F: Fn(&T) -> B,
{
    list.fold_right(PersistentList::new(), |element, accumulator| {
        accumulator.cons(transform(element))
    })
}
