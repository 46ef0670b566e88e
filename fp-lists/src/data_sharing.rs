//! Data sharing in immutable lists.
//!
//! Removing elements from the front of a persistent list does not copy
//! anything: the result *is* a suffix of the original, reached by walking
//! past the dropped cells. This module shows:
//! - Recursive formulations of `drop`, `drop_while`, and `init`
//! - Why the library versions ([`PersistentList::drop_first`] and friends)
//!   are loops instead: recursion depth here grows with the input
//!
//! The recursive and iterative formulations agree on every input; the tests
//! pin that down.

use fp_common::PersistentList;

/// Removes the first `count` elements by structural recursion.
///
/// `count == 0` returns the list unchanged; running off the end yields the
/// empty list. Each recursive step consumes a stack frame, so the library's
/// [`PersistentList::drop_first`] loop is the one to reach for on long
/// lists.
///
/// # Example
/// ```
/// # use fp_common::plist;
/// # use fp_lists::data_sharing::drop_recursive;
/// assert_eq!(drop_recursive(&plist![1, 2, 3], 1), plist![2, 3]);
/// assert!(drop_recursive(&plist![1, 2, 3], 5).is_empty());
/// ```
pub fn drop_recursive<T>(list: &PersistentList<T>, count: usize) -> PersistentList<T> {
    if count == 0 {
        return list.clone();
    }
    match list.uncons() {
        None => list.clone(),
        Some((_, rest)) => drop_recursive(rest, count - 1),
    }
}

/// Removes leading elements matching `predicate` by structural recursion.
///
/// Stops at the first element where the predicate fails, or at the end.
///
/// # Example
/// ```
/// # use fp_common::plist;
/// # use fp_lists::data_sharing::drop_while_recursive;
/// let list = plist![1, 2, 3, 1, 2];
/// assert_eq!(drop_while_recursive(&list, |&x| x < 3), plist![3, 1, 2]);
/// ```
pub fn drop_while_recursive<T, P>(list: &PersistentList<T>, mut predicate: P) -> PersistentList<T>
where
    P: FnMut(&T) -> bool,
{
    match list.uncons() {
        Some((head, rest)) if predicate(head) => drop_while_recursive(rest, predicate),
        _ => list.clone(),
    }
}

/// Returns all elements but the last by structural recursion.
///
/// The empty and single-element lists both map to the empty list. Unlike
/// the front-of-list operations above, this one cannot share anything: every
/// cell up to the last is rebuilt, and the recursion holds one stack frame
/// per element. [`PersistentList::init`] gets the same result from a single
/// buffered pass.
///
/// # Example
/// ```
/// # use fp_common::{plist, PersistentList};
/// # use fp_lists::data_sharing::init_recursive;
/// assert_eq!(init_recursive(&plist![1, 2, 3]), plist![1, 2]);
/// assert_eq!(init_recursive(&plist![1]), PersistentList::new());
/// ```
pub fn init_recursive<T: Clone>(list: &PersistentList<T>) -> PersistentList<T> {
    match list.uncons() {
        None => PersistentList::new(),
        Some((_, rest)) if rest.is_empty() => PersistentList::new(),
        Some((head, rest)) => init_recursive(rest).cons(head.clone()),
    }
}
