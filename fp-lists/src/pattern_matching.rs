//! Pattern matching over list shapes.
//!
//! This module shows:
//! - Structural recursion written directly as `match` over
//!   [`PersistentList::uncons`], the two-shape view of a list
//! - An early-exit arm expressed as a match guard
//! - Shape-and-value dispatch on the first few elements, checked top to
//!   bottom with the first matching arm winning

use fp_common::PersistentList;

// ============================================================================
// Recursion by cases
// ============================================================================

/// Adds up a list by recursing on its shape.
///
/// The empty list sums to 0; otherwise the sum is the head plus the sum of
/// the tail. Call depth equals the list length, so prefer
/// [`PersistentList::sum`] for lists of unknown size.
///
/// # Example
/// ```
/// # use fp_common::plist;
/// # use fp_lists::pattern_matching::sum;
/// assert_eq!(sum(&plist![1, 2, 3, 4]), 10);
/// ```
pub fn sum(list: &PersistentList<i64>) -> i64 {
    match list.uncons() {
        None => 0,
        Some((head, rest)) => head + sum(rest),
    }
}

/// Multiplies a list by recursing on its shape.
///
/// The empty list has product 1.0. The middle arm short-circuits: the moment
/// a 0.0 head is seen, the whole product is 0.0 and the rest of the list is
/// never visited. The guard fires only for a zero at the front of the
/// remaining scan — a plain fold with multiplication (see
/// [`crate::folds::product_via_fold`]) has no such exit.
///
/// # Example
/// ```
/// # use fp_common::plist;
/// # use fp_lists::pattern_matching::product;
/// assert_eq!(product(&plist![2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(product(&plist![1.0, 0.0, f64::NAN]), 0.0);
/// ```
pub fn product(list: &PersistentList<f64>) -> f64 {
    match list.uncons() {
        None => 1.0,
        Some((head, _)) if *head == 0.0 => 0.0,
        Some((head, rest)) => head * product(rest),
    }
}

// ============================================================================
// Shape-and-value dispatch
// ============================================================================

/// Dispatches on the shape and leading values of a list.
///
/// The arms are checked top to bottom and the first match wins:
///
/// 1. `[x, 2, 4, ...]` → `x`
/// 2. `[]` → `42`
/// 3. `[x, y, 3, 4]` plus anything after → `x + y`
/// 4. any other non-empty list → head plus the sum of the tail
///
/// Inspecting the first four elements up front keeps the nested shapes
/// readable as tuple patterns instead of a ladder of `if let`s.
///
/// # Example
/// ```
/// # use fp_common::plist;
/// # use fp_lists::pattern_matching::classify;
/// assert_eq!(classify(&plist![7, 2, 4, 9]), 7);
/// assert_eq!(classify(&plist![]), 42);
/// assert_eq!(classify(&plist![1, 2, 3, 4, 5]), 3);
/// assert_eq!(classify(&plist![9, 8, 7]), 24);
/// ```
pub fn classify(list: &PersistentList<i64>) -> i64 {
    match (list.get(0), list.get(1), list.get(2), list.get(3)) {
        (Some(&x), Some(&2), Some(&4), _) => x,
        (None, ..) => 42,
        (Some(&x), Some(&y), Some(&3), Some(&4)) => x + y,
        (Some(&head), ..) => head + sum(&list.tail()),
    }
}
