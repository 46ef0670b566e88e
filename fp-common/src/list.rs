//! # Persistent Singly-Linked Lists
//!
//! An immutable cons list with structural sharing, in the Lisp/ML tradition:
//! a list is either empty or a cons cell holding one element and the rest of
//! the list.
//!
//! ## Philosophy
//!
//! Every operation returns a new list; no node is ever mutated after
//! construction. Because of that, tails can be shared freely between many
//! list values — prepending with [`PersistentList::cons`] is O(1) in time and
//! additional space, and replacing the first element with
//! [`PersistentList::set_head`] reuses the entire original tail.
//!
//! Nodes are reference counted with [`Arc`], so cloning a list is O(1) and a
//! list of `Send + Sync` elements can be read from any number of threads
//! without locking: immutability is the synchronization.
//!
//! ## Example
//!
//! ```
//! use fp_common::{plist, PersistentList};
//!
//! let list = plist![1, 2, 3];
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.to_string(), "1, 2, 3");
//!
//! // Prepending shares the original list as the new tail.
//! let longer = list.cons(0);
//! assert_eq!(longer.to_string(), "0, 1, 2, 3");
//! assert!(longer.tail().ptr_eq(&list));
//! ```
//!
//! ## Stack depth
//!
//! All traversals here are explicit loops, and dropping a list unlinks its
//! nodes iteratively, so no operation consumes stack proportional to the
//! list length. The recursive formulations live in the exercises crate,
//! where their stack cost is the point.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::sync::Arc;

/// Construct a [`PersistentList`] from a sequence of elements.
///
/// # Example
///
/// ```
/// use fp_common::{plist, PersistentList};
///
/// let list = plist![1, 2, 3];
/// assert_eq!(list, PersistentList::from(vec![1, 2, 3]));
///
/// let empty: PersistentList<i32> = plist![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! plist {
    () => { $crate::PersistentList::new() };

    ( $($element:expr),+ $(,)? ) => {
        $crate::PersistentList::from(::std::vec![ $($element),+ ])
    };
}

/// An immutable singly-linked list with structural sharing.
///
/// A list is one of two shapes: empty, or an element followed by another
/// list. The empty case is `None` inside; the non-empty case is a
/// reference-counted cons cell, so `clone` is O(1) and never copies
/// elements. Inspect the shape with [`PersistentList::uncons`],
/// [`PersistentList::head`], and [`PersistentList::is_empty`].
///
/// | Operation                       | Complexity |
/// |---------------------------------|------------|
/// | `clone`, `cons`, `head`, `tail` | O(1)       |
/// | `len`, `get`, folds, `reverse`  | O(n)       |
/// | `append`, `map`, `init`         | O(n)       |
pub struct PersistentList<T> {
    head: Option<Arc<Node<T>>>,
}

/// A cons cell: one element plus the remainder of the list.
struct Node<T> {
    element: T,
    rest: PersistentList<T>,
}

impl<T> PersistentList<T> {
    /// Creates the empty list.
    #[must_use]
    pub const fn new() -> Self {
        PersistentList { head: None }
    }

    /// Creates a list containing a single element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a new list with `element` prepended.
    ///
    /// The new list shares this list as its tail. Time: O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.to_string(), "1, 2, 3");
    /// ```
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        PersistentList {
            head: Some(Arc::new(Node {
                element,
                rest: self.clone(),
            })),
        }
    }

    /// Returns the first element, or `None` for the empty list.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Splits the list into its first element and the rest, or returns
    /// `None` for the empty list.
    ///
    /// This is the pattern-matching view of the two list shapes:
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// let list = plist!["a", "b"];
    /// match list.uncons() {
    ///     Some((head, rest)) => {
    ///         assert_eq!(*head, "a");
    ///         assert_eq!(rest.to_string(), "b");
    ///     }
    ///     None => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, &PersistentList<T>)> {
        self.head.as_deref().map(|node| (&node.element, &node.rest))
    }

    /// Returns the list without its first element.
    ///
    /// Total: the tail of the empty list is the empty list, not an error.
    /// The result shares structure with this list. Time: O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::{plist, PersistentList};
    ///
    /// assert_eq!(plist![1, 2, 3].tail(), plist![2, 3]);
    /// assert_eq!(PersistentList::<i32>::new().tail(), PersistentList::new());
    /// ```
    #[must_use]
    pub fn tail(&self) -> Self {
        match self.head.as_deref() {
            None => Self::new(),
            Some(node) => node.rest.clone(),
        }
    }

    /// Returns a new list with the first element replaced by `element`.
    ///
    /// Total: on the empty list this produces the single-element list. The
    /// original tail is shared, never copied:
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// let list = plist![1, 2, 3];
    /// let replaced = list.set_head(9);
    /// assert_eq!(replaced, plist![9, 2, 3]);
    /// assert!(replaced.tail().ptr_eq(&list.tail()));
    /// ```
    #[must_use]
    pub fn set_head(&self, element: T) -> Self {
        match self.head.as_deref() {
            None => Self::singleton(element),
            Some(node) => node.rest.cons(element),
        }
    }

    /// Returns the list without its first `count` elements.
    ///
    /// `drop_first(0)` is the list itself; dropping past the end yields the
    /// empty list. The result is a shared suffix of this list — nothing is
    /// copied. Time: O(count).
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// let list = plist![1, 2, 3];
    /// assert_eq!(list.drop_first(0), list);
    /// assert_eq!(list.drop_first(2), plist![3]);
    /// assert!(list.drop_first(5).is_empty());
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        let mut current = self;
        let mut remaining = count;
        while remaining > 0 {
            match current.uncons() {
                None => break,
                Some((_, rest)) => {
                    current = rest;
                    remaining -= 1;
                }
            }
        }
        current.clone()
    }

    /// Removes elements from the front while `predicate` holds.
    ///
    /// Stops at the first element for which the predicate is false (or at
    /// the end of the list). The result is a shared suffix of this list.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// let list = plist![1, 2, 3, 1, 2];
    /// assert_eq!(list.drop_while(|&x| x < 3), plist![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self;
        while let Some((head, rest)) = current.uncons() {
            if !predicate(head) {
                break;
            }
            current = rest;
        }
        current.clone()
    }

    /// Returns the number of elements. Time: O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the element at `index`, or `None` past the end. Time: O(index).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Folds the list front to back, threading an accumulator.
    ///
    /// Runs as a plain loop, so lists of any length fold in constant stack
    /// space.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// let joined = plist!["a", "b", "c"].fold_left(String::new(), |acc, s| acc + s);
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn fold_left<B, F>(&self, seed: B, mut combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        let mut accumulator = seed;
        for element in self {
            accumulator = combine(accumulator, element);
        }
        accumulator
    }

    /// Folds the list back to front.
    ///
    /// Combines from the last element backward: `fold_right([a, b, c], z, f)`
    /// is `f(a, f(b, f(c, z)))`. Implemented as a left fold over the reversed
    /// element sequence — one extra linear pass buys constant stack depth,
    /// unlike the textbook recursive formulation.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// let joined = plist!["a", "b", "c"].fold_right(String::new(), |s, acc| acc + s);
    /// assert_eq!(joined, "cba");
    /// ```
    pub fn fold_right<B, F>(&self, seed: B, mut combine: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rfold(seed, |accumulator, element| combine(element, accumulator))
    }

    /// Returns a new list with `transform` applied to every element.
    ///
    /// Order and length are preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// assert_eq!(plist![1, 2, 3].map(|x| x * x), plist![1, 4, 9]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, transform: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        let transformed: Vec<B> = self.iter().map(transform).collect();
        let mut list = PersistentList::new();
        for element in transformed.into_iter().rev() {
            list = list.cons(element);
        }
        list
    }

    /// Adds up all elements; the empty list sums to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::{plist, PersistentList};
    ///
    /// assert_eq!(plist![1, 2, 3, 4].sum(), 10);
    /// assert_eq!(PersistentList::<i32>::new().sum(), 0);
    /// ```
    #[must_use]
    pub fn sum(&self) -> T
    where
        T: Copy + std::iter::Sum,
    {
        self.iter().copied().sum()
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns `true` if the two lists are the same list in memory.
    ///
    /// Useful for observing structural sharing; lists that are merely equal
    /// element-wise compare `false` here.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Returns the list without its last element.
    ///
    /// Total: the empty and single-element lists both map to the empty list.
    /// The elements are buffered once and the result is built back to front,
    /// so the whole operation is linear — never the quadratic
    /// repeated-append formulation.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::{plist, PersistentList};
    ///
    /// assert_eq!(plist![1, 2, 3].init(), plist![1, 2]);
    /// assert_eq!(plist![1].init(), PersistentList::new());
    /// assert_eq!(PersistentList::<i32>::new().init(), PersistentList::new());
    /// ```
    #[must_use]
    pub fn init(&self) -> Self {
        let mut buffer: Vec<&T> = self.iter().collect();
        buffer.pop();
        let mut list = Self::new();
        for element in buffer.into_iter().rev() {
            list = list.cons(element.clone());
        }
        list
    }

    /// Returns the elements in opposite order.
    ///
    /// A left fold consing onto the empty list: linear time, constant stack.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// assert_eq!(plist![1, 2, 3].reverse(), plist![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::new(), |accumulator, element| {
            accumulator.cons(element.clone())
        })
    }

    /// Returns a list of this list's elements followed by `other`'s.
    ///
    /// Equivalent to right-folding `cons` over this list with `other` as the
    /// seed; the implementation buffers this list's elements and conses them
    /// back to front, so `other` is shared wholesale and stack depth stays
    /// constant. Time: O(self.len()).
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// assert_eq!(plist![1, 2].append(&plist![3, 4]), plist![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let elements: Vec<&T> = self.iter().collect();
        let mut list = other.clone();
        for element in elements.into_iter().rev() {
            list = list.cons(element.clone());
        }
        list
    }
}

impl<T: Clone> PersistentList<PersistentList<T>> {
    /// Flattens a list of lists into one, preserving outer and inner order.
    ///
    /// A right fold of [`PersistentList::append`] with the empty list as the
    /// seed, so the total work is linear in the combined length.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::plist;
    ///
    /// let nested = plist![plist![1, 2], plist![3], plist![4, 5]];
    /// assert_eq!(nested.concat(), plist![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn concat(&self) -> PersistentList<T> {
        let lists: Vec<&PersistentList<T>> = self.iter().collect();
        lists
            .into_iter()
            .rfold(PersistentList::new(), |accumulator, list| {
                list.append(&accumulator)
            })
    }
}

impl PersistentList<f64> {
    /// Multiplies all elements; the empty list has product 1.0.
    ///
    /// Scans front to back and short-circuits to 0.0 at the first 0.0
    /// encountered, without touching the remainder of the list. The
    /// short-circuit applies only to that front-to-back scan — a plain fold
    /// with multiplication would visit every element.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_common::{plist, PersistentList};
    ///
    /// assert_eq!(plist![2.0, 3.0, 4.0].product(), 24.0);
    /// assert_eq!(PersistentList::<f64>::new().product(), 1.0);
    ///
    /// // The element after the zero is never multiplied in; if it were,
    /// // 0.0 * NAN would poison the result.
    /// assert_eq!(plist![2.0, 0.0, f64::NAN].product(), 0.0);
    /// ```
    #[must_use]
    pub fn product(&self) -> f64 {
        let mut accumulator = 1.0;
        for &factor in self {
            if factor == 0.0 {
                return 0.0;
            }
            accumulator *= factor;
        }
        accumulator
    }
}

// Core trait implementations. Clone and Default are written by hand (the
// derives would demand `T: Clone` / `T: Default`, which the reference count
// makes unnecessary).

impl<T> Clone for PersistentList<T> {
    /// Clones the handle, not the elements. Time: O(1).
    fn clone(&self) -> Self {
        PersistentList {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for PersistentList<T> {
    /// The empty list.
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        // The compiler-generated drop recurses once per node. Unlink the
        // chain iteratively instead, stopping at the first node still
        // shared with another list.
        let mut current = self.head.take();
        while let Some(node) = current {
            match Arc::try_unwrap(node) {
                Ok(mut owned) => current = owned.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Clone> Add for &PersistentList<T> {
    type Output = PersistentList<T>;

    fn add(self, other: Self) -> PersistentList<T> {
        self.append(other)
    }
}

impl<T: Clone> Add for PersistentList<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    /// Renders the elements comma-and-space separated with no trailing
    /// separator; the empty list renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separate = false;
        for element in self {
            if separate {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
            separate = true;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Iteration and conversions.

/// Borrowing iterator over a [`PersistentList`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.rest.head.as_deref();
            &node.element
        })
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    /// Builds a list in the order of the source: the last element ends up
    /// innermost, exactly as if `cons` had been right-folded over the
    /// sequence.
    fn from_iter<I: IntoIterator<Item = T>>(source: I) -> Self {
        let elements: Vec<T> = source.into_iter().collect();
        let mut list = Self::new();
        for element in elements.into_iter().rev() {
            list = list.cons(element);
        }
        list
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for PersistentList<T> {
    fn from(elements: &[T]) -> Self {
        elements.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_construction_orders_elements() {
        let consed = PersistentList::new().cons(3).cons(2).cons(1);
        assert_eq!(consed, plist![1, 2, 3]);
        assert_eq!(PersistentList::from(vec![1, 2, 3]), consed);
        assert_eq!(PersistentList::from(&[1, 2, 3][..]), consed);
    }

    #[test]
    fn test_empty_list() {
        let empty: PersistentList<i32> = plist![];
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.head(), None);
        assert_eq!(empty.uncons(), None);
        assert_eq!(empty.sum(), 0);
        assert_eq!(empty, PersistentList::default());
    }

    #[test]
    fn test_head_and_get() {
        let list = plist![10, 20, 30];
        assert_eq!(list.head(), Some(&10));
        assert_eq!(list.get(0), Some(&10));
        assert_eq!(list.get(2), Some(&30));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn test_tail_is_total() {
        assert_eq!(plist![1, 2, 3].tail(), plist![2, 3]);
        assert_eq!(plist![1].tail(), PersistentList::new());
        assert_eq!(PersistentList::<i32>::new().tail(), PersistentList::new());
    }

    #[test]
    fn test_set_head_is_total() {
        assert_eq!(plist![1, 2, 3].set_head(9), plist![9, 2, 3]);
        assert_eq!(PersistentList::new().set_head(7), plist![7]);
    }

    #[test]
    fn test_set_head_shares_tail() {
        let list = plist![1, 2, 3];
        let replaced = list.set_head(9);
        assert!(replaced.tail().ptr_eq(&list.tail()));
    }

    #[test]
    fn test_drop_first() {
        let list = plist![1, 2, 3];
        assert!(list.drop_first(0).ptr_eq(&list));
        assert_eq!(list.drop_first(1), plist![2, 3]);
        assert_eq!(list.drop_first(3), PersistentList::new());
        assert_eq!(list.drop_first(5), PersistentList::new());
    }

    #[test]
    fn test_drop_first_shares_suffix() {
        let list = plist![1, 2, 3, 4];
        assert!(list.drop_first(2).ptr_eq(&list.tail().tail()));
    }

    #[test]
    fn test_drop_while() {
        let list = plist![1, 2, 3, 1, 2];
        assert_eq!(list.drop_while(|&x| x < 3), plist![3, 1, 2]);
        assert!(list.drop_while(|_| true).is_empty());
        assert!(list.drop_while(|_| false).ptr_eq(&list));
    }

    #[test]
    fn test_init() {
        assert_eq!(plist![1, 2, 3].init(), plist![1, 2]);
        assert_eq!(plist![1].init(), PersistentList::new());
        assert_eq!(PersistentList::<i32>::new().init(), PersistentList::new());
    }

    #[test]
    fn test_fold_left_threads_front_to_back() {
        let list = plist!["a", "b", "c"];
        let joined = list.fold_left(String::new(), |acc, s| acc + s);
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_fold_right_combines_back_to_front() {
        let list = plist!["a", "b", "c"];
        let joined = list.fold_right(String::new(), |s, acc| acc + s);
        assert_eq!(joined, "cba");
    }

    #[test]
    fn test_fold_right_with_cons_rebuilds_the_list() {
        let list = plist![1, 2, 3, 4];
        let rebuilt = list.fold_right(PersistentList::new(), |&x, acc| acc.cons(x));
        assert_eq!(rebuilt, list);
    }

    #[test]
    fn test_long_lists_fold_and_drop_without_overflow() {
        // Both the folds and the final unlinking are iterative; either one
        // written recursively would overflow the stack here.
        let list: PersistentList<i64> = (0..200_000).collect();
        assert_eq!(list.fold_left(0, |acc, _| acc + 1), 200_000);
        assert_eq!(list.fold_right(0, |_, acc| acc + 1), 200_000);
    }

    #[test]
    fn test_map() {
        assert_eq!(plist![1, 2, 3].map(|x| x * x), plist![1, 4, 9]);
        let empty: PersistentList<i32> = plist![];
        assert_eq!(empty.map(|x| x + 1), plist![]);
    }

    #[test]
    fn test_sum() {
        assert_eq!(plist![1, 2, 3, 4].sum(), 10);
        assert_eq!(plist![1.5, 2.5].sum(), 4.0);
    }

    #[test]
    fn test_product_short_circuits_on_zero() {
        assert_eq!(plist![2.0, 3.0, 4.0].product(), 24.0);
        assert_eq!(PersistentList::<f64>::new().product(), 1.0);
        // 0.0 * NAN is NAN, so an exact 0.0 proves the scan stopped at the
        // zero and never touched the trailing element.
        assert_eq!(plist![1.0, 2.0, 0.0, f64::NAN].product(), 0.0);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(plist![1, 2, 3].reverse(), plist![3, 2, 1]);
        let empty: PersistentList<i32> = plist![];
        assert_eq!(empty.reverse(), plist![]);
    }

    #[test]
    fn test_append() {
        assert_eq!(plist![1, 2].append(&plist![3, 4]), plist![1, 2, 3, 4]);
        assert_eq!(&plist![1] + &plist![2], plist![1, 2]);
    }

    #[test]
    fn test_append_shares_right_operand() {
        let left = plist![1, 2];
        let right = plist![3, 4];
        assert!(left.append(&right).drop_first(2).ptr_eq(&right));
    }

    #[test]
    fn test_concat() {
        let nested = plist![plist![1, 2, 3], plist![4, 5, 6], plist![7, 8, 9]];
        assert_eq!(nested.concat().to_string(), "1, 2, 3, 4, 5, 6, 7, 8, 9");
        let no_lists: PersistentList<PersistentList<i32>> = plist![];
        assert_eq!(no_lists.concat(), PersistentList::new());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(plist![1, 2, 3].to_string(), "1, 2, 3");
        assert_eq!(plist![1].to_string(), "1");
        assert_eq!(PersistentList::<i32>::new().to_string(), "");
        assert_eq!(format!("{:?}", plist![1, 2, 3]), "[1, 2, 3]");
    }

    #[test]
    fn test_equality_ignores_sharing() {
        let shared_tail = plist![2, 3];
        let first = shared_tail.cons(1);
        let second = plist![1, 2, 3];
        assert_eq!(first, second);
        assert!(!first.ptr_eq(&second));
        assert_ne!(plist![1, 2], plist![1, 2, 3]);
    }

    #[test]
    fn test_dropping_a_list_leaves_shared_suffixes_alive() {
        let long = plist![1, 2, 3, 4, 5];
        let suffix = long.drop_first(3);
        drop(long);
        assert_eq!(suffix, plist![4, 5]);
    }

    #[test]
    fn test_iteration() {
        let list = plist![1, 2, 3];
        let collected: Vec<i32> = list.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        let round_tripped: PersistentList<i32> = collected.into_iter().collect();
        assert_eq!(round_tripped, list);
    }

    proptest! {
        #[test]
        fn prop_length_matches_folded_count(elements: Vec<i32>) {
            let list = PersistentList::from(elements);
            prop_assert_eq!(list.len(), list.fold_left(0, |acc, _| acc + 1));
            prop_assert_eq!(list.len(), list.fold_right(0, |_, acc| acc + 1));
        }

        #[test]
        fn prop_reverse_is_an_involution(elements: Vec<i32>) {
            let list = PersistentList::from(elements);
            prop_assert_eq!(list.reverse().reverse(), list);
        }

        #[test]
        fn prop_append_concatenates(left: Vec<i32>, right: Vec<i32>) {
            let expected: PersistentList<i32> =
                left.iter().chain(right.iter()).copied().collect();
            let a = PersistentList::from(left);
            let b = PersistentList::from(right);
            prop_assert_eq!(a.append(&b).len(), a.len() + b.len());
            prop_assert_eq!(a.append(&b), expected);
        }

        #[test]
        fn prop_empty_is_the_append_identity(elements: Vec<i32>) {
            let list = PersistentList::from(elements);
            let empty = PersistentList::new();
            prop_assert_eq!(list.append(&empty), list.clone());
            prop_assert_eq!(empty.append(&list), list);
        }

        #[test]
        fn prop_fold_right_with_cons_is_identity(elements: Vec<i32>) {
            let list = PersistentList::from(elements);
            let rebuilt = list.fold_right(PersistentList::new(), |&x, acc| acc.cons(x));
            prop_assert_eq!(rebuilt, list);
        }
    }
}
