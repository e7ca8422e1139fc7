//! Ordered triples of homogeneous elements.
//!
//! A [`Triple<T>`] holds exactly three values of the same type, addressed as
//! [`first`](Triple::first), [`second`](Triple::second) and
//! [`third`](Triple::third). Triples are plain values: cheap to construct,
//! compared element-wise, and never resized.
//!
//! Besides positional access, triples provide a few comparison helpers used
//! when matching mesh entities described by three indices:
//!
//! - [`Triple::other`] returns the two elements that are not a given one.
//! - [`Triple::compare`] tells apart identical, reversed and unrelated triples.
//! - [`reverse`] swaps the first and third elements.
//!
//! # Ordering
//!
//! The `<` relation is not lexicographic. A triple `a` orders before `b` when
//! both of its first two elements are strictly smaller, or when neither of
//! its first two elements is larger and its third element is smaller:
//!
//! ```text
//! a < b  ⇔  (a₁ < b₁ ∧ a₂ < b₂) ∨ (¬(b₁ < a₁) ∧ ¬(b₂ < a₂) ∧ a₃ < b₃)
//! ```
//!
//! The remaining operators are derived from it: `a <= b` is `!(b < a)`,
//! `a > b` is `b < a`, and `a >= b` is `!(a < b)`. Triples that neither
//! order nor compare equal are therefore both `<=` and `>=` each other.
//!
//! ```
//! use pans_models::support::triple::Triple;
//!
//! assert!(Triple::new(1, 2, 3) < Triple::new(1, 2, 4));
//! assert!(!(Triple::new(1, 2, 9) < Triple::new(2, 2, 0)));
//! ```

mod error;
mod pair;
mod parse;

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

pub use error::{ParseTripleError, TripleError};
pub use pair::Pair;

/// An ordered triple of three values of type `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triple<T>([T; 3]);

/// How two triples relate, as reported by [`Triple::compare`].
///
/// Converts into the integer codes `+1`, `-1` and `0` via `i32::from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correspondence {
    /// Element-wise equal (`+1`).
    Identical,
    /// Equal once one of the triples is reversed (`-1`).
    Reversed,
    /// Neither identical nor reversed (`0`).
    Unrelated,
}

impl From<Correspondence> for i32 {
    fn from(correspondence: Correspondence) -> Self {
        match correspondence {
            Correspondence::Identical => 1,
            Correspondence::Reversed => -1,
            Correspondence::Unrelated => 0,
        }
    }
}

impl<T> Triple<T> {
    /// Creates a triple from its three elements.
    #[must_use]
    pub const fn new(first: T, second: T, third: T) -> Self {
        Self([first, second, third])
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// Returns the first element mutably.
    pub fn first_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    /// Returns the second element.
    #[must_use]
    pub fn second(&self) -> &T {
        &self.0[1]
    }

    /// Returns the second element mutably.
    pub fn second_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }

    /// Returns the third element.
    #[must_use]
    pub fn third(&self) -> &T {
        &self.0[2]
    }

    /// Returns the third element mutably.
    pub fn third_mut(&mut self) -> &mut T {
        &mut self.0[2]
    }

    /// Returns the backing array.
    #[must_use]
    pub fn as_array(&self) -> &[T; 3] {
        &self.0
    }

    /// Consumes the triple and returns the backing array.
    #[must_use]
    pub fn into_inner(self) -> [T; 3] {
        self.0
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Clone> Triple<T> {
    /// Returns a new triple `(third, second, first)`.
    ///
    /// The receiver is left untouched. See also the free function [`reverse`].
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [first, second, third] = &self.0;
        Self::new(third.clone(), second.clone(), first.clone())
    }
}

impl<T: Clone + PartialEq> Triple<T> {
    /// Returns the two elements other than `value`, in their original order.
    ///
    /// ```
    /// use pans_models::support::triple::{Pair, Triple};
    ///
    /// let triple = Triple::new(1, 2, 3);
    /// assert_eq!(triple.other(&2).unwrap(), Pair::new(1, 3));
    /// assert!(Triple::new(1, 1, 2).other(&2).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TripleError::RepeatedElements`] if the elements are not
    /// pairwise distinct, whatever `value` is, and
    /// [`TripleError::NotFound`] if `value` matches none of them.
    pub fn other(&self, value: &T) -> Result<Pair<T>, TripleError<T>> {
        let [first, second, third] = &self.0;

        if first == second || first == third || second == third {
            return Err(TripleError::RepeatedElements {
                triple: self.clone(),
            });
        }

        if first == value {
            Ok(Pair::new(second.clone(), third.clone()))
        } else if second == value {
            Ok(Pair::new(first.clone(), third.clone()))
        } else if third == value {
            Ok(Pair::new(first.clone(), second.clone()))
        } else {
            Err(TripleError::NotFound {
                triple: self.clone(),
                value: value.clone(),
            })
        }
    }

    /// Reports whether `a` and `b` are identical, reversed, or unrelated.
    ///
    /// Equality is checked first, so a triple compared with itself is always
    /// [`Correspondence::Identical`], even when it reads the same backwards.
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> Correspondence {
        if a == b {
            Correspondence::Identical
        } else if *a == reverse(b) {
            Correspondence::Reversed
        } else {
            Correspondence::Unrelated
        }
    }
}

/// Returns `(third, second, first)` of `triple` as a new triple.
#[must_use]
pub fn reverse<T: Clone>(triple: &Triple<T>) -> Triple<T> {
    triple.reversed()
}

impl<T> From<[T; 3]> for Triple<T> {
    fn from(elements: [T; 3]) -> Self {
        Self(elements)
    }
}

impl<T> From<(T, T, T)> for Triple<T> {
    fn from((first, second, third): (T, T, T)) -> Self {
        Self::new(first, second, third)
    }
}

impl<T> From<Triple<T>> for [T; 3] {
    fn from(triple: Triple<T>) -> Self {
        triple.0
    }
}

impl<'a, T> IntoIterator for &'a Triple<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntoIterator for Triple<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Orders triples by the two-branch rule described in the module docs.
///
/// `le` and `ge` are the negations of the reversed strict relation, so they
/// also hold for triples that `partial_cmp` reports as incomparable.
impl<T: PartialOrd> PartialOrd for Triple<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if precedes(self, other) {
            Some(Ordering::Less)
        } else if precedes(other, self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        precedes(self, other)
    }

    fn le(&self, other: &Self) -> bool {
        !precedes(other, self)
    }

    fn gt(&self, other: &Self) -> bool {
        precedes(other, self)
    }

    fn ge(&self, other: &Self) -> bool {
        !precedes(self, other)
    }
}

/// The strict `a < b` relation.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn precedes<T: PartialOrd>(a: &Triple<T>, b: &Triple<T>) -> bool {
    let [a1, a2, a3] = &a.0;
    let [b1, b2, b3] = &b.0;

    (a1 < b1 && a2 < b2) || (!(b1 < a1) && !(b2 < a2) && a3 < b3)
}

/// Writes the triple as `(first second third)`.
impl<T: fmt::Display> fmt::Display for Triple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = &self.0;
        write!(f, "({first} {second} {third})")
    }
}
