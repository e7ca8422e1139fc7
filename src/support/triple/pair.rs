use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered pair of two values of type `T`.
///
/// Returned by [`Triple::other`](super::Triple::other).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pair<T>([T; 2]);

impl<T> Pair<T> {
    /// Creates a pair from its two elements.
    #[must_use]
    pub const fn new(first: T, second: T) -> Self {
        Self([first, second])
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn first_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    /// Returns the second element.
    #[must_use]
    pub fn second(&self) -> &T {
        &self.0[1]
    }

    pub fn second_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }

    /// Consumes the pair and returns the backing array.
    #[must_use]
    pub fn into_inner(self) -> [T; 2] {
        self.0
    }
}

impl<T> From<[T; 2]> for Pair<T> {
    fn from(elements: [T; 2]) -> Self {
        Self(elements)
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}

impl<T> From<Pair<T>> for (T, T) {
    fn from(pair: Pair<T>) -> Self {
        let [first, second] = pair.0;
        (first, second)
    }
}

impl<T: fmt::Display> fmt::Display for Pair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = &self.0;
        write!(f, "({first} {second})")
    }
}
