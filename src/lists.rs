//! Pairs, immutable cons lists and folds.
//!
//! A [`List`] is either empty or an `Arc`-shared [`Pair`] whose `second`
//! field is the rest of the list. Lists are never mutated after
//! construction, so sharing a tail between lists is free.

use std::fmt;
use std::sync::Arc;

// ============================================================================
// Pairs
// ============================================================================

/// A two-field immutable record. Used both as a plain 2-tuple and as a
/// list node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

/// Curried pair constructor: `pair(first)(second)`.
pub fn pair<A, B>(first: A) -> impl FnOnce(B) -> Pair<A, B> {
    move |second| Pair { first, second }
}

pub fn head<A, B>(p: &Pair<A, B>) -> &A {
    &p.first
}

pub fn tail<A, B>(p: &Pair<A, B>) -> &B {
    &p.second
}

/// A labeled pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vector2<X, Y> {
    pub x: X,
    pub y: Y,
}

/// Curried constructor: `vector2(x)(y)`.
pub fn vector2<X, Y>(x: X) -> impl FnOnce(Y) -> Vector2<X, Y> {
    move |y| Vector2 { x, y }
}

/// Uncurried constructor: `vector2_of(x, y)`.
pub fn vector2_of<X, Y>(x: X, y: Y) -> Vector2<X, Y> {
    Vector2 { x, y }
}

// ============================================================================
// Lists
// ============================================================================

/// An immutable singly-linked list.
pub struct List<T> {
    node: Option<Arc<Pair<T, List<T>>>>,
}

impl<T> List<T> {
    /// The empty list.
    pub const fn empty() -> Self {
        List { node: None }
    }

    /// Prepend `first` to `rest`.
    pub fn cons(first: T, rest: List<T>) -> Self {
        List {
            node: Some(Arc::new(Pair {
                first,
                second: rest,
            })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// The head node, if any.
    pub fn node(&self) -> Option<&Pair<T, List<T>>> {
        self.node.as_deref()
    }

    pub fn first(&self) -> Option<&T> {
        self.node().map(head)
    }

    pub fn rest(&self) -> Option<&List<T>> {
        self.node().map(tail)
    }

    /// O(n) - walks the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.node(),
        }
    }

    /// Whether both lists share the same head node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            node: self.node.clone(),
        }
    }
}

impl<T> From<Pair<T, List<T>>> for List<T> {
    fn from(p: Pair<T, List<T>>) -> Self {
        List {
            node: Some(Arc::new(p)),
        }
    }
}

// Unlinks uniquely-owned nodes one at a time so that dropping a long list
// does not recurse once per element.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.node.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut p) => next = p.second.node.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => continue,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        crate::helpers::vec_to_list(iter)
    }
}

/// Borrowing iterator over a [`List`], head to tail.
pub struct Iter<'a, T> {
    current: Option<&'a Pair<T, List<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        self.current = node.second.node();
        Some(&node.first)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ============================================================================
// Folds
// ============================================================================

/// Left fold: `f(f(f(initial, a), b), c)`.
pub fn foldl<I, A, F>(f: F, items: I, initial: A) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    items.into_iter().fold(initial, f)
}

/// Right fold: `f(f(f(initial, c), b), a)`.
pub fn foldr<I, A, F>(f: F, items: I, initial: A) -> A
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(A, I::Item) -> A,
{
    items.into_iter().rev().fold(initial, f)
}

/// Spread form of [`foldl`]: `foldl!(f; 1, 2, 3; 0)` is `foldl(f, [1, 2, 3], 0)`.
#[macro_export]
macro_rules! foldl {
    ($f:expr; $($item:expr),* $(,)?; $initial:expr) => {
        $crate::lists::foldl($f, [$($item),*], $initial)
    };
}

/// Spread form of [`foldr`]: `foldr!(f; 1, 2, 3; 0)` is `foldr(f, [1, 2, 3], 0)`.
#[macro_export]
macro_rules! foldr {
    ($f:expr; $($item:expr),* $(,)?; $initial:expr) => {
        $crate::lists::foldr($f, [$($item),*], $initial)
    };
}
