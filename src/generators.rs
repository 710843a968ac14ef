//! Lazy, possibly infinite sequences.
//!
//! Every sequence here is an [`Iterator`]: constructing one does no work,
//! and each call to `next` computes exactly one element from the state kept
//! since the previous call. Infinite sequences never return `None`; bound
//! them with [`take`] before collecting.

use std::ops::Add;

use num_traits::{CheckedAdd, One, Zero};
use tracing::trace;

// ============================================================================
// Range
// ============================================================================

/// Values `low, low + step, ...` strictly below `high`.
///
/// A non-positive `step` never reaches `high`, so the range is unbounded
/// whenever `low < high`. The range ends early if the next value would
/// overflow `T`.
#[derive(Clone, Debug)]
pub struct Range<T> {
    next: Option<T>,
    high: T,
    step: T,
}

pub fn range<T>(low: T, high: T, step: T) -> Range<T> {
    Range {
        next: Some(low),
        high,
        step,
    }
}

/// `range(0, 0, 1)`: empty.
impl<T: Zero + One> Default for Range<T> {
    fn default() -> Self {
        range(T::zero(), T::zero(), T::one())
    }
}

impl<T> Iterator for Range<T>
where
    T: PartialOrd + CheckedAdd,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if current >= self.high {
            return None;
        }
        self.next = current.checked_add(&self.step);
        Some(current)
    }
}

// ============================================================================
// Natural numbers
// ============================================================================

/// `1, 2, 3, ...` without end.
#[derive(Clone, Debug)]
pub struct NaturalNumbers<T> {
    last: Option<T>,
}

pub fn natural_numbers<T>() -> NaturalNumbers<T> {
    NaturalNumbers { last: None }
}

impl<T> Iterator for NaturalNumbers<T>
where
    T: Clone + One + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let number = match self.last.take() {
            Some(n) => n + T::one(),
            None => T::one(),
        };
        self.last = Some(number.clone());
        Some(number)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// ============================================================================
// Fibonacci
// ============================================================================

/// `1, 1, 2, 3, 5, ...` without end, keeping only the last two values.
///
/// Machine integers overflow after a few dozen terms (`u64` at the 94th);
/// use `num_bigint::BigInt` for unbounded output.
#[derive(Clone, Debug)]
pub struct Fibonacci<T> {
    previous: T,
    current: T,
}

pub fn fibo<T: Zero + One>() -> Fibonacci<T> {
    Fibonacci {
        previous: T::one(),
        current: T::zero(),
    }
}

impl<T> Iterator for Fibonacci<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let sum = self.previous.clone() + self.current.clone();
        self.previous = std::mem::replace(&mut self.current, sum.clone());
        Some(sum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// ============================================================================
// Take
// ============================================================================

/// At most `remaining` elements of `inner`. Stops pulling from `inner` as
/// soon as the count is reached or `inner` runs out.
#[derive(Clone, Debug)]
pub struct Take<I> {
    remaining: usize,
    inner: I,
}

pub fn take<I: IntoIterator>(quantity: usize, seq: I) -> Take<I::IntoIter> {
    Take {
        remaining: quantity,
        inner: seq.into_iter(),
    }
}

/// Curried form of [`take`]: `take_n(3)(natural_numbers::<u32>())`.
pub fn take_n<I: IntoIterator>(quantity: usize) -> impl FnOnce(I) -> Take<I::IntoIter> {
    move |seq| take(quantity, seq)
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.inner.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.inner.size_hint();
        let upper = match upper {
            Some(n) => n.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}

// ============================================================================
// Reverse
// ============================================================================

/// A finite sequence played back from its end.
#[derive(Clone, Debug)]
pub struct Reverse<T> {
    items: Vec<T>,
}

/// Drain `seq` completely, then yield its elements last to first.
///
/// Never returns for an infinite `seq`.
pub fn reverse<I: IntoIterator>(seq: I) -> Reverse<I::Item> {
    let items: Vec<I::Item> = seq.into_iter().collect();
    trace!(len = items.len(), "materialized sequence for reverse");
    Reverse { items }
}

impl<T> Iterator for Reverse<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for Reverse<T> {}
