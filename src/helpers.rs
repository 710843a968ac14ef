//! Composition and conversions between lists and native sequences.

use num_traits::{CheckedAdd, One};
use once_cell::sync::Lazy;

use crate::combinators::{C, I};
use crate::error::Result;
use crate::generators::reverse;
use crate::lists::{List, foldl, foldr, pair};
use crate::value::Value;

/// `FLIP` is the Cardinal.
pub static FLIP: Lazy<Value> = Lazy::new(|| C.clone());

// FLIP(I)(acc)(f) == f(acc): feeds the accumulator through each function.
fn through(applier: &Value) -> impl Fn(Result<Value>, Value) -> Result<Value> + '_ {
    move |acc, f| applier.apply(acc?)?.apply(f)
}

/// Right-to-left composition: `compose([f, g])(x) == f(g(x))`.
///
/// This is `foldr(FLIP(I))` over the functions, starting from the argument.
pub fn compose<Fs>(fns: Fs) -> Result<Value>
where
    Fs: IntoIterator<Item = Value>,
{
    let fns: Vec<Value> = fns.into_iter().collect();
    let applier = FLIP.apply(I.clone())?;
    Ok(Value::closure(move |x| {
        foldr(through(&applier), fns.iter().cloned(), Ok(x))
    }))
}

/// Left-to-right composition: `pipe([f, g])(x) == g(f(x))`.
///
/// This is `foldl(FLIP(I))` over the functions, starting from the argument.
pub fn pipe<Fs>(fns: Fs) -> Result<Value>
where
    Fs: IntoIterator<Item = Value>,
{
    let fns: Vec<Value> = fns.into_iter().collect();
    let applier = FLIP.apply(I.clone())?;
    Ok(Value::closure(move |x| {
        foldl(through(&applier), fns.iter().cloned(), Ok(x))
    }))
}

/// Spread form of [`compose`]: `compose!(f, g)`.
#[macro_export]
macro_rules! compose {
    ($($f:expr),* $(,)?) => {
        $crate::helpers::compose([$($f),*])
    };
}

/// Spread form of [`pipe`]: `pipe!(f, g)`.
#[macro_export]
macro_rules! pipe {
    ($($f:expr),* $(,)?) => {
        $crate::helpers::pipe([$($f),*])
    };
}

/// Elements of `list`, head first.
pub fn list_to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Build a list whose head is the first element of `items`.
pub fn vec_to_list<I>(items: I) -> List<I::Item>
where
    I: IntoIterator,
{
    foldl(
        |rest, item| List::from(pair(item)(rest)),
        reverse(items),
        List::empty(),
    )
}

/// The inclusive range `low..=high` as a list; empty when `low > high`.
pub fn range_list<T>(low: T, high: T) -> List<T>
where
    T: Clone + PartialOrd + One + CheckedAdd,
{
    let mut items = Vec::new();
    let mut current = low;
    while current <= high {
        let next = current.checked_add(&T::one());
        items.push(current);
        match next {
            Some(n) => current = n,
            None => break,
        }
    }
    vec_to_list(items)
}

/// Apply `f` to every element, keeping order.
pub fn map_list<T, U, F>(f: F, list: &List<T>) -> List<U>
where
    F: FnMut(&T) -> U,
{
    vec_to_list(list.iter().map(f).collect::<Vec<_>>())
}

/// Map over a native sequence.
pub fn map<T, U, F>(f: F, items: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}
