//! Partial application in the two calling conventions: curried values and
//! slice-taking native functions.

use once_cell::sync::Lazy;

use crate::value::Value;

/// `PARTIAL(f)(arg)(other) == f(arg)(other)`
pub static PARTIAL: Lazy<Value> = Lazy::new(|| {
    Value::native("partial", |f| {
        Ok(Value::closure(move |arg| {
            let f = f.clone();
            Ok(Value::closure(move |other| f.apply(arg.clone())?.apply(other)))
        }))
    })
});

/// Bind a prefix of arguments to a function over a slice. The result takes
/// the remaining arguments and calls `f` with `args` followed by them.
pub fn partial_variadic<T, R, F>(f: F, args: impl Into<Vec<T>>) -> impl Fn(&[T]) -> R
where
    T: Clone,
    F: Fn(&[T]) -> R,
{
    let bound = args.into();
    move |rest: &[T]| {
        let mut all = Vec::with_capacity(bound.len() + rest.len());
        all.extend_from_slice(&bound);
        all.extend_from_slice(rest);
        f(&all)
    }
}
