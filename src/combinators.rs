//! The primitive combinators.
//!
//! Each one exists twice: as a generic Rust function (`i`, `k`, `ki`, `c`)
//! for statically typed use, and as a [`Value`] (`I`, `M`, `K`, `KI`, `C`)
//! that accepts any other value, including itself.
//!
//! Self-application has no static type, so the Mockingbird only exists
//! as a value. `M(M)` never terminates; it fails with
//! [`ErrorKind::RecursionLimit`](crate::ErrorKind::RecursionLimit) once the
//! configured depth is exhausted.

use once_cell::sync::Lazy;

use crate::value::Value;

// ============================================================================
// Typed forms
// ============================================================================

/// Identity.
pub fn i<A>(a: A) -> A {
    a
}

/// Kestrel: `k(a)(b) == a`.
pub fn k<A: Clone, B>(a: A) -> impl Fn(B) -> A {
    move |_| a.clone()
}

/// Kite: `ki(a)(b) == b`. Defined as `K(I)`.
pub fn ki<A, B>(a: A) -> impl Fn(B) -> B {
    k::<fn(B) -> B, A>(i)(a)
}

/// Cardinal: `c(f)(b)(a) == f(a)(b)`.
pub fn c<F, G, X, Y, R>(f: F) -> impl Fn(Y) -> Box<dyn Fn(X) -> R>
where
    F: Fn(X) -> G + Clone + 'static,
    G: FnOnce(Y) -> R,
    X: 'static,
    Y: Clone + 'static,
    R: 'static,
{
    move |y| -> Box<dyn Fn(X) -> R> {
        let f = f.clone();
        Box::new(move |x| f(x)(y.clone()))
    }
}

// ============================================================================
// Universal forms
// ============================================================================

fn kestrel(a: Value) -> Value {
    let konst = k::<Value, Value>(a);
    Value::closure(move |b| Ok(konst(b)))
}

/// Identity.
pub static I: Lazy<Value> = Lazy::new(|| Value::native("I", |a| Ok(i(a))));

/// Mockingbird: `M(a) == a(a)`.
pub static M: Lazy<Value> = Lazy::new(|| Value::native("M", |a| a.apply(a.clone())));

/// Kestrel: `K(a)(b) == a`.
pub static K: Lazy<Value> = Lazy::new(|| Value::native("K", |a| Ok(kestrel(a))));

/// Kite: `KI(a)(b) == b`. This is `K` applied to `I`.
pub static KI: Lazy<Value> = Lazy::new(|| kestrel(I.clone()));

/// Cardinal: `C(f)(a)(b) == f(b)(a)`.
pub static C: Lazy<Value> = Lazy::new(|| {
    Value::native("C", |f| {
        Ok(Value::closure(move |a| {
            let f = f.clone();
            Ok(Value::closure(move |b| f.apply(b)?.apply(a.clone())))
        }))
    })
});
