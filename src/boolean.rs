//! Church-encoded booleans.
//!
//! A boolean is a two-argument selector: `T` picks its first argument and
//! `F` its second. `T` and `F` are the very same values as `K` and `KI`.

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::value::Value;

pub use crate::combinators::{K as T, KI as F};

/// `NOT(p) == p(F)(T)`
pub static NOT: Lazy<Value> =
    Lazy::new(|| Value::native("not", |p| p.apply(F.clone())?.apply(T.clone())));

/// `AND(p)(q) == p(q)(p)`
pub static AND: Lazy<Value> = Lazy::new(|| {
    Value::native("and", |p| {
        Ok(Value::closure(move |q| p.apply(q)?.apply(p.clone())))
    })
});

/// `OR(p)(q) == p(p)(q)`
pub static OR: Lazy<Value> = Lazy::new(|| {
    Value::native("or", |p| {
        Ok(Value::closure(move |q| p.apply(p.clone())?.apply(q)))
    })
});

/// `BEQ(p)(q) == p(q)(NOT(q))`
pub static BEQ: Lazy<Value> = Lazy::new(|| {
    Value::native("beq", |p| {
        Ok(Value::closure(move |q| {
            let negated = NOT.apply(q.clone())?;
            p.apply(q)?.apply(negated)
        }))
    })
});

pub use self::BEQ as EQ;

pub fn not(p: &Value) -> Result<Value> {
    NOT.apply(p.clone())
}

pub fn and(p: &Value, q: &Value) -> Result<Value> {
    AND.call([p.clone(), q.clone()])
}

pub fn or(p: &Value, q: &Value) -> Result<Value> {
    OR.call([p.clone(), q.clone()])
}

pub fn beq(p: &Value, q: &Value) -> Result<Value> {
    BEQ.call([p.clone(), q.clone()])
}

/// The only bridge from a Church boolean to `bool`: `p(true)(false)`.
pub fn to_boolean(p: &Value) -> Result<bool> {
    let selected = p.call([Value::from(true), Value::from(false)])?;
    selected.as_bool().ok_or_else(|| Error::not_a_boolean(p))
}

/// The canonical combinator for a native `bool`.
pub fn church(b: bool) -> Value {
    if b { T.clone() } else { F.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{I, K, KI};
    use crate::error::ErrorKind;

    #[test]
    fn test_truth_and_lie_are_kestrel_and_kite() {
        assert_eq!(*T, *K);
        assert_eq!(*F, *KI);
    }

    #[test]
    fn test_church_round_trip() {
        assert!(to_boolean(&church(true)).unwrap());
        assert!(!to_boolean(&church(false)).unwrap());
    }

    #[test]
    fn test_eq_alias() {
        assert_eq!(*EQ, *BEQ);
    }

    #[test]
    fn test_to_boolean_rejects_identity() {
        // I(true) is true, which is not a selector
        let err = to_boolean(&I).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotCallable);
    }

    #[test]
    fn test_to_boolean_rejects_non_boolean_selection() {
        // Selects K(3) then 3: callable twice, but never lands on a bool
        let konst = K.apply(K.apply(Value::from(3)).unwrap()).unwrap();
        let err = to_boolean(&konst).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotABoolean);
    }
}
