//! Integration tests for the primitive combinators, Church booleans and
//! partial application.

use std::thread;

use aviary::{
    AND, BEQ, C, ErrorKind, F, I, K, KI, M, NOT, OR, PARTIAL, T, Value, and, beq, church, config,
    not, or, to_boolean,
};

fn int(n: i64) -> Value {
    Value::from(n)
}

fn run_bool(value: Result<Value, aviary::Error>) -> bool {
    match value.and_then(|v| to_boolean(&v)) {
        Ok(b) => b,
        Err(e) => panic!("Expected boolean combinator, got error: {e}"),
    }
}

fn sub() -> Value {
    Value::native("sub", |a| {
        Ok(Value::closure(move |b| {
            Ok(int(a.as_int().unwrap_or(0) - b.as_int().unwrap_or(0)))
        }))
    })
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn test_identity_returns_argument() {
    assert_eq!(I.apply(int(5)).unwrap(), int(5));
    assert_eq!(I.apply(K.clone()).unwrap(), *K);
}

#[test]
fn test_kestrel_keeps_first() {
    assert_eq!(K.call([int(1), int(0)]).unwrap(), int(1));
    assert_eq!(K.call([Value::from("a"), int(0)]).unwrap(), Value::from("a"));
}

#[test]
fn test_kite_keeps_second() {
    assert_eq!(KI.call([int(1), int(0)]).unwrap(), int(0));
}

#[test]
fn test_cardinal_flips() {
    // C(sub)(1)(10) == sub(10)(1)
    assert_eq!(C.call([sub(), int(1), int(10)]).unwrap(), int(9));
    assert_eq!(
        C.call([sub(), int(1), int(10)]).unwrap(),
        sub().call([int(10), int(1)]).unwrap()
    );
}

#[test]
fn test_cardinal_of_booleans_negates() {
    assert_eq!(C.call([F.clone(), int(1), int(0)]).unwrap(), int(1));
    assert_eq!(C.call([T.clone(), int(1), int(0)]).unwrap(), int(0));
}

#[test]
fn test_mockingbird_applies_to_itself() {
    let result = M.apply(I.clone()).unwrap();
    assert_eq!(result.apply(int(3)).unwrap(), int(3));
}

#[test]
fn test_mockingbird_of_mockingbird_exhausts_depth() {
    let err = config::with_max_depth(100, || M.apply(M.clone())).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RecursionLimit);
    assert_eq!(config::depth(), 0);
}

#[test]
fn test_mockingbird_of_mockingbird_at_default_depth() {
    // Plenty of stack so the depth limit, not the host, ends the recursion
    let handle = thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| M.apply(M.clone()).map(|_| ()))
        .unwrap();
    let err = handle.join().unwrap().unwrap_err();
    assert!(err.is_recursion_limit());
}

#[test]
fn test_applying_data_fails() {
    let err = int(1).apply(int(2)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotCallable);
}

// ============================================================================
// Booleans
// ============================================================================

#[test]
fn test_truth_and_lie() {
    assert!(to_boolean(&T).unwrap());
    assert!(!to_boolean(&F).unwrap());
    assert_eq!(T.call([int(1), int(0)]).unwrap(), int(1));
    assert_eq!(F.call([int(1), int(0)]).unwrap(), int(0));
}

#[test]
fn test_not() {
    assert!(!run_bool(not(&T)));
    assert!(run_bool(not(&F)));
    assert_eq!(NOT.apply(F.clone()).unwrap().call([int(1), int(0)]).unwrap(), int(1));
}

#[test]
fn test_double_negation() {
    for b in [true, false] {
        let p = church(b);
        assert_eq!(run_bool(not(&p).and_then(|np| not(&np))), b);
    }
}

#[test]
fn test_and_truth_table() {
    assert!(run_bool(and(&T, &T)));
    assert!(!run_bool(and(&T, &F)));
    assert!(!run_bool(and(&F, &T)));
    assert!(!run_bool(and(&F, &F)));
}

#[test]
fn test_or_truth_table() {
    assert!(run_bool(or(&T, &T)));
    assert!(run_bool(or(&T, &F)));
    assert!(run_bool(or(&F, &T)));
    assert!(!run_bool(or(&F, &F)));
}

#[test]
fn test_beq() {
    assert!(run_bool(beq(&T, &T)));
    assert!(run_bool(beq(&F, &F)));
    assert!(!run_bool(beq(&T, &F)));
    assert!(!run_bool(beq(&F, &T)));
}

#[test]
fn test_operator_values_match_functions() {
    for p in [true, false] {
        for q in [true, false] {
            let (cp, cq) = (church(p), church(q));
            assert_eq!(run_bool(AND.call([cp.clone(), cq.clone()])), p && q);
            assert_eq!(run_bool(OR.call([cp.clone(), cq.clone()])), p || q);
            assert_eq!(run_bool(BEQ.call([cp, cq])), p == q);
        }
    }
}

#[test]
fn test_and_returns_canonical_combinators() {
    assert_eq!(and(&T, &T).unwrap(), *T);
    assert_eq!(and(&F, &T).unwrap(), *F);
    assert_eq!(or(&F, &T).unwrap(), *T);
}

// ============================================================================
// Partial application
// ============================================================================

#[test]
fn test_partial_curried() {
    let sub3 = PARTIAL.call([sub(), int(3)]).unwrap();
    assert_eq!(sub3.apply(int(2)).unwrap(), int(1));
}

#[test]
fn test_partial_with_kestrel() {
    let always = PARTIAL.call([K.clone(), int(7)]).unwrap();
    assert_eq!(always.apply(int(0)).unwrap(), int(7));
}

#[test]
fn test_partial_variadic_native() {
    let add = |xs: &[i64]| xs.iter().sum::<i64>();
    let add3 = aviary::partial_variadic(add, [3]);
    assert_eq!(add3(&[2]), 5);
    assert_eq!(add3(&[2, 5]), 10);
}
