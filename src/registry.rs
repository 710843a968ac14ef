//! Lookup of the universal combinators by name.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::boolean::{AND, BEQ, EQ, F, NOT, OR, T};
use crate::combinators::{C, I, K, KI, M};
use crate::helpers::FLIP;
use crate::partial::PARTIAL;
use crate::value::Value;

static REGISTRY: Lazy<FxHashMap<&'static str, Value>> = Lazy::new(|| {
    let entries: [(&'static str, &Lazy<Value>); 15] = [
        ("I", &I),
        ("M", &M),
        ("K", &K),
        ("KI", &KI),
        ("C", &C),
        ("T", &T),
        ("F", &F),
        ("not", &NOT),
        ("and", &AND),
        ("or", &OR),
        ("beq", &BEQ),
        ("eq", &EQ),
        ("partial", &PARTIAL),
        ("flip", &FLIP),
        ("id", &I),
    ];
    entries
        .into_iter()
        .map(|(name, value)| (name, (**value).clone()))
        .collect()
});

/// The combinator registered under `name`.
pub fn lookup(name: &str) -> Option<Value> {
    REGISTRY.get(name).cloned()
}

/// All registered names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
