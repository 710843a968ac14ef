//! Curried combinators, Church booleans, immutable cons lists and lazy
//! sequences.
//!
//! The combinators live in two forms: generic Rust functions for typed use
//! ([`combinators::i`], [`combinators::k`], ...) and universal [`Value`]s
//! that accept any other value, including themselves ([`I`], [`M`], [`K`],
//! ...). Lists and sequences are generic over their element type.

pub mod boolean;
pub mod combinators;
pub mod config;
pub mod error;
pub mod generators;
pub mod helpers;
pub mod lists;
pub mod partial;
pub mod registry;
pub mod value;

// Re-export commonly used items for convenience
pub use boolean::{AND, BEQ, EQ, F, NOT, OR, T, and, beq, church, not, or, to_boolean};
pub use combinators::{C, I, K, KI, M};
pub use error::{Error, ErrorKind, Result};
pub use generators::{
    Fibonacci, NaturalNumbers, Range, Reverse, Take, fibo, natural_numbers, range, reverse, take,
    take_n,
};
pub use helpers::{
    FLIP, compose, list_to_vec, map, map_list, pipe, range_list, vec_to_list,
};
pub use lists::{List, Pair, Vector2, foldl, foldr, head, pair, tail, vector2, vector2_of};
pub use partial::{PARTIAL, partial_variadic};
pub use value::{AtomType, Combinator, Value};
