use std::fmt;
use std::sync::Arc;

use crate::config;
use crate::error::{Error, Result};
use crate::lists::List;

// ============================================================================
// Core Type System
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AtomType {
    Number(i64),
    Bool(bool),
    String(String),
}

/// Native function body of a combinator.
pub type NativeFn = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// A single-argument function value. Multi-argument combinators are
/// curried: applying them returns another `Combinator`.
#[derive(Clone)]
pub struct Combinator {
    name: Option<&'static str>,
    func: NativeFn,
}

impl Combinator {
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combinator")
            .field("name", &self.name.unwrap_or("<fn>"))
            .finish()
    }
}

/// Any value a combinator can receive or return.
#[derive(Clone, Debug)]
pub enum Value {
    Atom(AtomType),
    List(List<Value>),
    Combinator(Combinator),
}

impl Value {
    /// A named combinator, displayed as `<name>`.
    pub fn native<F>(name: &'static str, func: F) -> Value
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Value::Combinator(Combinator {
            name: Some(name),
            func: Arc::new(func),
        })
    }

    /// An anonymous combinator, usually a partially applied one.
    pub fn closure<F>(func: F) -> Value
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Value::Combinator(Combinator {
            name: None,
            func: Arc::new(func),
        })
    }

    /// Apply this value to a single argument.
    pub fn apply(&self, arg: Value) -> Result<Value> {
        match self {
            Value::Combinator(c) => {
                let _guard = config::enter(c.name)?;
                (c.func)(arg)
            }
            other => Err(Error::not_callable(other)),
        }
    }

    /// Curried call: `f.call([a, b, c])` is `f(a)(b)(c)`.
    pub fn call<I>(&self, args: I) -> Result<Value>
    where
        I: IntoIterator<Item = Value>,
    {
        args.into_iter()
            .try_fold(self.clone(), |func, arg| func.apply(arg))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Combinator(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Atom(AtomType::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Atom(AtomType::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

// Combinators compare by identity only; two separately built `K`s differ.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Combinator(a), Value::Combinator(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Atom(AtomType::Number(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Atom(AtomType::Bool(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Atom(AtomType::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Atom(AtomType::String(s))
    }
}

impl From<List<Value>> for Value {
    fn from(list: List<Value>) -> Self {
        Value::List(list)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AtomType::Number(n) => write!(f, "{n}"),
            AtomType::Bool(b) => write!(f, "{b}"),
            AtomType::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Atom(atom) => write!(f, "{atom}"),
            Value::List(list) => write!(f, "{list}"),
            Value::Combinator(c) => match c.name {
                Some(name) => write!(f, "<{name}>"),
                None => write!(f, "<fn>"),
            },
        }
    }
}
