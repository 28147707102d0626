//! The JSON value tree.

use alloc::string::String;
use core::fmt;

use crate::table::{Entries, Table};

/// A parsed JSON value.
///
/// Objects and arrays are both backed by [`Table`], an insertion-ordered
/// association table; array entries carry no keys. A value owns its children
/// outright: dropping it drops the whole subtree, and [`Clone`] performs a
/// deep structural copy that preserves member order.
///
/// A value's variant never changes after construction. Accessors that read a
/// payload assert the variant first; calling one against the wrong variant is
/// a contract violation and panics rather than returning an error.
///
/// # Examples
///
/// ```
/// use jsonlax::Value;
///
/// let mut object = Value::new_object(0);
/// object.set_key("greeting", Value::from("hello"));
/// object.set_key("count", Value::from(2.0));
/// assert_eq!(object.to_string(), r#"{"greeting":"hello", "count":2}"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Number(f64),
    Bool(bool),
    Object(Table<Value>),
    Array(Table<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl Value {
    /// Creates an empty object sized for `size_hint` members.
    #[must_use]
    pub fn new_object(size_hint: usize) -> Self {
        Self::Object(Table::with_capacity(size_hint))
    }

    /// Creates an empty array sized for `size_hint` elements.
    #[must_use]
    pub fn new_array(size_hint: usize) -> Self {
        Self::Array(Table::with_capacity(size_hint))
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::String(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Bool,
            Self::Object(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
        }
    }

    /// Returns `true` if the value is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is a number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns the string payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String(s) => s,
            other => panic!("expected string, found {}", other.kind()),
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            other => panic!("expected number, found {}", other.kind()),
        }
    }

    /// Returns the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a boolean.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            other => panic!("expected bool, found {}", other.kind()),
        }
    }

    /// Appends `value` to an array.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    pub fn append(&mut self, value: Value) {
        match self {
            Self::Array(entries) => {
                entries.set(None, value);
            }
            other => panic!("expected array, found {}", other.kind()),
        }
    }

    /// Sets `value` under `key` in an object, copying the key.
    ///
    /// If the key is already present, the member keeps its original position
    /// and the displaced value is returned to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    pub fn set_key(&mut self, key: &str, value: Value) -> Option<Value> {
        match self {
            Self::Object(entries) => entries.set(Some(key), value),
            other => panic!("expected object, found {}", other.kind()),
        }
    }

    /// Returns the member stored under `key` in an object, if any.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(entries) => entries.get(key),
            other => panic!("expected object, found {}", other.kind()),
        }
    }

    /// Returns the member count of an object or array.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither an object nor an array.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Object(entries) | Self::Array(entries) => entries.len(),
            other => panic!("expected object or array, found {}", other.kind()),
        }
    }

    /// Returns `true` if an object or array has no members.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither an object nor an array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the members of an object or array in insertion order.
    ///
    /// Array entries yield `None` keys.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither an object nor an array.
    pub fn entries(&self) -> Entries<'_, Value> {
        match self {
            Self::Object(entries) | Self::Array(entries) => entries.iter(),
            other => panic!("expected object or array, found {}", other.kind()),
        }
    }
}

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    String,
    Number,
    Bool,
    Object,
    Array,
}

impl ValueKind {
    /// The lowercase name of the kind, as used in panic messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
