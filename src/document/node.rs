//! JSON node representation with shared identity.
//!
//! This module provides the core data structures for representing JSON-like
//! trees in quilljson. Each value is a `JsonValue` (a tagged sum over the six
//! JSON kinds) held behind a `JsonNode`, a cheaply clonable shared handle.
//! Cloning a node shares the underlying allocation, so the same node can sit
//! under two parents (a diamond) or inside one of its own descendants (a
//! cycle). The allocation address is the node's identity, which is what the
//! cycle-safe serializer tracks.
//!
//! # Example
//!
//! ```
//! use quilljson::document::node::{JsonNode, JsonValue, JsonNumber};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), JsonNode::new(JsonValue::String("quilljson".to_string())));
//! map.insert("version".to_string(), JsonNode::new(JsonValue::Number(JsonNumber::Integer(1))));
//! let object = JsonNode::new(JsonValue::Object(map));
//!
//! assert!(object.is_container());
//! assert!(!object.is_falsy());
//! ```

use indexmap::IndexMap;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Represents JSON numbers (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl JsonNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Integer(i) => *i as f64,
            JsonNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, JsonNumber::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, JsonNumber::Float(_))
    }

    /// Returns true for zero of either variant (including -0.0).
    pub fn is_zero(&self) -> bool {
        match self {
            JsonNumber::Integer(i) => *i == 0,
            JsonNumber::Float(f) => *f == 0.0,
        }
    }
}

/// A JSON value.
///
/// This enum represents the core JSON kinds: objects, arrays, strings,
/// numbers, booleans, and null. Objects and arrays contain `JsonNode`
/// handles, so sub-trees can be shared between containers.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A JSON object containing key-value pairs (insertion order preserved)
    Object(IndexMap<String, JsonNode>),
    /// A JSON array containing ordered values
    Array(Vec<JsonNode>),
    /// A JSON string
    String(String),
    /// A JSON number (integer or float)
    Number(JsonNumber),
    /// A JSON boolean
    Boolean(bool),
    /// A JSON null value
    Null,
}

impl JsonValue {
    /// Returns true if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this value is a container (object or array).
    ///
    /// Null is not a container. Code that recurses into children must check
    /// this rather than assuming "not a string, so it has keys".
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    /// Returns true if this value is falsy: null, `false`, numeric zero, or
    /// the empty string.
    ///
    /// Containers are never falsy, even when empty.
    ///
    /// # Example
    ///
    /// ```
    /// use quilljson::document::node::JsonValue;
    /// use indexmap::IndexMap;
    ///
    /// assert!(JsonValue::Null.is_falsy());
    /// assert!(JsonValue::String(String::new()).is_falsy());
    /// assert!(!JsonValue::Object(IndexMap::new()).is_falsy());
    /// ```
    pub fn is_falsy(&self) -> bool {
        match self {
            JsonValue::Null => true,
            JsonValue::Boolean(b) => !b,
            JsonValue::Number(n) => n.is_zero(),
            JsonValue::String(s) => s.is_empty(),
            JsonValue::Object(_) | JsonValue::Array(_) => false,
        }
    }

    /// Returns the ordered entry enumeration for this value, if it has one.
    ///
    /// Objects yield `(key, child)` pairs in insertion order; arrays yield
    /// `(index-as-string, child)` pairs in index order. Scalars have no entry
    /// enumeration and return `None`. This is the capability check used by
    /// `to_pairs` and the tree walker.
    pub fn entries(&self) -> Option<Vec<(String, JsonNode)>> {
        match self {
            JsonValue::Object(fields) => Some(
                fields
                    .iter()
                    .map(|(key, child)| (key.clone(), child.clone()))
                    .collect(),
            ),
            JsonValue::Array(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(idx, child)| (idx.to_string(), child.clone()))
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// A shared handle to a JSON value.
///
/// `JsonNode` is the primary type used throughout quilljson. Cloning is
/// cheap and shares the underlying value; two clones of the same node have
/// the same identity. Equality (`==`) compares structure, not identity.
#[derive(Debug, Clone)]
pub struct JsonNode(Rc<RefCell<JsonValue>>);

impl JsonNode {
    /// Creates a new node holding the given value.
    ///
    /// # Example
    ///
    /// ```
    /// use quilljson::document::node::{JsonNode, JsonValue};
    ///
    /// let node = JsonNode::new(JsonValue::Boolean(true));
    /// assert!(matches!(*node.value(), JsonValue::Boolean(true)));
    /// ```
    pub fn new(value: JsonValue) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Returns an immutable borrow of the node's value.
    pub fn value(&self) -> Ref<'_, JsonValue> {
        self.0.borrow()
    }

    /// Returns a mutable borrow of the node's value.
    ///
    /// Mutating through one clone is visible through every other clone of
    /// the same node. Inserting a clone of a node into its own object or
    /// array closes a cycle.
    pub fn value_mut(&self) -> RefMut<'_, JsonValue> {
        self.0.borrow_mut()
    }

    /// Returns this node's identity: the address of its shared allocation.
    ///
    /// Structurally equal but separately constructed nodes have different
    /// identities; clones of one node share an identity.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    /// Returns true if both handles refer to the same allocation.
    pub fn is_same(&self, other: &JsonNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if this node holds an object or array.
    pub fn is_container(&self) -> bool {
        self.value().is_container()
    }

    /// Returns true if this node holds a scalar (string, number, boolean,
    /// or null).
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this node's value is falsy (see
    /// [`JsonValue::is_falsy`]).
    pub fn is_falsy(&self) -> bool {
        self.value().is_falsy()
    }

    /// Returns true if this node's value is truthy.
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }
}

impl PartialEq for JsonNode {
    /// Structural equality. Two nodes compare equal if their values are
    /// equal, regardless of identity. Comparing cyclic trees that are not
    /// identical handles does not terminate; equality is meant for acyclic
    /// data and tests.
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        *self.value() == *other.value()
    }
}
