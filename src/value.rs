//! The document tree (Components F & G): the `Value` node type, its
//! builders, and the structural operations (size, lookup, detach, delete,
//! replace, deep copy) described in SPEC_FULL.md §3–§4.F/§4.G.

use alloc::vec::Vec;

use crate::error::MPackError;

/// One node of a MessagePack document tree.
///
/// Array children and Map entries are insertion-ordered `Vec`s rather than
/// a doubly linked sibling chain — see DESIGN.md, Open Question 1.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    /// Wire `int8..int64` and negative/positive fixnum that fits in `i64`.
    Int(i64),
    /// Wire `uint8..uint64` and positive fixnum too large for a signed read.
    UInt(u64),
    Float(f64),
    /// Raw bytes, NOT validated as UTF-8 at decode time (SPEC_FULL §3).
    Str(Vec<u8>),
    Bin(Vec<u8>),
    /// `(etype, payload)`.
    Ext(i8, Vec<u8>),
    Array(Vec<Value>),
    /// Insertion-ordered key/value pairs. Keys may be any `Value`; the
    /// lookup API (`get`/`get_ci`) only matches `Str` keys.
    Map(Vec<(Value, Value)>),
}

impl Value {
    // -- Component F: builders -------------------------------------------

    pub fn nil() -> Self {
        Value::Nil
    }

    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    pub fn uint(n: u64) -> Self {
        Value::UInt(n)
    }

    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    pub fn str(s: impl Into<Vec<u8>>) -> Self {
        Value::Str(s.into())
    }

    pub fn bin(b: impl Into<Vec<u8>>) -> Self {
        Value::Bin(b.into())
    }

    pub fn ext(etype: i8, data: impl Into<Vec<u8>>) -> Self {
        Value::Ext(etype, data.into())
    }

    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn map() -> Self {
        Value::Map(Vec::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bin(_) => "bin",
            Value::Ext(..) => "ext",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    // -- Scalar accessors ---------------------------------------------------

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Any integer variant, widened/narrowed to `i64` (lossy for `UInt`
    /// values above `i64::MAX`; use [`Value::as_u64`] for those).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::UInt(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            Value::Int(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bin(&self) -> Option<&[u8]> {
        match self {
            Value::Bin(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_ext(&self) -> Option<(i8, &[u8])> {
        match self {
            Value::Ext(t, d) => Some((*t, d)),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    // -- Component F: mutation ----------------------------------------------

    /// Appends `item` at the tail of an Array's children.
    pub fn push(&mut self, item: Value) -> Result<(), MPackError> {
        match self {
            Value::Array(v) => {
                v.push(item);
                Ok(())
            }
            other => Err(MPackError::KindMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// Appends a `(Str(name), item)` entry at the tail of a Map's children.
    pub fn insert(&mut self, name: impl Into<Vec<u8>>, item: Value) -> Result<(), MPackError> {
        match self {
            Value::Map(m) => {
                m.push((Value::Str(name.into()), item));
                Ok(())
            }
            other => Err(MPackError::KindMismatch {
                expected: "map",
                found: other.kind(),
            }),
        }
    }

    // -- Component G: tree operations -----------------------------------

    /// Number of children (Array) or entries (Map).
    pub fn size(&self) -> Result<usize, MPackError> {
        match self {
            Value::Array(v) => Ok(v.len()),
            Value::Map(m) => Ok(m.len()),
            other => Err(MPackError::KindMismatch {
                expected: "array or map",
                found: other.kind(),
            }),
        }
    }

    /// The `i`-th element of an Array.
    pub fn get_index(&self, index: usize) -> Result<&Value, MPackError> {
        match self {
            Value::Array(v) => v.get(index).ok_or(MPackError::IndexOutOfRange {
                index,
                len: v.len(),
            }),
            other => Err(MPackError::KindMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// The `i`-th (key, value) entry of a Map.
    pub fn entry(&self, index: usize) -> Result<(&Value, &Value), MPackError> {
        match self {
            Value::Map(m) => {
                let (k, v) = m.get(index).ok_or(MPackError::IndexOutOfRange {
                    index,
                    len: m.len(),
                })?;
                Ok((k, v))
            }
            other => Err(MPackError::KindMismatch {
                expected: "map",
                found: other.kind(),
            }),
        }
    }

    /// Looks up a Map entry by a byte-exact (case-sensitive) `Str` key.
    /// Returns the first match, or `None`. See DESIGN.md, Open Question 5.
    pub fn get(&self, name: &[u8]) -> Option<&Value> {
        let m = self.as_map()?;
        m.iter()
            .find(|(k, _)| k.as_str_bytes() == Some(name))
            .map(|(_, v)| v)
    }

    /// Convenience case-insensitive (ASCII) counterpart to [`Value::get`].
    pub fn get_ci(&self, name: &[u8]) -> Option<&Value> {
        let m = self.as_map()?;
        m.iter()
            .find(|(k, _)| {
                k.as_str_bytes()
                    .is_some_and(|key| key.eq_ignore_ascii_case(name))
            })
            .map(|(_, v)| v)
    }

    /// Removes and returns the `i`-th element of an Array, shifting later
    /// elements down (same effect as an unlink-and-relink in a sibling
    /// chain, expressed as a `Vec` operation — see DESIGN.md).
    pub fn detach_index(&mut self, index: usize) -> Result<Value, MPackError> {
        match self {
            Value::Array(v) => {
                if index >= v.len() {
                    return Err(MPackError::IndexOutOfRange {
                        index,
                        len: v.len(),
                    });
                }
                Ok(v.remove(index))
            }
            other => Err(MPackError::KindMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// Removes and returns the first Map entry whose key matches `name`
    /// (case-sensitive).
    pub fn detach(&mut self, name: &[u8]) -> Option<(Value, Value)> {
        let m = match self {
            Value::Map(m) => m,
            _ => return None,
        };
        let pos = m
            .iter()
            .position(|(k, _)| k.as_str_bytes() == Some(name))?;
        Some(m.remove(pos))
    }

    /// Detaches the `i`-th Array element and drops it.
    pub fn delete_index(&mut self, index: usize) -> Result<(), MPackError> {
        self.detach_index(index).map(|_| ())
    }

    /// Detaches the Map entry keyed by `name` and drops it. Returns whether
    /// an entry was found.
    pub fn delete(&mut self, name: &[u8]) -> bool {
        self.detach(name).is_some()
    }

    /// Replaces the `i`-th Array element, returning the old value.
    pub fn replace_index(&mut self, index: usize, new: Value) -> Result<Value, MPackError> {
        match self {
            Value::Array(v) => {
                let slot = v.get_mut(index).ok_or(MPackError::IndexOutOfRange {
                    index,
                    len: v.len(),
                })?;
                Ok(core::mem::replace(slot, new))
            }
            other => Err(MPackError::KindMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// Replaces the value of the Map entry keyed by `name`, keeping the
    /// existing key, and returns the old value.
    pub fn replace(&mut self, name: &[u8], new: Value) -> Option<Value> {
        let m = match self {
            Value::Map(m) => m,
            _ => return None,
        };
        let (_, slot) = m
            .iter_mut()
            .find(|(k, _)| k.as_str_bytes() == Some(name))?;
        Some(core::mem::replace(slot, new))
    }

    /// Returns a structurally equal tree sharing no owned memory with
    /// `self`. `Value::clone` already allocates fresh owned payloads for
    /// every node, so this is `self.clone()` by another name — see
    /// DESIGN.md, Open Question 4.
    pub fn deep_copy(&self) -> Value {
        self.clone()
    }
}
