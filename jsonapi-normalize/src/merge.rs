//! Recursive merge used to fold extracted fragments into one store.
//!
//! Objects are merged key by key. Any other value coming from the newer side, arrays
//! and `null` included, replaces what was there. Keys only present on the older side
//! are kept.

use serde_json::{Map, Value};

pub trait Merge<Rhs = Self> {
    fn merge(&mut self, other: Rhs);
}

impl Merge for Map<String, Value> {
    fn merge(&mut self, other: Map<String, Value>) {
        for (key, value) in other {
            match self.get_mut(&key) {
                Some(existing) => existing.merge(value),
                None => {
                    self.insert(key, value);
                },
            }
        }
    }
}

impl Merge for Value {
    fn merge(&mut self, other: Value) {
        match (self, other) {
            (Value::Object(dst), Value::Object(src)) => dst.merge(src),
            (dst, src) => *dst = src,
        }
    }
}
