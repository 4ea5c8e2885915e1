//! The ordered container.

use std::collections::BTreeMap;

use crate::{Key, Value};

/// Largest position a sequence stores as a slot (2^32 - 2).
///
/// Larger indices are kept as named entries under their decimal form, so
/// the length always fits in a `u32`.
pub const MAX_INDEX: usize = u32::MAX as usize - 1;

/// An ordered run of slots, indexed by position.
///
/// A slot may be a hole: removing an element leaves its position empty
/// without shifting later elements, and assigning past the end grows the
/// sequence with holes in between. Slots are stored sparsely, so holes cost
/// nothing. Keys that are not positions address a separate set of named
/// entries, so a sequence also answers mapping-style lookups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    slots: BTreeMap<usize, Value>,
    len: usize,
    named: BTreeMap<String, Value>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there are no slots and no named entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0 && self.named.is_empty()
    }

    /// The element at `index`, or `None` for a hole or out-of-range index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.slots.get_mut(&index)
    }

    pub fn is_hole(&self, index: usize) -> bool {
        index < self.len && !self.slots.contains_key(&index)
    }

    /// Store `value` at `index`, growing with holes if needed.
    ///
    /// Returns the element that was there before. Indices above
    /// [`MAX_INDEX`] are stored as named entries.
    pub fn insert_at(&mut self, index: usize, value: Value) -> Option<Value> {
        if index > MAX_INDEX {
            return self.named.insert(index.to_string(), value);
        }
        self.len = self.len.max(index + 1);
        self.slots.insert(index, value)
    }

    /// Punch a hole at `index`, returning what was there.
    pub fn take_at(&mut self, index: usize) -> Option<Value> {
        if index > MAX_INDEX {
            return self.named.remove(&index.to_string());
        }
        self.slots.remove(&index)
    }

    /// Entries stored under non-positional keys.
    pub fn named(&self) -> &BTreeMap<String, Value> {
        &self.named
    }

    pub(crate) fn named_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.named
    }

    /// The slot a key addresses, if it addresses one.
    pub(crate) fn slot_index(key: &Key) -> Option<usize> {
        key.as_index().filter(|index| *index <= MAX_INDEX)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Sequence {
    fn from(v: Vec<T>) -> Self {
        let len = v.len();
        Sequence {
            slots: v
                .into_iter()
                .map(|item| -> Value { item.into() })
                .enumerate()
                .collect(),
            len,
            named: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_past_end_leaves_holes() {
        let mut seq = Sequence::from(vec!["a", "b"]);
        assert_eq!(seq.insert_at(4, Value::from("e")), None);
        assert_eq!(seq.len(), 5);
        assert!(seq.is_hole(2));
        assert!(seq.is_hole(3));
        assert!(!seq.is_hole(4));
        assert_eq!(seq.get(4), Some(&Value::from("e")));
    }

    #[test]
    fn insert_returns_previous() {
        let mut seq = Sequence::from(vec![1i64, 2]);
        assert_eq!(seq.insert_at(1, Value::from(20i64)), Some(Value::from(2i64)));
        assert_eq!(seq.get(1), Some(&Value::from(20i64)));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn insert_at_max_index_is_sparse() {
        let mut seq = Sequence::from(vec!["a"]);
        assert_eq!(seq.insert_at(MAX_INDEX, Value::from("last")), None);
        assert_eq!(seq.len(), MAX_INDEX + 1);
        assert_eq!(seq.get(MAX_INDEX), Some(&Value::from("last")));
        assert!(seq.is_hole(1));
    }

    #[test]
    fn insert_above_max_index_is_named() {
        let mut seq = Sequence::from(vec!["a"]);
        assert_eq!(seq.insert_at(usize::MAX, Value::from("x")), None);
        assert_eq!(seq.len(), 1);
        assert_eq!(
            seq.named().get(&usize::MAX.to_string()),
            Some(&Value::from("x"))
        );
        assert_eq!(seq.take_at(usize::MAX), Some(Value::from("x")));
        assert!(seq.named().is_empty());
    }

    #[test]
    fn take_leaves_hole_and_keeps_length() {
        let mut seq = Sequence::from(vec!["one", "two"]);
        assert_eq!(seq.take_at(0), Some(Value::from("one")));
        assert_eq!(seq.len(), 2);
        assert!(seq.is_hole(0));
        assert_eq!(seq.get(1), Some(&Value::from("two")));
        assert_eq!(seq.take_at(0), None);
        assert_eq!(seq.take_at(9), None);
    }

    #[test]
    fn empty_checks_named_entries() {
        let mut seq = Sequence::new();
        assert!(seq.is_empty());
        seq.named_mut().insert("tag".to_string(), Value::Bool(true));
        assert!(!seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn slot_index_bounds() {
        assert_eq!(Sequence::slot_index(&Key::from("3")), Some(3));
        assert_eq!(Sequence::slot_index(&Key::Index(MAX_INDEX)), Some(MAX_INDEX));
        assert_eq!(Sequence::slot_index(&Key::Index(MAX_INDEX + 1)), None);
        assert_eq!(Sequence::slot_index(&Key::from("18446744073709551615")), None);
        assert_eq!(Sequence::slot_index(&Key::from("name")), None);
    }
}
