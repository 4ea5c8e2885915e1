//! The capability set shared by navigable values.

use std::collections::BTreeMap;

use crate::{Key, Sequence, Value};

/// A value that holds children addressable by [`Key`].
///
/// Traversal is written once against this trait; [`Value::as_container`]
/// is where maps and sequences are told apart from leaves.
pub trait Container {
    fn lookup(&self, key: &Key) -> Option<&Value>;

    fn lookup_mut(&mut self, key: &Key) -> Option<&mut Value>;

    /// Store `value` under `key`, returning the previous child.
    fn assign(&mut self, key: &Key, value: Value) -> Option<Value>;

    /// Drop the child under `key`, returning it.
    fn remove(&mut self, key: &Key) -> Option<Value>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;
}

impl Container for BTreeMap<String, Value> {
    fn lookup(&self, key: &Key) -> Option<&Value> {
        self.get(&*key.as_map_key())
    }

    fn lookup_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.get_mut(&*key.as_map_key())
    }

    fn assign(&mut self, key: &Key, value: Value) -> Option<Value> {
        self.insert(key.as_map_key().into_owned(), value)
    }

    fn remove(&mut self, key: &Key) -> Option<Value> {
        BTreeMap::remove(self, &*key.as_map_key())
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl Container for Sequence {
    fn lookup(&self, key: &Key) -> Option<&Value> {
        match Sequence::slot_index(key) {
            Some(index) => self.get(index),
            None => self.named().get(&*key.as_map_key()),
        }
    }

    fn lookup_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match Sequence::slot_index(key) {
            Some(index) => self.get_mut(index),
            None => self.named_mut().get_mut(&*key.as_map_key()),
        }
    }

    fn assign(&mut self, key: &Key, value: Value) -> Option<Value> {
        match Sequence::slot_index(key) {
            Some(index) => self.insert_at(index, value),
            None => self
                .named_mut()
                .insert(key.as_map_key().into_owned(), value),
        }
    }

    fn remove(&mut self, key: &Key) -> Option<Value> {
        match Sequence::slot_index(key) {
            Some(index) => self.take_at(index),
            None => self.named_mut().remove(&*key.as_map_key()),
        }
    }

    fn len(&self) -> usize {
        Sequence::len(self)
    }

    fn is_empty(&self) -> bool {
        Sequence::is_empty(self)
    }
}
