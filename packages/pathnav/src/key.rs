//! The addressing token used at each level of a path.

use std::borrow::Cow;
use std::fmt;

/// One step of a [`Path`](crate::Path).
///
/// A key has no fixed target type. The same key is applied to whatever
/// container is found at its level: a [`Map`](crate::Value::Map) looks it up
/// by its string form, a [`Sequence`](crate::Sequence) treats it as a slot
/// index when it is one and as a named entry otherwise.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    /// A string identifier.
    Name(String),
    /// A non-negative integer position.
    Index(usize),
}

impl Key {
    /// The slot index this key addresses on a sequence, if any.
    ///
    /// Names count as indices only in canonical decimal form: `"7"` is an
    /// index, `"07"`, `"+7"` and `"-7"` are plain names.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(name) => parse_index(name),
        }
    }

    /// The string a map stores this key under.
    pub fn as_map_key(&self) -> Cow<'_, str> {
        match self {
            Key::Name(name) => Cow::Borrowed(name.as_str()),
            Key::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

pub(crate) fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{}", name),
            Key::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Name(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Name(v)
    }
}

impl From<&String> for Key {
    fn from(v: &String) -> Self {
        Key::Name(v.clone())
    }
}

impl From<&Key> for Key {
    fn from(v: &Key) -> Self {
        v.clone()
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Key::Index(v)
    }
}

impl From<u32> for Key {
    fn from(v: u32) -> Self {
        Key::Index(v as usize)
    }
}

// Negative integers can never be positions, so they address by name.
impl From<i64> for Key {
    fn from(v: i64) -> Self {
        match usize::try_from(v) {
            Ok(i) => Key::Index(i),
            Err(_) => Key::Name(v.to_string()),
        }
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::from(v as i64)
    }
}
