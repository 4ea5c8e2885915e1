//! Paths: ordered key sequences, and normalization of path arguments.

use std::fmt;

use crate::key::{parse_index, Key};

/// An ordered sequence of keys, consumed left to right.
///
/// The empty path addresses the root itself.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub keys: Vec<Key>,
}

impl Path {
    /// The empty path.
    pub fn root() -> Self {
        Path { keys: Vec::new() }
    }

    /// Build a path from anything that yields keys.
    pub fn from_keys<K: Into<Key>>(keys: impl IntoIterator<Item = K>) -> Self {
        Path {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `/`-separated path string.
    ///
    /// Empty components are ignored (normalizes `//`, leading and trailing
    /// `/`). Components in canonical decimal form become [`Key::Index`],
    /// everything else a [`Key::Name`].
    ///
    /// ```rust
    /// use pathnav::{Key, Path};
    ///
    /// let p = Path::parse("users/0/name");
    /// assert_eq!(p.len(), 3);
    /// assert_eq!(p[1], Key::Index(0));
    /// assert_eq!(Path::parse("/a//b/"), Path::parse("a/b"));
    /// ```
    pub fn parse(s: &str) -> Self {
        Path {
            keys: s
                .split('/')
                .filter(|c| !c.is_empty())
                .map(|c| match parse_index(c) {
                    Some(i) => Key::Index(i),
                    None => Key::Name(c.to_string()),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Split into the parent keys and the final key.
    ///
    /// Returns `None` for the empty path.
    pub fn split_last(&self) -> Option<(&[Key], &Key)> {
        self.keys
            .split_last()
            .map(|(last, parent)| (parent, last))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Key;

    fn index(&self, i: usize) -> &Self::Output {
        &self.keys[i]
    }
}

/// Normalization of a path argument.
///
/// A bare key becomes a one-key path, a sequence of keys keeps its order,
/// and `None` is the absent path (`into_path` returns `None`). The accessor
/// functions take `impl IntoPath` so callers can pass whichever form they
/// hold.
pub trait IntoPath {
    fn into_path(self) -> Option<Path>;
}

impl IntoPath for Path {
    fn into_path(self) -> Option<Path> {
        Some(self)
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Option<Path> {
        Some(self.clone())
    }
}

macro_rules! bare_key_into_path {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoPath for $ty {
                fn into_path(self) -> Option<Path> {
                    Some(Path {
                        keys: vec![Key::from(self)],
                    })
                }
            }
        )*
    };
}

bare_key_into_path!(Key, &Key, &str, String, &String, usize, u32, i32, i64);

impl<K: Into<Key>> IntoPath for Vec<K> {
    fn into_path(self) -> Option<Path> {
        Some(Path::from_keys(self))
    }
}

impl<K: Into<Key>, const N: usize> IntoPath for [K; N] {
    fn into_path(self) -> Option<Path> {
        Some(Path::from_keys(self))
    }
}

impl<K: Into<Key> + Clone> IntoPath for &[K] {
    fn into_path(self) -> Option<Path> {
        Some(Path::from_keys(self.iter().cloned()))
    }
}

impl<P: IntoPath> IntoPath for Option<P> {
    fn into_path(self) -> Option<Path> {
        self.and_then(IntoPath::into_path)
    }
}

/// Build a [`Path`] from mixed key literals.
///
/// # Example
///
/// ```rust
/// use pathnav::{path, Key};
///
/// let p = path!["arr", 3, "fruits", 1];
/// assert_eq!(p.len(), 4);
/// assert_eq!(p[1], Key::Index(3));
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($key:expr),+ $(,)?) => {
        $crate::Path {
            keys: vec![$($crate::Key::from($key)),+],
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(Path::parse("").len(), 0);
        assert_eq!(Path::parse("foo").len(), 1);
        assert_eq!(Path::parse("foo/bar").len(), 2);
        assert_eq!(Path::parse("foo/0/baz").len(), 3);
    }

    #[test]
    fn parse_types_numeric_components() {
        let p = Path::parse("items/0/name/007");
        assert_eq!(p[1], Key::Index(0));
        assert_eq!(p[3], Key::Name("007".to_string()));

        let edge = Path::parse("18446744073709551615/18446744073709551616");
        assert_eq!(edge[0], Key::Index(usize::MAX));
        assert_eq!(edge[1], Key::Name("18446744073709551616".to_string()));
    }

    #[test]
    fn normalize_slashes() {
        assert_eq!(Path::parse("foo/bar/"), Path::parse("foo/bar"));
        assert_eq!(Path::parse("foo//bar"), Path::parse("foo/bar"));
        assert_eq!(Path::parse("/foo/bar"), Path::parse("foo/bar"));
    }

    #[test]
    fn bare_key_is_single_element_path() {
        assert_eq!("a".into_path(), Some(path!["a"]));
        assert_eq!(4usize.into_path(), Some(path![4usize]));
        assert_eq!(Key::from("x").into_path().unwrap().len(), 1);
    }

    #[test]
    fn sequences_keep_order() {
        let p = vec!["a", "b", "c"].into_path().unwrap();
        assert_eq!(p.to_string(), "a/b/c");

        let keys = [Key::from("x"), Key::from(2i32)];
        assert_eq!(keys.into_path().unwrap().to_string(), "x/2");

        let slice: &[&str] = &["p", "q"];
        assert_eq!(slice.into_path().unwrap().len(), 2);
    }

    #[test]
    fn absent_path_normalizes_to_none() {
        assert_eq!(None::<&str>.into_path(), None);
        assert_eq!(Some("a").into_path(), Some(path!["a"]));
    }

    #[test]
    fn empty_sequence_is_root() {
        let p = Vec::<Key>::new().into_path().unwrap();
        assert!(p.is_empty());
        assert_eq!(p, Path::root());
    }

    #[test]
    fn split_last_separates_parent() {
        let p = path!["a", "b", 2];
        let (parent, last) = p.split_last().unwrap();
        assert_eq!(parent, &[Key::from("a"), Key::from("b")]);
        assert_eq!(last, &Key::Index(2));

        let single = path!["only"];
        let (parent, last) = single.split_last().unwrap();
        assert!(parent.is_empty());
        assert_eq!(last, &Key::from("only"));

        assert!(Path::root().split_last().is_none());
    }

    #[test]
    fn display_empty() {
        assert_eq!(Path::root().to_string(), "");
    }
}
