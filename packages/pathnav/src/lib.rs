//! pathnav: path-based access to nested Value trees
//!
//! Three operations over a caller-owned root:
//! - `nav`: read the value at a path, `None` if it is missing or unreachable
//! - `set`: write a value, creating empty maps for missing levels, and
//!   return what was overwritten
//! - `del`: remove a value and return it; missing paths are a no-op
//!
//! A path is a single key or a sequence of keys (see [`IntoPath`]). Each key
//! is applied to whatever container sits at its level, so digit keys work
//! against arrays and maps alike.
//!
//! # Example
//!
//! ```rust
//! use pathnav::{del, nav, path, set, Value};
//!
//! let mut root = Value::map();
//! assert_eq!(set(&mut root, path!["a", "b", "c"], 1i64).unwrap(), None);
//! assert_eq!(nav(&root, path!["a", "b", "c"]), Some(&Value::from(1i64)));
//! assert!(nav(&root, "a").unwrap().is_map());
//!
//! assert_eq!(del(&mut root, path!["a", "b", "c"]), Some(Value::from(1i64)));
//! assert_eq!(nav(&root, path!["a", "b", "c"]), None);
//!
//! // Writing through a leaf fails.
//! let mut scalar = Value::from(5i64);
//! assert!(set(&mut scalar, "x", 1i64).is_err());
//! ```

pub mod accessor;
mod container;
mod error;
mod key;
mod path;
mod sequence;
mod value;

pub use accessor::{del, nav, nav_mut, navigate_to, navigate_to_mut, set};
pub use container::Container;
pub use error::Error;
pub use key::Key;
pub use path::{IntoPath, Path};
pub use sequence::{Sequence, MAX_INDEX};
pub use value::Value;
