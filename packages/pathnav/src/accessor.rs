//! Path-based read, write and delete over a [`Value`] tree.
//!
//! All operations work in place on the caller's root and keep no state
//! between calls. Reads and deletes report a missing or unreachable
//! location as `None`; only [`set`] can fail.

use crate::{Error, IntoPath, Key, Path, Value};

/// Walk `keys` from `root` without modifying anything.
///
/// Stops with `None` as soon as a level is missing or the current node is
/// not a container.
pub fn navigate_to<'a>(root: &'a Value, keys: &[Key]) -> Option<&'a Value> {
    let mut current = root;
    for key in keys {
        current = current.as_container()?.lookup(key)?;
    }
    Some(current)
}

/// Walk `keys` from `root`, optionally filling in missing levels.
///
/// With `autocreate`, a child that is missing or a stored `Null` is replaced
/// by an empty map before descending. Only children of an existing
/// container are created; a non-container `root` or intermediate node still
/// ends the walk with `None`, leaving any maps created before it in place.
pub fn navigate_to_mut<'a>(
    root: &'a mut Value,
    keys: &[Key],
    autocreate: bool,
) -> Option<&'a mut Value> {
    let mut current = root;
    for (depth, key) in keys.iter().enumerate() {
        let container = current.as_container_mut()?;
        if autocreate && container.lookup(key).is_none_or(Value::is_null) {
            log::trace!("creating map at '{}' (depth {})", key, depth);
            container.assign(key, Value::map());
        }
        current = container.lookup_mut(key)?;
    }
    Some(current)
}

/// Resolve the node that holds the final key of `path`.
///
/// A one-key path's parent is `root` itself. Returns `None` for the empty
/// path or when the parent cannot be reached.
fn navigate_to_parent_mut<'a, 'p>(
    root: &'a mut Value,
    path: &'p Path,
    autocreate: bool,
) -> Option<(&'a mut Value, &'p Key)> {
    let (parent_keys, last) = path.split_last()?;
    let parent = navigate_to_mut(root, parent_keys, autocreate)?;
    Some((parent, last))
}

/// Read the value at `path`.
///
/// The empty path yields `root`; an absent path (`None`) yields `None`.
pub fn nav<'a>(root: &'a Value, path: impl IntoPath) -> Option<&'a Value> {
    let path = path.into_path()?;
    navigate_to(root, &path.keys)
}

/// Like [`nav`], but hands back a mutable reference. Never creates levels.
pub fn nav_mut<'a>(root: &'a mut Value, path: impl IntoPath) -> Option<&'a mut Value> {
    let path = path.into_path()?;
    navigate_to_mut(root, &path.keys, false)
}

/// Store `value` at `path`, creating empty maps for missing levels.
///
/// Returns the value that was overwritten, or `None` if the location was
/// empty. Created levels are always maps, whatever the key looks like.
///
/// # Errors
///
/// [`Error::InvalidTarget`] when the parent of the final key is not a
/// container: the root is a leaf or `Null`, an intermediate level holds a
/// leaf, or the path is empty or absent. Nothing is assigned in that case,
/// though maps created on the way to the blocking level remain.
pub fn set(
    root: &mut Value,
    path: impl IntoPath,
    value: impl Into<Value>,
) -> Result<Option<Value>, Error> {
    let path = path.into_path().unwrap_or_default();
    if path.is_empty() {
        log::debug!("rejecting write with an empty path");
        return Err(Error::invalid_target(&path, "empty path"));
    }

    if let Some((parent, last)) = navigate_to_parent_mut(root, &path, true) {
        if let Some(container) = parent.as_container_mut() {
            return Ok(container.assign(last, value.into()));
        }
    }

    let parent_keys = path.split_last().map_or(&[][..], |(parent, _)| parent);
    let message = describe_blockage(root, parent_keys);
    log::debug!("rejecting write to '{}': {}", path, message);
    Err(Error::invalid_target(&path, message))
}

/// Remove the value at `path`, returning it.
///
/// Missing locations, unreachable parents and empty or absent paths are
/// no-ops that return `None`. Removing from an array leaves a hole.
pub fn del(root: &mut Value, path: impl IntoPath) -> Option<Value> {
    let path = path.into_path()?;
    let (parent, last) = navigate_to_parent_mut(root, &path, false)?;
    parent.as_container_mut()?.remove(last)
}

// Explain which level stopped a write. Runs after autocreate, so every
// reachable gap has already been filled with a map and the walk can only
// stop at a leaf: the root, or the last key it got through.
fn describe_blockage(root: &Value, parent_keys: &[Key]) -> String {
    let mut current = root;
    let mut reached = None;
    for (position, key) in parent_keys.iter().enumerate() {
        match current.as_container().and_then(|c| c.lookup(key)) {
            Some(next) => {
                current = next;
                reached = Some((position, key));
            }
            None => break,
        }
    }
    match reached {
        None => "root is not a container".to_string(),
        Some((position, key)) => {
            format!("'{}' at position {} is not a container", key, position)
        }
    }
}
