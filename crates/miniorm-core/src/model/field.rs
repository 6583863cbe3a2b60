use derive_more::Deref;
use std::{collections::HashMap, fmt};

///
/// FieldPath
///
/// Declaration-index address of a (possibly flattened) field within a record
/// type. `[2, 0]` is field 0 of the record embedded at field 2.
///

#[derive(Clone, Debug, Default, Deref, Eq, Hash, PartialEq)]
#[deref(forward)]
pub struct FieldPath(Box<[usize]>);

impl FieldPath {
    /// The empty path addressing the record itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this path by one field index.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut path = Vec::with_capacity(self.0.len() + 1);
        path.extend_from_slice(&self.0);
        path.push(index);

        Self(path.into_boxed_slice())
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<&[usize]> for FieldPath {
    fn from(path: &[usize]) -> Self {
        Self(path.into())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

///
/// FieldMap
///
/// Ordered column key -> FieldPath index for one record type.
/// Inserting an existing key replaces its path in place (last write wins).
///

#[derive(Clone, Debug, Default)]
pub struct FieldMap {
    entries: Vec<(String, FieldPath)>,
    by_key: HashMap<String, usize>,
}

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key` (lowercased) to `path`, replacing any earlier mapping.
    pub fn insert(&mut self, key: &str, path: FieldPath) {
        let key = key.to_lowercase();

        if let Some(&slot) = self.by_key.get(&key) {
            self.entries[slot].1 = path;
            return;
        }

        self.by_key.insert(key.clone(), self.entries.len());
        self.entries.push((key, path));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldPath> {
        self.by_key.get(key).map(|&slot| &self.entries[slot].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPath)> {
        self.entries.iter().map(|(key, path)| (key.as_str(), path))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_without_touching_parent() {
        let parent = FieldPath::root().child(2);
        let child = parent.child(0);

        assert_eq!(&*parent, &[2]);
        assert_eq!(&*child, &[2, 0]);
        assert_eq!(child.depth(), 2);
        assert_eq!(child.to_string(), "2.0");
        assert_eq!(FieldPath::root().to_string(), "");
    }

    #[test]
    fn insert_is_last_write_wins_in_place() {
        let mut map = FieldMap::new();
        map.insert("id", FieldPath::from(&[0][..]));
        map.insert("name", FieldPath::from(&[1][..]));
        map.insert("ID", FieldPath::from(&[3, 1][..]));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("id").map(|p| &**p), Some(&[3, 1][..]));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn lookups_are_exact_on_normalized_keys() {
        let mut map = FieldMap::new();
        map.insert("user_id", FieldPath::root().child(0));

        assert!(map.contains_key("user_id"));
        assert!(!map.contains_key("userid"));
        assert!(map.get("USER_ID").is_none());
    }
}
