use std::collections::BTreeMap;
use std::fmt;

/// A set of items deduplicated by a key extracted with an explicit function.
///
/// The item types carry no name-based equality of their own; whoever builds
/// the set decides what makes two items "the same".
#[derive(Clone)]
pub struct KeyedSet<T> {
    key: fn(&T) -> &str,
    items: BTreeMap<String, T>,
}

impl<T> KeyedSet<T> {
    pub fn new(key: fn(&T) -> &str) -> Self {
        Self {
            key,
            items: BTreeMap::new(),
        }
    }

    /// Inserts the item unless one with the same key is present. Returns whether it was added.
    pub fn insert_new(&mut self, item: T) -> bool {
        let key = (self.key)(&item).to_owned();
        if self.items.contains_key(&key) {
            return false;
        }
        self.items.insert(key, item);
        true
    }

    /// Stores the item under its key, returning the one it displaced.
    pub fn replace(&mut self, item: T) -> Option<T> {
        let key = (self.key)(&item).to_owned();
        self.items.insert(key, item)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<T: fmt::Debug> fmt::Debug for KeyedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.values()).finish()
    }
}
