use std::hash::Hash;

use crate::{HashSet, Hasher};

/// Insertion-ordered set: iteration follows the order in which values were first inserted.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    order: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::default(),
        }
    }
}

impl<T: Hash + Eq + Clone> OrderedSet<T> {
    /// Create a new `OrderedSet` with the given capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            order: Vec::with_capacity(cap),
            seen: HashSet::with_capacity_and_hasher(cap, Hasher::default()),
        }
    }

    /// Append `val` unless it's already present. Returns true if it was inserted.
    pub fn insert(&mut self, val: T) -> bool {
        if self.seen.contains(&val) {
            return false;
        }
        self.seen.insert(val.clone());
        self.order.push(val);
        true
    }

    /// Remove `val`, keeping the order of the remaining values. Returns true if it was present.
    pub fn remove<Q>(&mut self, val: &Q) -> bool
    where
        T: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.seen.remove(val) {
            return false;
        }
        self.order.retain(|v| <T as std::borrow::Borrow<Q>>::borrow(v) != val);
        true
    }

    pub fn contains<Q>(&self, val: &Q) -> bool
    where
        T: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seen.contains(val)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.order
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.insert(val);
        }
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
