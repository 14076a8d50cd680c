//! Membership views over caller-owned collections of identifiers in use.
//!
//! Callers keep their identifiers in whatever collection suits them; the
//! allocator only ever asks a single question of it, "is this value taken?".
//! Adapters are provided for the standard set and map types (maps answer by
//! key), slices, `dashmap` collections and plain predicates. A collection that
//! cannot answer the question at all is represented by [`Unrestricted`],
//! which accepts every value.

use dashmap::{DashMap, DashSet};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// A read-only view of the identifiers currently in use.
///
/// Implementations must not have side effects observable by the allocator;
/// `contains` may be called any number of times within one allocation.
pub trait Taken {
    /// Returns `true` if `id` is already in use.
    fn contains(&self, id: &str) -> bool;
}

/// The permissive fallback: nothing is ever considered taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unrestricted;

impl Taken for Unrestricted {
    fn contains(&self, _id: &str) -> bool {
        false
    }
}

/// A [`Taken`] backed by a predicate.
///
/// Built with [`taken_fn`].
#[derive(Clone, Copy)]
pub struct TakenFn<F>(F);

/// Wraps a predicate as a [`Taken`].
///
/// ```
/// use pantry_core::{taken_fn, Taken};
///
/// let reserved = taken_fn(|id| id.starts_with("sys-"));
/// assert!(reserved.contains("sys-root"));
/// assert!(!reserved.contains("recipe-1"));
/// ```
pub fn taken_fn<F>(predicate: F) -> TakenFn<F>
where
    F: Fn(&str) -> bool,
{
    TakenFn(predicate)
}

impl<F> Taken for TakenFn<F>
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, id: &str) -> bool {
        (self.0)(id)
    }
}

impl<T: Taken + ?Sized> Taken for &T {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }
}

impl<T: Taken + ?Sized> Taken for Box<T> {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }
}

impl<K, S> Taken for HashSet<K, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn contains(&self, id: &str) -> bool {
        HashSet::contains(self, id)
    }
}

impl<K> Taken for BTreeSet<K>
where
    K: Borrow<str> + Ord,
{
    fn contains(&self, id: &str) -> bool {
        BTreeSet::contains(self, id)
    }
}

impl<K, V, S> Taken for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }
}

impl<K, V> Taken for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }
}

impl<K, S> Taken for DashSet<K, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn contains(&self, id: &str) -> bool {
        DashSet::contains(self, id)
    }
}

impl<K, V, S> Taken for DashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }
}

// Linear scan; fine for the handful of ids a list view holds.
impl<K: AsRef<str>> Taken for [K] {
    fn contains(&self, id: &str) -> bool {
        self.iter().any(|k| k.as_ref() == id)
    }
}

impl<K: AsRef<str>, const N: usize> Taken for [K; N] {
    fn contains(&self, id: &str) -> bool {
        Taken::contains(self.as_slice(), id)
    }
}

impl<K: AsRef<str>> Taken for Vec<K> {
    fn contains(&self, id: &str) -> bool {
        Taken::contains(self.as_slice(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identifier;

    fn abc() -> [&'static str; 3] {
        ["a", "b", "c"]
    }

    #[test]
    fn unrestricted_accepts_everything() {
        assert!(!Unrestricted.contains("anything"));
        assert!(!Unrestricted.contains(""));
    }

    #[test]
    fn hash_set_of_strings() {
        let set: HashSet<String> = abc().iter().map(|s| s.to_string()).collect();
        assert!(Taken::contains(&set, "a"));
        assert!(!Taken::contains(&set, "d"));
    }

    #[test]
    fn hash_set_of_str_and_identifiers() {
        let borrowed: HashSet<&str> = abc().into_iter().collect();
        assert!(Taken::contains(&borrowed, "b"));

        let ids: HashSet<Identifier> = abc().iter().map(Identifier::new_unchecked).collect();
        assert!(Taken::contains(&ids, "c"));
        assert!(!Taken::contains(&ids, "cc"));
    }

    #[test]
    fn btree_set() {
        let set: BTreeSet<String> = abc().iter().map(|s| s.to_string()).collect();
        assert!(Taken::contains(&set, "a"));
        assert!(!Taken::contains(&set, "z"));
    }

    #[test]
    fn maps_answer_by_key() {
        let mut recipes = HashMap::new();
        recipes.insert("pancakes".to_string(), 3_u32);
        assert!(Taken::contains(&recipes, "pancakes"));
        // values are never consulted
        assert!(!Taken::contains(&recipes, "3"));

        let mut timers = BTreeMap::new();
        timers.insert(Identifier::new_unchecked("t1"), "boil eggs");
        assert!(Taken::contains(&timers, "t1"));
        assert!(!Taken::contains(&timers, "boil eggs"));
    }

    #[test]
    fn dash_collections() {
        let set: DashSet<String> = DashSet::new();
        set.insert("a".to_string());
        assert!(Taken::contains(&set, "a"));
        assert!(!Taken::contains(&set, "b"));

        let map: DashMap<String, ()> = DashMap::new();
        map.insert("k".to_string(), ());
        assert!(Taken::contains(&map, "k"));
    }

    #[test]
    fn slices_and_vecs() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert!(Taken::contains(&list, "b"));
        assert!(Taken::contains(list.as_slice(), "a"));
        assert!(!Taken::contains(&list, "c"));

        let fixed = ["x", "y"];
        assert!(Taken::contains(&fixed, "y"));
        assert!(!Taken::contains(&fixed, "z"));
    }

    #[test]
    fn predicates_and_trait_objects() {
        let odd = taken_fn(|id: &str| id.len() % 2 == 1);
        assert!(odd.contains("abc"));
        assert!(!odd.contains("ab"));

        let boxed: Box<dyn Taken> = Box::new(Unrestricted);
        assert!(!boxed.contains("x"));
    }
}
