use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Counts occurrences of each key, iterating in key order.
#[derive(Clone, Debug)]
pub struct Counter<T: Ord> {
    map: BTreeMap<T, usize>,
    sum: usize,
}

impl<T: Ord> Default for Counter<T> {
    fn default() -> Counter<T> {
        Counter::new()
    }
}

impl<T: Ord> Counter<T> {
    pub fn new() -> Counter<T> {
        Counter {
            map: BTreeMap::new(),
            sum: 0,
        }
    }

    pub fn inc(&mut self, val: T) -> usize {
        self.add(val, 1)
    }

    pub fn add(&mut self, val: T, amount: usize) -> usize {
        let entry = self.map.entry(val).or_insert(0);
        *entry += amount;
        self.sum += amount;
        *entry
    }

    pub fn get(&self, val: T) -> usize {
        self.map.get(&val).cloned().unwrap_or(0)
    }

    pub fn sum(&self) -> usize {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn borrow(&self) -> &BTreeMap<T, usize> {
        &self.map
    }

    pub fn consume(self) -> BTreeMap<T, usize> {
        self.map
    }
}

/// ```
/// assert!(rtutil::contains_duplicates(&["a", "b", "a"]));
/// assert!(!rtutil::contains_duplicates(&[1, 2, 3]));
/// ```
pub fn contains_duplicates<T: Hash + Eq>(items: &[T]) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter() {
        let mut c = Counter::new();
        c.inc("temple");
        c.inc("fort");
        assert_eq!(c.inc("temple"), 2);
        c.add("dhaba", 5);
        assert_eq!(c.get("temple"), 2);
        assert_eq!(c.get("museum"), 0);
        assert_eq!(c.sum(), 8);
        assert_eq!(
            c.consume().into_iter().collect::<Vec<_>>(),
            vec![("dhaba", 5), ("fort", 1), ("temple", 2)]
        );
    }
}
