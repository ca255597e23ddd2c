use super::VersionConstraint;
use std::cmp::Ordering;

/// Insertion-ordered set of constraints imposed on one component.
///
/// Uniqueness is decided on the raw string value; the first occurrence wins
/// and iteration follows first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSet<V> {
    constraints: Vec<V>,
}

impl<V: VersionConstraint> ConstraintSet<V> {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Adds a constraint, returning false when an equal raw value is already present
    pub fn insert(&mut self, constraint: V) -> bool {
        if self.contains(constraint.string_value()) {
            return false;
        }
        self.constraints.push(constraint);
        true
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.constraints.iter().any(|c| c.string_value() == raw)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    fn extend(&mut self, other: ConstraintSet<V>) {
        for constraint in other.constraints {
            self.insert(constraint);
        }
    }
}

impl<V: VersionConstraint> Default for ConstraintSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VersionConstraint> FromIterator<V> for ConstraintSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        for constraint in iter {
            set.insert(constraint);
        }
        set
    }
}

impl<'a, V> IntoIterator for &'a ConstraintSet<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

/// Dependents aggregate: each component mapped to the constraints its
/// dependents impose on it, in component order.
///
/// Built once per report and read-only afterwards. The renderer iterates it
/// as-is and never re-sorts.
#[derive(Debug, Clone)]
pub struct Dependents<C, V> {
    entries: Vec<(C, ConstraintSet<V>)>,
}

impl<C, V: VersionConstraint> Dependents<C, V> {
    /// Wraps entries that are already ordered by the component comparator.
    ///
    /// Order is trusted, not verified.
    pub fn from_sorted(entries: Vec<(C, ConstraintSet<V>)>) -> Self {
        Self { entries }
    }

    /// Orders entries with the injected comparator.
    ///
    /// The sort is stable. Entries whose components compare `Equal` are merged
    /// into the first one, unioning their constraint sets.
    pub fn sorted_by<I, F>(entries: I, mut compare: F) -> Self
    where
        I: IntoIterator<Item = (C, ConstraintSet<V>)>,
        F: FnMut(&C, &C) -> Ordering,
    {
        let mut entries: Vec<(C, ConstraintSet<V>)> = entries.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| compare(a, b));

        let mut merged: Vec<(C, ConstraintSet<V>)> = Vec::with_capacity(entries.len());
        for (component, constraints) in entries {
            let same_component = merged
                .last()
                .is_some_and(|(last, _)| compare(last, &component) == Ordering::Equal);

            match merged.last_mut() {
                Some((_, existing)) if same_component => existing.extend(constraints),
                _ => merged.push((component, constraints)),
            }
        }

        Self { entries: merged }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&C, &ConstraintSet<V>)> {
        self.entries.iter().map(|(c, set)| (c, set))
    }

    pub fn components(&self) -> impl Iterator<Item = &C> {
        self.entries.iter().map(|(c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_constraint_count(&self) -> usize {
        self.entries.iter().map(|(_, set)| set.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&'static str]) -> ConstraintSet<&'static str> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_constraint_set_dedupes_on_raw_value() {
        let constraints = set(&["[1.27.1]", "1.27.1", "[1.27.1]"]);
        assert_eq!(constraints.len(), 2);
        let values: Vec<_> = constraints.iter().copied().collect();
        assert_eq!(values, vec!["[1.27.1]", "1.27.1"]);
    }

    #[test]
    fn test_constraint_set_insert_reports_duplicates() {
        let mut constraints = ConstraintSet::new();
        assert!(constraints.insert("1.0"));
        assert!(!constraints.insert("1.0"));
        assert!(constraints.contains("1.0"));
        assert!(!constraints.contains("[1.0]"));
    }

    #[test]
    fn test_from_sorted_keeps_given_order() {
        let dependents = Dependents::from_sorted(vec![("b", set(&["1"])), ("a", set(&["2"]))]);
        let order: Vec<_> = dependents.components().copied().collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn test_sorted_by_orders_with_injected_comparator() {
        let dependents = Dependents::sorted_by(
            vec![("a", set(&["1"])), ("c", set(&["2"])), ("b", set(&["3"]))],
            |x, y| y.cmp(x),
        );
        let order: Vec<_> = dependents.components().copied().collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sorted_by_merges_equal_components() {
        let dependents = Dependents::sorted_by(
            vec![
                ("guava", set(&["28.0-jre"])),
                ("grpc", set(&["[1.27.1]"])),
                ("guava", set(&["28.0-jre", "[28.1-jre]"])),
            ],
            |x, y| x.cmp(y),
        );

        assert_eq!(dependents.len(), 2);
        assert_eq!(dependents.total_constraint_count(), 3);
        let (_, guava) = dependents.iter().nth(1).unwrap();
        let values: Vec<_> = guava.iter().copied().collect();
        assert_eq!(values, vec!["28.0-jre", "[28.1-jre]"]);
    }

    #[test]
    fn test_empty_dependents() {
        let dependents: Dependents<&str, &str> = Dependents::from_sorted(vec![]);
        assert!(dependents.is_empty());
        assert_eq!(dependents.total_constraint_count(), 0);
    }
}
