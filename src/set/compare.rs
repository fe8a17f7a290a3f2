//! Rich comparison of a view against a set-capable operand.
//!
//! | Relation | Result |
//! |----------|--------|
//! | `<`  | `len(V) < len(O)` and `V <= O` |
//! | `<=` | `false` if `len(V) > len(O)`, else every element of V is in O |
//! | `==` | `len(V) == len(O)` and `V <= O` |
//! | `!=` | `!(V == O)` |
//! | `>`  | `len(V) > len(O)` and `V >= O` |
//! | `>=` | `false` if `len(V) < len(O)`, else every element of O is in V |
//!
//! Lengths are compared before any membership scan. Operands that are not
//! genuine sets yield `NotApplicable` for every relation except `!=`.

use crate::operand::{Operand, SetCapable};
use crate::outcome::{Comparison, Outcome, Relation};
use crate::view::View;

/// Compares `view` with `operand` under `relation`.
pub fn compare<V, O>(view: &V, operand: &O, relation: Relation) -> Comparison
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    let Some(other) = operand.as_set() else {
        if relation == Relation::NotEqual {
            // A view never equals something that is not a set.
            return Outcome::Applicable(true);
        }
        tracing::trace!(
            view = V::TYPE_NAME,
            operand = operand.operand_name(),
            %relation,
            "comparison not applicable"
        );
        return Outcome::NotApplicable;
    };
    Outcome::Applicable(compare_set(view, other, relation))
}

fn compare_set<V>(view: &V, other: &dyn SetCapable<V::Item>, relation: Relation) -> bool
where
    V: View + ?Sized,
{
    match relation {
        Relation::ProperSubset => view.len() < other.set_len() && subset(view, other),
        Relation::Subset => subset(view, other),
        Relation::Equal => view.len() == other.set_len() && subset(view, other),
        Relation::NotEqual => !(view.len() == other.set_len() && subset(view, other)),
        Relation::ProperSuperset => view.len() > other.set_len() && superset(view, other),
        Relation::Superset => superset(view, other),
    }
}

fn subset<V>(view: &V, other: &dyn SetCapable<V::Item>) -> bool
where
    V: View + ?Sized,
{
    if view.len() > other.set_len() {
        return false;
    }
    view.iter().all(|elem| other.set_contains(&elem))
}

fn superset<V>(view: &V, other: &dyn SetCapable<V::Item>) -> bool
where
    V: View + ?Sized,
{
    if view.len() < other.set_len() {
        return false;
    }
    other.set_elements().all(|elem| view.contains(&elem))
}

pub fn is_proper_subset<V, O>(view: &V, operand: &O) -> Comparison
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    compare(view, operand, Relation::ProperSubset)
}

pub fn is_subset<V, O>(view: &V, operand: &O) -> Comparison
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    compare(view, operand, Relation::Subset)
}

pub fn is_equal<V, O>(view: &V, operand: &O) -> Comparison
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    compare(view, operand, Relation::Equal)
}

/// Never `NotApplicable`.
pub fn is_not_equal<V, O>(view: &V, operand: &O) -> bool
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    compare(view, operand, Relation::NotEqual).unwrap_or(true)
}

pub fn is_proper_superset<V, O>(view: &V, operand: &O) -> Comparison
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    compare(view, operand, Relation::ProperSuperset)
}

pub fn is_superset<V, O>(view: &V, operand: &O) -> Comparison
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    compare(view, operand, Relation::Superset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Mapping, PairList};
    use std::cell::Cell;
    use std::collections::{BTreeSet, HashSet};

    fn applicable(out: Comparison) -> bool {
        out.applicable().expect("comparison should be applicable")
    }

    #[test]
    fn test_keys_against_larger_set() {
        let md = PairList::from_pairs([("x", 1), ("y", 2)]);
        let keys = md.keys();
        let other: HashSet<&&str> = [&"x", &"y", &"z"].into_iter().collect();

        assert!(applicable(is_subset(&keys, &other)));
        assert!(applicable(is_proper_subset(&keys, &other)));
        assert!(!applicable(is_superset(&keys, &other)));
        assert!(!applicable(is_proper_superset(&keys, &other)));
        assert!(!applicable(is_equal(&keys, &other)));
        assert!(is_not_equal(&keys, &other));
    }

    #[test]
    fn test_equal_sets() {
        let md = PairList::from_pairs([("a", 1), ("b", 2)]);
        let keys = md.keys();
        let other: BTreeSet<&&str> = [&"b", &"a"].into_iter().collect();

        assert!(applicable(is_equal(&keys, &other)));
        assert!(applicable(is_subset(&keys, &other)));
        assert!(applicable(is_superset(&keys, &other)));
        assert!(!applicable(is_proper_subset(&keys, &other)));
        assert!(!applicable(is_proper_superset(&keys, &other)));
        assert!(!is_not_equal(&keys, &other));
    }

    #[test]
    fn test_items_against_pairs() {
        let md = PairList::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        let items = md.items();
        let other: HashSet<(&&str, &i32)> = [(&"a", &1), (&"b", &2)].into_iter().collect();

        assert!(applicable(is_proper_superset(&items, &other)));
        assert!(!applicable(is_subset(&items, &other)));

        let wrong_value: HashSet<(&&str, &i32)> = [(&"a", &9)].into_iter().collect();
        assert!(!applicable(is_superset(&items, &wrong_value)));
    }

    #[test]
    fn test_plain_iterable_is_not_applicable() {
        let md = PairList::from_pairs([("a", 1), ("b", 2)]);
        let keys = md.keys();
        let seq: Vec<&&str> = vec![&"a", &"a", &"b"];

        for relation in Relation::ALL {
            let out = compare(&keys, &seq, relation);
            if relation == Relation::NotEqual {
                assert_eq!(out, Outcome::Applicable(true));
            } else {
                assert!(out.is_not_applicable(), "{relation} should decline");
            }
        }
    }

    #[test]
    fn test_opaque_operand() {
        let md = PairList::from_pairs([("a", 1)]);
        assert!(is_subset(&md.keys(), &7i32).is_not_applicable());
        assert!(is_not_equal(&md.keys(), &7i32));
    }

    #[test]
    fn test_view_against_view() {
        let small = PairList::from_pairs([("a", 1)]);
        let large = PairList::from_pairs([("a", 1), ("b", 2)]);
        assert!(applicable(is_proper_subset(&small.keys(), &large.keys())));
        assert!(applicable(is_proper_superset(&large.items(), &small.items())));

        // values are never a genuine set
        let same = PairList::from_pairs([("a", "a")]);
        assert!(is_subset(&same.keys(), &same.values()).is_not_applicable());
    }

    /// Mapping that counts full passes over its pairs.
    struct Counted<'c> {
        pairs: Vec<(u8, u8)>,
        passes: &'c Cell<usize>,
    }

    impl Mapping for Counted<'_> {
        type Key = u8;
        type Value = u8;

        fn len(&self) -> usize {
            self.pairs.len()
        }

        fn pairs(&self) -> impl Iterator<Item = (&u8, &u8)> {
            self.passes.set(self.passes.get() + 1);
            self.pairs.iter().map(|(k, v)| (k, v))
        }
    }

    #[test]
    fn test_length_check_short_circuits() {
        let passes = Cell::new(0);
        let md = Counted {
            pairs: vec![(1, 1), (2, 2), (3, 3)],
            passes: &passes,
        };
        let keys = crate::view::KeysView::new(&md);
        let other: HashSet<&u8> = [&1u8].into_iter().collect();

        assert!(!applicable(is_subset(&keys, &other)));
        assert!(!applicable(is_equal(&keys, &other)));
        assert!(!applicable(is_proper_subset(&keys, &other)));
        assert_eq!(passes.get(), 0);

        assert!(applicable(is_superset(&keys, &other)));
        assert!(passes.get() > 0);
    }
}
