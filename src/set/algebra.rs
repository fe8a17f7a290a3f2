//! Set algebra between a view and any iterable operand.
//!
//! Every operator builds a fresh [`ResultSet`] from the view, coerces the
//! operand (genuine sets are read in place), and applies the operation to the
//! fresh set. Neither input is modified and the result never aliases the
//! mapping's storage. A non-iterable operand yields `NotApplicable`.

use core::hash::Hash;

use super::ResultSet;
use super::coerce::{Coerced, coerce_operand, coerce_view};
use crate::error::ViewError;
use crate::operand::Operand;
use crate::outcome::Outcome;
use crate::view::View;

/// Outcome of an algebra operator.
pub type AlgebraResult<T> = Result<Outcome<ResultSet<T>>, ViewError>;

fn apply<V, O, F>(view: &V, operand: &O, op: &'static str, f: F) -> AlgebraResult<V::Item>
where
    V: View + ?Sized,
    V::Item: Hash + Eq + Clone,
    O: Operand<V::Item> + ?Sized,
    F: FnOnce(ResultSet<V::Item>, Coerced<'_, V::Item>) -> ResultSet<V::Item>,
{
    let other = match coerce_operand(operand)? {
        Outcome::Applicable(other) => other,
        Outcome::NotApplicable => {
            tracing::trace!(view = V::TYPE_NAME, op, "set operation not applicable");
            return Ok(Outcome::NotApplicable);
        }
    };
    let result = f(coerce_view(view), other);
    tracing::trace!(view = V::TYPE_NAME, op, len = result.len(), "set operation");
    Ok(Outcome::Applicable(result))
}

/// `V & O`
pub fn intersection<V, O>(view: &V, operand: &O) -> AlgebraResult<V::Item>
where
    V: View + ?Sized,
    V::Item: Hash + Eq + Clone,
    O: Operand<V::Item> + ?Sized,
{
    apply(view, operand, "&", |mut lhs, rhs| {
        lhs.retain(|elem| rhs.contains(elem));
        lhs
    })
}

/// `V | O`
pub fn union<V, O>(view: &V, operand: &O) -> AlgebraResult<V::Item>
where
    V: View + ?Sized,
    V::Item: Hash + Eq + Clone,
    O: Operand<V::Item> + ?Sized,
{
    apply(view, operand, "|", |mut lhs, rhs| {
        match rhs {
            Coerced::Owned(rhs) => lhs.extend(rhs),
            borrowed => lhs.extend(borrowed.elements()),
        }
        lhs
    })
}

/// `V - O`
pub fn difference<V, O>(view: &V, operand: &O) -> AlgebraResult<V::Item>
where
    V: View + ?Sized,
    V::Item: Hash + Eq + Clone,
    O: Operand<V::Item> + ?Sized,
{
    apply(view, operand, "-", |mut lhs, rhs| {
        lhs.retain(|elem| !rhs.contains(elem));
        lhs
    })
}

/// `V ^ O`
pub fn symmetric_difference<V, O>(view: &V, operand: &O) -> AlgebraResult<V::Item>
where
    V: View + ?Sized,
    V::Item: Hash + Eq + Clone,
    O: Operand<V::Item> + ?Sized,
{
    apply(view, operand, "^", |mut lhs, rhs| {
        let rhs_only: ResultSet<_> = rhs.elements().filter(|elem| !lhs.contains(elem)).collect();
        lhs.retain(|elem| !rhs.contains(elem));
        lhs.extend(rhs_only);
        lhs
    })
}

/// True iff no element of `operand` is in `view`.
///
/// Stops at the first shared element. Unlike the operators above, an
/// operand that cannot be iterated is an error.
pub fn is_disjoint<V, O>(view: &V, operand: &O) -> Result<bool, ViewError>
where
    V: View + ?Sized,
    O: Operand<V::Item> + ?Sized,
{
    let Some(elements) = operand.iterate() else {
        return Err(ViewError::NotIterable {
            operand: operand.operand_name(),
        });
    };
    for elem in elements {
        if view.contains(&elem?) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::OneShot;
    use crate::view::PairList;
    use std::collections::{BTreeSet, HashSet};

    fn set<T: Hash + Eq, const N: usize>(items: [T; N]) -> ResultSet<T> {
        ResultSet::from(items)
    }

    fn applicable<T>(out: AlgebraResult<T>) -> ResultSet<T> {
        out.expect("no operand error")
            .applicable()
            .expect("operation should be applicable")
    }

    #[test]
    fn test_keys_with_hash_set() {
        let md = PairList::from_pairs([("x", 1), ("y", 2)]);
        let keys = md.keys();
        let other: HashSet<&&str> = set([&"x", &"y", &"z"]);

        assert_eq!(applicable(union(&keys, &other)), set([&"x", &"y", &"z"]));
        assert_eq!(applicable(intersection(&keys, &other)), set([&"x", &"y"]));
        assert!(applicable(difference(&keys, &other)).is_empty());
        assert_eq!(applicable(symmetric_difference(&keys, &other)), set([&"z"]));
    }

    #[test]
    fn test_plain_iterable_operand() {
        let md = PairList::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
        let keys = md.keys();
        let seq: Vec<&&str> = vec![&"b", &"c", &"c"];

        assert_eq!(applicable(union(&keys, &seq)), set([&"a", &"b", &"c"]));
        assert_eq!(applicable(intersection(&keys, &seq)), set([&"b"]));
        assert_eq!(applicable(difference(&keys, &seq)), set([&"a"]));
        assert_eq!(applicable(symmetric_difference(&keys, &seq)), set([&"a", &"c"]));
    }

    #[test]
    fn test_items_with_btree_set() {
        let md = PairList::from_pairs([("a", 1), ("b", 2)]);
        let items = md.items();
        let other: BTreeSet<(&&str, &i32)> = [(&"a", &1), (&"b", &5)].into_iter().collect();

        assert_eq!(applicable(intersection(&items, &other)), set([(&"a", &1)]));
        assert_eq!(applicable(difference(&items, &other)), set([(&"b", &2)]));
        assert_eq!(
            applicable(symmetric_difference(&items, &other)),
            set([(&"b", &2), (&"b", &5)])
        );
    }

    #[test]
    fn test_symmetric_difference_with_repeated_keys() {
        let md = PairList::from_pairs([("a", 1), ("a", 2), ("b", 3)]);
        let keys = md.keys();
        assert!(applicable(symmetric_difference(&keys, &keys)).is_empty());

        let other = PairList::from_pairs([("a", 0), ("c", 0), ("c", 1)]);
        assert_eq!(
            applicable(symmetric_difference(&keys, &other.keys())),
            set([&"b", &"c"])
        );
    }

    #[test]
    fn test_values_keep_only_unique() {
        let md = PairList::from_pairs([("a", 1), ("b", 1), ("c", 2)]);
        let out = applicable(union(&md.values(), &Vec::<&i32>::new()));
        assert_eq!(out, set([&1, &2]));
    }

    #[test]
    fn test_opaque_operand_is_not_applicable() {
        let md = PairList::from_pairs([("a", 1)]);
        let keys = md.keys();
        assert!(union(&keys, &1.5f64).unwrap().is_not_applicable());
        assert!(intersection(&keys, &()).unwrap().is_not_applicable());
        assert!(difference(&keys, &false).unwrap().is_not_applicable());
        assert!(symmetric_difference(&keys, &'c').unwrap().is_not_applicable());
    }

    #[test]
    fn test_result_is_independent_of_mapping() {
        let md = PairList::from_pairs([("a", 1), ("b", 2)]);
        let mut out = applicable(union(&md.keys(), &Vec::<&&str>::new()));
        out.clear();
        assert_eq!(md.keys().len(), 2);
    }

    #[test]
    fn test_operand_error_propagates() {
        let md = PairList::from_pairs([("a", 1)]);
        let values = md.values();
        let one = 1;
        let src = OneShot::new(
            vec![Ok(&one), Err(std::io::Error::other("reset by peer"))].into_iter(),
        );
        let err = union(&values, &src).unwrap_err();
        assert!(matches!(err, ViewError::Operand(_)));
    }

    #[test]
    fn test_is_disjoint() {
        let md = PairList::from_pairs([("a", 1), ("b", 2)]);
        let keys = md.keys();
        assert!(is_disjoint(&keys, &vec![&"c", &"d"]).unwrap());
        assert!(!is_disjoint(&keys, &vec![&"d", &"b"]).unwrap());
        assert!(is_disjoint(&keys, &Vec::<&&str>::new()).unwrap());
        assert!(matches!(
            is_disjoint(&keys, &3u8),
            Err(ViewError::NotIterable { operand: "u8" })
        ));
    }

    #[test]
    fn test_is_disjoint_against_itself() {
        let md = PairList::from_pairs([("a", 1)]);
        let items = md.items();
        assert!(!is_disjoint(&items, &items).unwrap());

        let empty = PairList::<u8, u8>::new();
        assert!(is_disjoint(&empty.items(), &empty.items()).unwrap());
    }
}
