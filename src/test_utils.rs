/// Utilities for tests.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;

/// If `left` and `right` hold the same elements, ignoring order and repetition,
/// return `None`. Otherwise, return `Some(left_only, right_only)`, where
/// `left_only` and `right_only` are sets of the elements appearing only on
/// one side or the other.
pub fn diff_elements<T: Clone + Hash + Eq>(left: &[T], right: &[T])
    -> Option<(HashSet<T>, HashSet<T>)>
{
    let left: HashSet<_> = FromIterator::from_iter(left.iter().cloned());
    let right: HashSet<_> = FromIterator::from_iter(right.iter().cloned());
    if left == right {
        None
    } else {
        Some((HashSet::from_iter(left.difference(&right).cloned()),
              HashSet::from_iter(right.difference(&left).cloned())))
    }
}

/// Take ownership of LEFT and RIGHT, and assert that they hold the same
/// elements, ignoring order and repetition.
macro_rules! assert_same_elements {
    ($left:expr, $right:expr) => ({
        let left = $left;
        let right = $right;
        if let Some((left_only, right_only)) = ::test_utils::diff_elements(&left, &right) {
            panic!("assertion failed: left and right have different elements:\n\
                    left has only `{:#?}`,\n\
                    right has only `{:#?}`",
                   left_only, right_only);
        }
    });
}

#[test]
fn diff_elements_ignores_order_and_repetition() {
    assert_eq!(diff_elements(&[1, 2, 2, 3], &[3, 1, 2]), None);

    let (left_only, right_only) = diff_elements(&[1, 2], &[2, 3]).unwrap();
    assert_eq!(left_only, HashSet::from_iter(vec![1]));
    assert_eq!(right_only, HashSet::from_iter(vec![3]));
}
