use refresher::BinarySearchTree;

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map of counts.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of items in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, map: &mut HashMap<T, usize>)
where
    T: std::hash::Hash + Eq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone()).unwrap();
                *map.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => {
                let removed = bst.remove(x).unwrap().is_some();
                let expected = match map.get_mut(x) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        true
                    }
                    _ => false,
                };
                assert_eq!(removed, expected);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut map = HashMap::new();

        do_ops(&ops, &mut tree, &mut map);
        map.iter().all(|(x, count)| tree.has(x).unwrap() == (*count > 0))
            && tree.len() == map.values().sum::<usize>()
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_items(xs.iter().copied()).unwrap();

        xs.iter().all(|x| tree.has(x).unwrap())
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_items(xs.iter().copied()).unwrap();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.has(x).unwrap())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = BinarySearchTree::from_items(xs.iter().copied()).unwrap();
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.remove(delete).unwrap().is_some() {}
        }

        let mut still_present = xs;
        for delete in &deletes {
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.has(x).unwrap())
            && still_present.iter().all(|x| tree.has(x).unwrap())
    }

    fn reversed_comparator_swaps_extremes(xs: Vec<i8>) -> bool {
        let tree =
            BinarySearchTree::from_items_with_comparator(xs.iter().copied(), |a: &i8, b: &i8| b.cmp(a))
                .unwrap();

        tree.minimum() == xs.iter().max() && tree.maximum() == xs.iter().min()
    }
}
