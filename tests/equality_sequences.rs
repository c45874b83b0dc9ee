mod common;

use std::collections::{BTreeSet, LinkedList, VecDeque};

use common::{SimpleClass, SomeEnum};
use structural_eq::{equals, Inspect};

fn simple(id: i32, name: &str) -> SimpleClass {
    SimpleClass::new(id, name, SomeEnum::One)
}

fn objects(items: &[i32]) -> Vec<Box<dyn Inspect>> {
    items.iter().map(|&i| Box::new(i) as Box<dyn Inspect>).collect()
}

#[test]
fn arrays_with_same_elements_are_equal() {
    assert!(equals(&[1, 2, 3], &[1, 2, 3]));
    assert!(!equals(&[1, 2, 3], &[1, 2, 6]));
}

#[test]
fn length_mismatch_is_unequal_both_ways() {
    assert!(!equals(&vec![1, 2, 3], &vec![1, 2]));
    assert!(!equals(&vec![1, 2], &vec![1, 2, 3]));
}

#[test]
fn sequences_of_composites_compare_every_element() {
    let longer = vec![simple(1, "name"), simple(2, "name2")];
    let shorter = vec![simple(1, "name")];
    assert!(!equals(&longer, &shorter));

    assert!(!equals(&vec![simple(1, "name")], &vec![simple(1, "name2")]));
    assert!(equals(&vec![simple(1, "name")], &vec![simple(1, "name")]));
}

#[test]
fn mismatch_after_first_composite_element_is_detected() {
    let a = vec![simple(1, "name"), simple(2, "name2")];
    let b = vec![simple(1, "name"), simple(2, "other")];
    assert!(!equals(&a, &b));
}

#[test]
fn object_lists_compare_by_element_runtime_type() {
    assert!(equals(&objects(&[1, 2, 3]), &objects(&[1, 2, 3])));
    assert!(!equals(&objects(&[1, 2, 3]), &objects(&[1, 2, 6])));
}

#[test]
fn queues_compare_in_queue_order() {
    let a: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
    let b: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
    let c: VecDeque<i32> = VecDeque::from(vec![1, 2, 6]);

    assert!(equals(&a, &b));
    assert!(!equals(&a, &c));
}

#[test]
fn stacks_compare_in_stack_order() {
    let mut a = Vec::new();
    let mut b = Vec::new();
    let mut c = Vec::new();
    for (x, y) in [(1, 1), (2, 2), (3, 6)] {
        a.push(x);
        b.push(x);
        c.push(y);
    }

    assert!(equals(&a, &b));
    assert!(!equals(&a, &c));
}

#[test]
fn other_ordered_containers_are_sequences() {
    let a: LinkedList<&'static str> = ["x", "y"].into_iter().collect();
    let b: LinkedList<&'static str> = ["x", "y"].into_iter().collect();
    assert!(equals(&a, &b));

    let c: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
    let d: BTreeSet<u8> = [1, 2, 3].into_iter().collect();
    assert!(equals(&c, &d));
}

#[test]
fn element_order_matters() {
    assert!(!equals(&vec![1, 2, 3], &vec![3, 2, 1]));
}

#[test]
fn empty_sequences_are_equal() {
    assert!(equals(&Vec::<SimpleClass>::new(), &Vec::new()));
}

static LEFT: [i32; 3] = [1, 2, 3];
static RIGHT: [i32; 3] = [1, 2, 3];
static SHORT: [i32; 2] = [1, 2];

#[test]
fn static_slices_compare_element_wise() {
    let left: &'static [i32] = &LEFT;
    let right: &'static [i32] = &RIGHT;
    let short: &'static [i32] = &SHORT;

    assert!(equals(&left, &right));
    assert!(!equals(&left, &short));
    assert_eq!(structural_eq::hash(&left), structural_eq::hash(&right));
}
