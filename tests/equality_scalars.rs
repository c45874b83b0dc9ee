mod common;

use common::{SimpleClass, SomeEnum};
use structural_eq::StructuralComparer;

#[test]
fn same_instance_is_equal_to_itself() {
    let first = SimpleClass::default();
    let comparer = StructuralComparer::<SimpleClass>::new();

    assert!(comparer.equals(Some(&first), Some(&first)));
}

#[test]
fn null_against_value_is_unequal_either_way() {
    let first = SimpleClass::default();
    let comparer = StructuralComparer::<SimpleClass>::new();

    assert!(!comparer.equals(None, Some(&first)));
    assert!(!comparer.equals(Some(&first), None));
}

#[test]
fn two_nulls_are_equal() {
    let comparer = StructuralComparer::<SimpleClass>::new();
    assert!(comparer.equals(None, None));
}

#[test]
fn ints_compare_by_value() {
    let comparer = StructuralComparer::<i32>::new();
    let cases = [
        (1, 1, true),
        (4, 2, false),
        (i32::MAX, i32::MAX, true),
        (i32::MIN, i32::MIN, true),
        (i32::MAX, i32::MIN, false),
        (0, 0, true),
    ];

    for (first, second, expected) in cases {
        assert_eq!(
            comparer.equals(Some(&first), Some(&second)),
            expected,
            "equals({first}, {second})"
        );
    }
}

#[test]
fn doubles_compare_by_value() {
    let comparer = StructuralComparer::<f64>::new();
    let cases = [
        (1.12, 0.001, false),
        (4.000, 4.0, true),
        (f64::MAX, f64::MAX, true),
        (f64::MIN, f64::MIN, true),
        (f64::MAX, f64::MIN, false),
        (0.0, 0.0000, true),
        (0.0, -0.0, true),
    ];

    for (first, second, expected) in cases {
        assert_eq!(
            comparer.equals(Some(&first), Some(&second)),
            expected,
            "equals({first}, {second})"
        );
    }
}

#[test]
fn nan_equals_only_the_same_instance() {
    let nan = f64::NAN;
    let other = f64::NAN;
    assert!(structural_eq::equals(&nan, &nan));
    assert!(!structural_eq::equals(&nan, &other));
}

#[test]
fn strings_compare_by_content() {
    let comparer = StructuralComparer::<String>::new();
    let str1 = String::from("str1");
    let str1_again = String::from("str1");
    let str2 = String::from("str2");

    assert!(!comparer.equals(Some(&str1), Some(&str2)));
    assert!(comparer.equals(Some(&str1), Some(&str1_again)));
}

#[test]
fn enums_compare_by_variant() {
    assert!(structural_eq::equals(&SomeEnum::One, &SomeEnum::One));
    assert!(!structural_eq::equals(&SomeEnum::One, &SomeEnum::Two));
}
