#![cfg(test)]

mod test_utils;

use std::f64::consts::PI;

use tabulated::{
    StorageKind, TabulatedError,
    factory::tabulate_with,
    function::{
        Function,
        basic::{Cos, Exp, Log, Sin},
        composition, mult, power, scale, shift, sum,
    },
};

use test_utils::assert_float_eq;

#[test]
fn test_tabulated_sum_of_squares() {
    let sin2 = tabulate_with(StorageKind::Array, &power(Sin, 2.0), 0.0, PI, 101).unwrap();
    let cos2 = tabulate_with(StorageKind::LinkedList, &power(Cos, 2.0), 0.0, PI, 101).unwrap();
    let one = sum(sin2, cos2).unwrap();

    assert_eq!(one.left_border(), 0.0);
    assert_eq!(one.right_border(), PI);
    for i in 0..=20 {
        let x = PI * i as f64 / 20.0;
        assert_float_eq(one.value_at(x), 1.0, 1e-3);
    }
}

#[test]
fn test_sum_of_tabulated_functions_uses_intersection() {
    let a = tabulate_with(StorageKind::Array, &Exp, 0.0, 2.0, 5).unwrap();
    let b = tabulate_with(StorageKind::Array, &Exp, 1.0, 3.0, 5).unwrap();
    let f = mult(a, b).unwrap();
    assert_eq!(f.left_border(), 1.0);
    assert_eq!(f.right_border(), 2.0);
}

#[test]
fn test_disjoint_tabulated_domains() {
    let a = tabulate_with(StorageKind::Array, &Exp, 0.0, 1.0, 3).unwrap();
    let b = tabulate_with(StorageKind::LinkedList, &Exp, 2.0, 3.0, 3).unwrap();
    assert!(matches!(
        sum(a, b),
        Err(TabulatedError::InvalidArgument(_))
    ));
}

#[test]
fn test_composition_of_log_and_exp() {
    let f = composition(Log::new(10.0).unwrap(), shift(Exp, 0.0, 1.0));
    assert_float_eq(f.value_at(0.0), 2.0_f64.log10(), 1e-15);
}

#[test]
fn test_scale_rejects_zero() {
    assert!(matches!(
        scale(Exp, 0.0, 1.0),
        Err(TabulatedError::InvalidArgument(_))
    ));
    let f = scale(Exp, 2.0, 0.5).unwrap();
    assert_float_eq(f.value_at(2.0), 0.5 * 1.0_f64.exp(), 1e-15);
}
