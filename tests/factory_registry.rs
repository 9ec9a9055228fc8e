#![cfg(test)]

//! The global factory is process-wide state, so everything that switches it
//! lives in one test.

mod test_utils;

use std::{f64::consts::PI, sync::Arc};

use tabulated::{
    FunctionPoint, StorageKind, TabulatedError, TabulatedFunction,
    factory::{
        ArrayTabulatedFunctionFactory, LinkedListTabulatedFunctionFactory,
        create_tabulated_function_from_points, create_tabulated_function_with_count,
        create_tabulated_function_with_values, current_tabulated_function_factory,
        reset_tabulated_function_factory, set_tabulated_function_factory, tabulate,
        tabulate_using, tabulate_with,
    },
    function::basic::{Cos, Sin},
};

use test_utils::points;

#[test]
fn test_global_factory_switching() {
    assert_eq!(current_tabulated_function_factory().kind(), StorageKind::Array);
    assert_eq!(
        tabulate(&Cos, 0.0, PI, 11).unwrap().storage_kind(),
        StorageKind::Array
    );

    set_tabulated_function_factory(Arc::new(LinkedListTabulatedFunctionFactory));
    assert_eq!(
        tabulate(&Cos, 0.0, PI, 11).unwrap().storage_kind(),
        StorageKind::LinkedList
    );
    assert_eq!(
        create_tabulated_function_with_count(0.0, 10.0, 3)
            .unwrap()
            .storage_kind(),
        StorageKind::LinkedList
    );
    assert_eq!(
        create_tabulated_function_with_values(0.0, 10.0, &[0.0, 10.0])
            .unwrap()
            .storage_kind(),
        StorageKind::LinkedList
    );
    let f = create_tabulated_function_from_points(&points(&[(0.0, 0.0), (10.0, 10.0)])).unwrap();
    assert_eq!(f.storage_kind(), StorageKind::LinkedList);
    assert_eq!(f.to_string(), "{(0.0; 0.0), (10.0; 10.0)}");

    // Unqualified construction errors are not wrapped
    assert!(matches!(
        create_tabulated_function_with_count(0.0, 10.0, 1),
        Err(TabulatedError::InvalidArgument(_))
    ));

    set_tabulated_function_factory(Arc::new(ArrayTabulatedFunctionFactory));
    assert_eq!(
        tabulate(&Cos, 0.0, PI, 11).unwrap().storage_kind(),
        StorageKind::Array
    );

    set_tabulated_function_factory(Arc::new(LinkedListTabulatedFunctionFactory));
    reset_tabulated_function_factory();
    assert_eq!(current_tabulated_function_factory().kind(), StorageKind::Array);
}

#[test]
fn test_type_directed_construction() {
    let f = StorageKind::Array.create_with_count(0.0, 10.0, 3).unwrap();
    assert_eq!(f.storage_kind(), StorageKind::Array);
    assert_eq!(f.to_string(), "{(0.0; 0.0), (5.0; 0.0), (10.0; 0.0)}");

    let f = "linked_list"
        .parse::<StorageKind>()
        .unwrap()
        .create_from_points(&[FunctionPoint::new(0.0, 0.0), FunctionPoint::new(10.0, 10.0)])
        .unwrap();
    assert_eq!(f.storage_kind(), StorageKind::LinkedList);

    let f = tabulate_with(StorageKind::LinkedList, &Sin, 0.0, PI, 11).unwrap();
    assert_eq!(f.points_count(), 11);
    assert_eq!(f.storage_kind(), StorageKind::LinkedList);

    let err = StorageKind::Array
        .create_from_points(&points(&[(1.0, 0.0), (0.0, 0.0)]))
        .unwrap_err();
    match err {
        TabulatedError::Configuration { kind, source, .. } => {
            assert_eq!(kind, "array");
            assert!(matches!(
                source.as_deref(),
                Some(TabulatedError::InvalidArgument(_))
            ));
        }
        other => panic!("Expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_injected_factory_ignores_global() {
    let f = tabulate_using(&LinkedListTabulatedFunctionFactory, &Cos, 0.0, 1.0, 4).unwrap();
    assert_eq!(f.storage_kind(), StorageKind::LinkedList);
    let f = tabulate_using(&ArrayTabulatedFunctionFactory, &Cos, 0.0, 1.0, 4).unwrap();
    assert_eq!(f.storage_kind(), StorageKind::Array);
}
