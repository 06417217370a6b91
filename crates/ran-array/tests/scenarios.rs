use std::cell::RefCell;
use std::rc::Rc;

use ran_array::{ArrayError, GrowableArray, GrowthKind, GrowthPolicy, Linear, Logarithmic};
use ran_math::{Mat3, Vec3};
use ran_test_utils::{init_logging, DestructorLog};

#[test]
fn five_pushes_linear_end_at_capacity_five() {
    init_logging();
    let mut arr: GrowableArray<i32, Linear> = GrowableArray::new();
    for v in 0..5 {
        arr.push_back(v);
    }
    assert_eq!(arr.size(), 5);
    assert_eq!(arr.capacity(), 5);
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn five_pushes_logarithmic_end_at_capacity_eight() {
    init_logging();
    let mut arr: GrowableArray<i32, Logarithmic> = GrowableArray::new();
    for v in 0..5 {
        arr.push_back(v);
    }
    assert_eq!(arr.size(), 5);
    assert_eq!(arr.capacity(), 8);
}

#[test]
fn erase_from_three_element_array() {
    let mut arr: GrowableArray<i32> = [10, 20, 30].into_iter().collect();
    arr.erase(1);
    assert_eq!(arr.as_slice(), &[10, 30]);
    assert_eq!(arr.size(), 2);
}

#[test]
fn free_logs_values_in_push_order() {
    let log = DestructorLog::new();
    let mut arr: GrowableArray<&'static str> = GrowableArray::new();
    arr.set_element_destructor(log.recorder());
    arr.push_back("A");
    arr.push_back("B");
    arr.push_back("C");
    arr.free();
    assert_eq!(log.entries(), vec!["A", "B", "C"]);
    assert_eq!(log.len(), 3);

    log.clear();
    arr.set_element_destructor(log.recorder());
    arr.push_back("D");
    arr.pop_back();
    assert_eq!(log.entries(), vec!["D"]);
    assert_eq!(log.len(), 1);
}

/// A policy that never grows.
struct Stuck;

impl GrowthPolicy for Stuck {
    const KIND: GrowthKind = GrowthKind::Linear;

    fn next_capacity(current: usize) -> usize {
        current
    }
}

#[test]
#[should_panic(expected = "did not increase capacity")]
fn non_growing_policy_is_rejected() {
    let mut arr: GrowableArray<i32, Stuck> = GrowableArray::new();
    arr.push_back(1);
}

#[test]
fn non_growing_policy_never_lets_len_pass_capacity() {
    let mut arr: GrowableArray<i32, Stuck> = GrowableArray::with_capacity(2);
    arr.push_back(1);
    arr.push_back(2);
    assert_eq!(arr.capacity(), 2);
    let overflow = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| arr.push_back(3)));
    assert!(overflow.is_err());
    assert!(arr.capacity() >= arr.len());
    assert_eq!(arr.as_slice(), &[1, 2]);
}

#[test]
fn default_growth_matches_feature() {
    let arr: GrowableArray<u8> = GrowableArray::new();
    let expected = if cfg!(feature = "logarithmic-growth") {
        GrowthKind::Logarithmic
    } else {
        GrowthKind::Linear
    };
    assert_eq!(arr.growth_kind(), expected);
}

/// Elements that own a resource: the destructor releases it, mirroring the
/// pattern of arrays of handles that need explicit cleanup.
#[test]
fn destructor_releases_owned_resources() {
    let open: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));

    #[derive(Debug)]
    struct Handle {
        id: u32,
        registry: Rc<RefCell<Vec<u32>>>,
    }

    let mut arr: GrowableArray<Handle, Logarithmic> = GrowableArray::new();
    arr.set_element_destructor(|h: &mut Handle| {
        h.registry.borrow_mut().retain(|&id| id != h.id);
    });
    for id in 0..6 {
        open.borrow_mut().push(id);
        arr.push_back(Handle {
            id,
            registry: Rc::clone(&open),
        });
    }

    arr.pop_back();
    assert_eq!(*open.borrow(), vec![0, 1, 2, 3, 4]);

    // erase hands the handle back without releasing it
    let taken = arr.erase(0).unwrap();
    assert_eq!(taken.id, 0);
    assert_eq!(*open.borrow(), vec![0, 1, 2, 3, 4]);

    drop(arr);
    assert_eq!(*open.borrow(), vec![0]);
}

#[test]
fn stores_numeric_payloads() {
    let mut points: GrowableArray<Vec3, Logarithmic> = GrowableArray::new();
    points.reserve(3);
    points.push_back(Vec3::new(1.0, 0.0, 0.0));
    points.push_back(Vec3::new(0.0, 1.0, 0.0));
    points.push_back(Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(points.capacity(), 3);

    let flip = Mat3::from_cols(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );
    for p in points.iter_mut() {
        *p = flip * *p;
    }
    assert_eq!(points[0], Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(points[1], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(points[2], Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn checked_operations_report_precondition_failures() {
    let mut arr: GrowableArray<u8> = GrowableArray::new();
    assert_eq!(arr.try_pop_back(), Err(ArrayError::Empty));
    assert_eq!(
        arr.try_insert(1, 0),
        Err(ArrayError::IndexOutOfBounds { index: 1, len: 0 })
    );
    assert!(arr.try_insert(0, 7).is_ok());
    assert_eq!(arr.as_slice(), &[7]);
}
