// tests/controllers.rs

mod common;

use std::sync::Arc;

use common::{TestError, init_tracing};
use must::{
    CollectController, Controller, DefaultController, LogController, value_or_fallback,
};

#[test]
fn default_controller_returns_its_value_for_any_error() {
    let controller = DefaultController::new(vec![1, 2]);

    assert_eq!(controller.fallback(TestError::DiskFull), vec![1, 2]);
    assert_eq!(controller.fallback("any displayable thing"), vec![1, 2]);
    assert_eq!(controller.value(), &vec![1, 2]);
}

#[test]
fn log_controller_continues_with_value() {
    init_tracing();
    let controller = LogController::new(0.5_f64);

    let value = value_or_fallback(&controller, || "abc".parse::<f64>());

    assert_eq!(value, 0.5);
}

#[test]
fn collect_controller_keeps_errors_in_order() {
    let controller = CollectController::<Option<u32>, TestError>::new(None);

    let results: Vec<Option<u32>> = ["1", "x", "3", "y"]
        .iter()
        .map(|s| {
            value_or_fallback(&controller, || {
                s.parse::<u32>()
                    .map(Some)
                    .map_err(|_| TestError::Message(format!("bad number: {s}")))
            })
        })
        .collect();

    assert_eq!(results, vec![Some(1), None, Some(3), None]);
    assert_eq!(controller.len(), 2);
    assert_eq!(
        controller.take_errors(),
        vec![
            TestError::Message("bad number: x".to_string()),
            TestError::Message("bad number: y".to_string()),
        ]
    );
    assert!(controller.is_empty());
}

#[test]
fn shared_controller_is_usable_across_threads() {
    let controller = Arc::new(CollectController::<i32, String>::new(-1));

    std::thread::scope(|scope| {
        for i in 0..8 {
            let controller = Arc::clone(&controller);
            scope.spawn(move || {
                let value = value_or_fallback(&controller, || {
                    if i % 2 == 0 { Ok(i) } else { Err(format!("odd {i}")) }
                });
                if i % 2 == 0 {
                    assert_eq!(value, i);
                } else {
                    assert_eq!(value, -1);
                }
            });
        }
    });

    let mut errors = Arc::try_unwrap(controller).unwrap().into_errors();
    errors.sort();
    assert_eq!(errors, vec!["odd 1", "odd 3", "odd 5", "odd 7"]);
}

#[test]
fn boxed_controller_trait_object() {
    let controllers: Vec<Box<dyn Controller<i32, TestError>>> = vec![
        Box::new(DefaultController::new(1)),
        Box::new(LogController::new(2)),
        Box::new(must::from_fn(|_: TestError| 3)),
    ];

    let values: Vec<i32> = controllers
        .iter()
        .map(|c| value_or_fallback(c, || Err(TestError::Timeout)))
        .collect();

    assert_eq!(values, vec![1, 2, 3]);
}
