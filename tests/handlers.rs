// tests/handlers.rs

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::TestError;
use must::{
    CollectController, ErrorHandler, HandlerOf, UnitResultExt, from_fn, handle_error,
    handler_of, run_or_handle,
};
use must_test_utils::counter::CallCounter;
use must_test_utils::recording::RecordingController;

#[test]
fn failing_operation_is_forwarded_once() {
    let controller = RecordingController::<(), TestError>::new(());
    let handler: HandlerOf<_, ()> = handler_of(controller.clone());
    let counter = CallCounter::new();

    run_or_handle(&handler, counter.wrap(|| Err::<(), _>(TestError::Timeout)));

    assert_eq!(counter.calls(), 1);
    assert_eq!(controller.seen(), vec![TestError::Timeout]);
}

#[test]
fn succeeding_operation_is_not_forwarded() {
    let controller = RecordingController::<(), TestError>::new(());
    let handler: HandlerOf<_, ()> = handler_of(controller.clone());
    let counter = CallCounter::new();

    run_or_handle(&handler, counter.ok::<(), TestError>(()));

    assert_eq!(counter.calls(), 1);
    assert_eq!(controller.calls(), 0);
}

#[test]
fn sentinel_side_effect_runs_once_per_failure() {
    let fired = Arc::new(AtomicUsize::new(0));
    let sentinel = {
        let fired = Arc::clone(&fired);
        from_fn(move |_err: TestError| {
            fired.fetch_add(1, Ordering::SeqCst);
        })
    };
    let handler: HandlerOf<_, ()> = handler_of(sentinel);

    run_or_handle(&handler, || Err(TestError::Timeout));
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    run_or_handle(&handler, || Ok::<(), TestError>(()));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_error_ignores_none() {
    let controller = RecordingController::<(), TestError>::new(());
    let handler: HandlerOf<_, ()> = handler_of(controller.clone());

    handle_error(&handler, None);
    assert_eq!(controller.calls(), 0);

    handle_error(&handler, Some(TestError::DiskFull));
    assert_eq!(controller.seen(), vec![TestError::DiskFull]);
}

#[test]
fn handler_discards_non_unit_fallback_values() {
    let controller = RecordingController::<i64, TestError>::new(-1);
    let handler: HandlerOf<_, i64> = handler_of(controller.clone());

    handler.handle(TestError::Timeout);

    assert_eq!(controller.seen(), vec![TestError::Timeout]);
}

#[test]
fn or_handle_method_forwards_only_errors() {
    let collect = CollectController::<(), TestError>::new(());
    let handler: HandlerOf<_, ()> = handler_of(&collect);

    Ok::<(), TestError>(()).or_handle(&handler);
    Err::<(), _>(TestError::DiskFull).or_handle(&handler);
    Err::<(), _>(TestError::Timeout).or_handle(&handler);

    assert_eq!(
        collect.errors(),
        vec![TestError::DiskFull, TestError::Timeout]
    );
}

#[test]
fn handler_works_as_trait_object() {
    let controller = RecordingController::<(), TestError>::new(());
    let handler: Box<dyn ErrorHandler<TestError>> =
        Box::new(handler_of::<_, ()>(controller.clone()));

    run_or_handle(&handler, || Err(TestError::Timeout));
    handle_error(handler.as_ref(), Some(TestError::DiskFull));

    assert_eq!(controller.calls(), 2);
}
