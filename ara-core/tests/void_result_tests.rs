//! Tests for results of operations without a value

use ara_core::{CoreErrc, ErrorCode, Result, VoidResult};

fn calibrate(offset: i32) -> VoidResult {
    if offset.abs() > 100 {
        VoidResult::from_error(CoreErrc::InvalidArgument.into())
    } else {
        VoidResult::new()
    }
}

#[test]
fn test_new_and_default_hold_value() {
    assert!(VoidResult::<ErrorCode>::new().has_value());
    let r: VoidResult<u8> = VoidResult::default();
    assert!(r.has_value());
}

#[test]
fn test_operation_reports_error() {
    assert!(calibrate(5).has_value());
    let failed = calibrate(500);
    assert!(failed.check_error(CoreErrc::InvalidArgument));
    assert!(failed.eq_error(&ErrorCode::from(CoreErrc::InvalidArgument)));
}

#[test]
fn test_unit_operations_degenerate() {
    let failed: VoidResult<u8> = Result::from_error(1);
    let _ = failed.value_or(());
    let mut called = false;
    let _ = failed.resolve(|_| called = true);
    assert!(called);
}

#[test]
fn test_swap_moves_error_in_and_out() {
    let mut ok: VoidResult<u8> = VoidResult::new();
    let mut failed: VoidResult<u8> = Result::from_error(9);
    ok.swap(&mut failed);
    assert!(ok.eq_error(&9));
    assert!(failed.has_value());
    ok.swap(&mut failed);
    assert!(ok.has_value());
    assert!(failed.eq_error(&9));
}

#[test]
fn test_emplace_value_clears_error() {
    let mut r: VoidResult<u8> = Result::from_error(3);
    r.emplace_value(());
    assert!(r.has_value());
    assert_eq!(r.err(), None);
}

#[test]
fn test_bind_chains_steps() {
    let r = calibrate(1).bind(|()| calibrate(200));
    assert!(r.check_error(CoreErrc::InvalidArgument));

    let r = calibrate(1).bind(|()| ());
    assert!(r.has_value());
}

#[test]
fn test_void_equality_follows_policy() {
    let a: VoidResult<u8> = VoidResult::new();
    let b: VoidResult<u8> = VoidResult::new();
    let e: VoidResult<u8> = Result::from_error(0);
    assert!(a == b);
    assert!(a != e);
}

#[cfg(feature = "exceptions")]
#[test]
fn test_void_value_or_throw() {
    let _ = calibrate(0).value_or_throw();
    let caught = ara_core::catch::<ara_core::CoreException, _, _>(|| calibrate(101).value_or_throw());
    assert_eq!(
        *caught.unwrap_err().error(),
        ErrorCode::from(CoreErrc::InvalidArgument)
    );
}
