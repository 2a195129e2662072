//! Tests that escalation does not report through the panic hook
//!
//! The panic hook is process-wide, so this file holds a single test to keep
//! other tests in the same binary from panicking while the hook is replaced.

#![cfg(feature = "exceptions")]

use std::{
    panic,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use ara_error::{catch, raise, CoreErrc, CoreException, ErrorCode, Exception};

#[test]
fn test_caught_exceptions_skip_panic_hook() {
    let hook_calls = Arc::new(AtomicUsize::new(0));
    let previous = panic::take_hook();
    let counter = Arc::clone(&hook_calls);
    panic::set_hook(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let code = ErrorCode::from(CoreErrc::InvalidArgument);
    let domain_caught = catch::<CoreException, (), _>(|| code.throw_as_exception());
    let base_caught = catch::<Exception, (), _>(|| raise(CoreException::new(code)));
    let nested = catch::<Exception, _, _>(|| {
        catch::<CoreException, (), _>(|| raise(Exception::new(code)))
    });

    panic::set_hook(previous);

    assert_eq!(*domain_caught.unwrap_err().error(), code);
    assert_eq!(*base_caught.unwrap_err().error(), code);
    assert_eq!(*nested.unwrap_err().error(), code);
    assert_eq!(hook_calls.load(Ordering::SeqCst), 0);
}
