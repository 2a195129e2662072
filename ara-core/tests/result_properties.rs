//! Property tests for `Result` state transitions

use ara_core::{Result, VoidResult};
use proptest::prelude::*;

type Probe = Result<i64, u16>;

fn probe() -> impl Strategy<Value = Probe> {
    prop_oneof![
        any::<i64>().prop_map(Probe::from_value),
        any::<u16>().prop_map(Probe::from_error),
    ]
}

proptest! {
    #[test]
    fn test_swap_twice_is_identity(a in probe(), b in probe()) {
        let (mut x, mut y) = (a, b);
        x.swap(&mut y);
        x.swap(&mut y);
        prop_assert_eq!(x.as_std(), a.as_std());
        prop_assert_eq!(y.as_std(), b.as_std());
    }

    #[test]
    fn test_emplace_sets_alternative(start in probe(), value in any::<i64>(), error in any::<u16>()) {
        let mut r = start;
        r.emplace_value(value);
        prop_assert!(r.eq_value(&value));
        r.emplace_error(error);
        prop_assert!(r.eq_error(&error));
        prop_assert!(!r.has_value());
    }

    #[test]
    fn test_equality_is_value_only(a in probe(), b in probe()) {
        let expected = match (a.ok(), b.ok()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        };
        prop_assert_eq!(a == b, expected);
    }

    #[test]
    fn test_check_error_matches_held_error(error in any::<u16>(), candidate in any::<u16>()) {
        let r = Probe::from_error(error);
        prop_assert_eq!(r.check_error(candidate), error == candidate);
        prop_assert!(!Probe::from_value(0).check_error(candidate));
    }

    #[test]
    fn test_bind_agrees_with_std_and_then(start in probe(), limit in any::<i64>()) {
        let step = |v: i64| if v < limit { Probe::from_value(v) } else { Probe::from_error(1) };
        let ours = start.bind(step).into_std();
        let expected = start.into_std().and_then(|v| step(v).into_std());
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn test_std_conversion_preserves_alternative(r in probe()) {
        let back: Probe = r.into_std().into();
        prop_assert_eq!(back.as_std(), r.as_std());
    }

    #[test]
    fn test_void_result_has_value_iff_no_error(error in proptest::option::of(any::<u8>())) {
        let r: VoidResult<u8> = error.map_or_else(VoidResult::new, VoidResult::from_error);
        prop_assert_eq!(r.has_value(), error.is_none());
    }
}
