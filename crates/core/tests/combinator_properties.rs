//! Property-based tests for the outcome combinators using proptest.
//!
//! Properties verified:
//! - Default-as-absent conversion detects exactly the default value
//! - Projections and fallbacks run exactly on the live branch
//! - Collection adapters preserve encounter order
//! - Checked casts round-trip whenever the target can represent the value
//! - Async capture agrees with sync capture

use std::sync::atomic::{AtomicUsize, Ordering};

use janus_core::prelude::*;
use proptest::prelude::*;

// ==========================================================================
// PROPERTY: Default detection
// ==========================================================================

proptest! {
    /// Property: into_option is absent exactly for the default value and
    /// hands any other value back untouched.
    #[test]
    fn prop_default_detection_is_exact(value in any::<i32>()) {
        let converted = value.into_option();
        if value == 0 {
            prop_assert_eq!(converted, None, "default must convert to absent");
        } else {
            prop_assert_eq!(converted, Some(value), "non-default must survive");
        }
    }

    /// Property: the same holds for owned string values.
    #[test]
    fn prop_default_detection_for_strings(text in ".*") {
        let expected = if text.is_empty() { None } else { Some(text.clone()) };
        prop_assert_eq!(text.into_option(), expected);
    }
}

// ==========================================================================
// PROPERTY: Projections touch only the live branch
// ==========================================================================

proptest! {
    /// Property: a projection on an outcome runs once on success and never
    /// on failure.
    #[test]
    fn prop_projection_runs_exactly_on_the_live_branch(
        present in any::<bool>(),
        value in any::<i32>(),
    ) {
        let calls = AtomicUsize::new(0);
        let outcome = outcome_from_flag(present, value).map(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            n
        });
        prop_assert_eq!(outcome.is_success(), present);
        prop_assert_eq!(calls.load(Ordering::SeqCst), usize::from(present));
    }

    /// Property: the optional-value side behaves the same way.
    #[test]
    fn prop_optional_projection_skips_absence(opt in proptest::option::of(any::<i32>())) {
        let calls = AtomicUsize::new(0);
        let mapped = opt.map(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            n
        });
        prop_assert_eq!(mapped, opt);
        prop_assert_eq!(calls.load(Ordering::SeqCst), usize::from(opt.is_some()));
    }
}

// ==========================================================================
// PROPERTY: Mapping composes
// ==========================================================================

proptest! {
    /// Property: mapping twice equals mapping the composition once.
    #[test]
    fn prop_mapping_composes(present in any::<bool>(), value in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(3);
        let g = |n: i32| n.wrapping_sub(7);

        let stepwise = outcome_from_flag(present, value).map(f).map(g);
        let fused = outcome_from_flag(present, value).map(|n| g(f(n)));
        prop_assert_eq!(stepwise.success(), fused.success());
    }
}

// ==========================================================================
// PROPERTY: Collection adapters preserve order
// ==========================================================================

proptest! {
    /// Property: collecting present values keeps them all, in encounter
    /// order, and taking the first element matches the head of the stream.
    #[test]
    fn prop_collect_keeps_present_values_in_order(
        values in proptest::collection::vec(proptest::option::of(any::<i32>()), 0..32),
    ) {
        let expected: Vec<i32> = values.iter().copied().flatten().collect();
        let collected: Vec<i32> = values.clone().into_iter().some_values().collect();
        prop_assert_eq!(collected, expected);

        let first = values.clone().into_iter().first_or_none();
        prop_assert_eq!(first, values.first().copied());
    }
}

// ==========================================================================
// PROPERTY: Partition agrees with the lazy adapters
// ==========================================================================

proptest! {
    /// Property: splitting a stream of outcomes yields the same values and
    /// causes as the lazy success/failure adapters, each side in order.
    #[test]
    fn prop_partition_agrees_with_the_lazy_adapters(
        entries in proptest::collection::vec((any::<bool>(), any::<i32>()), 0..32),
    ) {
        let build = || entries.iter().map(|&(present, value)| outcome_from_flag(present, value));

        let expected_values: Vec<i32> = entries
            .iter()
            .filter(|(present, _)| *present)
            .map(|&(_, value)| value)
            .collect();
        let expected_causes: Vec<String> = entries
            .iter()
            .filter(|(present, _)| !present)
            .map(|(_, value)| format!("missing value: {value}"))
            .collect();

        let successes: Vec<i32> = build().successes().collect();
        let failure_count = build().failures().count();
        let (values, causes) = build().partition_outcomes();
        let rendered: Vec<String> = causes.iter().map(ToString::to_string).collect();

        prop_assert_eq!(&successes, &expected_values);
        prop_assert_eq!(&values, &expected_values);
        prop_assert_eq!(failure_count, expected_causes.len());
        prop_assert_eq!(rendered, expected_causes);
    }
}

// ==========================================================================
// PROPERTY: Fallbacks run exactly when needed
// ==========================================================================

proptest! {
    /// Property: recovery runs once on failure, never on success, and never
    /// again once the chain has settled.
    #[test]
    fn prop_fallback_runs_exactly_when_needed(
        present in any::<bool>(),
        value in any::<i32>(),
    ) {
        let calls = AtomicUsize::new(0);
        let settled = outcome_from_flag(present, value).or_else(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Fallible::Success(0)
        });
        prop_assert!(settled.is_success());
        prop_assert_eq!(calls.load(Ordering::SeqCst), usize::from(!present));

        let resettled = settled.or_else(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Fallible::Success(0)
        });
        prop_assert!(resettled.is_success());
        prop_assert_eq!(
            calls.load(Ordering::SeqCst),
            usize::from(!present),
            "a settled chain must not re-run recovery"
        );
    }
}

// ==========================================================================
// PROPERTY: Checked casts
// ==========================================================================

proptest! {
    /// Property: widening then narrowing a representable value restores it.
    #[test]
    fn prop_widening_cast_round_trips(value in any::<u32>()) {
        let round_tripped = Fallible::Success(value).cast::<u64>().cast::<u32>();
        prop_assert_eq!(round_tripped.success(), Some(value));
    }

    /// Property: a value the target cannot represent fails with a cause
    /// naming the cast.
    #[test]
    fn prop_unrepresentable_cast_fails_with_the_type_pair(
        value in (1_u64..=u64::from(u32::MAX)).prop_map(|x| x.saturating_add(u64::from(u32::MAX))),
    ) {
        let narrowed = Fallible::Success(value).cast::<u32>();
        match narrowed {
            Fallible::Failure(cause) => prop_assert!(
                matches!(cause.downcast_ref::<Error>(), Some(Error::CastFailed { .. })),
                "cause must identify the failed cast"
            ),
            Fallible::Success(survivor) => {
                prop_assert!(false, "{} must not fit in u32", survivor);
            }
        }
    }
}

// ==========================================================================
// PROPERTY: Async capture agrees with sync capture
// ==========================================================================

proptest! {
    /// Property: capturing an operation asynchronously lands on the same
    /// branch with the same value as capturing it synchronously.
    #[test]
    fn prop_async_capture_agrees_with_sync_capture(
        present in any::<bool>(),
        value in any::<i32>(),
    ) {
        let operation = move || {
            if present {
                Ok(value)
            } else {
                Err(Error::missing_value(value.to_string()))
            }
        };

        let sync = Fallible::attempt(operation);
        let from_async =
            futures::executor::block_on(Fallible::attempt_async(async move || operation()));

        prop_assert_eq!(sync.is_success(), from_async.is_success());
        prop_assert_eq!(sync.success(), from_async.success());
    }
}

// ==========================================================================
// TEST UTILITIES
// ==========================================================================

/// Build a deterministic outcome from a presence flag and a payload.
fn outcome_from_flag(present: bool, value: i32) -> Fallible<i32> {
    if present {
        Fallible::Success(value)
    } else {
        Fallible::fail(Error::missing_value(value.to_string()))
    }
}

#[cfg(test)]
mod utility_tests {
    use super::*;

    #[test]
    fn test_outcome_from_flag_matches_branch() {
        assert!(outcome_from_flag(true, 1).is_success());
        assert!(outcome_from_flag(false, 1).is_failure());
    }
}
