//! Property-based tests for depletion bound checks.

use proptest::prelude::*;

use super::{check_depletion, remaining_quantity, DepletionError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A write passes the bound check exactly when it fits the remainder.
    #[test]
    fn prop_check_passes_iff_within_bound(
        remaining in 0i64..1_000_000,
        proposed in 0i64..1_000_000,
    ) {
        let result = check_depletion("quantity", remaining, proposed);
        if proposed <= remaining {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(DepletionError::ExceedsRemaining {
                field: "quantity",
                proposed,
                remaining,
            }));
        }
    }

    /// Applying any sequence of writes that each pass the bound check never
    /// drives the remaining quantity negative.
    #[test]
    fn prop_valid_write_sequence_never_negative(
        quantity in 0i64..10_000,
        proposals in prop::collection::vec(0i64..2_000, 0..32),
    ) {
        let mut total_depleted = 0i64;
        for proposed in proposals {
            let remaining = remaining_quantity(quantity, total_depleted, 0);
            if check_depletion("quantity", remaining, proposed).is_ok() {
                total_depleted += proposed;
            }
        }
        prop_assert!(remaining_quantity(quantity, total_depleted, 0) >= 0);
    }

    /// Negative proposals are always rejected, regardless of the remainder.
    #[test]
    fn prop_negative_always_rejected(
        remaining in 0i64..1_000_000,
        proposed in -1_000_000i64..0,
    ) {
        prop_assert!(check_depletion("quantity", remaining, proposed).is_err());
    }

    /// Remaining quantity is the plain subtraction identity.
    #[test]
    fn prop_remaining_identity(
        quantity in 0i64..1_000_000,
        mortality in 0i64..1_000_000,
        harvest in 0i64..1_000_000,
    ) {
        prop_assert_eq!(
            remaining_quantity(quantity, mortality, harvest),
            quantity - mortality - harvest
        );
    }
}
