//! Stock lifecycle bound checks.
//!
//! A stock batch is depleted by mortality and harvest events; a harvest is
//! depleted by sales. Every depleting write must pass [`check_depletion`]
//! against the remaining quantity computed over *sibling* records (the
//! record under update never counts against itself).

use thiserror::Error;

#[cfg(test)]
mod props;

/// Validation errors for depleting writes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepletionError {
    /// The proposed quantity exceeds what remains on the parent record.
    #[error("{field}: proposed {proposed} exceeds remaining {remaining}")]
    ExceedsRemaining {
        /// Field carrying the proposed quantity.
        field: &'static str,
        /// Quantity the caller attempted to record.
        proposed: i64,
        /// Quantity still available on the parent.
        remaining: i64,
    },

    /// The proposed quantity is negative.
    #[error("{field}: quantity must not be negative, got {proposed}")]
    Negative {
        /// Field carrying the proposed quantity.
        field: &'static str,
        /// Quantity the caller attempted to record.
        proposed: i64,
    },

    /// The proposed parent quantity falls below what is already depleted.
    #[error("{field}: proposed {proposed} is below the {depleted} already depleted")]
    BelowDepleted {
        /// Field carrying the proposed quantity.
        field: &'static str,
        /// Quantity the caller attempted to set.
        proposed: i64,
        /// Quantity already consumed by dependent records.
        depleted: i64,
    },
}

impl DepletionError {
    /// The name of the field the rejected value was proposed for.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ExceedsRemaining { field, .. }
            | Self::Negative { field, .. }
            | Self::BelowDepleted { field, .. } => field,
        }
    }
}

/// Quantity left on a stock after cumulative mortality and harvest.
#[must_use]
pub const fn remaining_quantity(quantity: i64, total_mortality: i64, total_harvest: i64) -> i64 {
    quantity - total_mortality - total_harvest
}

/// Validates a depleting write against the remaining bound.
///
/// `remaining` must already exclude the record under update (sibling-only
/// aggregation). Zero-quantity writes are allowed; writing exactly the
/// remaining quantity is allowed and brings the remainder to zero.
///
/// # Errors
///
/// Returns an error if `proposed` is negative or exceeds `remaining`.
pub const fn check_depletion(
    field: &'static str,
    remaining: i64,
    proposed: i64,
) -> Result<(), DepletionError> {
    if proposed < 0 {
        return Err(DepletionError::Negative { field, proposed });
    }
    if proposed > remaining {
        return Err(DepletionError::ExceedsRemaining {
            field,
            proposed,
            remaining,
        });
    }
    Ok(())
}

/// Validates that a quantity is non-negative when no depletion bound applies.
///
/// Rows with no parent reference are exempt from the remaining-quantity cap
/// but still cannot carry negative quantities.
///
/// # Errors
///
/// Returns an error if `proposed` is negative.
pub const fn check_non_negative(field: &'static str, proposed: i64) -> Result<(), DepletionError> {
    if proposed < 0 {
        return Err(DepletionError::Negative { field, proposed });
    }
    Ok(())
}

/// Validates that shrinking a parent quantity cannot strand its dependents.
///
/// A stock's quantity may only be lowered to what its mortality and harvest
/// records have already consumed; anything less would make the remaining
/// quantity negative.
///
/// # Errors
///
/// Returns an error if `proposed` is negative or below `depleted`.
pub const fn check_quantity_floor(
    field: &'static str,
    proposed: i64,
    depleted: i64,
) -> Result<(), DepletionError> {
    if proposed < 0 {
        return Err(DepletionError::Negative { field, proposed });
    }
    if proposed < depleted {
        return Err(DepletionError::BelowDepleted {
            field,
            proposed,
            depleted,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_quantity_identity() {
        assert_eq!(remaining_quantity(100, 60, 0), 40);
        assert_eq!(remaining_quantity(100, 0, 100), 0);
        assert_eq!(remaining_quantity(0, 0, 0), 0);
    }

    #[test]
    fn test_mortality_exceeding_remaining_fails() {
        // Stock of 100 with 60 already dead leaves 40.
        let remaining = remaining_quantity(100, 60, 0);
        let err = check_depletion("quantity_dead", remaining, 50).unwrap_err();
        assert_eq!(
            err,
            DepletionError::ExceedsRemaining {
                field: "quantity_dead",
                proposed: 50,
                remaining: 40,
            }
        );
        assert_eq!(err.field(), "quantity_dead");
    }

    #[test]
    fn test_mortality_to_exactly_zero_succeeds() {
        let remaining = remaining_quantity(100, 60, 0);
        assert!(check_depletion("quantity_dead", remaining, 40).is_ok());
        assert_eq!(remaining_quantity(100, 100, 0), 0);
    }

    #[test]
    fn test_harvest_bound() {
        let remaining = remaining_quantity(50, 30, 0);
        assert!(check_depletion("quantity_kg", remaining, 30).is_err());
        assert!(check_depletion("quantity_kg", remaining, 20).is_ok());
    }

    #[test]
    fn test_sale_at_boundary() {
        // Harvest of 15 kg with 5 kg already sold: 10 more is fine, 11 is not.
        let remaining = 15 - 5;
        assert!(check_depletion("quantity_kg", remaining, 10).is_ok());
        assert!(check_depletion("quantity_kg", remaining, 11).is_err());
    }

    #[test]
    fn test_negative_proposed_rejected() {
        assert_eq!(
            check_depletion("quantity_kg", 10, -1),
            Err(DepletionError::Negative {
                field: "quantity_kg",
                proposed: -1,
            })
        );
    }

    #[test]
    fn test_zero_proposed_allowed() {
        assert!(check_depletion("quantity_dead", 0, 0).is_ok());
    }

    #[test]
    fn test_non_negative_check() {
        assert!(check_non_negative("quantity_dead", 0).is_ok());
        assert!(check_non_negative("quantity_dead", 500).is_ok());
        assert_eq!(
            check_non_negative("quantity_dead", -3),
            Err(DepletionError::Negative {
                field: "quantity_dead",
                proposed: -3,
            })
        );
    }

    #[test]
    fn test_quantity_floor() {
        // 70 fish already dead or harvested: quantity may shrink to 70, not 69.
        assert!(check_quantity_floor("quantity", 100, 70).is_ok());
        assert!(check_quantity_floor("quantity", 70, 70).is_ok());
        assert_eq!(
            check_quantity_floor("quantity", 69, 70),
            Err(DepletionError::BelowDepleted {
                field: "quantity",
                proposed: 69,
                depleted: 70,
            })
        );
        assert!(check_quantity_floor("quantity", -1, 0).is_err());
    }
}
