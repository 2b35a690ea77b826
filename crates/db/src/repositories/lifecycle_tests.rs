//! Tests for lifecycle error mapping.
//!
//! The guard functions themselves run against a live database; their
//! arithmetic is covered by the pure depletion checks they delegate to.
//! What is pinned here is the boundary contract: how lifecycle failures
//! surface to the presentation layer.

use uuid::Uuid;

use aqualedger_core::depletion::DepletionError;
use aqualedger_shared::AppError;

use super::LifecycleError;

#[test]
fn depletion_maps_to_invariant_violation() {
    let err = LifecycleError::Depletion(DepletionError::ExceedsRemaining {
        field: "quantity_dead",
        proposed: 50,
        remaining: 40,
    });
    let app: AppError = err.into();
    assert_eq!(app.status_code(), 422);
    assert_eq!(app.error_code(), "INVARIANT_VIOLATION");
    match app {
        AppError::InvariantViolation { field, message } => {
            assert_eq!(field, "quantity_dead");
            assert!(message.contains("proposed 50"));
            assert!(message.contains("remaining 40"));
        }
        other => panic!("unexpected mapping: {other:?}"),
    }
}

#[test]
fn missing_parents_map_to_not_found() {
    let stock_id = Uuid::new_v4();
    let app: AppError = LifecycleError::StockNotFound(stock_id).into();
    assert_eq!(app.status_code(), 404);
    assert!(app.to_string().contains(&stock_id.to_string()));

    let harvest_id = Uuid::new_v4();
    let app: AppError = LifecycleError::HarvestNotFound(harvest_id).into();
    assert_eq!(app.error_code(), "NOT_FOUND");
    assert!(app.to_string().contains(&harvest_id.to_string()));
}

#[test]
fn quantity_floor_maps_to_invariant_violation() {
    let err = LifecycleError::Depletion(DepletionError::BelowDepleted {
        field: "quantity",
        proposed: 50,
        depleted: 70,
    });
    let app: AppError = err.into();
    assert_eq!(app.status_code(), 422);
    match app {
        AppError::InvariantViolation { field, .. } => assert_eq!(field, "quantity"),
        other => panic!("unexpected mapping: {other:?}"),
    }
}
