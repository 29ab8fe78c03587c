//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter without module targets;
//! store logs carry an `entity_type` field instead.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the `--log-level` argument:
//!
//! ```bash
//! RUST_LOG=debug order-service                  # full payloads at entry points
//! order-service --log-level warn                # failures only
//! RUST_LOG=order_service=debug,tower_http=info order-service
//! ```
//!
//! With `info`, creating and completing an order looks like:
//!
//! ```text
//! INFO Order 1 created successfully user_id="u1"
//! INFO Updated entity_type="Order" id=1
//! INFO Order 1 status updated status="completed"
//! INFO delivery_notification: Delivery notification sent order_id=1
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_level` applies when `RUST_LOG` is unset.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
