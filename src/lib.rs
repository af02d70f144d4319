//! Envelope Ledger is a personal budgeting ledger built on envelope budgeting.
//!
//! A total budget is split into named envelopes, and spendings are recorded
//! against envelopes. Every change goes through [Ledger], which refuses
//! anything that would break these two rules:
//!
//! 1. The envelope allocations never add up to more than the budget.
//! 2. The spendings of an envelope never add up to more than its allocation.
//!
//! All money is stored as whole cents ([Cents]).
//!
//! This library also provides a JSON API over the ledger, see [build_router].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod budget;
pub mod endpoints;
pub mod envelope;
mod error;
pub mod invariants;
mod json_body;
mod ledger;
mod logging;
pub mod money;
mod routing;
mod seed;
pub mod spending;
pub mod stores;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use error::{Error, Limit};
pub use ledger::{EnvelopeSummary, Ledger, LedgerSummary};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use money::Cents;
pub use routing::build_router;
pub use seed::seed_demo_ledger;
pub use stores::{InMemoryLedgerStore, LedgerStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for the Ctrl+C signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install the terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
