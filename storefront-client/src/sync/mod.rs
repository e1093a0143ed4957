//! Synchronizers
//!
//! Each synchronizer issues REST calls through an [`HttpGateway`] and
//! folds the answers into the [`Store`]. Failures are logged, published
//! as [`StoreEvent::SyncFailed`](crate::store::StoreEvent::SyncFailed) and
//! returned to the caller.

mod cart;
mod catalog;
mod orders;

pub use cart::CartSync;
pub use catalog::CatalogSync;
pub use orders::OrdersSync;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ClientError;
use crate::store::{Store, SyncOp};

/// What happens to local cart lines when the server rejects an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionPolicy {
    /// Put back the lines the cart held before the update was sent
    #[default]
    RestoreSnapshot,
    /// Commit the submitted lines minus the last one
    DropLast,
}

impl FromStr for RejectionPolicy {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snapshot" | "restore-snapshot" => Ok(Self::RestoreSnapshot),
            "drop-last" | "pop" => Ok(Self::DropLast),
            other => Err(ClientError::Config(format!(
                "unknown cart rollback policy: {other:?}"
            ))),
        }
    }
}

/// Log, publish and hand back a failed call's error
pub(crate) fn report_failure(store: &Store, operation: SyncOp, error: ClientError) -> ClientError {
    if error.is_rejection() {
        tracing::warn!(%operation, status = ?error.status(), error = %error, "request rejected");
    } else {
        tracing::warn!(%operation, error = %error, "request failed");
    }
    store.publish_failure(operation, &error);
    error
}
