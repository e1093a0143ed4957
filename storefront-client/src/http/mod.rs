// storefront-client/src/http/mod.rs
// HTTP gateway - every outbound call to the storefront API goes through here

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

pub use network::NetworkHttpClient;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult};

/// HTTP gateway trait
///
/// Paths are relative to the gateway's base origin and may carry a query
/// string. Non-success statuses come back as [`ClientError::Rejected`].
#[async_trait]
pub trait HttpGateway: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
}

/// Turns a buffered response into `T`, or a rejection for non-2xx statuses.
///
/// An empty success body is read as JSON `null`, so callers that do not
/// care about the payload can ask for `serde_json::Value`. Well-formed JSON
/// of the wrong shape is [`ClientError::InvalidResponse`]; malformed JSON
/// is [`ClientError::Serialization`].
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClientResult<T> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Rejected {
            status,
            message: String::from_utf8_lossy(body).trim().to_string(),
        });
    }
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|e| {
        if e.is_data() {
            ClientError::InvalidResponse(e.to_string())
        } else {
            ClientError::Serialization(e)
        }
    })
}
