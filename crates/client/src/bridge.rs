//! Single-shot cross-context request bridge.
//!
//! Opens a dedicated reply channel per request, sends the message plus the
//! reply end to the host context, and resolves with the first reply. The
//! reply channel closes as soon as the response (or hang-up) arrives, so a
//! request can never observe more than one reply.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("DISCONNECTED")]
    Disconnected,
}

/// One outbound request plus the channel end its reply arrives on.
#[derive(Debug)]
pub struct Envelope {
    pub message: serde_json::Value,
    pub origin: String,
    pub reply: oneshot::Sender<serde_json::Value>,
}

/// Request/response bridge to another context.
///
/// The host context owns the receiving end of the outbound channel and is
/// expected to answer each [`Envelope`] through its `reply` sender.
#[derive(Debug, Clone)]
pub struct MessageBridge {
    outbound: mpsc::Sender<Envelope>,
}

impl MessageBridge {
    pub fn new(outbound: mpsc::Sender<Envelope>) -> Self {
        Self { outbound }
    }

    /// Send `message` to `origin` and resolve with the first reply.
    pub async fn post_message(
        &self,
        message: serde_json::Value,
        origin: impl Into<String>,
    ) -> Result<serde_json::Value, BridgeError> {
        let origin = origin.into();
        let (reply, response) = oneshot::channel();
        tracing::debug!(%origin, "posting message");
        self.outbound
            .send(Envelope {
                message,
                origin,
                reply,
            })
            .await
            .map_err(|_| BridgeError::Disconnected)?;
        let response = response.await.map_err(|_| BridgeError::Disconnected)?;
        tracing::debug!("received reply");
        Ok(response)
    }
}
