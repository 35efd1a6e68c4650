use async_trait::async_trait;
use thiserror::Error;

use crate::encode::AreaRequest;

/// Failure modes of a submission attempt.
///
/// The state machine treats all of these the same way (the attempt is over,
/// the marker list stays untouched); the variants exist for diagnostic
/// messaging only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with a non-2xx status.
    #[error("area service rejected the request: HTTP {status}")]
    Rejected { status: u16 },

    /// Network, TLS, or connection failure before a status was received.
    #[error("network error: {0}")]
    Network(String),

    /// The transport could not be constructed (bad base URL, client build).
    #[error("transport configuration error: {0}")]
    Config(String),
}

/// Delivery of an encoded marker set to the area-calculation service.
///
/// Implementations own all HTTP mechanics; the core only sees success (any
/// 2xx, body ignored) or a [`TransportError`]. One call per submission
/// attempt, no retries.
#[async_trait]
pub trait AreaTransport: Send + Sync {
    async fn send_markers(&self, request: &AreaRequest) -> Result<(), TransportError>;
}
