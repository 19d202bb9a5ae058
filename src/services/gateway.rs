// src/services/gateway.rs
//! Boundary around the external text-generation call.

use async_trait::async_trait;
use thiserror::Error;

/// Text in, text out. One call per invocation, no retries.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Model identifier, for logs.
    fn model_id(&self) -> &str;
}

/// Failed model call, classified by cause.
#[derive(Debug, Error)]
#[error("{kind:?}: {message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// Connection refused, DNS, timeout from the transport
    Network,
    /// 401 / 403
    Auth,
    /// 429, quota exhausted
    RateLimit,
    /// 400
    InvalidRequest,
    /// 5xx
    Server,
    /// Call succeeded but carried no text
    EmptyReply,
    Unknown,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Network, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Auth, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::RateLimit, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::InvalidRequest, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Server, message)
    }

    pub fn empty_reply(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::EmptyReply, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Unknown, message)
    }

    /// Classify a non-success HTTP status from the provider.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::invalid_request(message),
            401 | 403 => Self::auth(message),
            429 => Self::rate_limit(message),
            500..=599 => Self::server(message),
            _ => Self::unknown(format!("HTTP {status}: {message}")),
        }
    }
}
