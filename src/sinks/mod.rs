//! Best-effort delivery of computed results to external systems.
//!
//! Sinks run after the result has already been returned to the caller.
//! A sink failure is logged and suppressed; it never alters or delays the
//! response.

pub mod crm;
pub mod email;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{CalculationResult, QuestionnaireResponse};

/// Error type for delivery sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {service}: {body}")]
    UnexpectedStatus {
        service: &'static str,
        status: u16,
        body: String,
    },
}

/// A destination that consumes a computed lead.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(
        &self,
        data: &QuestionnaireResponse,
        results: &CalculationResult,
        tracking_id: &str,
    ) -> Result<(), SinkError>;
}

/// Run every sink in order. Each sink fails independently; nothing here
/// propagates to the caller.
pub async fn dispatch_all(
    sinks: &[Arc<dyn DeliverySink>],
    data: &QuestionnaireResponse,
    results: &CalculationResult,
    tracking_id: &str,
) {
    for sink in sinks {
        match sink.deliver(data, results, tracking_id).await {
            Ok(()) => {
                tracing::info!(sink = sink.name(), tracking_id, "delivery completed");
            }
            Err(SinkError::NotConfigured(what)) => {
                tracing::warn!(sink = sink.name(), "{what} is not configured, lead not delivered");
            }
            Err(e) => {
                tracing::error!(sink = sink.name(), tracking_id, error = %e, "delivery failed");
            }
        }
    }
}

/// Read an HTTP response, mapping non-2xx statuses to a sink error.
pub(crate) async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, SinkError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(SinkError::UnexpectedStatus {
            service,
            status: status.as_u16(),
            body,
        })
    }
}
