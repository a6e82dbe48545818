//! Replay pacing abstraction.
//!
//! The session suspends only between successive trace reveals, and the pacer
//! is the single place that suspension happens. Strategy execution itself
//! never goes through a pacer, so computation and presentation pacing stay
//! separate and tests can substitute a deterministic implementation.

use std::time::Duration;

use async_trait::async_trait;

/// Pacing strategy invoked between two successive trace-step reveals.
#[async_trait]
pub trait ReplayPacer: Send + Sync {
    /// Suspend for one replay interval.
    async fn pause(&self, interval: Duration);
}

/// Production pacer backed by the tokio timer.
#[derive(Debug, Default)]
pub struct TokioPacer;

#[async_trait]
impl ReplayPacer for TokioPacer {
    async fn pause(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}
