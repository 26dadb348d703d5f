//! Application telemetry events and sinks.
//!
//! Events capture operational signals from a review session: how many
//! articles were loaded and the outcome of each submission. Nothing is
//! transmitted anywhere; the tracing sink writes to the configured log.

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the review tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The article file was loaded at startup.
    ArticlesLoaded {
        /// Number of articles in the session.
        article_count: usize,
    },
    /// A review entry was appended to the log.
    ReviewSubmitted {
        /// Zero-based index of the reviewed article.
        article_index: usize,
        /// `Approve` or `Reject`.
        decision: String,
        /// Corrected score label as written to the log.
        corrected_score: String,
    },
    /// Appending a review entry failed.
    ReviewSubmitFailed {
        /// Zero-based index of the article being reviewed.
        article_index: usize,
        /// Error message shown to the reviewer.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Emits telemetry events as JSON through `tracing`.
///
/// Events only reach a file when logging is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "fiscal_review::telemetry", event = %serialised);
    }
}

/// Test helpers for capturing telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that stores events for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
