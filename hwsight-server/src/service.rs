//! One request's worth of work: fetch, normalize, report.

use std::sync::Arc;
use std::time::Instant;

use hwsight_core::{NormalizeConfig, TelemetryResponse, assemble_with_flags};
use tracing::{debug, info, warn};

use crate::source::SensorSource;

/// Produces a telemetry document per call. Holds no per-request state.
pub struct TelemetryService<S> {
    source: Arc<S>,
    normalize: NormalizeConfig,
    verbose: bool,
}

impl<S> Clone for TelemetryService<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            normalize: self.normalize,
            verbose: self.verbose,
        }
    }
}

impl<S: SensorSource> TelemetryService<S> {
    pub fn new(source: S, normalize: NormalizeConfig) -> Self {
        Self {
            source: Arc::new(source),
            normalize,
            verbose: false,
        }
    }

    /// Log inventory and detection summary at info level instead of debug.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch a fresh sensor tree and normalize it.
    ///
    /// Source failures are turned into error documents; this never fails.
    pub async fn snapshot(&self) -> TelemetryResponse {
        let started = Instant::now();

        let tree = match self.source.fetch().await {
            Ok(tree) => tree,
            Err(e) => {
                warn!(
                    source = %self.source.describe(),
                    kind = e.kind(),
                    cause = e.cause(),
                    "Sensor source failed"
                );
                return TelemetryResponse::Error(e.to_document());
            }
        };

        let (metrics, flags) = assemble_with_flags(&tree, &self.normalize);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let hardware = tree.hardware();

        if self.verbose {
            for node in hardware {
                info!(name = %node.text, "Hardware");
            }
            info!(
                hardware = hardware.len(),
                detected = %flags,
                elapsed_ms,
                "Telemetry snapshot"
            );
        } else {
            debug!(
                hardware = hardware.len(),
                detected = %flags,
                elapsed_ms,
                "Telemetry snapshot"
            );
        }

        TelemetryResponse::Metrics(metrics)
    }
}
