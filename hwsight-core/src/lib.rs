//! HwSight telemetry normalization engine.
//!
//! Turns the vendor-specific sensor tree published by Libre Hardware Monitor
//! into a small fixed-shape document that embedded display clients can parse:
//!
//! ```text
//! ┌──────────────┐    ┌────────────┐    ┌───────────┐    ┌──────────────────┐
//! │ sensor tree  │───>│  classify  │───>│  extract  │───>│ CanonicalMetrics │
//! │ (JSON bytes) │    │ (per node) │    │ (keywords)│    │  (fixed shape)   │
//! └──────────────┘    └────────────┘    └───────────┘    └──────────────────┘
//! ```
//!
//! - [`tree`] - Sensor tree model and decoding
//! - [`value`] - Raw value parsing (`"45,2 °C"` -> `45.2`)
//! - [`extract`] - Keyword lookup with fallback chains
//! - [`classify`] - Ordered hardware classification rules
//! - [`assemble`] - The walk that builds the document
//! - [`metrics`] - The output document
//! - [`failure`] - Source failures and error documents
//!
//! Everything here is synchronous and stateless; each call is independent.

pub mod assemble;
pub mod classify;
pub mod extract;
pub mod failure;
pub mod metrics;
pub mod tree;
pub mod value;

pub use assemble::{
    DEFAULT_MAX_DISKS, DetectionFlags, NAME_MAX_CHARS, NormalizeConfig, assemble,
    assemble_with_flags,
};
pub use classify::{Category, classify};
pub use failure::{ErrorDocument, SourceError, TelemetryResponse};
pub use metrics::CanonicalMetrics;
pub use tree::{SensorNode, SensorTree, parse_tree};
pub use value::parse_value;

/// Decode a raw sensor document and normalize it.
///
/// Fails only with [`SourceError::Malformed`]; a tree without hardware yields
/// the default document.
pub fn normalize(bytes: &[u8], config: &NormalizeConfig) -> Result<CanonicalMetrics, SourceError> {
    let tree = parse_tree(bytes)?;
    Ok(assemble(&tree, config))
}
