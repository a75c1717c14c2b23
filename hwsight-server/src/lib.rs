//! HwSight telemetry server.
//!
//! Serves the normalized hardware telemetry produced by [`hwsight_core`] over
//! HTTP. Every request fetches a fresh sensor tree from Libre Hardware
//! Monitor; nothing is cached between requests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ Libre Hardware   │────>│ TelemetryService │────>│   HTTP Server    │
//! │ Monitor (JSON)   │     │ (fetch+normalize)│     │  (/system-info)  │
//! └──────────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```bash
//! hwsight-server --config hwsight.json5
//! hwsight-server --source http://192.168.2.60:8085/data.json --once
//! ```
//!
//! # Configuration
//!
//! See [`config::ServerConfig`] for configuration options.

pub mod config;
pub mod http;
pub mod net;
pub mod service;
pub mod source;

pub use config::ServerConfig;
pub use http::{HttpServer, TELEMETRY_PATH, create_router};
pub use service::TelemetryService;
pub use source::{HttpSource, SensorSource};
