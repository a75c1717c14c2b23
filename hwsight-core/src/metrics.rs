//! The canonical telemetry document served to display clients.
//!
//! The shape never depends on what hardware was found: absent categories keep
//! their zero/empty defaults and `disk` may be empty.

use serde::{Deserialize, Serialize};

/// Complete telemetry document. Field order is the wire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMetrics {
    pub cpu: CpuMetrics,
    pub ram: RamMetrics,
    pub gpu_discrete: DiscreteGpuMetrics,
    pub gpu_integrated: IntegratedGpuMetrics,
    pub disk: Vec<DiskMetrics>,
    pub network: NetworkMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    pub name: String,
    /// Degrees Celsius.
    pub temp: f64,
    /// Percent.
    pub load: f64,
    /// Watts.
    pub power: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RamMetrics {
    /// GB, as reported by the source.
    pub used: f64,
    /// Used plus available.
    pub total: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscreteGpuMetrics {
    pub name: String,
    pub temp: f64,
    pub load: f64,
    pub power: f64,
    /// MB, truncated.
    pub mem_used: i64,
    /// MB, truncated.
    pub mem_total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegratedGpuMetrics {
    pub name: String,
    pub temp: f64,
    pub load: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskMetrics {
    pub name: String,
    pub temp: f64,
    /// Used space, percent.
    pub load: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub name: String,
    /// Upload throughput as reported by the source.
    pub upload: f64,
    /// Download throughput as reported by the source.
    pub download: f64,
}
