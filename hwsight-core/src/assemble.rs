//! Walks the hardware list and builds the canonical document.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::classify::{Category, classify};
use crate::extract::{find, find_any, find_first_matching};
use crate::metrics::{
    CanonicalMetrics, CpuMetrics, DiscreteGpuMetrics, DiskMetrics, IntegratedGpuMetrics,
    NetworkMetrics, RamMetrics,
};
use crate::tree::{HardwareNode, SensorTree};

/// Maximum length of disk and network names, in characters.
pub const NAME_MAX_CHARS: usize = 30;

/// Default cap on the number of disk entries.
pub const DEFAULT_MAX_DISKS: usize = 2;

/// Normalization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Disk entries beyond this count are dropped, in encounter order.
    #[serde(default = "default_max_disks")]
    pub max_disks: usize,
}

fn default_max_disks() -> usize {
    DEFAULT_MAX_DISKS
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            max_disks: default_max_disks(),
        }
    }
}

/// Which categories were seen during one walk. Diagnostic only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionFlags {
    pub cpu: bool,
    pub ram: bool,
    pub gpu_discrete: bool,
    pub gpu_integrated: bool,
    /// Disk-classified nodes, before the cap is applied.
    pub disks: usize,
    /// Set only for a network node with traffic.
    pub network: bool,
}

impl fmt::Display for DetectionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |b: bool| if b { "yes" } else { "no" };
        write!(
            f,
            "cpu={} ram={} gpu_discrete={} gpu_integrated={} disks={} network={}",
            mark(self.cpu),
            mark(self.ram),
            mark(self.gpu_discrete),
            mark(self.gpu_integrated),
            self.disks,
            mark(self.network)
        )
    }
}

/// Build the canonical document from a sensor tree.
pub fn assemble(tree: &SensorTree, config: &NormalizeConfig) -> CanonicalMetrics {
    let (metrics, flags) = assemble_with_flags(tree, config);
    debug!(detected = %flags, "Hardware detection summary");
    metrics
}

/// Build the canonical document and report what was detected.
pub fn assemble_with_flags(
    tree: &SensorTree,
    config: &NormalizeConfig,
) -> (CanonicalMetrics, DetectionFlags) {
    let mut metrics = CanonicalMetrics::default();
    let mut flags = DetectionFlags::default();

    let hardware = tree.hardware();
    if hardware.is_empty() {
        debug!("Sensor tree has no hardware nodes");
        return (metrics, flags);
    }

    debug!(count = hardware.len(), "Walking hardware nodes");

    for node in hardware {
        let hw = HardwareNode::new(node);
        let Some(category) = classify(&hw) else {
            trace!(name = hw.name, "Unclassified hardware");
            continue;
        };

        debug!(name = hw.name, category = %category, "Classified hardware");

        match category {
            Category::Cpu => {
                // Single CPU: later packages are ignored.
                if !flags.cpu {
                    metrics.cpu = cpu(&hw);
                }
                flags.cpu = true;
            }
            Category::Ram => {
                metrics.ram = ram(&hw);
                flags.ram = true;
            }
            Category::GpuDiscrete => {
                metrics.gpu_discrete = gpu_discrete(&hw);
                flags.gpu_discrete = true;
            }
            Category::GpuIntegrated => {
                metrics.gpu_integrated = gpu_integrated(&hw);
                flags.gpu_integrated = true;
            }
            Category::Disk => {
                metrics.disk.push(disk(&hw));
                flags.disks += 1;
            }
            Category::Network => {
                // Last interface with traffic wins.
                if let Some(network) = network(&hw) {
                    metrics.network = network;
                    flags.network = true;
                }
            }
        }
    }

    metrics.disk.truncate(config.max_disks);

    (metrics, flags)
}

fn cpu(hw: &HardwareNode<'_>) -> CpuMetrics {
    CpuMetrics {
        name: hw.name.to_string(),
        temp: find_any(hw.groups, "Temperatures", &["Tctl", "Package", "Core"]),
        load: find(hw.groups, "Load", "CPU Total"),
        power: find(hw.groups, "Powers", "Package"),
    }
}

fn ram(hw: &HardwareNode<'_>) -> RamMetrics {
    let used = find(hw.groups, "Data", "Memory Used");
    let available = find(hw.groups, "Data", "Memory Available");

    RamMetrics {
        used,
        total: used + available,
        percent: find(hw.groups, "Load", "Memory"),
    }
}

fn gpu_discrete(hw: &HardwareNode<'_>) -> DiscreteGpuMetrics {
    DiscreteGpuMetrics {
        name: hw.name.to_string(),
        temp: find_any(hw.groups, "Temperatures", &["GPU Core", "GPU"]),
        load: find_any(hw.groups, "Load", &["GPU Core", "GPU"]),
        power: find_any(hw.groups, "Powers", &["GPU Package", "GPU Power"]),
        mem_used: find(hw.groups, "Data", "GPU Memory Used") as i64,
        mem_total: find(hw.groups, "Data", "GPU Memory Total") as i64,
    }
}

fn gpu_integrated(hw: &HardwareNode<'_>) -> IntegratedGpuMetrics {
    IntegratedGpuMetrics {
        name: hw.name.to_string(),
        temp: find_first_matching(hw.groups, "Temperatures", |label| {
            label.contains("GPU") || label.contains("Core")
        }),
        load: find_any(hw.groups, "Load", &["GPU Core", "GPU"]),
    }
}

fn disk(hw: &HardwareNode<'_>) -> DiskMetrics {
    DiskMetrics {
        name: truncate_name(hw.name),
        temp: find_any(hw.groups, "Temperatures", &["Temperature", "Drive"]),
        load: find(hw.groups, "Load", "Used Space"),
    }
}

/// `None` when the interface shows no traffic.
fn network(hw: &HardwareNode<'_>) -> Option<NetworkMetrics> {
    let download = find(hw.groups, "Throughput", "Download Speed");
    let upload = find(hw.groups, "Throughput", "Upload Speed");

    (download > 0.0 || upload > 0.0).then(|| NetworkMetrics {
        name: truncate_name(hw.name),
        upload,
        download,
    })
}

fn truncate_name(name: &str) -> String {
    name.chars().take(NAME_MAX_CHARS).collect()
}
