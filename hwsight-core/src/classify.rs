//! Hardware classification.
//!
//! Each hardware node is matched against [`RULES`] in order and takes the
//! category of the first rule that matches. A node therefore belongs to at
//! most one category.

use std::fmt;

use crate::tree::HardwareNode;

/// Output category of a hardware node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cpu,
    Ram,
    GpuDiscrete,
    GpuIntegrated,
    Disk,
    Network,
}

impl Category {
    /// Key of the category in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Ram => "ram",
            Category::GpuDiscrete => "gpu_discrete",
            Category::GpuIntegrated => "gpu_integrated",
            Category::Disk => "disk",
            Category::Network => "network",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How keywords are compared against the node name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Plain substring match.
    Exact,
    /// Substring match against the upper-cased name; keywords are upper case.
    Uppercase,
}

/// One classification rule.
#[derive(Debug)]
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub name_match: NameMatch,
    /// Substrings of the lower-cased icon path.
    pub icon_markers: &'static [&'static str],
}

impl Rule {
    /// Whether the node's name or icon hint satisfies this rule.
    pub fn matches(&self, node: &HardwareNode<'_>) -> bool {
        let name_hit = match self.name_match {
            NameMatch::Exact => self.keywords.iter().any(|k| node.name.contains(k)),
            NameMatch::Uppercase => {
                let upper = node.name.to_uppercase();
                self.keywords.iter().any(|k| upper.contains(k))
            }
        };

        name_hit || self.icon_markers.iter().any(|m| node.icon_hint.contains(m))
    }
}

/// Rules in precedence order.
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::Cpu,
        keywords: &[
            "Intel Core",
            "AMD Ryzen",
            "Intel Xeon",
            "AMD EPYC",
            "Intel Pentium",
            "Intel Celeron",
            "AMD Athlon",
        ],
        name_match: NameMatch::Exact,
        icon_markers: &["cpu.png"],
    },
    Rule {
        category: Category::Ram,
        keywords: &["Memory", "RAM", "Generic Memory"],
        name_match: NameMatch::Exact,
        icon_markers: &[],
    },
    Rule {
        category: Category::GpuDiscrete,
        keywords: &[
            "NVIDIA",
            "GeForce",
            "GTX",
            "RTX",
            "Quadro",
            "AMD Radeon RX",
            "AMD Radeon PRO",
            "Radeon VII",
            "Intel Arc",
            "Intel Iris Xe MAX",
        ],
        name_match: NameMatch::Exact,
        icon_markers: &[],
    },
    Rule {
        category: Category::GpuIntegrated,
        keywords: &[
            "Radeon Graphics",
            "Radeon(TM) Graphics",
            "Intel UHD",
            "Intel Iris",
            "Intel HD Graphics",
            "Vega",
            "RDNA",
        ],
        name_match: NameMatch::Exact,
        icon_markers: &[],
    },
    Rule {
        category: Category::Disk,
        keywords: &[
            "SAMSUNG", "WD", "SEAGATE", "TOSHIBA", "KINGSTON", "CRUCIAL", "SANDISK", "INTEL",
            "MICRON", "HYNIX", "SSD", "HDD", "NVME", "M.2",
        ],
        name_match: NameMatch::Uppercase,
        icon_markers: &["storage.png", "hdd.png"],
    },
    Rule {
        category: Category::Network,
        keywords: &[
            "Wi-Fi", "Ethernet", "Network", "Wireless", "LAN", "Realtek", "Intel", "Qualcomm",
            "Broadcom",
        ],
        name_match: NameMatch::Exact,
        icon_markers: &["nic.png"],
    },
];

/// Category of the first matching rule, or `None` when nothing matches.
pub fn classify(node: &HardwareNode<'_>) -> Option<Category> {
    RULES
        .iter()
        .find(|rule| rule.matches(node))
        .map(|rule| rule.category)
}
