//! Sensor tree as published by Libre Hardware Monitor's remote web server.
//!
//! The document is a uniform recursive node type. Meaning comes from depth:
//!
//! ```text
//! depth 0  root              (synthetic "Sensor" node)
//! depth 1  computer          (one entry: the machine itself)
//! depth 2  hardware nodes    (CPU, GPU, disks, NICs, ...)
//! depth 3  sensor groups     ("Temperatures", "Load", "Powers", "Data", ...)
//! depth 4  readings          (label + raw value string)
//! ```
//!
//! [`SensorTree::hardware`] is the only place that knows about depths 0 and 1.

use serde::{Deserialize, Deserializer, Serialize};

use crate::failure::SourceError;

/// One node of the raw sensor tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorNode {
    /// Display label of the node.
    #[serde(rename = "Text", default)]
    pub text: String,

    /// Icon path, used as a secondary hardware-type hint.
    #[serde(rename = "ImageURL", default)]
    pub image_url: String,

    /// Raw reading value, only meaningful on leaves (e.g. `"45,2 °C"`).
    #[serde(rename = "Value", default, deserialize_with = "raw_value")]
    pub value: String,

    /// Nested nodes.
    #[serde(rename = "Children", default)]
    pub children: Vec<SensorNode>,
}

/// Accept strings verbatim, numbers as their decimal text and null as empty.
///
/// Anything else is kept as JSON text so it degrades to zero when parsed.
fn raw_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

impl SensorNode {
    /// Create a node with a label and no children.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a leaf reading.
    pub fn reading(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the icon hint.
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: SensorNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = SensorNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A complete sensor document, rooted at depth 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorTree {
    pub root: SensorNode,
}

impl SensorTree {
    /// Wrap hardware nodes in the root/computer scaffolding.
    pub fn from_hardware(computer: impl Into<String>, hardware: Vec<SensorNode>) -> Self {
        let computer = SensorNode::new(computer).with_children(hardware);
        Self {
            root: SensorNode::new("Sensor").with_child(computer),
        }
    }

    /// Hardware nodes (depth 2) of the first computer entry.
    ///
    /// Returns an empty slice when the root has no children.
    pub fn hardware(&self) -> &[SensorNode] {
        self.root
            .children
            .first()
            .map(|computer| computer.children.as_slice())
            .unwrap_or_default()
    }

    /// Name of the computer entry, if present.
    pub fn computer_name(&self) -> Option<&str> {
        self.root.children.first().map(|c| c.text.as_str())
    }
}

/// Decode a sensor tree from JSON.
///
/// Any decoding failure means the source answered with something that is not
/// a sensor tree.
pub fn parse_tree(bytes: &[u8]) -> Result<SensorTree, SourceError> {
    serde_json::from_slice(bytes).map_err(|e| SourceError::malformed(e.to_string()))
}

/// Read-only view of a hardware node (depth 2).
#[derive(Debug, Clone)]
pub struct HardwareNode<'a> {
    pub name: &'a str,
    /// Lower-cased icon path.
    pub icon_hint: String,
    pub groups: &'a [SensorNode],
}

impl<'a> HardwareNode<'a> {
    pub fn new(node: &'a SensorNode) -> Self {
        Self {
            name: &node.text,
            icon_hint: node.image_url.to_lowercase(),
            groups: &node.children,
        }
    }
}

/// View of a sensor group (depth 3).
#[derive(Debug, Clone, Copy)]
pub struct SensorGroup<'a>(&'a SensorNode);

impl<'a> SensorGroup<'a> {
    pub fn new(node: &'a SensorNode) -> Self {
        Self(node)
    }

    pub fn label(&self) -> &'a str {
        &self.0.text
    }

    pub fn readings(self) -> impl Iterator<Item = SensorReading<'a>> {
        self.0.children.iter().map(SensorReading)
    }
}

/// View of a single reading (depth 4).
#[derive(Debug, Clone, Copy)]
pub struct SensorReading<'a>(&'a SensorNode);

impl<'a> SensorReading<'a> {
    pub fn label(&self) -> &'a str {
        &self.0.text
    }

    pub fn raw_value(&self) -> &'a str {
        &self.0.value
    }
}
