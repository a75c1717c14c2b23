//! Keyword lookup of readings within a hardware node's sensor groups.

use crate::tree::{SensorGroup, SensorNode};
use crate::value::parse_value;

/// First group whose label equals `group_label` exactly.
pub fn group<'a>(groups: &'a [SensorNode], group_label: &str) -> Option<SensorGroup<'a>> {
    groups
        .iter()
        .map(SensorGroup::new)
        .find(|g| g.label() == group_label)
}

/// Parsed value of the first reading in the first `group_label` group whose
/// label satisfies `predicate`, or `0.0`.
pub fn find_first_matching<F>(groups: &[SensorNode], group_label: &str, predicate: F) -> f64
where
    F: Fn(&str) -> bool,
{
    group(groups, group_label)
        .and_then(|g| g.readings().find(|r| predicate(r.label())))
        .map(|r| parse_value(r.raw_value()))
        .unwrap_or(0.0)
}

/// Parsed value of the first reading whose label contains `keyword`.
pub fn find(groups: &[SensorNode], group_label: &str, keyword: &str) -> f64 {
    find_first_matching(groups, group_label, |label| label.contains(keyword))
}

/// Try each keyword in order and return the first non-zero reading.
pub fn find_any(groups: &[SensorNode], group_label: &str, keywords: &[&str]) -> f64 {
    keywords
        .iter()
        .map(|keyword| find(groups, group_label, keyword))
        .find(|v| *v != 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<SensorNode> {
        vec![
            SensorNode::new("Temperatures").with_children([
                SensorNode::reading("Core #1", "55,0 °C"),
                SensorNode::reading("CPU Package", "61.5 °C"),
                SensorNode::reading("Core Max", "70 °C"),
            ]),
            SensorNode::new("Load").with_children([
                SensorNode::reading("CPU Total", "12,5 %"),
                SensorNode::reading("CPU Core #1", "0 %"),
            ]),
            SensorNode::new("Temperatures").with_child(SensorNode::reading("Tctl", "80 °C")),
        ]
    }

    #[test]
    fn test_find_substring_first_match() {
        let groups = groups();
        assert_eq!(find(&groups, "Temperatures", "Package"), 61.5);
        assert_eq!(find(&groups, "Temperatures", "Core"), 55.0);
        assert_eq!(find(&groups, "Load", "CPU Total"), 12.5);
    }

    #[test]
    fn test_find_only_first_group_with_label() {
        let groups = groups();
        assert_eq!(find(&groups, "Temperatures", "Tctl"), 0.0);
    }

    #[test]
    fn test_find_group_label_is_exact() {
        let groups = groups();
        assert_eq!(find(&groups, "temperatures", "Core"), 0.0);
        assert_eq!(find(&groups, "Temperature", "Core"), 0.0);
        assert_eq!(find(&groups, "Powers", "Package"), 0.0);
        assert_eq!(find(&[], "Load", "CPU Total"), 0.0);
    }

    #[test]
    fn test_find_any_skips_zero_results() {
        let groups = groups();
        assert_eq!(
            find_any(&groups, "Temperatures", &["Tctl", "Package", "Core"]),
            61.5
        );
        assert_eq!(find_any(&groups, "Load", &["CPU Core", "CPU Total"]), 12.5);
        assert_eq!(find_any(&groups, "Load", &["GPU", "Memory"]), 0.0);
        assert_eq!(find_any(&groups, "Load", &[]), 0.0);
    }

    #[test]
    fn test_find_first_matching_predicate() {
        let groups = groups();
        let v = find_first_matching(&groups, "Temperatures", |l| {
            l.contains("Max") || l.contains("Package")
        });
        assert_eq!(v, 61.5);
    }

    #[test]
    fn test_unparseable_reading_is_zero() {
        let groups =
            vec![SensorNode::new("Load").with_child(SensorNode::reading("GPU Core", "n/a"))];
        assert_eq!(find(&groups, "Load", "GPU Core"), 0.0);
    }
}
