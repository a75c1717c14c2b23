//! End-to-end normalization of captured Libre Hardware Monitor documents.

use hwsight_core::{
    CanonicalMetrics, NormalizeConfig, SourceError, TelemetryResponse, assemble_with_flags,
    normalize, parse_tree,
};

const LAPTOP: &[u8] = include_bytes!("fixtures/lhm_laptop.json");

#[test]
fn test_laptop_document() {
    let metrics = normalize(LAPTOP, &NormalizeConfig::default()).expect("fixture should parse");

    assert_eq!(metrics.cpu.name, "AMD Ryzen 7 5800H");
    assert_eq!(metrics.cpu.temp, 62.5);
    assert_eq!(metrics.cpu.load, 34.2);
    assert_eq!(metrics.cpu.power, 18.4);

    assert_eq!(metrics.ram.used, 7.6);
    assert_eq!(metrics.ram.total, 7.6 + 8.1);
    assert_eq!(metrics.ram.percent, 48.3);

    let gpu = &metrics.gpu_discrete;
    assert_eq!(gpu.name, "NVIDIA GeForce RTX 3060 Laptop GPU");
    assert_eq!(gpu.temp, 54.0);
    assert_eq!(gpu.load, 27.0);
    assert_eq!(gpu.power, 41.7);
    assert_eq!(gpu.mem_used, 1935);
    assert_eq!(gpu.mem_total, 6144);

    let igpu = &metrics.gpu_integrated;
    assert_eq!(igpu.name, "AMD Radeon(TM) Graphics");
    assert_eq!(igpu.temp, 48.0);
    assert_eq!(igpu.load, 6.0);

    assert_eq!(metrics.disk.len(), 2);
    assert_eq!(metrics.disk[0].name, "Samsung SSD 980 PRO with Heats");
    assert_eq!(metrics.disk[0].temp, 41.0);
    assert_eq!(metrics.disk[0].load, 61.7);
    assert_eq!(metrics.disk[1].name, "WDC PC SN530 SDBPNPZ-512G");
    assert_eq!(metrics.disk[1].temp, 39.0);
    assert_eq!(metrics.disk[1].load, 22.4);

    assert_eq!(metrics.network.name, "Wi-Fi");
    assert_eq!(metrics.network.upload, 12.5);
    assert_eq!(metrics.network.download, 340.1);
}

#[test]
fn test_laptop_detection_flags() {
    let tree = parse_tree(LAPTOP).unwrap();
    let (_, flags) = assemble_with_flags(&tree, &NormalizeConfig::default());

    assert!(flags.cpu);
    assert!(flags.ram);
    assert!(flags.gpu_discrete);
    assert!(flags.gpu_integrated);
    assert_eq!(flags.disks, 3);
    assert!(flags.network);
}

#[test]
fn test_raising_the_disk_cap_keeps_later_disks() {
    let config = NormalizeConfig { max_disks: 8 };
    let metrics = normalize(LAPTOP, &config).unwrap();

    let names: Vec<&str> = metrics.disk.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Samsung SSD 980 PRO with Heats",
            "WDC PC SN530 SDBPNPZ-512G",
            "KINGSTON SA400S37240G",
        ]
    );
}

#[test]
fn test_output_wire_shape() {
    let metrics = normalize(LAPTOP, &NormalizeConfig::default()).unwrap();
    let json = serde_json::to_string(&TelemetryResponse::Metrics(metrics)).unwrap();

    let keys = [
        "\"cpu\":",
        "\"ram\":",
        "\"gpu_discrete\":",
        "\"gpu_integrated\":",
        "\"disk\":",
        "\"network\":",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    assert!(json.contains("\"mem_used\":1935"));
}

#[test]
fn test_no_hardware_is_default_document() {
    for doc in [
        &br#"{"Text": "Sensor", "Children": []}"#[..],
        br#"{"Text": "Sensor"}"#,
        br#"{"Children": [{"Text": "EMPTY-PC", "Children": []}]}"#,
    ] {
        let metrics = normalize(doc, &NormalizeConfig::default()).unwrap();
        assert_eq!(metrics, CanonicalMetrics::default());
    }
}

#[test]
fn test_garbage_is_malformed() {
    let body = b"<html><body>502 Bad Gateway</body></html>";
    let err = normalize(body, &NormalizeConfig::default()).unwrap_err();
    assert!(matches!(err, SourceError::Malformed { .. }));

    let response = TelemetryResponse::from(Err(err));
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["message"], "Error processing data!");
    assert!(!value["error"].as_str().unwrap().is_empty());
}

#[test]
fn test_unparseable_readings_do_not_fail_the_walk() {
    let doc = r#"{"Children": [{"Text": "PC", "Children": [
        {"Text": "AMD Ryzen 5 3600", "Children": [
            {"Text": "Temperatures", "Children": [{"Text": "Tctl", "Value": "--- °C"}]},
            {"Text": "Load", "Children": [{"Text": "CPU Total", "Value": "12 %"}]}
        ]}
    ]}]}"#;

    let config = NormalizeConfig::default();
    let metrics = normalize(doc.as_bytes(), &config).unwrap();
    assert_eq!(metrics.cpu.name, "AMD Ryzen 5 3600");
    assert_eq!(metrics.cpu.temp, 0.0);
    assert_eq!(metrics.cpu.load, 12.0);
}
