// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use camera_controls::LayoutConfig;

#[test]
fn test_config_default() {
    // Defaults match the stock 70/100dp chrome at density 1.0
    let config = LayoutConfig::default();
    assert_eq!(config.top_bar_px(), 70);
    assert_eq!(config.bottom_bar_px(), 100);
    assert!(!config.hide_remaining_badge);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_load_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "camera-controls-test-{}/controls-layout.json",
        std::process::id()
    ));

    let config = LayoutConfig {
        density: 2.625,
        hide_remaining_badge: true,
        ..LayoutConfig::default()
    };
    config.save_to(&path).expect("save should succeed");

    let loaded = LayoutConfig::load_from(&path).expect("load should succeed");
    assert_eq!(loaded, config);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_load_rejects_bad_density() {
    let path = std::env::temp_dir().join(format!(
        "camera-controls-test-bad-{}/controls-layout.json",
        std::process::id()
    ));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"top_bar_dp":70.0,"bottom_bar_dp":100.0,"density":0.0,"badge_margin_dp":10.0,"hide_remaining_badge":false}"#,
    )
    .unwrap();

    assert!(LayoutConfig::load_from(&path).is_err());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_load_missing_file_errors() {
    let path = std::path::Path::new("/nonexistent/camera-controls/controls-layout.json");
    assert!(LayoutConfig::load_from(path).is_err());
}
