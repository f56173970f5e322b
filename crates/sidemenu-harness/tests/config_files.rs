//! Loading panel configuration from disk and driving the resulting panel.

use std::io::Write;

use sidemenu_core::{ConfigError, MenuPosition, PanelConfig, SidePanel};
use sidemenu_harness::{ChangeRecorder, GestureScript, RecordingAnimator, init_test_tracing};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn toml_file_drives_right_mounted_panel() {
    init_test_tracing();
    let file = write_temp(
        ".toml",
        r#"
        menu_position = "right"
        open_menu_offset = 240.0
        touch_to_close = true
        "#,
    );
    let config = PanelConfig::from_toml_file(file.path()).expect("valid config");
    assert_eq!(config.menu_position, MenuPosition::Right);

    let changes = ChangeRecorder::new();
    let animator = RecordingAnimator::new();
    let mut panel = SidePanel::new(320.0, config)
        .with_on_change(changes.callback())
        .with_animator(animator.clone());

    GestureScript::drag(&[-30.0, -90.0]).run(&mut panel);
    assert!(panel.is_open());
    assert_eq!(animator.last_target(), Some(-240.0));
    assert!(panel.overlay_visible());

    assert!(panel.tap_overlay());
    assert_eq!(changes.changes(), vec![true, false]);
}

#[test]
fn json_file_with_tolerances() {
    let file = write_temp(".json", r#"{"tolerance_x": 30.0, "tolerance_y": 5.0}"#);
    let config = PanelConfig::from_json_file(file.path()).expect("valid config");
    let mut panel = SidePanel::new(300.0, config).with_animator(RecordingAnimator::new());

    // 25 units is under the widened horizontal tolerance.
    GestureScript::drag(&[25.0]).run(&mut panel);
    assert!(!panel.is_dragging());
    assert_eq!(panel.current_offset(), 0.0);
}

#[test]
fn disabled_gestures_in_file() {
    let file = write_temp(".toml", "disable_gestures = true\n");
    let config = PanelConfig::from_toml_file(file.path()).expect("valid config");
    let changes = ChangeRecorder::new();
    let mut panel = SidePanel::new(300.0, config).with_on_change(changes.callback());

    GestureScript::swipe(200.0, 4).run(&mut panel);
    assert!(!panel.is_open());
    assert!(changes.is_empty());

    // Imperative control is unaffected by the gesture lock.
    panel.open();
    assert_eq!(changes.changes(), vec![true]);
}

#[test]
fn saved_config_reloads_identically() {
    let config = PanelConfig {
        menu_position: MenuPosition::Right,
        hidden_menu_offset: Some(12.0),
        touch_to_close: true,
        ..PanelConfig::default()
    };
    let text = config.to_toml_string().expect("serializable");
    let file = write_temp(".toml", &text);
    let reloaded = PanelConfig::from_toml_file(file.path()).expect("reloadable");
    assert_eq!(reloaded, config);
}

#[test]
fn malformed_file_reports_parse_error() {
    let file = write_temp(".json", "{ not json");
    let err = PanelConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}
