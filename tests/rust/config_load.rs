use std::io::Write as _;

use modpanel::{ControlPanel, PORT_SYMBOL_ATTR, PanelConfig, Widget};

#[test]
fn test_panel_built_from_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
            [[displays]]
            port = "tempo_out"

            [[displays]]
            port = "decay"
        "#
    )
    .unwrap();

    let config = PanelConfig::load(file.path()).unwrap();

    let icon = Widget::new("div");
    let tempo = Widget::new("span");
    tempo.set_attribute(PORT_SYMBOL_ATTR, "tempo_out");
    let decay = Widget::new("span");
    decay.set_attribute(PORT_SYMBOL_ATTR, "decay");
    icon.append_child(tempo.clone());
    icon.append_child(decay.clone());

    let panel = ControlPanel::with_config(icon, &config);
    assert!(panel.displays().iter().all(|d| d.is_resolved()));

    panel.handle_json(r#"{"type":"change","symbol":"decay","value":62.5}"#);
    assert_eq!(decay.text(), "62.5");
    assert_eq!(tempo.text(), "");
}

#[test]
fn test_load_rejects_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "displays = 3").unwrap();

    let err = PanelConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse panel config"));
}
