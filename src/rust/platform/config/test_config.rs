use super::*;

#[test]
fn test_default_config_binds_the_tempo_readout() {
    let config = PanelConfig::default();

    assert_eq!(config.displays.len(), 1);
    assert_eq!(config.displays[0].port, "tempo_out");
}

#[test]
fn test_parses_display_bindings_from_toml() {
    let raw = r#"
        [[displays]]
        port = "tempo_out"

        [[displays]]
        port = "decay"
    "#;

    let config: PanelConfig = toml::from_str(raw).unwrap();
    assert_eq!(
        config.displays,
        vec![
            DisplayBinding {
                port: "tempo_out".to_string()
            },
            DisplayBinding {
                port: "decay".to_string()
            },
        ]
    );
}

#[test]
fn test_empty_toml_falls_back_to_defaults() {
    let config: PanelConfig = toml::from_str("").unwrap();
    assert_eq!(config.displays, PanelConfig::default().displays);
}

#[test]
fn test_load_reports_a_missing_file() {
    let err = PanelConfig::load("/nonexistent/panel.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read panel config"));
}
