use modpanel::{ControlPanel, PORT_SYMBOL_ATTR, TEMPO_OUT, Widget};

fn bollie_delay_icon() -> Widget {
    let icon = Widget::new("div");
    let box_ = Widget::new("div");
    let readout = Widget::new("span");
    readout.set_attribute(PORT_SYMBOL_ATTR, TEMPO_OUT);
    box_.append_child(readout);
    icon.append_child(box_);
    icon
}

fn readout_text(panel: &ControlPanel) -> String {
    panel
        .icon()
        .find_by_attribute(PORT_SYMBOL_ATTR, TEMPO_OUT)
        .map(|node| node.text())
        .unwrap_or_default()
}

#[test]
fn test_panel_lifecycle_over_json_events() {
    let panel = ControlPanel::new(bollie_delay_icon());

    // The host announces every port when the panel is first shown.
    panel.handle_json(
        r#"{
            "type": "start",
            "ports": [
                {"symbol": "delay", "value": 4},
                {"symbol": "tempo_out", "value": 90},
                {"symbol": "mix", "value": 50}
            ]
        }"#,
    );
    assert_eq!(readout_text(&panel), "90");

    // Live updates follow, one port at a time.
    panel.handle_json(r#"{"type":"change","symbol":"tempo_out","value":120.5}"#);
    assert_eq!(readout_text(&panel), "120.5");

    // Changes to ports this panel does not display are ignored.
    panel.handle_json(r#"{"type":"change","symbol":"mix","value":75}"#);
    assert_eq!(readout_text(&panel), "120.5");

    // Unrecognized notifications and garbage are absorbed.
    panel.handle_json(r#"{"type":"focus"}"#);
    panel.handle_json("not even json");
    assert_eq!(readout_text(&panel), "120.5");
}
