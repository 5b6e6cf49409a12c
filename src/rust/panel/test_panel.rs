use super::*;
use crate::event::PortState;
use crate::platform::config::DisplayBinding;

/// Mirrors the modgui template: an icon with a tempo readout nested one
/// level down.
fn demo_icon() -> Widget {
    let icon = Widget::new("div");
    let header = Widget::new("div");
    let readout = Widget::new("span");
    readout.set_attribute(PORT_SYMBOL_ATTR, TEMPO_OUT);
    readout.set_text("--");
    header.append_child(readout);
    icon.append_child(header);
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
fn test_change_updates_the_tempo_readout() {
    let panel = ControlPanel::new(demo_icon());

    panel.handle(&ControlEvent::Change {
        symbol: TEMPO_OUT.to_string(),
        value: PortValue::Number(120.5),
    });

    assert_eq!(readout_text(&panel), "120.5");
}

#[test]
fn test_change_handles_zero_negative_and_text_values() {
    let panel = ControlPanel::new(demo_icon());

    for (value, expected) in [
        (PortValue::Number(0.0), "0"),
        (PortValue::Number(-7.5), "-7.5"),
        (PortValue::Text("120 bpm".to_string()), "120 bpm"),
    ] {
        panel.handle(&ControlEvent::Change {
            symbol: TEMPO_OUT.to_string(),
            value,
        });
        assert_eq!(readout_text(&panel), expected);
    }
}

#[test]
fn test_change_for_other_symbols_is_ignored() {
    let panel = ControlPanel::new(demo_icon());

    panel.handle(&ControlEvent::Change {
        symbol: "bypass".to_string(),
        value: PortValue::Number(1.0),
    });

    assert_eq!(readout_text(&panel), "--");
}

#[test]
fn test_start_applies_the_tempo_port_among_others() {
    for ports in [
        vec![
            PortState::new(TEMPO_OUT, 90.0),
            PortState::new("gain", 0.8),
        ],
        vec![
            PortState::new("gain", 0.8),
            PortState::new(TEMPO_OUT, 90.0),
        ],
    ] {
        let panel = ControlPanel::new(demo_icon());
        panel.handle(&ControlEvent::Start { ports });
        assert_eq!(readout_text(&panel), "90");
    }
}

#[test]
fn test_start_without_the_tempo_port_leaves_the_readout_alone() {
    let panel = ControlPanel::new(demo_icon());

    panel.handle(&ControlEvent::Start {
        ports: vec![
            PortState::new("gain", 0.8),
            PortState::new("mix", 50.0),
        ],
    });

    assert_eq!(readout_text(&panel), "--");
}

#[test]
fn test_unrecognized_event_types_do_nothing() {
    let panel = ControlPanel::new(demo_icon());

    panel.handle(&ControlEvent::Unknown);

    assert_eq!(readout_text(&panel), "--");
}

#[test]
fn test_repeated_change_is_idempotent() {
    let panel = ControlPanel::new(demo_icon());
    let event = ControlEvent::Change {
        symbol: TEMPO_OUT.to_string(),
        value: PortValue::Number(97.3),
    };

    panel.handle(&event);
    let once = readout_text(&panel);
    panel.handle(&event);

    assert_eq!(readout_text(&panel), once);
    assert_eq!(once, "97.3");
}

#[test]
fn test_missing_display_node_is_tolerated() {
    // Icon markup without a tempo readout at all.
    let icon = Widget::new("div");
    icon.append_child(Widget::new("span"));
    let panel = ControlPanel::new(icon);

    assert!(!panel.displays()[0].is_resolved());

    // Writes are dropped silently.
    panel.handle(&ControlEvent::Change {
        symbol: TEMPO_OUT.to_string(),
        value: PortValue::Number(120.0),
    });
}

#[test]
fn test_configured_bindings_mirror_multiple_ports() {
    let icon = demo_icon();
    let decay = Widget::new("span");
    decay.set_attribute(PORT_SYMBOL_ATTR, "decay");
    icon.append_child(decay.clone());

    let config = PanelConfig {
        displays: vec![
            DisplayBinding {
                port: TEMPO_OUT.to_string(),
            },
            DisplayBinding {
                port: "decay".to_string(),
            },
        ],
    };
    let panel = ControlPanel::with_config(icon, &config);

    panel.handle(&ControlEvent::Start {
        ports: vec![
            PortState::new(TEMPO_OUT, 90.0),
            PortState::new("decay", 62.5),
        ],
    });

    assert_eq!(readout_text(&panel), "90");
    assert_eq!(decay.text(), "62.5");
}

#[test]
fn test_handle_json_dispatches_and_absorbs_garbage() {
    let panel = ControlPanel::new(demo_icon());

    panel.handle_json(r#"{"type":"change","symbol":"tempo_out","value":88}"#);
    assert_eq!(readout_text(&panel), "88");

    // Neither of these may panic or touch the readout.
    panel.handle_json("{not json");
    panel.handle_json(r#"{"type":"change","symbol":"tempo_out"}"#);
    assert_eq!(readout_text(&panel), "88");
}
