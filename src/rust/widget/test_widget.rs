use super::*;

#[test]
fn test_attributes_round_trip() {
    let node = Widget::new("span");
    node.set_attribute("mod-port-symbol", "tempo_out");

    assert_eq!(
        node.attribute("mod-port-symbol").as_deref(),
        Some("tempo_out")
    );
    assert_eq!(node.attribute("mod-role"), None);
    assert_eq!(node.tag(), "span");
}

#[test]
fn test_set_text_overwrites() {
    let node = Widget::new("span");
    assert_eq!(node.text(), "");

    node.set_text("90");
    node.set_text("120.5");
    assert_eq!(node.text(), "120.5");
}

#[test]
fn test_find_descends_into_nested_children() {
    let root = Widget::new("div");
    let header = Widget::new("div");
    let readout = Widget::new("span");
    readout.set_attribute("mod-port-symbol", "tempo_out");
    header.append_child(readout.clone());
    root.append_child(header);

    let found = root
        .find_by_attribute("mod-port-symbol", "tempo_out")
        .unwrap();
    assert!(found.same_node(&readout));
}

#[test]
fn test_find_excludes_the_root_itself() {
    let root = Widget::new("div");
    root.set_attribute("mod-port-symbol", "tempo_out");

    assert!(root.find_by_attribute("mod-port-symbol", "tempo_out").is_none());
}

#[test]
fn test_find_returns_the_first_match_in_document_order() {
    let root = Widget::new("div");
    let first = Widget::new("span");
    first.set_attribute("mod-port-symbol", "tempo_out");
    let second = Widget::new("span");
    second.set_attribute("mod-port-symbol", "tempo_out");
    root.append_child(first.clone());
    root.append_child(second);

    let found = root
        .find_by_attribute("mod-port-symbol", "tempo_out")
        .unwrap();
    assert!(found.same_node(&first));
}

#[test]
fn test_find_misses_yield_none() {
    let root = Widget::new("div");
    root.append_child(Widget::new("span"));

    assert!(root.find_by_attribute("mod-port-symbol", "tempo_out").is_none());
}

#[test]
fn test_clones_share_the_node() {
    let node = Widget::new("span");
    let alias = node.clone();

    alias.set_text("90");
    assert_eq!(node.text(), "90");
    assert!(node.same_node(&alias));
}
