//! Event handler keeping display nodes in sync with plugin port values.
//!
//! The host invokes the panel with one event per notification: a `start`
//! event when the panel is first shown, then `change` events for live
//! updates. The panel mirrors each bound port into the text node tagged
//! with its symbol.

use crate::event::{ControlEvent, PortValue};
use crate::platform::config::PanelConfig;
use crate::tools::logger::Logger;
use crate::widget::Widget;

/// Attribute modgui markup uses to tag a node with its port symbol.
pub const PORT_SYMBOL_ATTR: &str = "mod-port-symbol";

/// Symbol of the computed-tempo output port on the delay plugin.
pub const TEMPO_OUT: &str = "tempo_out";

/// One port-to-display binding.
///
/// The display node is resolved once, at panel construction. Markup without
/// the node leaves the binding unresolved; writes to it are dropped.
pub struct PortDisplay {
    symbol: String,
    node: Option<Widget>,
}

impl PortDisplay {
    fn resolve(icon: &Widget, symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            node: icon.find_by_attribute(PORT_SYMBOL_ATTR, symbol),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_resolved(&self) -> bool {
        self.node.is_some()
    }

    fn write(&self, value: &PortValue) {
        if let Some(node) = &self.node {
            node.set_text(value.to_string());
        }
    }
}

/// The panel-side event handler for one plugin instance.
pub struct ControlPanel {
    icon: Widget,
    displays: Vec<PortDisplay>,
    logger: Logger,
}

impl ControlPanel {
    /// Bind the default display set: the tempo readout.
    pub fn new(icon: Widget) -> Self {
        Self::with_config(icon, &PanelConfig::default())
    }

    /// Bind every display named by the configuration.
    pub fn with_config(icon: Widget, config: &PanelConfig) -> Self {
        let logger = Logger::new();
        let displays: Vec<PortDisplay> = config
            .displays
            .iter()
            .map(|binding| PortDisplay::resolve(&icon, &binding.port))
            .collect();

        for display in &displays {
            if !display.is_resolved() {
                logger.debug(format!("no display node for port `{}`", display.symbol));
            }
        }

        Self {
            icon,
            displays,
            logger,
        }
    }

    pub fn icon(&self) -> &Widget {
        &self.icon
    }

    pub fn displays(&self) -> &[PortDisplay] {
        &self.displays
    }

    /// Host entry point: dispatch one notification.
    pub fn handle(&self, event: &ControlEvent) {
        match event {
            ControlEvent::Start { ports } => {
                for port in ports {
                    self.apply(&port.symbol, &port.value);
                }
            }
            ControlEvent::Change { symbol, value } => self.apply(symbol, value),
            ControlEvent::Unknown => {}
        }
    }

    /// Boundary convenience for hosts that hand events over as JSON.
    ///
    /// Decode failures are logged and absorbed; the panel never raises.
    pub fn handle_json(&self, raw: &str) {
        match ControlEvent::from_json(raw) {
            Ok(event) => self.handle(&event),
            Err(err) => self.logger.warn(format!("dropped event: {}", err)),
        }
    }

    fn apply(&self, symbol: &str, value: &PortValue) {
        for display in &self.displays {
            if display.symbol == symbol {
                display.write(value);
            }
        }
    }
}

#[cfg(test)]
#[path = "test_panel.rs"]
mod tests;
