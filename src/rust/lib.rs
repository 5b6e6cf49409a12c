pub mod event;
pub mod panel;
pub mod platform;
pub mod tools;
pub mod widget;

pub use event::{ControlEvent, EventError, PortState, PortValue};
pub use panel::{ControlPanel, PORT_SYMBOL_ATTR, TEMPO_OUT};
pub use platform::config::{DisplayBinding, PanelConfig};
pub use widget::Widget;
