use std::cell::RefCell;
use std::rc::Rc;

use sysedit_core::shiplog::ShipLog;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Editor whose canvas the pointer was last over.
    pub active_editor: Option<u64>,

    /// Ship log written by mission scripts.
    pub ship_log: Rc<RefCell<ShipLog>>,
    pub show_ship_log: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
