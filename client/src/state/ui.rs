#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the sidebar and the global dialogs.
///
/// Dialog flags are mutually independent, but the page only ever sets one
/// at a time because each opening button lives behind the others' overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub show_add_node_dialog: bool,
    pub show_add_zone_dialog: bool,
    pub show_category_manager: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            show_add_node_dialog: false,
            show_add_zone_dialog: false,
            show_category_manager: false,
        }
    }
}
