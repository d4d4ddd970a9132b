/// Mirror of the preview and layout state the toolbar renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolbarState {
    pub run_status: bool,
    pub load_status: bool,
    pub auto_update: bool,
    pub expanded: bool,
}

impl ToolbarState {
    pub const fn run_enabled(&self) -> bool {
        !self.load_status
    }

    pub const fn reload_enabled(&self) -> bool {
        !self.load_status
    }

    pub const fn stop_enabled(&self) -> bool {
        self.run_status
    }
}
