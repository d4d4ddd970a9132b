/// Id segment shared by every toolbar control, placed between the caller's
/// prefix and the control suffix.
pub const CONTROL_ID_SEGMENT: &str = "toolbar-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarControl {
    AutoReload,
    Expand,
    ExpandExit,
    Reload,
    Run,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    ToggleAutoUpdate,
    Expand,
    Collapse,
    Reload,
    Run,
    Stop,
}

impl ToolbarControl {
    pub const ALL: [ToolbarControl; 6] = [
        ToolbarControl::AutoReload,
        ToolbarControl::Expand,
        ToolbarControl::ExpandExit,
        ToolbarControl::Reload,
        ToolbarControl::Run,
        ToolbarControl::Stop,
    ];

    pub const fn suffix(self) -> &'static str {
        match self {
            ToolbarControl::AutoReload => "auto-reload",
            ToolbarControl::Expand => "expand",
            ToolbarControl::ExpandExit => "expand-exit",
            ToolbarControl::Reload => "reload",
            ToolbarControl::Run => "run",
            ToolbarControl::Stop => "stop",
        }
    }

    pub const fn action(self) -> ToolbarAction {
        match self {
            ToolbarControl::AutoReload => ToolbarAction::ToggleAutoUpdate,
            ToolbarControl::Expand => ToolbarAction::Expand,
            ToolbarControl::ExpandExit => ToolbarAction::Collapse,
            ToolbarControl::Reload => ToolbarAction::Reload,
            ToolbarControl::Run => ToolbarAction::Run,
            ToolbarControl::Stop => ToolbarAction::Stop,
        }
    }

    /// Full control id, e.g. `editor-toolbar-run` for prefix `editor-`.
    pub fn element_id(self, prefix: &str) -> String {
        format!("{prefix}{CONTROL_ID_SEGMENT}{}", self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_joins_prefix_segment_and_suffix() {
        assert_eq!(ToolbarControl::Run.element_id(""), "toolbar-run");
        assert_eq!(
            ToolbarControl::ExpandExit.element_id("editor-"),
            "editor-toolbar-expand-exit"
        );
        assert_eq!(
            ToolbarControl::AutoReload.element_id("preview-"),
            "preview-toolbar-auto-reload"
        );
    }

    #[test]
    fn every_control_maps_to_a_distinct_action() {
        let actions: Vec<ToolbarAction> = ToolbarControl::ALL
            .iter()
            .map(|control| control.action())
            .collect();
        for (index, action) in actions.iter().enumerate() {
            assert!(!actions[index + 1..].contains(action));
        }
        assert_eq!(ToolbarControl::ExpandExit.action(), ToolbarAction::Collapse);
        assert_eq!(
            ToolbarControl::AutoReload.action(),
            ToolbarAction::ToggleAutoUpdate
        );
    }
}
