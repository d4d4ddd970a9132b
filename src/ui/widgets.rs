use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Orientation};

use crate::toolbar::ToolbarControl;

use super::style::StyleTokens;

/// Symbolic icon name and tooltip for each toolbar control.
pub fn control_icon(control: ToolbarControl) -> (&'static str, &'static str) {
    match control {
        ToolbarControl::AutoReload => ("emblem-synchronizing-symbolic", "Auto reload"),
        ToolbarControl::Expand => ("view-fullscreen-symbolic", "Expand preview"),
        ToolbarControl::ExpandExit => ("view-restore-symbolic", "Exit expanded preview"),
        ToolbarControl::Reload => ("view-refresh-symbolic", "Reload preview"),
        ToolbarControl::Run => ("media-playback-start-symbolic", "Run preview"),
        ToolbarControl::Stop => ("media-playback-stop-symbolic", "Stop preview"),
    }
}

/// Flat icon button whose widget name is the control id, so it can be
/// located again by [`crate::ui::GtkToolbarSurface::from_widget_tree`].
pub fn toolbar_button(id: &str, icon_name: &str, tooltip: &str, control_size: i32) -> Button {
    let button = Button::from_icon_name(icon_name);
    button.set_widget_name(id);
    button.set_focus_on_click(false);
    button.set_tooltip_text(Some(tooltip));
    button.add_css_class("flat");
    button.add_css_class("icon-button");
    button.add_css_class("preview-toolbar-button");
    button.set_size_request(control_size, control_size);
    button
}

/// Horizontal row holding all six controls, named `<prefix>toolbar-<suffix>`.
pub fn build_toolbar_row(prefix: &str, tokens: StyleTokens) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, tokens.spacing_4);
    row.add_css_class("preview-toolbar");
    for control in ToolbarControl::ALL {
        let (icon_name, tooltip) = control_icon(control);
        row.append(&toolbar_button(
            &control.element_id(prefix),
            icon_name,
            tooltip,
            i32::from(tokens.control_size),
        ));
    }
    row
}
