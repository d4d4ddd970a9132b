use std::collections::HashMap;

use gtk4::prelude::*;
use gtk4::{Button, Widget};

use crate::toolbar::{ClickHandler, ToolbarSurface};

/// gtk4 rendering of the toolbar. Controls are buttons addressed by their
/// widget name.
pub struct GtkToolbarSurface {
    buttons: HashMap<String, Button>,
}

impl GtkToolbarSurface {
    /// Adopts the named buttons already present under `root`.
    pub fn from_widget_tree(root: &impl IsA<Widget>) -> Self {
        let mut buttons = HashMap::new();
        collect_named_buttons(root.as_ref(), &mut buttons);
        tracing::debug!(buttons = buttons.len(), "collected named toolbar buttons");
        Self { buttons }
    }

    fn button(&self, id: &str) -> Option<&Button> {
        self.buttons.get(id)
    }
}

fn collect_named_buttons(widget: &Widget, buttons: &mut HashMap<String, Button>) {
    if let Some(button) = widget.downcast_ref::<Button>() {
        let name = button.widget_name();
        // unnamed widgets report their type name
        if name.as_str() != button.type_().name() {
            buttons
                .entry(name.to_string())
                .or_insert_with(|| button.clone());
        }
    }

    let mut child = widget.first_child();
    while let Some(current) = child {
        collect_named_buttons(&current, buttons);
        child = current.next_sibling();
    }
}

impl ToolbarSurface for GtkToolbarSurface {
    fn has_control(&self, id: &str) -> bool {
        self.buttons.contains_key(id)
    }

    fn set_enabled(&self, id: &str, enabled: bool) {
        if let Some(button) = self.button(id) {
            button.set_sensitive(enabled);
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(button) = self.button(id) {
            button.set_visible(visible);
        }
    }

    fn set_class(&self, id: &str, class_name: &str, enabled: bool) {
        if let Some(button) = self.button(id) {
            if enabled {
                button.add_css_class(class_name);
            } else {
                button.remove_css_class(class_name);
            }
        }
    }

    fn connect_clicked(&self, id: &str, handler: ClickHandler) {
        if let Some(button) = self.button(id) {
            button.connect_clicked(move |_| handler());
        }
    }
}
