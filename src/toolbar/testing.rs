use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::layout::LayoutController;
use crate::preview::PreviewController;
use std::time::Duration;

use super::control::ToolbarControl;
use super::surface::{ClickHandler, ToolbarSurface};

#[derive(Default)]
struct FakeControl {
    enabled: bool,
    visible: bool,
    classes: HashSet<String>,
    handlers: Vec<Rc<dyn Fn()>>,
}

/// In-memory surface recording control state and bound click handlers.
#[derive(Default)]
pub(crate) struct FakeSurface {
    controls: RefCell<HashMap<String, FakeControl>>,
}

impl FakeSurface {
    pub(crate) fn with_controls(prefix: &str) -> Self {
        Self::with_only(prefix, &ToolbarControl::ALL)
    }

    pub(crate) fn with_only(prefix: &str, controls: &[ToolbarControl]) -> Self {
        let surface = Self::default();
        {
            let mut map = surface.controls.borrow_mut();
            for control in controls {
                map.insert(
                    control.element_id(prefix),
                    FakeControl {
                        enabled: true,
                        visible: true,
                        ..FakeControl::default()
                    },
                );
            }
        }
        surface
    }

    pub(crate) fn is_enabled(&self, id: &str) -> bool {
        self.controls
            .borrow()
            .get(id)
            .is_some_and(|control| control.enabled)
    }

    pub(crate) fn is_visible(&self, id: &str) -> bool {
        self.controls
            .borrow()
            .get(id)
            .is_some_and(|control| control.visible)
    }

    pub(crate) fn has_class(&self, id: &str, class_name: &str) -> bool {
        self.controls
            .borrow()
            .get(id)
            .is_some_and(|control| control.classes.contains(class_name))
    }

    pub(crate) fn handler_count(&self, id: &str) -> usize {
        self.controls
            .borrow()
            .get(id)
            .map_or(0, |control| control.handlers.len())
    }

    /// Runs every handler bound to `id` without holding the surface borrow,
    /// so handlers may touch the surface again.
    pub(crate) fn click(&self, id: &str) {
        let handlers: Vec<Rc<dyn Fn()>> = self
            .controls
            .borrow()
            .get(id)
            .map(|control| control.handlers.clone())
            .unwrap_or_default();
        for handler in handlers {
            handler();
        }
    }
}

impl ToolbarSurface for FakeSurface {
    fn has_control(&self, id: &str) -> bool {
        self.controls.borrow().contains_key(id)
    }

    fn set_enabled(&self, id: &str, enabled: bool) {
        if let Some(control) = self.controls.borrow_mut().get_mut(id) {
            control.enabled = enabled;
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(control) = self.controls.borrow_mut().get_mut(id) {
            control.visible = visible;
        }
    }

    fn set_class(&self, id: &str, class_name: &str, enabled: bool) {
        if let Some(control) = self.controls.borrow_mut().get_mut(id) {
            if enabled {
                control.classes.insert(class_name.to_string());
            } else {
                control.classes.remove(class_name);
            }
        }
    }

    fn connect_clicked(&self, id: &str, handler: ClickHandler) {
        if let Some(control) = self.controls.borrow_mut().get_mut(id) {
            control.handlers.push(Rc::from(handler));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreviewCall {
    Run,
    Stop,
    Reload,
    SetAutoUpdate(bool),
}

#[derive(Default)]
pub(crate) struct FakePreview {
    pub(crate) calls: RefCell<Vec<PreviewCall>>,
}

impl PreviewController for FakePreview {
    fn run(&self) {
        self.calls.borrow_mut().push(PreviewCall::Run);
    }

    fn stop(&self) {
        self.calls.borrow_mut().push(PreviewCall::Stop);
    }

    fn reload(&self) {
        self.calls.borrow_mut().push(PreviewCall::Reload);
    }

    fn set_auto_update(&self, enabled: bool) {
        self.calls
            .borrow_mut()
            .push(PreviewCall::SetAutoUpdate(enabled));
    }
}

#[derive(Default)]
pub(crate) struct FakeLayout {
    pub(crate) fullscreen_requests: RefCell<Vec<(bool, Duration)>>,
}

impl LayoutController for FakeLayout {
    fn set_fullscreen(&self, enabled: bool, transition: Duration) {
        self.fullscreen_requests
            .borrow_mut()
            .push((enabled, transition));
    }
}
