use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::ToolbarConfig;
use crate::layout::LayoutController;
use crate::preview::PreviewController;

use super::control::{ToolbarAction, ToolbarControl};
use super::error::{ToolbarError, ToolbarResult};
use super::state::ToolbarState;
use super::surface::ToolbarSurface;

/// Class toggled on the auto-reload control while auto-update is active.
pub const SPIN_CLASS: &str = "spin";

/// Binds the preview controls of a [`ToolbarSurface`] to the injected preview
/// and layout collaborators, and mirrors their state back onto the controls.
///
/// Methods take `&self`: collaborators are allowed to call the setters while
/// a click is being dispatched, so no borrow is held across those calls.
pub struct PreviewToolbar<S: ToolbarSurface> {
    surface: S,
    state: Cell<ToolbarState>,
    prefix: RefCell<Option<String>>,
    control_ids: RefCell<HashMap<ToolbarControl, String>>,
    preview: RefCell<Option<Rc<dyn PreviewController>>>,
    layout: Rc<dyn LayoutController>,
}

impl<S: ToolbarSurface> PreviewToolbar<S> {
    pub fn new(surface: S, layout: Rc<dyn LayoutController>) -> Self {
        Self {
            surface,
            state: Cell::new(ToolbarState::default()),
            prefix: RefCell::new(None),
            control_ids: RefCell::new(HashMap::new()),
            preview: RefCell::new(None),
            layout,
        }
    }

    pub fn with_preview(self, preview: Rc<dyn PreviewController>) -> Self {
        self.attach_preview(preview);
        self
    }

    pub fn attach_preview(&self, preview: Rc<dyn PreviewController>) {
        *self.preview.borrow_mut() = Some(preview);
    }

    pub fn detach_preview(&self) {
        self.preview.borrow_mut().take();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> ToolbarState {
        self.state.get()
    }

    pub fn is_decorated(&self) -> bool {
        self.prefix.borrow().is_some()
    }

    /// Resolved id of `control`, or `None` before decoration or when the
    /// surface has no such control.
    pub fn control_id(&self, control: ToolbarControl) -> Option<String> {
        self.control_ids.borrow().get(&control).cloned()
    }

    pub fn handle_click(&self, control: ToolbarControl) {
        let action = control.action();
        tracing::debug!(control = ?control, action = ?action, "toolbar control clicked");
        match action {
            ToolbarAction::ToggleAutoUpdate => self.auto_update(),
            ToolbarAction::Expand => self.expand(),
            ToolbarAction::Collapse => self.collapse(),
            ToolbarAction::Reload => self.reload_preview(),
            ToolbarAction::Run => self.run_preview(),
            ToolbarAction::Stop => self.stop_preview(),
        }
    }

    pub fn run_preview(&self) {
        if let Some(preview) = self.preview() {
            preview.run();
        }
    }

    pub fn stop_preview(&self) {
        if let Some(preview) = self.preview() {
            preview.stop();
        }
    }

    pub fn reload_preview(&self) {
        if let Some(preview) = self.preview() {
            preview.reload();
        }
    }

    pub fn set_run_status(&self, running: bool) {
        let state = self.update_state(|state| state.run_status = running);
        self.enable_control(ToolbarControl::Stop, state.stop_enabled());
    }

    pub fn set_load_status(&self, loaded: bool) {
        let state = self.update_state(|state| state.load_status = loaded);
        self.enable_control(ToolbarControl::Run, state.run_enabled());
        self.enable_control(ToolbarControl::Reload, state.reload_enabled());
    }

    /// Requests the opposite of the cached auto-update state. The cache only
    /// changes once the preview reports back through [`Self::set_auto_update`].
    pub fn auto_update(&self) {
        let requested = !self.state.get().auto_update;
        if let Some(preview) = self.preview() {
            preview.set_auto_update(requested);
        }
    }

    pub fn set_auto_update(&self, enable: bool) {
        self.update_state(|state| state.auto_update = enable);
        if let Some(id) = self.control_id(ToolbarControl::AutoReload) {
            self.surface.set_class(&id, SPIN_CLASS, enable);
        }
    }

    pub fn toggle_expand(&self) {
        self.set_expand(!self.state.get().expanded);
    }

    pub fn expand(&self) {
        self.set_expand(true);
    }

    pub fn collapse(&self) {
        self.set_expand(false);
    }

    pub fn set_expand(&self, expand: bool) {
        self.update_state(|state| state.expanded = expand);
        // the layout may call back into the toolbar
        let layout = Rc::clone(&self.layout);
        layout.set_fullscreen(expand, Duration::ZERO);
        self.show_control(ToolbarControl::Expand, !expand);
        self.show_control(ToolbarControl::ExpandExit, expand);
    }

    pub fn show_expand_button(&self, visible: bool) {
        self.show_control(ToolbarControl::Expand, visible);
    }

    pub fn show_run_button(&self, visible: bool) {
        self.show_control(ToolbarControl::Run, visible);
    }

    pub fn apply_config(&self, config: &ToolbarConfig) {
        self.show_run_button(config.show_run_button);
        self.show_expand_button(config.show_expand_button);
    }

    fn preview(&self) -> Option<Rc<dyn PreviewController>> {
        let preview = self.preview.borrow().clone();
        if preview.is_none() {
            tracing::debug!("no preview attached; toolbar request ignored");
        }
        preview
    }

    fn update_state(&self, update: impl FnOnce(&mut ToolbarState)) -> ToolbarState {
        let mut state = self.state.get();
        update(&mut state);
        self.state.set(state);
        state
    }

    fn enable_control(&self, control: ToolbarControl, enabled: bool) {
        if let Some(id) = self.control_id(control) {
            self.surface.set_enabled(&id, enabled);
        }
    }

    fn show_control(&self, control: ToolbarControl, visible: bool) {
        if let Some(id) = self.control_id(control) {
            self.surface.set_visible(&id, visible);
        }
    }
}

impl<S: ToolbarSurface + 'static> PreviewToolbar<S> {
    /// Resolves the six controls as `<prefix>toolbar-<suffix>`, applies the
    /// initial control state and binds one click handler per control found.
    pub fn decorate(self: &Rc<Self>, prefix: Option<&str>) -> ToolbarResult<()> {
        if let Some(existing) = self.prefix.borrow().as_deref() {
            tracing::warn!(prefix = existing, "toolbar decorate requested twice");
            return Err(ToolbarError::AlreadyDecorated {
                prefix: existing.to_string(),
            });
        }
        let prefix = prefix.unwrap_or_default();

        {
            let mut control_ids = self.control_ids.borrow_mut();
            for control in ToolbarControl::ALL {
                let id = control.element_id(prefix);
                if self.surface.has_control(&id) {
                    control_ids.insert(control, id);
                } else {
                    tracing::debug!(id = %id, "toolbar control not found on surface");
                }
            }
        }
        *self.prefix.borrow_mut() = Some(prefix.to_string());

        self.enable_control(ToolbarControl::Reload, false);
        self.enable_control(ToolbarControl::Stop, false);
        self.show_control(ToolbarControl::ExpandExit, false);

        for control in ToolbarControl::ALL {
            let Some(id) = self.control_id(control) else {
                continue;
            };
            let toolbar: Weak<Self> = Rc::downgrade(self);
            self.surface.connect_clicked(
                &id,
                Box::new(move || {
                    if let Some(toolbar) = toolbar.upgrade() {
                        toolbar.handle_click(control);
                    }
                }),
            );
        }

        tracing::debug!(
            prefix,
            controls = self.control_ids.borrow().len(),
            "decorated preview toolbar"
        );
        Ok(())
    }
}
