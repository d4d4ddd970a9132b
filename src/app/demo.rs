//! Stand-in collaborators for the demo window: a preview that reports its
//! state straight back and a layout that fullscreens the window.

use std::cell::Cell;
use std::rc::Weak;
use std::time::Duration;

use gtk4::prelude::*;
use gtk4::ApplicationWindow;

use crate::layout::LayoutController;
use crate::preview::PreviewController;
use crate::toolbar::{PreviewToolbar, ToolbarSurface};

pub struct EchoPreview<S: ToolbarSurface> {
    toolbar: Weak<PreviewToolbar<S>>,
    runs: Cell<u32>,
    reloads: Cell<u32>,
}

impl<S: ToolbarSurface> EchoPreview<S> {
    pub fn new(toolbar: Weak<PreviewToolbar<S>>) -> Self {
        Self {
            toolbar,
            runs: Cell::new(0),
            reloads: Cell::new(0),
        }
    }

    pub fn runs(&self) -> u32 {
        self.runs.get()
    }

    pub fn reloads(&self) -> u32 {
        self.reloads.get()
    }
}

impl<S: ToolbarSurface> PreviewController for EchoPreview<S> {
    fn run(&self) {
        self.runs.set(self.runs.get() + 1);
        tracing::info!(runs = self.runs.get(), "preview run");
        if let Some(toolbar) = self.toolbar.upgrade() {
            toolbar.set_run_status(true);
            toolbar.set_load_status(true);
        }
    }

    fn stop(&self) {
        tracing::info!("preview stop");
        if let Some(toolbar) = self.toolbar.upgrade() {
            toolbar.set_run_status(false);
            toolbar.set_load_status(false);
        }
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
        tracing::info!(reloads = self.reloads.get(), "preview reload");
    }

    fn set_auto_update(&self, enabled: bool) {
        tracing::info!(enabled, "preview auto update");
        if let Some(toolbar) = self.toolbar.upgrade() {
            toolbar.set_auto_update(enabled);
        }
    }
}

pub struct WindowLayout {
    window: ApplicationWindow,
}

impl WindowLayout {
    pub fn new(window: ApplicationWindow) -> Self {
        Self { window }
    }
}

impl LayoutController for WindowLayout {
    fn set_fullscreen(&self, enabled: bool, transition: Duration) {
        tracing::debug!(enabled, ?transition, "set fullscreen");
        if enabled {
            self.window.fullscreen();
        } else {
            self.window.unfullscreen();
        }
    }
}
