use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow, Box as GtkBox, Label, Orientation};

use crate::config::ToolbarConfig;
use crate::error::{AppError, AppResult};
use crate::toolbar::PreviewToolbar;
use crate::ui::{build_toolbar_row, install_toolbar_css, GtkToolbarSurface, LAYOUT_TOKENS};

mod demo;
mod startup;

pub use demo::{EchoPreview, WindowLayout};
pub use startup::StartupConfig;

const APP_ID: &str = "io.github.previewbar.Demo";

pub struct App {
    startup_config: StartupConfig,
    toolbar_config: ToolbarConfig,
}

impl App {
    pub fn new(startup_config: StartupConfig, toolbar_config: ToolbarConfig) -> Self {
        Self {
            startup_config,
            toolbar_config,
        }
    }

    /// Command-line prefix, then the configured one, then none.
    pub fn control_prefix(&self) -> &str {
        self.startup_config
            .prefix_override
            .as_deref()
            .or(self.toolbar_config.id_prefix.as_deref())
            .unwrap_or_default()
    }

    pub fn run(self) -> AppResult<()> {
        let application = Application::builder().application_id(APP_ID).build();
        let prefix = self.control_prefix().to_string();
        let toolbar_config = self.toolbar_config;

        application.connect_activate(move |application| {
            if let Err(err) = build_preview_window(application, &prefix, &toolbar_config) {
                tracing::error!(%err, "failed to build preview window");
                application.quit();
            }
        });

        let exit_code = application.run_with_args(&gtk_launch_args());
        if exit_code != glib::ExitCode::SUCCESS {
            return Err(AppError::UiExit {
                code: i32::from(exit_code),
            });
        }
        Ok(())
    }
}

/// Program name only; the remaining arguments were consumed by [`StartupConfig`].
fn gtk_launch_args() -> Vec<String> {
    std::env::args().take(1).collect()
}

fn build_preview_window(
    application: &Application,
    prefix: &str,
    toolbar_config: &ToolbarConfig,
) -> AppResult<()> {
    let tokens = LAYOUT_TOKENS;
    install_toolbar_css(tokens);

    let window = ApplicationWindow::builder()
        .application(application)
        .title("previewbar")
        .default_width(tokens.window_default_width)
        .default_height(tokens.window_default_height)
        .build();

    let content = GtkBox::new(Orientation::Vertical, tokens.spacing_8);
    content.append(&build_toolbar_row(prefix, tokens));
    let placeholder = Label::new(Some("Preview output"));
    placeholder.set_vexpand(true);
    content.append(&placeholder);
    window.set_child(Some(&content));

    let surface = GtkToolbarSurface::from_widget_tree(&content);
    let toolbar = Rc::new(PreviewToolbar::new(
        surface,
        Rc::new(WindowLayout::new(window.clone())),
    ));
    toolbar.attach_preview(Rc::new(EchoPreview::new(Rc::downgrade(&toolbar))));
    toolbar.decorate(Some(prefix))?;
    toolbar.apply_config(toolbar_config);

    // click handlers only hold weak references; the window keeps the toolbar alive
    let toolbar_slot = RefCell::new(Some(toolbar));
    window.connect_close_request(move |_| {
        if let Some(toolbar) = toolbar_slot.borrow_mut().take() {
            tracing::debug!(state = ?toolbar.state(), "closing preview window");
        }
        glib::Propagation::Proceed
    });

    window.present();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_prefix_prefers_command_line_over_config() {
        let config = ToolbarConfig {
            id_prefix: Some("config-".to_string()),
            ..ToolbarConfig::default()
        };
        let app = App::new(
            StartupConfig {
                prefix_override: Some("cli-".to_string()),
            },
            config.clone(),
        );
        assert_eq!(app.control_prefix(), "cli-");

        let app = App::new(StartupConfig::default(), config);
        assert_eq!(app.control_prefix(), "config-");

        let app = App::new(StartupConfig::default(), ToolbarConfig::default());
        assert_eq!(app.control_prefix(), "");
    }

    #[test]
    fn gtk_launch_args_pass_only_the_program_name() {
        let args = gtk_launch_args();
        assert_eq!(args.len(), 1);
        assert_eq!(args.first(), std::env::args().next().as_ref());
    }
}
