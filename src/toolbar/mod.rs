mod control;
mod error;
mod state;
mod surface;
mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use control::{ToolbarAction, ToolbarControl, CONTROL_ID_SEGMENT};
pub use error::{ToolbarError, ToolbarResult};
pub use state::ToolbarState;
pub use surface::{ClickHandler, ToolbarSurface};
pub use widget::{PreviewToolbar, SPIN_CLASS};
