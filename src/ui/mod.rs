pub mod style;
pub mod surface;
pub mod widgets;

pub use style::{install_toolbar_css, StyleTokens, LAYOUT_TOKENS};
pub use surface::GtkToolbarSurface;
pub use widgets::{build_toolbar_row, control_icon, toolbar_button};
