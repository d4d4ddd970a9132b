use gtk4::CssProvider;

use crate::toolbar::SPIN_CLASS;

/// Compile-time layout tokens — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_4: i32,
    pub spacing_8: i32,
    pub control_size: u16,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub spin_period_ms: u32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_4: 4,
    spacing_8: 8,
    control_size: 36,
    window_default_width: 840,
    window_default_height: 472,
    spin_period_ms: 1_200,
};

pub fn toolbar_css(tokens: StyleTokens) -> String {
    format!(
        r#"
.preview-toolbar {{
    padding: {spacing_4}px {spacing_8}px;
}}

.preview-toolbar-button:disabled {{
    opacity: 0.4;
}}

@keyframes preview-toolbar-spin {{
    to {{ -gtk-icon-transform: rotate(1turn); }}
}}

.preview-toolbar-button.{spin_class} {{
    animation: preview-toolbar-spin {spin_period_ms}ms linear infinite;
}}
"#,
        spacing_4 = tokens.spacing_4,
        spacing_8 = tokens.spacing_8,
        spin_class = SPIN_CLASS,
        spin_period_ms = tokens.spin_period_ms,
    )
}

pub fn install_toolbar_css(tokens: StyleTokens) {
    let provider = CssProvider::new();
    provider.load_from_data(&toolbar_css(tokens));
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        tracing::warn!("no display available; toolbar css not installed");
    }
}
