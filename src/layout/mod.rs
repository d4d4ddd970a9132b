use std::time::Duration;

/// View management collaborator providing fullscreen toggling.
pub trait LayoutController {
    /// `transition` of [`Duration::ZERO`] switches without animation.
    fn set_fullscreen(&self, enabled: bool, transition: Duration);
}
