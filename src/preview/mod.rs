//! Collaborator interface for the live preview the toolbar controls.

/// Live preview subsystem. Every call is fire-and-forget; implementations
/// report resulting state back through the toolbar setters, possibly from
/// inside the call itself.
pub trait PreviewController {
    fn run(&self);
    fn stop(&self);
    fn reload(&self);
    fn set_auto_update(&self, enabled: bool);
}
