pub type ClickHandler = Box<dyn Fn() + 'static>;

/// Rendering capability the toolbar drives. Controls are addressed by id;
/// every method must tolerate an id the surface does not know.
pub trait ToolbarSurface {
    fn has_control(&self, id: &str) -> bool;
    fn set_enabled(&self, id: &str, enabled: bool);
    fn set_visible(&self, id: &str, visible: bool);
    fn set_class(&self, id: &str, class_name: &str, enabled: bool);
    fn connect_clicked(&self, id: &str, handler: ClickHandler);
}
