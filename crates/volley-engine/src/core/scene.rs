use anyhow::Result;

/// The scene object driven once per frame.
///
/// Implementations own their simulation and rendering state. The frame driver
/// only ever calls these two methods, always in this order, from one thread.
pub trait Scene {
    /// Advances the scene by one discrete step.
    fn update_state(&mut self) -> Result<()>;

    /// Renders the current state.
    fn draw(&mut self) -> Result<()>;
}
