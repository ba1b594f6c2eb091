//! Terminal UI: pure view on one side, crossterm flushing on the other.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{GameView, Line, LineStyle, ViewState};
