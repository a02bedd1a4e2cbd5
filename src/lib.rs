//! Notepad library: headless editing core plus the terminal shell.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod session;
pub mod style;
pub mod text_area;
pub mod ui;
pub mod view;
pub mod widgets;

// Re-export main types for convenience
pub use app::{App, EditorPane, Mode};
pub use error::EditorError;
pub use model::EditorModel;
pub use session::EditorSession;
pub use style::StyleState;
pub use view::{DialogProvider, ExitDecision, ResolvedDialogs, TextView};
