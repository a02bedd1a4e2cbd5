//! View and dialog seams the session controller depends on.
//!
//! The controller never touches concrete widgets; it works against an
//! editable-text capability and a dialog capability, so all of its logic
//! runs headless in tests.

use std::path::PathBuf;

/// The editable-text surface: wholesale text access, one applied style
/// string, and a displayed path.
pub trait TextView {
    fn text(&self) -> String;
    fn set_text(&mut self, text: String);
    fn set_style(&mut self, style: String);
    fn set_displayed_path(&mut self, path: String);
}

/// Dialog results. `None` from a path picker means the dialog was
/// dismissed and the pending operation must abort with no state change.
pub trait DialogProvider {
    fn pick_open_path(&mut self) -> Option<PathBuf>;
    fn pick_save_path(&mut self) -> Option<PathBuf>;
    fn confirm_exit(&mut self) -> bool;
}

/// Signal returned to the hosting shell by the exit operation. The
/// controller never terminates the process itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Exit,
    Stay,
}

/// A `DialogProvider` whose answers were already collected, e.g. by an
/// interactive prompt that gathered input across frames before invoking
/// the controller.
#[derive(Debug, Default)]
pub struct ResolvedDialogs {
    open_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    exit_confirmed: bool,
}

impl ResolvedDialogs {
    /// Every dialog reads as cancelled.
    pub fn cancelled() -> Self {
        Self::default()
    }

    pub fn with_open_path(path: PathBuf) -> Self {
        Self {
            open_path: Some(path),
            ..Self::default()
        }
    }

    pub fn with_save_path(path: PathBuf) -> Self {
        Self {
            save_path: Some(path),
            ..Self::default()
        }
    }

    pub fn with_exit_confirmed(confirmed: bool) -> Self {
        Self {
            exit_confirmed: confirmed,
            ..Self::default()
        }
    }
}

impl DialogProvider for ResolvedDialogs {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.open_path.take()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self.save_path.take()
    }

    fn confirm_exit(&mut self) -> bool {
        self.exit_confirmed
    }
}
