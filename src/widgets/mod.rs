pub mod editor;
pub mod modal;
pub mod status_bar;
pub mod toast;

pub use editor::EditorWidget;
pub use modal::{ConfirmDialog, ListPicker, PathPrompt};
pub use status_bar::StatusBar;
pub use toast::{Toast, ToastManager, ToastType, ToastWidget};
