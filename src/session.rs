//! # Editing session controller
//!
//! Translates user actions into model calls or style mutations on the
//! injected view. The session is either Unbound (no file handle) or
//! Bound; `open` and a successful `save-as` bind it, and nothing unbinds
//! it again.
//!
//! Every operation runs to completion synchronously. On any I/O failure
//! the error propagates to the caller for visible reporting and the
//! buffer and handle are left exactly as they were, so the user can
//! retry.

use crate::error::{EditorError, Result};
use crate::model::{self, EditorModel};
use crate::style::{color_to_hex, StyleState};
use crate::view::{DialogProvider, ExitDecision, TextView};

pub struct EditorSession {
    model: EditorModel,
    style: StyleState,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            model: EditorModel::new(),
            style: StyleState::new(),
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn is_bound(&self) -> bool {
        self.model.is_bound()
    }

    /// Opens a file chosen through the dialog provider.
    ///
    /// A dismissed dialog aborts with `Cancelled` and zero state change.
    /// The file is read before the handle is rebound, so a failed read
    /// also leaves the previous buffer and handle untouched.
    pub fn on_open(
        &mut self,
        view: &mut dyn TextView,
        dialogs: &mut dyn DialogProvider,
    ) -> Result<()> {
        let path = dialogs.pick_open_path().ok_or(EditorError::Cancelled)?;

        let lines = model::read_lines(&path)?;
        view.set_text(lines.join("\n"));
        self.model.set_current_file(path);
        view.set_displayed_path(self.displayed_path());

        Ok(())
    }

    /// Overwrites the bound file with the current buffer contents.
    /// Silently returns while unbound.
    pub fn on_save(&mut self, view: &dyn TextView) -> Result<()> {
        if !self.model.is_bound() {
            return Ok(());
        }
        self.model.write_current_file(&view.text())
    }

    /// Writes the buffer to a destination chosen through the dialog
    /// provider, then rebinds the handle to it.
    ///
    /// The write happens before the rebind; if it fails, the handle
    /// still points at the previous file.
    pub fn on_save_as(
        &mut self,
        view: &mut dyn TextView,
        dialogs: &mut dyn DialogProvider,
    ) -> Result<()> {
        let path = dialogs.pick_save_path().ok_or(EditorError::Cancelled)?;

        model::write_text(&path, &view.text())?;
        self.model.set_current_file(path);
        view.set_displayed_path(self.displayed_path());

        Ok(())
    }

    /// Asks for confirmation and reports the decision to the hosting
    /// shell. On `Stay` all editor state is untouched.
    pub fn on_exit(&self, dialogs: &mut dyn DialogProvider) -> ExitDecision {
        if dialogs.confirm_exit() {
            ExitDecision::Exit
        } else {
            ExitDecision::Stay
        }
    }

    pub fn set_bold(&mut self, active: bool, view: &mut dyn TextView) {
        self.style.bold = active;
        self.apply_style(view);
    }

    pub fn set_italic(&mut self, active: bool, view: &mut dyn TextView) {
        self.style.italic = active;
        self.apply_style(view);
    }

    pub fn set_underline(&mut self, active: bool, view: &mut dyn TextView) {
        self.style.underline = active;
        self.apply_style(view);
    }

    /// Applies a text color given as 0..1 RGB floats, recorded as a
    /// truncated uppercase `#RRGGBB` value.
    pub fn on_color_change(&mut self, r: f64, g: f64, b: f64, view: &mut dyn TextView) {
        self.style.text_color_hex = Some(color_to_hex(r, g, b));
        self.apply_style(view);
    }

    pub fn on_font_size_change(&mut self, px: u16, view: &mut dyn TextView) {
        self.style.font_size_px = px;
        self.apply_style(view);
    }

    pub fn on_font_family_change(&mut self, name: &str, view: &mut dyn TextView) {
        self.style.font_family = name.to_string();
        self.apply_style(view);
    }

    /// Re-derives the style string from the descriptor and pushes it to
    /// the view. Always called after any attribute change, so turning
    /// one attribute off preserves the rest.
    fn apply_style(&self, view: &mut dyn TextView) {
        view.set_style(self.style.style_string());
    }

    fn displayed_path(&self) -> String {
        self.model
            .current_file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}
