use std::io::Stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::event::{self, Event},
    Terminal,
};

use crate::session::EditorSession;
use crate::style::StyleState;
use crate::text_area::TextArea;
use crate::view::{ResolvedDialogs, TextView};
use crate::widgets::toast::ToastManager;

/// Global application state for one editing session.
pub struct App {
    /// Whether the application is running
    pub running: bool,

    /// The editing-session controller (file handle + style descriptor)
    pub session: EditorSession,

    /// The visible text surface the controller writes into
    pub pane: EditorPane,

    /// Current interaction mode
    pub mode: Mode,

    /// Input collected by the path prompts
    pub prompt_input: String,

    /// Highlighted row in the font/size/color menus
    pub picker_index: usize,

    /// Scroll position of the text area
    pub scroll_offset: (usize, usize),

    /// Toast notification manager, the visible error surface
    pub toast_manager: ToastManager,
}

/// Interaction modes. `Edit` is the normal state; every other mode shows
/// a modal that either collects input or asks for a decision, and Esc
/// always returns to `Edit` without touching editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Edit,
    OpenPrompt,
    SaveAsPrompt,
    ConfirmExit,
    FontPicker,
    SizePicker,
    ColorPicker,
}

/// The concrete editable-text view: the text area plus the style string
/// and path the controller pushed at it.
#[derive(Debug, Clone)]
pub struct EditorPane {
    pub area: TextArea,
    pub applied_style: String,
    pub displayed_path: String,
}

impl Default for EditorPane {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorPane {
    pub fn new() -> Self {
        Self {
            area: TextArea::new(),
            // the startup derivation of the default descriptor
            applied_style: StyleState::new().style_string(),
            displayed_path: String::new(),
        }
    }
}

impl TextView for EditorPane {
    fn text(&self) -> String {
        self.area.text()
    }

    fn set_text(&mut self, text: String) {
        self.area.set_text(&text);
    }

    fn set_style(&mut self, style: String) {
        self.applied_style = style;
    }

    fn set_displayed_path(&mut self, path: String) {
        self.displayed_path = path;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            session: EditorSession::new(),
            pane: EditorPane::new(),
            mode: Mode::Edit,
            prompt_input: String::new(),
            picker_index: 0,
            scroll_offset: (0, 0),
            toast_manager: ToastManager::new(),
        }
    }

    /// Creates an app with the given file already open, for the command
    /// line argument case.
    pub fn with_file(file_path: &str) -> Result<Self> {
        let mut app = Self::new();

        let mut dialogs = ResolvedDialogs::with_open_path(PathBuf::from(file_path));
        app.session
            .on_open(&mut app.pane, &mut dialogs)
            .map_err(|e| anyhow::anyhow!("Failed to open file '{}': {}", file_path, e))?;

        Ok(app)
    }

    /// Runs the event loop: poll an input event, dispatch it to
    /// completion, redraw. File operations block the loop for their
    /// duration, which is fine at plain-text sizes.
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<bool> {
        let frame_duration = Duration::from_millis(16);
        let mut last_frame = Instant::now();

        loop {
            if !self.running {
                break;
            }

            let frame_start = Instant::now();
            if frame_start.duration_since(last_frame) >= frame_duration {
                terminal.draw(|f| self.render(f))?;
                last_frame = frame_start;
            }

            if event::poll(Duration::from_millis(1))? {
                match event::read()? {
                    Event::Key(key) => {
                        crate::handlers::keyboard::handle_key(self, key)?;
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            } else {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }

        Ok(true)
    }

    /// Name shown for the document in the status bar.
    pub fn display_name(&self) -> &str {
        if self.pane.displayed_path.is_empty() {
            "untitled"
        } else {
            &self.pane.displayed_path
        }
    }

    pub fn is_modified(&self) -> bool {
        self.pane.area.modified
    }

    /// Leaves whatever modal is active without changing editor state.
    pub fn close_modal(&mut self) {
        self.mode = Mode::Edit;
        self.prompt_input.clear();
        self.picker_index = 0;
    }

    /// Keeps the cursor inside the visible text area, adjusting the
    /// scroll offset when it drifts out.
    pub fn ensure_cursor_visible(&mut self, width: u16, height: u16) {
        let (row, col) = self.pane.area.cursor_pos;
        let (scroll_row, scroll_col) = self.scroll_offset;

        let visible_rows = height as usize;
        if visible_rows > 0 {
            if row < scroll_row {
                self.scroll_offset.0 = row;
            } else if row >= scroll_row + visible_rows {
                self.scroll_offset.0 = row - visible_rows + 1;
            }
        }

        let visible_cols = width as usize;
        if visible_cols > 0 {
            if col < scroll_col {
                self.scroll_offset.1 = col;
            } else if col >= scroll_col + visible_cols {
                self.scroll_offset.1 = col - visible_cols + 1;
            }
        }
    }
}
