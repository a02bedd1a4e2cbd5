use ratatui::prelude::*;

use crate::app::{App, Mode};
use crate::style::{COLOR_PALETTE, FONT_FAMILIES, FONT_SIZES};
use crate::widgets::modal::{ConfirmDialog, ListPicker, PathPrompt};
use crate::widgets::toast::ToastWidget;
use crate::widgets::{EditorWidget, StatusBar};

impl App {
    /// Main render function for the application UI
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Text area
                Constraint::Length(1), // Status line
            ])
            .split(f.area());

        self.render_text_area(f, chunks[0]);
        self.render_status_line(f, chunks[1]);

        self.toast_manager.update();
        if self.toast_manager.has_active_toasts() {
            f.render_widget(ToastWidget::new(&self.toast_manager), f.area());
        }

        self.render_modal(f);
    }

    fn render_text_area(&mut self, f: &mut Frame, area: Rect) {
        self.ensure_cursor_visible(area.width, area.height);

        let widget = EditorWidget::new(&self.pane.area)
            .text_style(self.session.style().terminal_style())
            .scroll_offset(self.scroll_offset);
        f.render_widget(widget, area);

        // The terminal cursor tracks the text cursor while editing;
        // modals own it otherwise.
        if self.mode == Mode::Edit {
            let (row, col) = self.pane.area.cursor_pos;
            let (scroll_row, scroll_col) = self.scroll_offset;
            let x = area.x + (col - scroll_col) as u16;
            let y = area.y + (row - scroll_row) as u16;
            f.set_cursor_position(Position::new(x, y));
        }
    }

    fn render_status_line(&mut self, f: &mut Frame, area: Rect) {
        let bar = StatusBar::new(self.display_name())
            .modified(self.is_modified())
            .style_summary(self.pane.applied_style.clone())
            .hint("^O Open  ^S Save  M-S Save as  ^Q Quit");
        f.render_widget(bar, area);
    }

    fn render_modal(&mut self, f: &mut Frame) {
        let area = f.area();

        match self.mode {
            Mode::Edit => {}
            Mode::OpenPrompt => {
                let prompt = PathPrompt::new("Open a file", &self.prompt_input);
                let (x, y) = prompt.cursor_position(area);
                f.render_widget(prompt, area);
                f.set_cursor_position(Position::new(x, y));
            }
            Mode::SaveAsPrompt => {
                let prompt = PathPrompt::new("Save as...", &self.prompt_input);
                let (x, y) = prompt.cursor_position(area);
                f.render_widget(prompt, area);
                f.set_cursor_position(Position::new(x, y));
            }
            Mode::ConfirmExit => {
                let dialog = ConfirmDialog::new("Confirm", "Are you sure you want to exit?");
                f.render_widget(dialog, area);
            }
            Mode::FontPicker => {
                let picker = ListPicker::new("Font")
                    .items(FONT_FAMILIES.to_vec())
                    .selected(self.picker_index);
                f.render_widget(picker, area);
            }
            Mode::SizePicker => {
                let labels: Vec<String> =
                    FONT_SIZES.iter().map(|s| format!("{}px", s)).collect();
                let picker = ListPicker::new("Font size")
                    .items(labels.iter().map(String::as_str).collect())
                    .selected(self.picker_index);
                f.render_widget(picker, area);
            }
            Mode::ColorPicker => {
                let picker = ListPicker::new("Text color")
                    .items(COLOR_PALETTE.iter().map(|(name, _, _, _)| *name).collect())
                    .selected(self.picker_index);
                f.render_widget(picker, area);
            }
        }
    }
}
