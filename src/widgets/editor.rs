use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text_area::TextArea;

/// Renders the text area with one uniform style applied to every line,
/// derived from the whole-buffer style descriptor.
pub struct EditorWidget<'a> {
    pub area: &'a TextArea,
    pub text_style: Style,
    pub scroll_offset: (usize, usize),
}

impl<'a> EditorWidget<'a> {
    pub fn new(area: &'a TextArea) -> Self {
        Self {
            area,
            text_style: Style::default(),
            scroll_offset: (0, 0),
        }
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn scroll_offset(mut self, offset: (usize, usize)) -> Self {
        self.scroll_offset = offset;
        self
    }
}

impl Widget for EditorWidget<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let (start_row, h_offset) = self.scroll_offset;
        let end_row = (start_row + area.height as usize).min(self.area.content.len());

        let mut lines = Vec::with_capacity(end_row.saturating_sub(start_row));
        for i in start_row..end_row {
            let line = &self.area.content[i];
            // h_offset counts characters; find its byte position first
            let visible = match line.char_indices().nth(h_offset) {
                Some((at, _)) => &line[at..],
                None => "",
            };
            lines.push(Line::from(Span::styled(visible, self.text_style)));
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(Color::Black));
        paragraph.render(area, buf);
    }
}
