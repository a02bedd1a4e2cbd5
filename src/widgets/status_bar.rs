use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line status bar: document path and dirty marker on the left, the
/// applied style string in the middle, key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    pub path: String,
    pub modified: bool,
    pub style_summary: String,
    pub hint: String,
}

impl StatusBar {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            modified: false,
            style_summary: String::new(),
            hint: String::new(),
        }
    }

    pub fn modified(mut self, modified: bool) -> Self {
        self.modified = modified;
        self
    }

    pub fn style_summary(mut self, summary: impl Into<String>) -> Self {
        self.style_summary = summary.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let background = Style::default().bg(Color::LightBlue).fg(Color::White);

        let left = if self.modified {
            format!(" {} [+]", self.path)
        } else {
            format!(" {}", self.path)
        };
        let middle = self.style_summary;
        let right = format!("{} ", self.hint);

        // widths in characters, not bytes, so non-ASCII paths line up
        let left_len = left.chars().count();
        let total = left_len + middle.chars().count() + right.chars().count();
        let width = area.width as usize;

        let mut spans = vec![Span::styled(left.clone(), background)];
        if total < width {
            let gap = width - total;
            let before_middle = gap / 2;
            spans.push(Span::styled(" ".repeat(before_middle), background));
            spans.push(Span::styled(
                middle,
                background.fg(Color::Rgb(230, 230, 230)),
            ));
            spans.push(Span::styled(" ".repeat(gap - before_middle), background));
            spans.push(Span::styled(right, background.fg(Color::Rgb(200, 200, 200))));
        } else {
            // Not enough room for everything; the path wins.
            spans.push(Span::styled(" ".repeat(width.saturating_sub(left_len)), background));
        }

        Paragraph::new(Line::from(spans))
            .style(background)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_all_segments() {
        let bar = StatusBar::new("notes.txt")
            .modified(true)
            .style_summary("font-family: Arial; font-size: 24px")
            .hint("^O Open");

        assert_eq!(bar.path, "notes.txt");
        assert!(bar.modified);
        assert_eq!(bar.style_summary, "font-family: Arial; font-size: 24px");
        assert_eq!(bar.hint, "^O Open");
    }
}
