use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Centers a `width` x `height` box inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::White)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Black))
}

/// Modal that collects a file path, standing in for the platform file
/// chooser. Shows the extension filter the chooser would offer.
pub struct PathPrompt<'a> {
    title: &'a str,
    input: &'a str,
}

impl<'a> PathPrompt<'a> {
    pub fn new(title: &'a str, input: &'a str) -> Self {
        Self { title, input }
    }

    /// Column of the input cursor, relative to the screen area. The
    /// input length is counted in characters, not bytes.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let modal_area = centered_rect(60, 6, area);
        let inner = Block::default().borders(Borders::ALL).inner(modal_area);
        (inner.x + 2 + self.input.chars().count() as u16, inner.y)
    }
}

impl Widget for PathPrompt<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let modal_area = centered_rect(60, 6, area);
        Clear.render(modal_area, buf);

        let block = modal_block(self.title);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "> ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(self.input, Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Text file (.txt) | All files (*.*)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Enter: confirm   Esc: cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Yes/cancel confirmation dialog.
pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let width = (self.message.len() as u16 + 6).clamp(30, area.width);
        let modal_area = centered_rect(width, 5, area);
        Clear.render(modal_area, buf);

        let block = modal_block(self.title);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let lines = vec![
            Line::from(Span::styled(
                self.message,
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[Y]es",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    "[C]ancel",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Selection menu for the font family, font size and color controls.
pub struct ListPicker<'a> {
    title: &'a str,
    items: Vec<&'a str>,
    selected: usize,
}

impl<'a> ListPicker<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            items: Vec::new(),
            selected: 0,
        }
    }

    pub fn items(mut self, items: Vec<&'a str>) -> Self {
        self.items = items;
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected.min(self.items.len().saturating_sub(1));
        self
    }
}

impl Widget for ListPicker<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let height = (self.items.len() as u16 + 2).min(area.height);
        let width = 30.min(area.width);
        let modal_area = centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = modal_block(self.title);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("  {} ", item),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {} ", item),
                        Style::default().fg(Color::LightBlue),
                    ))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
