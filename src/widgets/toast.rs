use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use std::time::{Duration, Instant};

/// Type of toast notification
#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

impl ToastType {
    fn color(&self) -> Color {
        match self {
            ToastType::Info => Color::Cyan,
            ToastType::Success => Color::Green,
            ToastType::Error => Color::Red,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "ℹ",
            ToastType::Success => "✓",
            ToastType::Error => "✗",
        }
    }
}

/// A single toast notification. Errors from file operations are surfaced
/// here; they are never swallowed and never crash the editor.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            message,
            toast_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Toast notification manager and renderer
pub struct ToastManager {
    toasts: Vec<Toast>,
    max_toasts: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            max_toasts: 5,
        }
    }

    pub fn add_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);

        while self.toasts.len() > self.max_toasts {
            self.toasts.remove(0);
        }
    }

    pub fn add_info(&mut self, message: String) {
        self.add_toast(Toast::new(message, ToastType::Info));
    }

    pub fn add_success(&mut self, message: String) {
        self.add_toast(Toast::new(message, ToastType::Success));
    }

    pub fn add_error(&mut self, message: String) {
        self.add_toast(Toast::new(message, ToastType::Error));
    }

    /// Drops expired toasts.
    pub fn update(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }

    pub fn has_active_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn render(&self, area: Rect, buf: &mut TuiBuffer) {
        if self.toasts.is_empty() {
            return;
        }

        let toast_width = 40.min(area.width / 2).max(20);
        let x = area.width.saturating_sub(toast_width + 2);

        for (i, toast) in self.toasts.iter().enumerate() {
            let y = 1 + i as u16 * 3;
            if y + 3 > area.height {
                break;
            }

            let toast_area = Rect {
                x,
                y,
                width: toast_width,
                height: 3,
            };
            self.render_single_toast(toast, toast_area, buf);
        }
    }

    fn render_single_toast(&self, toast: &Toast, area: Rect, buf: &mut TuiBuffer) {
        Clear.render(area, buf);

        let color = toast.toast_type.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Rgb(30, 30, 30)));

        let inner = block.inner(area);
        block.render(area, buf);

        let max_len = (inner.width as usize).saturating_sub(3);
        let message = if toast.message.chars().count() > max_len {
            let mut truncated: String = toast
                .message
                .chars()
                .take(max_len.saturating_sub(3))
                .collect();
            truncated.push_str("...");
            truncated
        } else {
            toast.message.clone()
        };

        let content = Line::from(vec![
            Span::styled(
                format!("{} ", toast.toast_type.icon()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(Color::White)),
        ]);

        Paragraph::new(content).render(inner, buf);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient widget wrapper for rendering toasts
pub struct ToastWidget<'a> {
    manager: &'a ToastManager,
}

impl<'a> ToastWidget<'a> {
    pub fn new(manager: &'a ToastManager) -> Self {
        Self { manager }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        self.manager.render(area, buf);
    }
}
