//! Render smoke tests for the terminal widgets
//!
//! Each widget is drawn into a test backend to make sure it lays out
//! without panicking and puts its key content on screen.

use ratatui::{backend::TestBackend, layout::Rect, style::Style, Terminal};

use notepad::app::{App, Mode};
use notepad::text_area::TextArea;
use notepad::widgets::{
    ConfirmDialog, EditorWidget, ListPicker, PathPrompt, StatusBar, Toast, ToastManager,
    ToastType, ToastWidget,
};

fn buffer_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    let buffer = terminal.backend().buffer();
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push_str(buffer[(x, y)].symbol());
        }
        content.push('\n');
    }
    content.contains(needle)
}

#[test]
fn test_editor_widget_renders_lines() {
    let backend = TestBackend::new(40, 10);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut area = TextArea::new();
    area.set_text("first line\nsecond line");

    terminal
        .draw(|f| {
            let widget = EditorWidget::new(&area).text_style(Style::default());
            f.render_widget(widget, f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "first line"));
    assert!(buffer_contains(&terminal, "second line"));
}

#[test]
fn test_editor_widget_respects_scroll_offset() {
    let backend = TestBackend::new(40, 2);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut area = TextArea::new();
    area.set_text("aaa\nbbb\nccc\nddd");

    terminal
        .draw(|f| {
            let widget = EditorWidget::new(&area).scroll_offset((2, 0));
            f.render_widget(widget, f.area());
        })
        .unwrap();

    assert!(!buffer_contains(&terminal, "aaa"));
    assert!(buffer_contains(&terminal, "ccc"));
    assert!(buffer_contains(&terminal, "ddd"));
}

#[test]
fn test_path_prompt_renders_input_and_filter() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let prompt = PathPrompt::new("Open a file", "notes.txt");
            f.render_widget(prompt, f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "Open a file"));
    assert!(buffer_contains(&terminal, "notes.txt"));
    assert!(buffer_contains(&terminal, "Text file (.txt)"));
}

#[test]
fn test_confirm_dialog_renders_message_and_choices() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let dialog = ConfirmDialog::new("Confirm", "Are you sure you want to exit?");
            f.render_widget(dialog, f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "Are you sure you want to exit?"));
    assert!(buffer_contains(&terminal, "[Y]es"));
    assert!(buffer_contains(&terminal, "[C]ancel"));
}

#[test]
fn test_list_picker_renders_items() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let picker = ListPicker::new("Font")
                .items(vec!["Arial", "Times New Roman"])
                .selected(1);
            f.render_widget(picker, f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "Font"));
    assert!(buffer_contains(&terminal, "Arial"));
    assert!(buffer_contains(&terminal, "Times New Roman"));
}

#[test]
fn test_toast_widget_renders_message() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut manager = ToastManager::new();
    manager.add_toast(Toast::new("Saved doc.txt".to_string(), ToastType::Success));

    terminal
        .draw(|f| {
            f.render_widget(ToastWidget::new(&manager), f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "Saved doc.txt"));
}

#[test]
fn test_toast_manager_caps_and_expires() {
    let mut manager = ToastManager::new();
    for i in 0..8 {
        manager.add_info(format!("toast {}", i));
    }
    assert!(manager.has_active_toasts());

    // nothing is older than its duration yet
    manager.update();
    assert!(manager.has_active_toasts());
}

#[test]
fn test_status_bar_renders_path_and_dirty_marker() {
    let backend = TestBackend::new(80, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let bar = StatusBar::new("notes.txt")
                .modified(true)
                .style_summary("font-family: Arial; font-size: 24px")
                .hint("^Q Quit");
            f.render_widget(bar, f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "notes.txt [+]"));
    assert!(buffer_contains(&terminal, "font-size: 24px"));
    assert!(buffer_contains(&terminal, "^Q Quit"));
}

#[test]
fn test_editor_widget_scrolls_past_multibyte() {
    let backend = TestBackend::new(40, 2);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut area = TextArea::new();
    area.set_text("ééabc");

    terminal
        .draw(|f| {
            let widget = EditorWidget::new(&area).scroll_offset((0, 2));
            f.render_widget(widget, f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "abc"));
    assert!(!buffer_contains(&terminal, "é"));
}

#[test]
fn test_toast_truncates_long_multibyte_message() {
    let backend = TestBackend::new(50, 10);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut manager = ToastManager::new();
    manager.add_error(format!("cannot access '{}'", "é".repeat(60)));

    terminal
        .draw(|f| {
            f.render_widget(ToastWidget::new(&manager), f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "..."));
}

#[test]
fn test_path_prompt_cursor_counts_chars() {
    let area = Rect::new(0, 0, 80, 24);

    let plain = PathPrompt::new("Open a file", "hello");
    let accented = PathPrompt::new("Open a file", "héllo");

    // same character count, same cursor column
    assert_eq!(plain.cursor_position(area), accented.cursor_position(area));
}

#[test]
fn test_status_bar_lays_out_multibyte_path() {
    let backend = TestBackend::new(80, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let bar = StatusBar::new("café.txt")
                .modified(true)
                .style_summary("font-family: Arial; font-size: 24px")
                .hint("^Q Quit");
            f.render_widget(bar, f.area());
        })
        .unwrap();

    assert!(buffer_contains(&terminal, "café.txt [+]"));
    assert!(buffer_contains(&terminal, "^Q Quit"));
}

#[test]
fn test_full_app_render() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut app = App::new();
    app.pane.area.set_text("hello world");

    terminal.draw(|f| app.render(f)).unwrap();

    assert!(buffer_contains(&terminal, "hello world"));
    assert!(buffer_contains(&terminal, "untitled"));
}

#[test]
fn test_full_app_render_with_modal() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut app = App::new();
    app.mode = Mode::ConfirmExit;

    terminal.draw(|f| app.render(f)).unwrap();

    assert!(buffer_contains(&terminal, "Are you sure you want to exit?"));
}

#[test]
fn test_full_app_render_tiny_terminal() {
    let backend = TestBackend::new(10, 2);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut app = App::new();
    app.pane.area.set_text("does not fit on a tiny screen");

    // must not panic at degenerate sizes
    terminal.draw(|f| app.render(f)).unwrap();
}
