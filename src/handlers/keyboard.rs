use std::path::PathBuf;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::style::{COLOR_PALETTE, FONT_FAMILIES, FONT_SIZES};
use crate::text_area::CursorMovement;
use crate::view::{ExitDecision, ResolvedDialogs};

/// Routes a key event to the handler for the current mode.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.mode {
        Mode::Edit => handle_edit_key(app, key),
        Mode::OpenPrompt | Mode::SaveAsPrompt => handle_prompt_key(app, key),
        Mode::ConfirmExit => handle_confirm_exit_key(app, key),
        Mode::FontPicker | Mode::SizePicker | Mode::ColorPicker => handle_picker_key(app, key),
    }
}

/// Keyboard input in normal editing mode.
fn handle_edit_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        // File operations
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            app.mode = Mode::OpenPrompt;
            app.prompt_input.clear();
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            handle_save(app);
        }
        (KeyCode::Char('s'), KeyModifiers::ALT) => {
            app.mode = Mode::SaveAsPrompt;
            app.prompt_input.clear();
        }
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            app.mode = Mode::ConfirmExit;
        }

        // Style toggles reflect the control's new state into the descriptor
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
            let active = !app.session.style().bold;
            app.session.set_bold(active, &mut app.pane);
        }
        (KeyCode::Char('i'), KeyModifiers::ALT) => {
            let active = !app.session.style().italic;
            app.session.set_italic(active, &mut app.pane);
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let active = !app.session.style().underline;
            app.session.set_underline(active, &mut app.pane);
        }

        // Style menus
        (KeyCode::Char('f'), KeyModifiers::ALT) => {
            app.mode = Mode::FontPicker;
            app.picker_index = FONT_FAMILIES
                .iter()
                .position(|f| *f == app.session.style().font_family)
                .unwrap_or(0);
        }
        (KeyCode::Char('z'), KeyModifiers::ALT) => {
            app.mode = Mode::SizePicker;
            app.picker_index = FONT_SIZES
                .iter()
                .position(|s| *s == app.session.style().font_size_px)
                .unwrap_or(0);
        }
        (KeyCode::Char('c'), KeyModifiers::ALT) => {
            app.mode = Mode::ColorPicker;
            app.picker_index = 0;
        }

        // Movement
        (KeyCode::Up, _) => app.pane.area.move_cursor(CursorMovement::Up),
        (KeyCode::Down, _) => app.pane.area.move_cursor(CursorMovement::Down),
        (KeyCode::Left, _) => app.pane.area.move_cursor(CursorMovement::Left),
        (KeyCode::Right, _) => app.pane.area.move_cursor(CursorMovement::Right),
        (KeyCode::Home, _) => app.pane.area.move_cursor(CursorMovement::LineStart),
        (KeyCode::End, _) => app.pane.area.move_cursor(CursorMovement::LineEnd),
        (KeyCode::PageUp, _) => app.pane.area.move_cursor(CursorMovement::PageUp),
        (KeyCode::PageDown, _) => app.pane.area.move_cursor(CursorMovement::PageDown),

        // Text input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            app.pane.area.insert_char(c);
        }
        (KeyCode::Tab, KeyModifiers::NONE) => {
            for _ in 0..4 {
                app.pane.area.insert_char(' ');
            }
        }
        (KeyCode::Enter, KeyModifiers::NONE) => app.pane.area.insert_newline(),
        (KeyCode::Backspace, _) => app.pane.area.backspace(),
        (KeyCode::Delete, _) => app.pane.area.delete(),

        _ => {}
    }

    Ok(())
}

/// Keyboard input while a path prompt is collecting a file name.
fn handle_prompt_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Enter => submit_prompt(app),
        KeyCode::Backspace => {
            app.prompt_input.pop();
        }
        KeyCode::Char(c) => app.prompt_input.push(c),
        _ => {}
    }

    Ok(())
}

/// Resolves the pending prompt into a dialog answer and runs the
/// corresponding session operation.
fn submit_prompt(app: &mut App) {
    let input = app.prompt_input.trim().to_string();
    let which = app.mode;
    app.close_modal();

    // An empty submission counts as dismissing the dialog.
    let chosen = if input.is_empty() {
        None
    } else {
        Some(PathBuf::from(input))
    };

    match which {
        Mode::OpenPrompt => {
            let mut dialogs = match chosen {
                Some(path) => ResolvedDialogs::with_open_path(path),
                None => ResolvedDialogs::cancelled(),
            };
            match app.session.on_open(&mut app.pane, &mut dialogs) {
                Ok(()) => {
                    app.scroll_offset = (0, 0);
                    app.toast_manager
                        .add_success(format!("Opened {}", app.pane.displayed_path));
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => app.toast_manager.add_error(e.to_string()),
            }
        }
        Mode::SaveAsPrompt => {
            let mut dialogs = match chosen {
                Some(path) => ResolvedDialogs::with_save_path(path),
                None => ResolvedDialogs::cancelled(),
            };
            match app.session.on_save_as(&mut app.pane, &mut dialogs) {
                Ok(()) => {
                    app.pane.area.modified = false;
                    app.toast_manager
                        .add_success(format!("Saved {}", app.pane.displayed_path));
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => app.toast_manager.add_error(e.to_string()),
            }
        }
        _ => {}
    }
}

/// Saves in place. A silent no-op while no file is bound.
fn handle_save(app: &mut App) {
    let was_bound = app.session.is_bound();
    match app.session.on_save(&app.pane) {
        Ok(()) => {
            if was_bound {
                app.pane.area.modified = false;
                app.toast_manager
                    .add_success(format!("Saved {}", app.pane.displayed_path));
            }
        }
        Err(e) => app.toast_manager.add_error(e.to_string()),
    }
}

/// Keyboard input in the exit confirmation dialog.
fn handle_confirm_exit_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let confirmed = match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('c') => false,
        _ => return Ok(()),
    };

    let mut dialogs = ResolvedDialogs::with_exit_confirmed(confirmed);
    match app.session.on_exit(&mut dialogs) {
        ExitDecision::Exit => app.running = false,
        ExitDecision::Stay => app.close_modal(),
    }

    Ok(())
}

/// Keyboard input in the font, size and color menus.
fn handle_picker_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let len = match app.mode {
        Mode::FontPicker => FONT_FAMILIES.len(),
        Mode::SizePicker => FONT_SIZES.len(),
        Mode::ColorPicker => COLOR_PALETTE.len(),
        _ => return Ok(()),
    };

    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Up => {
            app.picker_index = app.picker_index.saturating_sub(1);
        }
        KeyCode::Down => {
            app.picker_index = (app.picker_index + 1).min(len - 1);
        }
        KeyCode::Enter => {
            let index = app.picker_index;
            let which = app.mode;
            app.close_modal();

            match which {
                Mode::FontPicker => {
                    app.session
                        .on_font_family_change(FONT_FAMILIES[index], &mut app.pane);
                }
                Mode::SizePicker => {
                    app.session
                        .on_font_size_change(FONT_SIZES[index], &mut app.pane);
                }
                Mode::ColorPicker => {
                    let (_, r, g, b) = COLOR_PALETTE[index];
                    app.session.on_color_change(r, g, b, &mut app.pane);
                }
                _ => {}
            }
        }
        _ => {}
    }

    Ok(())
}
