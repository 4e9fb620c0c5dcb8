// ============================================================================
// EVENT HANDLING - Keyboard and mouse events translated into actions
// ============================================================================

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tui_textarea::{Input, Key};

use crate::app::{Action, App};

/// Returns `true` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return true;
    }
    if ctrl && key.code == KeyCode::Char('e') {
        app.apply(Action::ToggleEditMode);
        return false;
    }

    match key.code {
        KeyCode::Up => {
            app.apply(Action::SelectPrev);
            return false;
        }
        KeyCode::Down => {
            app.apply(Action::SelectNext);
            return false;
        }
        _ => {}
    }

    if app.is_typing() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => activate_selected(app),
            _ => app.type_into_title(key_to_input(key)),
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('e') => app.apply(Action::ToggleEditMode),
        KeyCode::Char('j') => app.apply(Action::SelectNext),
        KeyCode::Char('k') => app.apply(Action::SelectPrev),
        KeyCode::Char(' ') | KeyCode::Enter => activate_selected(app),
        _ => {}
    }
    false
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if inside_rect(mouse, app.edit_btn) {
                app.apply(Action::ToggleEditMode);
                return;
            }
            if let Some(idx) = find_clicked_item(mouse, &app.habit_items) {
                app.apply(Action::Select(idx));
                activate_selected(app);
            }
        }
        MouseEventKind::ScrollDown => app.apply(Action::SelectNext),
        MouseEventKind::ScrollUp => app.apply(Action::SelectPrev),
        _ => {}
    }
}

fn activate_selected(app: &mut App) {
    if let Some(id) = app.selected_id() {
        app.apply(Action::Activate(id));
    }
}

fn key_to_input(key: KeyEvent) -> Input {
    Input {
        key: match key.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Null,
        },
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
    }
}

fn inside_rect(mouse: MouseEvent, rect: Rect) -> bool {
    mouse.row >= rect.y
        && mouse.row < rect.y + rect.height
        && mouse.column >= rect.x
        && mouse.column < rect.x + rect.width
}

fn find_clicked_item(mouse: MouseEvent, items: &[(usize, Rect)]) -> Option<usize> {
    items
        .iter()
        .find(|(_, rect)| inside_rect(mouse, *rect))
        .map(|(idx, _)| *idx)
}
