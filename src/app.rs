// ============================================================================
// APPLICATION STATE - Habit store, edit mode, selection, mutation entry point
// ============================================================================

use std::collections::HashSet;

use chrono::Weekday;
use ratatui::layout::Rect;
use tracing::debug;
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::habit::{HabitId, HabitStore};

/// Everything a user gesture can do to the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip the global Edit/Done switch and push it to every habit.
    ToggleEditMode,
    /// Row activation: leave edit mode if editing, otherwise toggle completion.
    Activate(HabitId),
    SetTitle(HabitId, String),
    Select(usize),
    SelectNext,
    SelectPrev,
}

/// Single-line title buffer for the habit under the cursor while it is in edit mode.
struct TitleInput {
    id: HabitId,
    textarea: TextArea<'static>,
}

pub struct App {
    pub habits: HabitStore,
    pub week_start: Weekday,
    edit_mode: bool,
    editing: HashSet<HabitId>,
    selected: usize,
    title_input: Option<TitleInput>,

    // UI areas for mouse support, refreshed on every draw
    pub habit_items: Vec<(usize, Rect)>,
    pub edit_btn: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_habits(HabitStore::seeded())
    }

    pub fn with_habits(habits: HabitStore) -> Self {
        Self {
            habits,
            week_start: Weekday::Mon,
            edit_mode: false,
            editing: HashSet::new(),
            selected: 0,
            title_input: None,
            habit_items: Vec::new(),
            edit_btn: Rect::default(),
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn edit_label(&self) -> &'static str {
        if self.edit_mode { "Done" } else { "Edit" }
    }

    pub fn is_editing(&self, id: HabitId) -> bool {
        self.editing.contains(&id)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<HabitId> {
        self.habits.id_at(self.selected)
    }

    /// True when keystrokes should go to the title under the cursor.
    pub fn is_typing(&self) -> bool {
        self.selected_id().is_some_and(|id| self.is_editing(id))
    }

    /// Cursor column (in chars) of the title being typed into, if `id` owns it.
    pub fn title_cursor(&self, id: HabitId) -> Option<usize> {
        self.title_input
            .as_ref()
            .filter(|input| input.id == id)
            .map(|input| input.textarea.cursor().1)
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, "apply");
        match action {
            Action::ToggleEditMode => {
                self.edit_mode = !self.edit_mode;
                self.editing.clear();
                if self.edit_mode {
                    self.editing.extend(self.habits.ids());
                }
            }
            Action::Activate(id) => {
                if self.editing.remove(&id) {
                    debug!(%id, "title committed");
                } else {
                    self.habits.toggle_completed(id);
                }
            }
            Action::SetTitle(id, title) => {
                // Buffer follows renames that did not come from it.
                let stale = self.title_input.as_ref().is_some_and(|input| {
                    input.id == id && input.textarea.lines().join("") != title
                });
                if stale {
                    self.title_input = None;
                }
                self.habits.set_title(id, title);
            }
            Action::Select(idx) => {
                if idx < self.habits.len() {
                    self.selected = idx;
                }
            }
            Action::SelectNext => {
                if self.selected + 1 < self.habits.len() {
                    self.selected += 1;
                }
            }
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
        }
        self.sync_title_input();
    }

    /// Feed one key into the title under the cursor and write the result
    /// straight back into the habit.
    pub fn type_into_title(&mut self, input: Input) {
        if is_line_break(&input) {
            return;
        }
        let Some(title_input) = self.title_input.as_mut() else {
            return;
        };
        title_input.textarea.input(input);
        if title_input.textarea.lines().len() > 1 {
            let text = title_input.textarea.lines().join("");
            title_input.textarea = TextArea::new(vec![text]);
            title_input.textarea.move_cursor(CursorMove::End);
        }
        let id = title_input.id;
        let title = title_input.textarea.lines().join("");
        self.apply(Action::SetTitle(id, title));
    }

    // Keep the title buffer attached to the cursor row while it is editing.
    fn sync_title_input(&mut self) {
        let target = self.selected_id().filter(|id| self.editing.contains(id));
        if target.is_some() && target == self.title_input.as_ref().map(|input| input.id) {
            return;
        }
        self.title_input = target.map(|id| {
            let title = self
                .habits
                .get(id)
                .map(|h| h.title.clone())
                .unwrap_or_default();
            let mut textarea = TextArea::new(vec![title]);
            textarea.move_cursor(CursorMove::End);
            TitleInput { id, textarea }
        });
    }
}

/// Titles are single-line; newline keys never reach the buffer.
fn is_line_break(input: &Input) -> bool {
    match input.key {
        Key::Enter | Key::Char('\n') | Key::Char('\r') => true,
        Key::Char('m') | Key::Char('j') => input.ctrl,
        _ => false,
    }
}
