// ============================================================================
// RENDERING - Header with Edit/Done, habit rows, month overview
// ============================================================================

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::calendar::{self, Cell, Fill, MonthGrid};
use crate::habit::Habit;

/// Fixed widget footprint in terminal cells.
pub const WIDGET_WIDTH: u16 = 44;
pub const WIDGET_HEIGHT: u16 = 22;

const ACCENT: (u8, u8, u8) = (52, 199, 89);
const NEUTRAL: (u8, u8, u8) = (255, 255, 255);
const EDIT_BTN_WIDTH: u16 = 8;

/// Center a fixed-size rect inside `area`, shrinking it if the terminal is smaller.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Terminal color for a calendar fill: the accent blended over white by its opacity.
pub fn fill_color(fill: Fill) -> Color {
    let opacity = match fill {
        Fill::Neutral => return Color::Rgb(NEUTRAL.0, NEUTRAL.1, NEUTRAL.2),
        Fill::Accent(opacity) => opacity.clamp(0.0, 1.0),
    };
    let mix = |base: u8, accent: u8| -> u8 {
        (base as f64 + (accent as f64 - base as f64) * opacity).round() as u8
    };
    Color::Rgb(
        mix(NEUTRAL.0, ACCENT.0),
        mix(NEUTRAL.1, ACCENT.1),
        mix(NEUTRAL.2, ACCENT.2),
    )
}

pub fn draw(frame: &mut ratatui::Frame, app: &mut App, today: NaiveDate) {
    let area = centered_rect(frame.size(), WIDGET_WIDTH, WIDGET_HEIGHT);
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let list_height = (app.habits.len() as u16).max(1) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(list_height),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

    draw_header(frame, app, chunks[0]);
    draw_habit_rows(frame, app, chunks[1]);
    draw_month_overview(frame, app, chunks[2], today);
    draw_key_hints(frame, app, chunks[3]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(EDIT_BTN_WIDTH)])
        .split(area);

    let title = Paragraph::new("Commit your habits!")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let btn_style = if app.edit_mode() {
        Style::default().bg(Color::Yellow).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let btn = Paragraph::new(app.edit_label())
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(btn_style);
    app.edit_btn = chunks[1];
    frame.render_widget(btn, chunks[1]);
}

/// Title text with a `|` caret at `cursor` (in chars).
fn title_with_cursor(title: &str, cursor: usize) -> String {
    let char_col = cursor.min(title.chars().count());
    let mut out = String::with_capacity(title.len() + 1);
    for (i, c) in title.chars().enumerate() {
        if i == char_col {
            out.push('|');
        }
        out.push(c);
    }
    if char_col == title.chars().count() {
        out.push('|');
    }
    out
}

fn habit_line(app: &App, habit: &Habit, selected: bool) -> Line<'static> {
    let indicator = if habit.completed {
        Span::styled("■", Style::default().fg(fill_color(Fill::Accent(1.0))))
    } else {
        Span::styled("□", Style::default().fg(Color::White))
    };

    let id = habit.id();
    let title = if app.is_editing(id) {
        let text = match app.title_cursor(id) {
            Some(cursor) => title_with_cursor(&habit.title, cursor),
            None => habit.title.clone(),
        };
        Span::styled(
            format!("[{text}]"),
            Style::default().fg(Color::Yellow).bg(Color::Rgb(30, 30, 40)),
        )
    } else {
        Span::raw(habit.title.clone())
    };

    let mut line = Line::from(vec![Span::raw(" "), indicator, Span::raw(" "), title]);
    if selected {
        line.style = Style::default().bg(Color::Blue).fg(Color::White);
    }
    line
}

fn draw_habit_rows(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    app.habit_items.clear();

    let block = Block::default().title("Habits").borders(Borders::ALL);
    let inner = block.inner(area);

    if app.habits.is_empty() {
        let empty = Paragraph::new("No habits.")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::with_capacity(app.habits.len());
    for (idx, habit) in app.habits.iter().enumerate() {
        lines.push(habit_line(app, habit, idx == app.selected()));
        if (idx as u16) < inner.height {
            let item_rect = Rect {
                x: inner.x,
                y: inner.y + idx as u16,
                width: inner.width,
                height: 1,
            };
            app.habit_items.push((idx, item_rect));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_month_overview(frame: &mut ratatui::Frame, app: &App, area: Rect, today: NaiveDate) {
    let grid = MonthGrid::for_date(today, app.week_start);
    let completed = app.habits.completed_count();
    let total = app.habits.len();

    let mut lines = Vec::with_capacity(grid.row_count() + 1);
    lines.push(Line::from(
        calendar::weekday_labels(app.week_start)
            .iter()
            .map(|label| Span::styled(format!(" {label} "), Style::default().fg(Color::Cyan)))
            .collect::<Vec<_>>(),
    ));

    for week in grid.rows() {
        let spans: Vec<Span> = week
            .iter()
            .map(|&cell| match cell {
                Cell::Blank => Span::raw("    "),
                Cell::Day(day) => {
                    let style = match calendar::day_fill(cell, today.day(), completed, total) {
                        Fill::Neutral => Style::default().fg(Color::White),
                        fill => Style::default().bg(fill_color(fill)).fg(Color::Black),
                    };
                    Span::styled(format!(" {day:2} "), style)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let title = today.format("%B %Y").to_string();
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn key_hint(app: &App) -> &'static str {
    if app.is_typing() {
        "Enter commit · ^E done · ↑/↓ move"
    } else {
        "e edit · space toggle · ↑/↓ move · q quit"
    }
}

fn draw_key_hints(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let hint = key_hint(app);
    let para = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray).italic());
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_accent_is_the_accent_color() {
        assert_eq!(fill_color(Fill::Accent(1.0)), Color::Rgb(52, 199, 89));
    }

    #[test]
    fn neutral_is_white() {
        assert_eq!(fill_color(Fill::Neutral), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn partial_opacity_blends_toward_white() {
        // 255 + (52 - 255) / 3 = 187.33, 255 + (199 - 255) / 3 = 236.33, 255 + (89 - 255) / 3 = 199.67
        assert_eq!(fill_color(Fill::Accent(1.0 / 3.0)), Color::Rgb(187, 236, 200));
    }

    #[test]
    fn caret_is_inserted_by_char_not_byte() {
        assert_eq!(title_with_cursor("习惯1", 3), "习惯1|");
        assert_eq!(title_with_cursor("习惯1", 1), "习|惯1");
        assert_eq!(title_with_cursor("", 0), "|");
    }

    #[test]
    fn typing_hint_names_the_way_out() {
        let mut app = App::new();
        assert!(key_hint(&app).contains("q quit"));
        app.apply(crate::app::Action::ToggleEditMode);
        assert!(key_hint(&app).contains("^E done"));
        assert!(key_hint(&app).chars().count() <= (WIDGET_WIDTH - 2) as usize);
    }

    #[test]
    fn small_terminals_shrink_the_widget() {
        let area = centered_rect(Rect::new(0, 0, 30, 10), WIDGET_WIDTH, WIDGET_HEIGHT);
        assert_eq!(area, Rect::new(0, 0, 30, 10));

        let area = centered_rect(Rect::new(0, 0, 100, 40), WIDGET_WIDTH, WIDGET_HEIGHT);
        assert_eq!(area, Rect::new(28, 9, 44, 22));
    }
}
