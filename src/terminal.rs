use std::io::{self, Write};

use crossterm::{
    cursor, event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};

/// Switch `out` to the alternate screen with mouse capture on.
pub fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, event::EnableMouseCapture)
}

/// Undo `enter_screen` and show the cursor again. Safe to call after a
/// partial setup.
pub fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        LeaveAlternateScreen,
        event::DisableMouseCapture,
        cursor::Show
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_restores_screen_and_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn entering_switches_to_alternate_screen() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\x1b[?1049h"));
    }
}
