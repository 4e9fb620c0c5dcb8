// ============================================================================
// MONTH OVERVIEW - Calendar grid layout and the today-cell coloring rule
// ============================================================================

use chrono::{Datelike, NaiveDate, Weekday};

pub const DAYS_PER_WEEK: usize = 7;

/// Number of days in the given month, `None` for an invalid year/month pair.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    Some((next_month - first_day).num_days() as u32)
}

/// How many blank cells precede day 1 when weeks begin on `week_start`.
pub fn first_weekday_offset(first_day: NaiveDate, week_start: Weekday) -> usize {
    let first = first_day.weekday().num_days_from_monday() as i64;
    let start = week_start.num_days_from_monday() as i64;
    (first - start).rem_euclid(DAYS_PER_WEEK as i64) as usize
}

/// Weekday labels in display order starting at `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; DAYS_PER_WEEK] {
    const LABELS: [&str; DAYS_PER_WEEK] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
    let start = week_start.num_days_from_monday() as usize;
    std::array::from_fn(|i| LABELS[(start + i) % DAYS_PER_WEEK])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Neutral,
    /// Accent color drawn at the given opacity, in `(0, 1]`.
    Accent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    days: u32,
    offset: usize,
}

impl MonthGrid {
    pub fn new(days: u32, offset: usize) -> Self {
        Self {
            days,
            offset: offset % DAYS_PER_WEEK,
        }
    }

    /// Grid for the month containing `date`.
    pub fn for_date(date: NaiveDate, week_start: Weekday) -> Self {
        let first_day = date.with_day(1).unwrap_or(date);
        let days = days_in_month(date.year(), date.month()).unwrap_or(31);
        Self::new(days, first_weekday_offset(first_day, week_start))
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn row_count(&self) -> usize {
        (self.days as usize + self.offset).div_ceil(DAYS_PER_WEEK)
    }

    /// Cell at a flat grid index. Indexes before the offset or past the last
    /// day are blank.
    pub fn cell(&self, index: usize) -> Cell {
        if index < self.offset {
            return Cell::Blank;
        }
        let day = (index - self.offset + 1) as u32;
        if day > self.days { Cell::Blank } else { Cell::Day(day) }
    }

    pub fn rows(&self) -> Vec<[Cell; DAYS_PER_WEEK]> {
        (0..self.row_count())
            .map(|week| std::array::from_fn(|dow| self.cell(week * DAYS_PER_WEEK + dow)))
            .collect()
    }
}

/// Completed share of all habits, `None` when there are no habits.
pub fn completion_ratio(completed: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(completed.min(total) as f64 / total as f64)
}

/// Only today's cell is colored, and only when something is completed.
pub fn day_fill(cell: Cell, today: u32, completed: usize, total: usize) -> Fill {
    match cell {
        Cell::Day(day) if day == today => match completion_ratio(completed, total) {
            Some(ratio) if ratio > 0.0 => Fill::Accent(ratio),
            _ => Fill::Neutral,
        },
        _ => Fill::Neutral,
    }
}
