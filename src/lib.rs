//! Terminal habit tracker: a fixed-size panel of habits that can be ticked off
//! and renamed in place, above a month grid whose today cell glows with the
//! share of habits completed.

pub mod app;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod habit;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use app::{Action, App};
pub use config::Config;
pub use habit::{Habit, HabitId, HabitStore};
