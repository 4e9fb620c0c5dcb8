// ============================================================================
// HABITS - Domain records and the in-memory store
// ============================================================================

use std::fmt;

use uuid::Uuid;

/// Titles of the habits every fresh session starts with.
pub const SEED_TITLES: [&str; 3] = ["习惯1", "习惯2", "习惯3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HabitId(Uuid);

impl HabitId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Habit {
    id: HabitId,
    pub title: String,
    pub completed: bool,
}

impl Habit {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: HabitId::new(),
            title: title.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> HabitId {
        self.id
    }
}

/// Ordered habit list. Display order is creation order.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn seeded() -> Self {
        Self::from_titles(SEED_TITLES)
    }

    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            habits: titles.into_iter().map(Habit::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter()
    }

    pub fn ids(&self) -> Vec<HabitId> {
        self.habits.iter().map(Habit::id).collect()
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn get_mut(&mut self, id: HabitId) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    pub fn position(&self, id: HabitId) -> Option<usize> {
        self.habits.iter().position(|h| h.id == id)
    }

    pub fn id_at(&self, idx: usize) -> Option<HabitId> {
        self.habits.get(idx).map(Habit::id)
    }

    /// Replace a title verbatim. Empty titles are allowed.
    pub fn set_title(&mut self, id: HabitId, title: impl Into<String>) {
        if let Some(habit) = self.get_mut(id) {
            habit.title = title.into();
        }
    }

    pub fn toggle_completed(&mut self, id: HabitId) {
        if let Some(habit) = self.get_mut(id) {
            habit.completed = !habit.completed;
        }
    }

    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|h| h.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_three_incomplete_habits_in_order() {
        let store = HabitStore::seeded();
        let titles: Vec<&str> = store.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["习惯1", "习惯2", "习惯3"]);
        assert!(store.iter().all(|h| !h.completed));
    }

    #[test]
    fn ids_are_unique() {
        let store = HabitStore::from_titles(["a", "b", "c", "d"]);
        let mut ids = store.ids();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn toggle_completed_touches_only_that_habit() {
        let mut store = HabitStore::seeded();
        let id = store.id_at(1).unwrap();
        store.toggle_completed(id);

        let flags: Vec<bool> = store.iter().map(|h| h.completed).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(store.get(id).unwrap().title, "习惯2");
        assert_eq!(store.completed_count(), 1);

        store.toggle_completed(id);
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn set_title_accepts_empty_text() {
        let mut store = HabitStore::seeded();
        let id = store.id_at(0).unwrap();
        store.set_title(id, "");
        assert_eq!(store.get(id).unwrap().title, "");
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut store = HabitStore::seeded();
        let stranger = Habit::new("elsewhere").id();
        store.toggle_completed(stranger);
        store.set_title(stranger, "changed");
        assert_eq!(store.completed_count(), 0);
        assert!(store.iter().all(|h| h.title != "changed"));
    }
}
