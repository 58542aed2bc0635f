use tracing::debug;

use crate::util::IdSource;

/// A named workout duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: u64,
    pub name: String,
    pub minutes: u32,
}

impl Workout {
    pub fn total_secs(&self) -> u32 {
        self.minutes.saturating_mul(60)
    }
}

/// Ordered, user-editable list of workouts with exactly one active entry.
///
/// The list is never empty and the active id always names a member.
#[derive(Debug)]
pub struct WorkoutCatalog {
    workouts: Vec<Workout>,
    active: u64,
    ids: IdSource,
}

impl WorkoutCatalog {
    /// Catalog holding a single starting workout with id 1.
    ///
    /// A blank name or zero minutes falls back to "Workout" / 1 minute so the
    /// invariants hold regardless of configuration.
    pub fn new(name: &str, minutes: u32) -> Self {
        let name = if name.trim().is_empty() { "Workout" } else { name };
        let first = Workout {
            id: 1,
            name: name.to_string(),
            minutes: minutes.max(1),
        };
        Self {
            active: first.id,
            workouts: vec![first],
            ids: IdSource::new(),
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn active(&self) -> &Workout {
        self.workouts
            .iter()
            .find(|w| w.id == self.active)
            .unwrap_or(&self.workouts[0])
    }

    pub fn active_id(&self) -> u64 {
        self.active
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.workouts.iter().position(|w| w.id == id)
    }

    /// Append a workout and make it active.
    ///
    /// Returns the new id, or None when the name is blank or minutes is zero.
    pub fn add(&mut self, name: &str, minutes: u32) -> Option<u64> {
        if name.trim().is_empty() || minutes == 0 {
            debug!(name, minutes, "rejected workout");
            return None;
        }
        let id = self.ids.next_id();
        self.workouts.push(Workout {
            id,
            name: name.to_string(),
            minutes,
        });
        self.active = id;
        debug!(id, name, minutes, "added workout");
        Some(id)
    }

    /// Delete a workout. The last remaining one cannot be removed.
    ///
    /// Returns true if the active workout changed as a result.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.workouts.len() <= 1 {
            return false;
        }
        let Some(index) = self.position(id) else {
            return false;
        };
        self.workouts.remove(index);
        debug!(id, "removed workout");

        if self.active == id {
            self.active = self.workouts[0].id;
            true
        } else {
            false
        }
    }

    /// Make `id` the active workout. Returns true if it is a member.
    ///
    /// Re-selecting the active workout still counts: it resets the timer the
    /// same way picking a different one does.
    pub fn select(&mut self, id: u64) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.active = id;
        true
    }
}

impl Default for WorkoutCatalog {
    fn default() -> Self {
        Self::new("Workout", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_active_workout() {
        let catalog = WorkoutCatalog::default();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.active().name, "Workout");
        assert_eq!(catalog.active().minutes, 1);
        assert_eq!(catalog.active_id(), 1);
    }

    #[test]
    fn invalid_defaults_are_repaired() {
        let catalog = WorkoutCatalog::new("  ", 0);
        assert_eq!(catalog.active().name, "Workout");
        assert_eq!(catalog.active().minutes, 1);
    }

    #[test]
    fn add_appends_and_activates() {
        let mut catalog = WorkoutCatalog::default();
        let id = catalog.add("Legs", 5).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.workouts()[1].name, "Legs");
        assert_eq!(catalog.active_id(), id);
        assert_eq!(catalog.active().total_secs(), 300);
    }

    #[test]
    fn add_rejects_blank_name_or_zero_minutes() {
        let mut catalog = WorkoutCatalog::default();
        assert!(catalog.add("", 5).is_none());
        assert!(catalog.add("   ", 5).is_none());
        assert!(catalog.add("Core", 0).is_none());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.active_id(), 1);
    }

    #[test]
    fn added_ids_are_unique() {
        let mut catalog = WorkoutCatalog::default();
        let a = catalog.add("A", 1).unwrap();
        let b = catalog.add("B", 1).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, 1);
    }

    #[test]
    fn cannot_remove_the_only_workout() {
        let mut catalog = WorkoutCatalog::default();
        assert!(!catalog.remove(1));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn removing_active_falls_back_to_first() {
        let mut catalog = WorkoutCatalog::default();
        let legs = catalog.add("Legs", 5).unwrap();
        catalog.add("Arms", 3).unwrap();
        catalog.select(legs);
        assert!(catalog.remove(legs));
        assert_eq!(catalog.active_id(), 1);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn removing_inactive_keeps_active() {
        let mut catalog = WorkoutCatalog::default();
        let legs = catalog.add("Legs", 5).unwrap();
        assert!(!catalog.remove(1));
        assert_eq!(catalog.active_id(), legs);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_ignored() {
        let mut catalog = WorkoutCatalog::default();
        catalog.add("Legs", 5);
        assert!(!catalog.remove(42));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn select_only_accepts_members() {
        let mut catalog = WorkoutCatalog::default();
        let legs = catalog.add("Legs", 5).unwrap();
        assert!(catalog.select(1));
        assert_eq!(catalog.active_id(), 1);
        assert!(!catalog.select(42));
        assert_eq!(catalog.active_id(), 1);
        assert!(catalog.select(legs));
    }
}
