use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::storage::store::LogStore;
use crate::storage::workout_log::{Exercise, ExerciseSet, SavedWorkoutLog};
use crate::util::{is_numeric_or_empty, IdSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Reps,
    Weight,
}

/// The exercise being composed before it joins the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: vec![ExerciseSet::default()],
        }
    }
}

/// State of the "Track Workout" form.
///
/// Invalid edits are ignored rather than reported: every mutator returns
/// whether it took effect.
#[derive(Debug, Default)]
pub struct TrackerForm {
    pub workout_name: String,
    exercises: Vec<Exercise>,
    draft: ExerciseDraft,
    ids: IdSource,
}

impl TrackerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn draft(&self) -> &ExerciseDraft {
        &self.draft
    }

    #[cfg(test)]
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn draft_name_mut(&mut self) -> &mut String {
        &mut self.draft.name
    }

    /// Whether the save action should be offered at all.
    pub fn can_save(&self) -> bool {
        !self.workout_name.trim().is_empty() && !self.exercises.is_empty()
    }

    pub fn add_set(&mut self) {
        self.draft.sets.push(ExerciseSet::default());
    }

    /// Replace one field of one draft set. Non-numeric text and bad indexes are ignored.
    pub fn update_set(&mut self, index: usize, field: SetField, value: &str) -> bool {
        if !is_numeric_or_empty(value) {
            return false;
        }
        let Some(set) = self.draft.sets.get_mut(index) else {
            return false;
        };
        match field {
            SetField::Reps => set.reps = value.to_string(),
            SetField::Weight => set.weight = value.to_string(),
        }
        true
    }

    /// Drop a draft set. The last one always stays.
    pub fn remove_set(&mut self, index: usize) -> bool {
        if self.draft.sets.len() <= 1 || index >= self.draft.sets.len() {
            return false;
        }
        self.draft.sets.remove(index);
        true
    }

    /// Commit the draft to the exercise list and start a fresh one.
    pub fn add_exercise(&mut self) -> Option<u64> {
        if self.draft.name.trim().is_empty() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let id = self.ids.next_id();
        debug!(id, name = %draft.name, sets = draft.sets.len(), "exercise added");
        self.exercises.push(Exercise {
            id,
            name: draft.name,
            sets: draft.sets,
        });
        Some(id)
    }

    pub fn remove_exercise(&mut self, id: u64) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id != id);
        self.exercises.len() != before
    }

    /// Persist the workout and clear the form.
    ///
    /// Returns `Ok(None)` when the form isn't ready (blank name or no
    /// exercises). On a storage error the form is left untouched.
    pub fn save_workout(
        &mut self,
        store: &mut LogStore,
        now: DateTime<Utc>,
    ) -> Result<Option<SavedWorkoutLog>> {
        if !self.can_save() {
            return Ok(None);
        }
        let log = SavedWorkoutLog {
            id: self.ids.next_id(),
            name: self.workout_name.clone(),
            exercises: self.exercises.clone(),
            date: now,
        };
        store.append_log(&log)?;
        self.clear();
        Ok(Some(log))
    }

    fn clear(&mut self) {
        self.workout_name.clear();
        self.exercises.clear();
        self.draft = ExerciseDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_squat() -> TrackerForm {
        let mut form = TrackerForm::new();
        form.set_draft_name("Squat");
        form.update_set(0, SetField::Reps, "5");
        form.update_set(0, SetField::Weight, "100");
        form.add_exercise().unwrap();
        form
    }

    #[test]
    fn draft_starts_with_one_empty_set() {
        let form = TrackerForm::new();
        assert_eq!(form.draft().sets, vec![ExerciseSet::default()]);
        assert!(form.exercises().is_empty());
    }

    #[test]
    fn add_and_remove_sets() {
        let mut form = TrackerForm::new();
        form.set_draft_name("Squat");
        form.add_set();
        form.add_set();
        assert_eq!(form.draft().sets.len(), 3);
        assert!(form.remove_set(0));
        assert_eq!(form.draft().sets.len(), 2);
    }

    #[test]
    fn last_set_cannot_be_removed() {
        let mut form = TrackerForm::new();
        assert!(!form.remove_set(0));
        assert_eq!(form.draft().sets.len(), 1);
    }

    #[test]
    fn remove_set_out_of_range_is_ignored() {
        let mut form = TrackerForm::new();
        form.add_set();
        assert!(!form.remove_set(5));
        assert_eq!(form.draft().sets.len(), 2);
    }

    #[test]
    fn update_set_changes_one_field() {
        let mut form = TrackerForm::new();
        form.add_set();
        assert!(form.update_set(1, SetField::Weight, "62.5"));
        assert_eq!(form.draft().sets[1].weight, "62.5");
        assert_eq!(form.draft().sets[1].reps, "");
        assert_eq!(form.draft().sets[0], ExerciseSet::default());
    }

    #[test]
    fn update_set_ignores_bad_input() {
        let mut form = TrackerForm::new();
        assert!(!form.update_set(3, SetField::Reps, "5"));
        assert!(!form.update_set(0, SetField::Reps, "five"));
        assert_eq!(form.draft().sets[0].reps, "");
        // Clearing a field is allowed
        form.update_set(0, SetField::Reps, "8");
        assert!(form.update_set(0, SetField::Reps, ""));
        assert_eq!(form.draft().sets[0].reps, "");
    }

    #[test]
    fn add_exercise_requires_a_name() {
        let mut form = TrackerForm::new();
        assert!(form.add_exercise().is_none());
        form.set_draft_name("   ");
        assert!(form.add_exercise().is_none());
        assert!(form.exercises().is_empty());
    }

    #[test]
    fn add_exercise_commits_and_resets_draft() {
        let mut form = TrackerForm::new();
        form.set_draft_name("Squat");
        form.add_set();
        form.update_set(1, SetField::Reps, "8");
        let id = form.add_exercise().unwrap();

        assert_eq!(form.exercises().len(), 1);
        assert_eq!(form.exercises()[0].id, id);
        assert_eq!(form.exercises()[0].sets.len(), 2);
        assert_eq!(form.exercises()[0].sets[1].reps, "8");
        assert_eq!(*form.draft(), ExerciseDraft::default());
    }

    #[test]
    fn remove_exercise_by_id() {
        let mut form = form_with_squat();
        form.set_draft_name("Lunge");
        let lunge = form.add_exercise().unwrap();
        assert!(form.remove_exercise(lunge));
        assert!(!form.remove_exercise(lunge));
        assert_eq!(form.exercises().len(), 1);
        assert_eq!(form.exercises()[0].name, "Squat");
    }

    #[test]
    fn save_rejects_blank_name() {
        let mut store = LogStore::in_memory();
        let mut form = form_with_squat();
        assert!(form.save_workout(&mut store, Utc::now()).unwrap().is_none());
        assert!(store.load_logs().unwrap().is_empty());
        // Nothing was cleared
        assert_eq!(form.exercises().len(), 1);
    }

    #[test]
    fn save_rejects_whitespace_name() {
        let mut store = LogStore::in_memory();
        let mut form = form_with_squat();
        form.workout_name = "   ".into();
        assert!(form.save_workout(&mut store, Utc::now()).unwrap().is_none());
        assert!(store.load_logs().unwrap().is_empty());
    }

    #[test]
    fn update_set_accepts_partial_decimals() {
        let mut form = TrackerForm::new();
        assert!(form.update_set(0, SetField::Weight, "."));
        assert!(form.update_set(0, SetField::Weight, ".5"));
        assert_eq!(form.draft().sets[0].weight, ".5");
        assert!(!form.update_set(0, SetField::Weight, ".5."));
    }

    #[test]
    fn save_rejects_empty_exercise_list() {
        let mut store = LogStore::in_memory();
        let mut form = TrackerForm::new();
        form.workout_name = "Day1".into();
        assert!(form.save_workout(&mut store, Utc::now()).unwrap().is_none());
        assert!(store.load_logs().unwrap().is_empty());
    }

    #[test]
    fn save_appends_once_and_resets_form() {
        let mut store = LogStore::in_memory();
        let mut form = form_with_squat();
        form.workout_name = "Day1".into();
        form.set_draft_name("half-typed");

        let now = Utc::now();
        let saved = form.save_workout(&mut store, now).unwrap().unwrap();
        assert_eq!(saved.name, "Day1");
        assert_eq!(saved.date, now);
        assert_eq!(saved.exercises[0].sets[0].weight, "100");

        let logs = store.load_logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0], saved);

        assert!(form.workout_name.is_empty());
        assert!(form.exercises().is_empty());
        assert_eq!(*form.draft(), ExerciseDraft::default());
    }
}
