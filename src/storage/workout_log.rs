use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One set of an exercise. Both fields hold what the user typed: a number or nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub reps: String,
    pub weight: String,
}

impl ExerciseSet {
    pub fn reps_value(&self) -> Option<f64> {
        self.reps.trim().parse().ok()
    }

    pub fn weight_value(&self) -> Option<f64> {
        self.weight.trim().parse().ok()
    }

    /// reps × weight, when both are filled in.
    pub fn volume(&self) -> Option<f64> {
        Some(self.reps_value()? * self.weight_value()?)
    }
}

/// A committed exercise with its sets in the order they were entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

/// A saved workout as it is stored under the `trackedWorkouts` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWorkoutLog {
    pub id: u64,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub date: DateTime<Utc>,
}

impl SavedWorkoutLog {
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Sum of reps × weight over every fully filled-in set.
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter_map(ExerciseSet::volume)
            .sum()
    }
}
