use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::models::{Exercise, NewWorkout, WorkoutExercise};

pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: u32 = 10;
pub const DEFAULT_WEIGHT: f64 = 0.0;
pub const DEFAULT_REST: u32 = 60;

/// An exercise staged into the workout being composed.
///
/// The per-entry fields keep the raw text typed into the form so that a
/// re-render shows exactly what was entered; they are parsed when the
/// workout is created.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedExercise {
    pub exercise_id: String,
    pub name: String,
    pub muscle_group: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub rest: String,
}

impl StagedExercise {
    fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            muscle_group: exercise.muscle_group.clone(),
            sets: DEFAULT_SETS.to_string(),
            reps: DEFAULT_REPS.to_string(),
            weight: DEFAULT_WEIGHT.to_string(),
            rest: DEFAULT_REST.to_string(),
        }
    }

    pub fn field_name(field: &str, exercise_id: &str) -> String {
        format!("{field}_{exercise_id}")
    }

    fn snapshot(&self) -> Result<WorkoutExercise, DomainError> {
        let invalid = || DomainError::validation(format!("Valores inválidos para {}", self.name));
        Ok(WorkoutExercise {
            id: self.exercise_id.clone(),
            name: self.name.clone(),
            sets: parse_or_default(&self.sets, DEFAULT_SETS).ok_or_else(invalid)?,
            reps: parse_or_default(&self.reps, DEFAULT_REPS).ok_or_else(invalid)?,
            weight: parse_or_default(&self.weight, DEFAULT_WEIGHT)
                .filter(|w| w.is_finite() && *w >= 0.0)
                .ok_or_else(invalid)?,
            rest: parse_or_default(&self.rest, DEFAULT_REST).ok_or_else(invalid)?,
        })
    }
}

/// Blank means "use the default"; anything else must parse.
fn parse_or_default<T: FromStr>(raw: &str, default: T) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        Some(default)
    } else {
        raw.parse().ok()
    }
}

/// The workout being composed: the metadata typed so far and the staged
/// exercises.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutDraft {
    meta: NewWorkout,
    entries: Vec<StagedExercise>,
}

impl WorkoutDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta(&self) -> &NewWorkout {
        &self.meta
    }

    pub fn entries(&self) -> &[StagedExercise] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, exercise_id: &str) -> bool {
        self.entries.iter().any(|e| e.exercise_id == exercise_id)
    }

    pub fn stage(&mut self, exercise: &Exercise) -> Result<(), DomainError> {
        if self.contains(&exercise.id) {
            return Err(DomainError::validation("Exercício já adicionado ao treino"));
        }
        self.entries.push(StagedExercise::from_exercise(exercise));
        Ok(())
    }

    pub fn unstage(&mut self, exercise_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.exercise_id != exercise_id);
        self.entries.len() != before
    }

    /// Copies `sets_<id>`, `reps_<id>`, `weight_<id>` and `rest_<id>` form
    /// values onto the matching entries. Absent keys leave a field untouched.
    /// The metadata is replaced whenever the body carries the workout form.
    pub fn apply_form_values(&mut self, form: &HashMap<String, String>) {
        if let Some(meta) = NewWorkout::from_form(form) {
            self.meta = meta;
        }
        for entry in &mut self.entries {
            let id = entry.exercise_id.clone();
            for (field, slot) in [
                ("sets", &mut entry.sets),
                ("reps", &mut entry.reps),
                ("weight", &mut entry.weight),
                ("rest", &mut entry.rest),
            ] {
                if let Some(value) = form.get(&StagedExercise::field_name(field, &id)) {
                    *slot = value.clone();
                }
            }
        }
    }

    /// Parses every entry into a workout snapshot, in staging order.
    pub fn snapshot(&self) -> Result<Vec<WorkoutExercise>, DomainError> {
        self.entries.iter().map(StagedExercise::snapshot).collect()
    }

    pub fn clear(&mut self) {
        self.meta = NewWorkout::default();
        self.entries.clear();
    }
}
