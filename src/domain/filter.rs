use serde::Deserialize;

use crate::domain::library::LibraryWorkout;
use crate::domain::models::{Difficulty, Exercise, Workout};

pub const ALL_GROUPS: &str = "Todos os grupos";
pub const ALL_DIFFICULTIES: &str = "Todas as dificuldades";

/// Search parameters shared by every list page. Missing parameters mean
/// "no restriction".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub group: Option<String>,
    pub difficulty: Option<String>,
    pub mode: Option<String>,
}

fn normalized_query(q: Option<&str>) -> String {
    q.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

fn selection(value: Option<&str>, sentinel: &str) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != sentinel)
        .map(str::to_string)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    query: String,
    muscle_group: Option<String>,
}

impl ExerciseFilter {
    pub fn new(query: Option<&str>, muscle_group: Option<&str>) -> Self {
        Self {
            query: normalized_query(query),
            muscle_group: selection(muscle_group, ALL_GROUPS),
        }
    }

    pub fn from_search(search: &SearchQuery) -> Self {
        Self::new(search.q.as_deref(), search.group.as_deref())
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.muscle_group.is_some()
    }

    pub fn muscle_group(&self) -> Option<&str> {
        self.muscle_group.as_deref()
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        let matches_search = exercise.name.to_lowercase().contains(&self.query);
        let matches_group = self
            .muscle_group
            .as_ref()
            .is_none_or(|group| exercise.muscle_group == *group);
        matches_search && matches_group
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    query: String,
    difficulty: Option<Difficulty>,
}

impl WorkoutFilter {
    /// An unrecognised difficulty selection is treated as "all".
    pub fn new(query: Option<&str>, difficulty: Option<&str>) -> Self {
        Self {
            query: normalized_query(query),
            difficulty: selection(difficulty, ALL_DIFFICULTIES).and_then(|d| d.parse().ok()),
        }
    }

    pub fn from_search(search: &SearchQuery) -> Self {
        Self::new(search.q.as_deref(), search.difficulty.as_deref())
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.difficulty.is_some()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    fn matches_fields(&self, name: &str, difficulty: Difficulty) -> bool {
        name.to_lowercase().contains(&self.query)
            && self.difficulty.is_none_or(|wanted| wanted == difficulty)
    }

    pub fn matches(&self, workout: &Workout) -> bool {
        self.matches_fields(&workout.name, workout.difficulty)
    }

    pub fn matches_library(&self, workout: &LibraryWorkout) -> bool {
        self.matches_fields(workout.name, workout.difficulty)
    }
}

/// Search over the exercises offered on the create-workout page: the term
/// matches the name or the muscle group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableExerciseFilter {
    query: String,
}

impl AvailableExerciseFilter {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: normalized_query(query),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.name.to_lowercase().contains(&self.query)
            || exercise.muscle_group.to_lowercase().contains(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn exercise(name: &str, group: &str) -> Exercise {
        Exercise {
            id: name.to_string(),
            name: name.to_string(),
            muscle_group: group.to_string(),
            description: String::new(),
            instructions: String::new(),
            is_public: false,
            created_at: Utc::now(),
        }
    }

    fn workout(name: &str, difficulty: Difficulty) -> Workout {
        Workout {
            id: name.to_string(),
            name: name.to_string(),
            description: String::new(),
            difficulty,
            duration: 30,
            is_public: false,
            exercises: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_exercise_filter_is_case_insensitive_substring() {
        let filter = ExerciseFilter::new(Some("SUP"), None);
        assert!(filter.matches(&exercise("Supino reto", "Peito")));
        assert!(filter.matches(&exercise("Desenvolvimento supinado", "Ombros")));
        assert!(!filter.matches(&exercise("Agachamento", "Pernas")));
    }

    #[test]
    fn test_exercise_filter_combines_name_and_group() {
        let filter = ExerciseFilter::new(Some("supino"), Some("Peito"));
        assert!(filter.matches(&exercise("Supino", "Peito")));
        assert!(!filter.matches(&exercise("Supino", "Ombros")));
        assert!(!filter.matches(&exercise("Crucifixo", "Peito")));
    }

    #[test]
    fn test_exercise_filter_group_sentinel_means_all() {
        let filter = ExerciseFilter::new(None, Some(ALL_GROUPS));
        assert!(!filter.is_active());
        assert!(filter.matches(&exercise("Remada", "Costas")));
    }

    #[test]
    fn test_workout_filter_by_difficulty() {
        let filter = WorkoutFilter::new(Some(""), Some("Avançado"));
        assert!(filter.is_active());
        assert!(filter.matches(&workout("Pernas", Difficulty::Advanced)));
        assert!(!filter.matches(&workout("Pernas", Difficulty::Beginner)));

        let all = WorkoutFilter::new(None, Some(ALL_DIFFICULTIES));
        assert!(all.matches(&workout("Pernas", Difficulty::Beginner)));
    }

    #[test]
    fn test_available_filter_matches_name_or_group() {
        let filter = AvailableExerciseFilter::new(Some("pei"));
        assert!(filter.matches(&exercise("Supino", "Peito")));
        assert!(!filter.matches(&exercise("Remada", "Costas")));
    }
}
