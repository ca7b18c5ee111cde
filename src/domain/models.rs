use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Muscle groups offered by the exercise form.
pub const MUSCLE_GROUPS: [&str; 9] = [
    "Peito", "Costas", "Pernas", "Ombros", "Bíceps", "Tríceps", "Abdômen", "Glúteos", "Cardio",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: String,
    pub description: String,
    pub instructions: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Iniciante")]
    Beginner,
    #[serde(rename = "Intermediário")]
    Intermediate,
    #[serde(rename = "Avançado")]
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Iniciante",
            Difficulty::Intermediate => "Intermediário",
            Difficulty::Advanced => "Avançado",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "iniciante",
            Difficulty::Intermediate => "intermediário",
            Difficulty::Advanced => "avançado",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {}", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Iniciante" | "Beginner" => Ok(Difficulty::Beginner),
            "Intermediário" | "Intermediate" => Ok(Difficulty::Intermediate),
            "Avançado" | "Advanced" => Ok(Difficulty::Advanced),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

/// Snapshot of an exercise as it was staged into a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub rest: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: u32,
    pub is_public: bool,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: DateTime<Utc>,
}

/// Exercise form submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: String,
    pub description: String,
    pub instructions: String,
    pub is_public: bool,
}

/// Workout form metadata. Difficulty and duration arrive as raw field values
/// and are validated by the workout service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewWorkout {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub duration: String,
    pub is_public: bool,
}

impl NewWorkout {
    /// Picks the metadata out of the workout form, which also carries the
    /// staged entry fields. `None` when the body did not come from that form.
    pub fn from_form(form: &HashMap<String, String>) -> Option<Self> {
        form.contains_key("name").then(|| {
            let field = |name: &str| form.get(name).cloned().unwrap_or_default();
            Self {
                name: field("name"),
                description: field("description"),
                difficulty: field("difficulty"),
                duration: field("duration"),
                is_public: form.get("is_public").is_some_and(|v| v == "true"),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub greeting_name: String,
    pub total_exercises: usize,
    pub total_workouts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub member_since: String,
    pub total_workouts: usize,
    pub total_exercises: usize,
    pub public_content: usize,
}
