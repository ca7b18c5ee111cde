use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{Exercise, Workout};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub member_since: String,
}

/// A registered user together with the content they own.
///
/// This is the only persisted shape of a user: the session and the
/// "my exercises" / "my workouts" views are all read from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

impl UserRecord {
    pub fn new(user: User) -> Self {
        Self {
            user,
            exercises: Vec::new(),
            workouts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Formats the "member since" label in pt-BR long form, e.g. `outubro de 2026`.
pub fn member_since_label(at: DateTime<Utc>) -> String {
    let month = MONTHS_PT_BR[at.month0() as usize];
    format!("{} de {}", month, at.year())
}
