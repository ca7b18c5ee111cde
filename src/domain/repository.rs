use crate::domain::models::{Exercise, Workout};
use crate::domain::user::User;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user or replaces the profile of an existing one; owned
    /// content is kept.
    async fn save_user(&self, user: User) -> Result<()>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
}

/// Exercises and workouts, always scoped to their owner.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_exercises(&self, owner_id: &str) -> Result<Vec<Exercise>>;
    async fn add_exercise(&self, owner_id: &str, exercise: Exercise) -> Result<()>;
    /// Returns `false` when no exercise with that id exists.
    async fn remove_exercise(&self, owner_id: &str, exercise_id: &str) -> Result<bool>;

    async fn list_workouts(&self, owner_id: &str) -> Result<Vec<Workout>>;
    async fn add_workout(&self, owner_id: &str, workout: Workout) -> Result<()>;
    async fn remove_workout(&self, owner_id: &str, workout_id: &str) -> Result<bool>;
}

/// The single current-session slot.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn current_user_id(&self) -> Result<Option<String>>;
    async fn set_current_user_id(&self, user_id: &str) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
