use crate::domain::models::{DashboardStats, Profile};
use crate::domain::repository::ContentRepository;
use crate::domain::user::User;
use anyhow::Result;
use std::sync::Arc;

/// Read-only projections of the signed-in user. Nothing is cached; every
/// call recounts from the store.
pub struct ProfileService<C: ContentRepository> {
    repository: Arc<C>,
}

impl<C: ContentRepository> ProfileService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    pub async fn dashboard(&self, user: &User) -> Result<DashboardStats> {
        let exercises = self.repository.list_exercises(&user.id).await?;
        let workouts = self.repository.list_workouts(&user.id).await?;
        Ok(DashboardStats {
            greeting_name: user.name.clone(),
            total_exercises: exercises.len(),
            total_workouts: workouts.len(),
        })
    }

    pub async fn profile(&self, user: &User) -> Result<Profile> {
        let exercises = self.repository.list_exercises(&user.id).await?;
        let workouts = self.repository.list_workouts(&user.id).await?;
        let public_content = exercises.iter().filter(|e| e.is_public).count()
            + workouts.iter().filter(|w| w.is_public).count();

        Ok(Profile {
            name: user.name.clone(),
            email: user.email.clone(),
            member_since: user.member_since.clone(),
            total_workouts: workouts.len(),
            total_exercises: exercises.len(),
            public_content,
        })
    }
}
