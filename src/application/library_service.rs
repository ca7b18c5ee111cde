use crate::domain::error::DomainError;
use crate::domain::filter::WorkoutFilter;
use crate::domain::library::{CATALOG, LibraryWorkout};
use crate::domain::models::Workout;
use crate::domain::repository::ContentRepository;
use crate::domain::user::User;
use crate::infrastructure::ids::generate_id;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct LibraryService<C: ContentRepository> {
    repository: Arc<C>,
    catalog: Vec<LibraryWorkout>,
}

impl<C: ContentRepository> LibraryService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self::with_catalog(repository, CATALOG.to_vec())
    }

    pub fn with_catalog(repository: Arc<C>, catalog: Vec<LibraryWorkout>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub fn catalog(&self) -> &[LibraryWorkout] {
        &self.catalog
    }

    pub fn search(&self, filter: &WorkoutFilter) -> Vec<LibraryWorkout> {
        self.catalog
            .iter()
            .filter(|w| filter.matches_library(w))
            .copied()
            .collect()
    }

    /// Copies a catalog entry into the owner's workouts.
    ///
    /// Catalog entries only carry an exercise count, so the copy starts with
    /// an empty exercise list.
    #[instrument(skip(self, owner), fields(user_id = %owner.id))]
    pub async fn add_to_user(&self, owner: &User, library_id: u32) -> Result<Workout> {
        let template = self
            .catalog
            .iter()
            .find(|w| w.id == library_id)
            .ok_or_else(|| DomainError::NotFound(format!("Treino da biblioteca {library_id}")))?;

        let workout = Workout {
            id: generate_id(),
            name: template.name.to_string(),
            description: template.description.to_string(),
            difficulty: template.difficulty,
            duration: template.duration,
            is_public: template.is_public,
            exercises: Vec::new(),
            created_at: Utc::now(),
        };
        self.repository.add_workout(&owner.id, workout.clone()).await?;

        info!(library_id, workout_id = %workout.id, "Library workout copied");
        Ok(workout)
    }
}
