use crate::domain::error::DomainError;
use crate::domain::filter::ExerciseFilter;
use crate::domain::models::{Exercise, NewExercise};
use crate::domain::repository::ContentRepository;
use crate::domain::user::User;
use crate::infrastructure::ids::generate_id;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct ExerciseService<C: ContentRepository> {
    repository: Arc<C>,
}

impl<C: ContentRepository> ExerciseService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, owner, req), fields(user_id = %owner.id, name = %req.name))]
    pub async fn create_exercise(&self, owner: &User, req: NewExercise) -> Result<Exercise> {
        let name = req.name.trim();
        let muscle_group = req.muscle_group.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Por favor, preencha o nome do exercício").into());
        }
        if muscle_group.is_empty() {
            return Err(DomainError::validation("Por favor, selecione o grupo muscular").into());
        }

        let exercise = Exercise {
            id: generate_id(),
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            description: req.description.trim().to_string(),
            instructions: req.instructions.trim().to_string(),
            is_public: req.is_public,
            created_at: Utc::now(),
        };
        self.repository
            .add_exercise(&owner.id, exercise.clone())
            .await?;

        info!(exercise_id = %exercise.id, "Exercise created");
        Ok(exercise)
    }

    pub async fn list_exercises(&self, owner: &User) -> Result<Vec<Exercise>> {
        self.repository.list_exercises(&owner.id).await
    }

    pub async fn search_exercises(
        &self,
        owner: &User,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>> {
        let mut exercises = self.list_exercises(owner).await?;
        exercises.retain(|e| filter.matches(e));
        Ok(exercises)
    }

    pub async fn find_exercise(&self, owner: &User, exercise_id: &str) -> Result<Exercise> {
        self.list_exercises(owner)
            .await?
            .into_iter()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| DomainError::NotFound(format!("Exercício {exercise_id}")).into())
    }

    /// Removes exactly the exercise with this id. Workouts that staged it
    /// keep their snapshot.
    #[instrument(skip(self, owner), fields(user_id = %owner.id))]
    pub async fn delete_exercise(&self, owner: &User, exercise_id: &str) -> Result<()> {
        if !self
            .repository
            .remove_exercise(&owner.id, exercise_id)
            .await?
        {
            warn!(exercise_id, "Exercise to delete not found");
            return Err(DomainError::NotFound(format!("Exercício {exercise_id}")).into());
        }
        info!(exercise_id, "Exercise deleted");
        Ok(())
    }
}
