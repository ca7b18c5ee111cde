use crate::domain::draft::{StagedExercise, WorkoutDraft};
use crate::domain::error::DomainError;
use crate::domain::filter::WorkoutFilter;
use crate::domain::models::{Difficulty, NewWorkout, Workout};
use crate::domain::repository::ContentRepository;
use crate::domain::user::User;
use crate::infrastructure::ids::generate_id;
use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Workout CRUD plus the draft being composed on the create-workout page.
pub struct WorkoutService<C: ContentRepository> {
    repository: Arc<C>,
    draft: Mutex<WorkoutDraft>,
}

impl<C: ContentRepository> WorkoutService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self {
            repository,
            draft: Mutex::new(WorkoutDraft::new()),
        }
    }

    pub async fn draft(&self) -> WorkoutDraft {
        self.draft.lock().await.clone()
    }

    /// Stages one of the owner's exercises with default sets/reps/weight/rest.
    #[instrument(skip(self, owner), fields(user_id = %owner.id))]
    pub async fn stage_exercise(&self, owner: &User, exercise_id: &str) -> Result<StagedExercise> {
        let exercise = self
            .repository
            .list_exercises(&owner.id)
            .await?
            .into_iter()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| DomainError::NotFound(format!("Exercício {exercise_id}")))?;

        let mut draft = self.draft.lock().await;
        draft.stage(&exercise).inspect_err(|_| {
            warn!(exercise_id, "Exercise already staged");
        })?;
        debug!(exercise_id, staged = draft.len(), "Exercise staged");
        Ok(draft.entries()[draft.len() - 1].clone())
    }

    /// Returns whether an entry was removed.
    pub async fn unstage_exercise(&self, exercise_id: &str) -> bool {
        let mut draft = self.draft.lock().await;
        let removed = draft.unstage(exercise_id);
        debug!(exercise_id, removed, staged = draft.len(), "Exercise unstaged");
        removed
    }

    /// Keeps values typed into the staged entries across page round trips.
    pub async fn update_draft_values(&self, form: &HashMap<String, String>) {
        self.draft.lock().await.apply_form_values(form);
    }

    pub async fn discard_draft(&self) {
        self.draft.lock().await.clear();
    }

    /// Builds a workout from the form metadata and the staged exercises.
    ///
    /// Staged values from `form` are applied first, so a rejected submission
    /// still remembers them. The draft is cleared only after the workout has
    /// been stored.
    #[instrument(skip(self, owner, req, form), fields(user_id = %owner.id, name = %req.name))]
    pub async fn create_workout(
        &self,
        owner: &User,
        req: NewWorkout,
        form: &HashMap<String, String>,
    ) -> Result<Workout> {
        let mut draft = self.draft.lock().await;
        draft.apply_form_values(form);

        if draft.is_empty() {
            warn!("Workout submitted without exercises");
            return Err(
                DomainError::validation("Adicione pelo menos um exercício ao treino").into(),
            );
        }

        let name = req.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Por favor, preencha o nome do treino").into());
        }
        let difficulty: Difficulty = req
            .difficulty
            .parse()
            .map_err(|_| DomainError::validation("Selecione a dificuldade do treino"))?;
        let duration = req
            .duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| DomainError::validation("Informe a duração do treino em minutos"))?;
        let exercises = draft.snapshot()?;

        let workout = Workout {
            id: generate_id(),
            name: name.to_string(),
            description: req.description.trim().to_string(),
            difficulty,
            duration,
            is_public: req.is_public,
            exercises,
            created_at: Utc::now(),
        };
        self.repository.add_workout(&owner.id, workout.clone()).await?;
        draft.clear();

        info!(
            workout_id = %workout.id,
            exercises = workout.exercises.len(),
            "Workout created"
        );
        Ok(workout)
    }

    pub async fn list_workouts(&self, owner: &User) -> Result<Vec<Workout>> {
        self.repository.list_workouts(&owner.id).await
    }

    pub async fn search_workouts(&self, owner: &User, filter: &WorkoutFilter) -> Result<Vec<Workout>> {
        let mut workouts = self.list_workouts(owner).await?;
        workouts.retain(|w| filter.matches(w));
        Ok(workouts)
    }

    pub async fn find_workout(&self, owner: &User, workout_id: &str) -> Result<Workout> {
        self.list_workouts(owner)
            .await?
            .into_iter()
            .find(|w| w.id == workout_id)
            .ok_or_else(|| DomainError::NotFound(format!("Treino {workout_id}")).into())
    }

    #[instrument(skip(self, owner), fields(user_id = %owner.id))]
    pub async fn delete_workout(&self, owner: &User, workout_id: &str) -> Result<()> {
        if !self.repository.remove_workout(&owner.id, workout_id).await? {
            warn!(workout_id, "Workout to delete not found");
            return Err(DomainError::NotFound(format!("Treino {workout_id}")).into());
        }
        info!(workout_id, "Workout deleted");
        Ok(())
    }
}
