use crate::data::store::{Store, USERS_KEY};
use crate::domain::models::{Exercise, Workout};
use crate::domain::repository::{ContentRepository, UserRepository};
use crate::domain::user::{User, UserRecord};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, trace};

/// The registered-users collection, persisted as one JSON array.
///
/// Each record owns its exercises and workouts. Mutations are applied to a
/// copy, written to the store and only then published, so a failed write
/// leaves the in-memory collection untouched.
#[derive(Clone)]
pub struct JsonUserRepository {
    store: Store,
    records: Arc<RwLock<Vec<UserRecord>>>,
}

impl JsonUserRepository {
    #[instrument(skip(store))]
    pub async fn open(store: Store) -> Result<Self> {
        let records: Vec<UserRecord> = store.load(USERS_KEY).await?;
        info!(users = records.len(), "User collection loaded");
        Ok(Self {
            store,
            records: Arc::new(RwLock::new(records)),
        })
    }

    async fn mutate<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<UserRecord>) -> Result<T> + Send,
        T: Send,
    {
        trace!("Acquiring write lock for user collection");
        let mut records = self.records.write().await;
        let mut next = records.clone();
        let outcome = f(&mut next)?;
        self.store.save(USERS_KEY, &next).await?;
        *records = next;
        Ok(outcome)
    }

    async fn read_owner<T, F>(&self, owner_id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&UserRecord) -> T + Send,
    {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.user.id == owner_id)
            .map(f)
            .ok_or_else(|| anyhow!("unknown user {owner_id}"))
    }
}

fn owner_mut<'a>(records: &'a mut [UserRecord], owner_id: &str) -> Result<&'a mut UserRecord> {
    records
        .iter_mut()
        .find(|r| r.user.id == owner_id)
        .ok_or_else(|| anyhow!("unknown user {owner_id}"))
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    #[instrument(skip(self), fields(user_id = %user.id, email = %user.email))]
    async fn save_user(&self, user: User) -> Result<()> {
        let user_id = user.id.clone();
        self.mutate(move |records| {
            match records.iter_mut().find(|r| r.user.id == user.id) {
                Some(existing) => existing.user = user,
                None => records.push(UserRecord::new(user)),
            }
            Ok(())
        })
        .await?;
        debug!(user_id = %user_id, "User saved to store");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let records = self.records.read().await;
        let user = records
            .iter()
            .find(|r| r.user.email == email)
            .map(|r| r.user.clone());
        match &user {
            Some(u) => debug!(user_id = %u.id, "User found by email"),
            None => trace!("No user with this email"),
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.user.id == id)
            .map(|r| r.user.clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let records = self.records.read().await;
        Ok(records.iter().map(|r| r.user.clone()).collect())
    }
}

#[async_trait]
impl ContentRepository for JsonUserRepository {
    async fn list_exercises(&self, owner_id: &str) -> Result<Vec<Exercise>> {
        self.read_owner(owner_id, |r| r.exercises.clone()).await
    }

    #[instrument(skip(self, exercise), fields(exercise_id = %exercise.id))]
    async fn add_exercise(&self, owner_id: &str, exercise: Exercise) -> Result<()> {
        self.mutate(|records| {
            owner_mut(records, owner_id)?.exercises.push(exercise);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn remove_exercise(&self, owner_id: &str, exercise_id: &str) -> Result<bool> {
        self.mutate(|records| {
            let owner = owner_mut(records, owner_id)?;
            let before = owner.exercises.len();
            owner.exercises.retain(|e| e.id != exercise_id);
            Ok(owner.exercises.len() != before)
        })
        .await
    }

    async fn list_workouts(&self, owner_id: &str) -> Result<Vec<Workout>> {
        self.read_owner(owner_id, |r| r.workouts.clone()).await
    }

    #[instrument(skip(self, workout), fields(workout_id = %workout.id))]
    async fn add_workout(&self, owner_id: &str, workout: Workout) -> Result<()> {
        self.mutate(|records| {
            owner_mut(records, owner_id)?.workouts.push(workout);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn remove_workout(&self, owner_id: &str, workout_id: &str) -> Result<bool> {
        self.mutate(|records| {
            let owner = owner_mut(records, owner_id)?;
            let before = owner.workouts.len();
            owner.workouts.retain(|w| w.id != workout_id);
            Ok(owner.workouts.len() != before)
        })
        .await
    }
}
