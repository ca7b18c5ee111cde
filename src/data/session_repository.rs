use crate::data::store::{CURRENT_USER_KEY, Store};
use crate::domain::repository::SessionRepository;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Persists the id of the signed-in user so a restart keeps the session.
#[derive(Clone)]
pub struct JsonSessionRepository {
    store: Store,
    current: Arc<RwLock<Option<String>>>,
}

impl JsonSessionRepository {
    #[instrument(skip(store))]
    pub async fn open(store: Store) -> Result<Self> {
        let current: Option<String> = store.load(CURRENT_USER_KEY).await?;
        debug!(restored = current.is_some(), "Session slot loaded");
        Ok(Self {
            store,
            current: Arc::new(RwLock::new(current)),
        })
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn current_user_id(&self) -> Result<Option<String>> {
        Ok(self.current.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn set_current_user_id(&self, user_id: &str) -> Result<()> {
        let mut current = self.current.write().await;
        self.store.save(CURRENT_USER_KEY, user_id).await?;
        *current = Some(user_id.to_string());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        let mut current = self.current.write().await;
        self.store.remove(CURRENT_USER_KEY).await?;
        *current = None;
        Ok(())
    }
}
