use crate::domain::error::DomainError;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::user::{CreateUser, LoginRequest, User, member_since_label};
use crate::infrastructure::ids::generate_id;
use crate::infrastructure::security::{hash_password, verify_password};
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, trace, warn};

pub const MIN_PASSWORD_LEN: usize = 6;

const INVALID_CREDENTIALS: &str = "Email ou senha incorretos";

pub struct AuthService<U: UserRepository, S: SessionRepository> {
    user_repository: Arc<U>,
    session_repository: Arc<S>,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    pub fn new(user_repository: Arc<U>, session_repository: Arc<S>) -> Self {
        Self {
            user_repository,
            session_repository,
        }
    }

    /// Creates the account and signs the new user in.
    #[instrument(skip(self, req), fields(email = %req.email.trim()))]
    pub async fn register_user(&self, req: CreateUser) -> Result<User> {
        trace!("Starting user registration");

        let name = req.name.trim();
        let email = req.email.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Por favor, preencha seu nome").into());
        }
        if email.is_empty() {
            return Err(DomainError::validation("Por favor, preencha seu email").into());
        }
        if req.password.is_empty() {
            return Err(DomainError::validation("Por favor, preencha sua senha").into());
        }
        if req.password != req.confirm_password {
            return Err(DomainError::validation("As senhas não coincidem").into());
        }
        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(
                DomainError::validation("A senha deve ter pelo menos 6 caracteres").into(),
            );
        }

        if self
            .user_repository
            .find_user_by_email(email)
            .await?
            .is_some()
        {
            warn!(email = %email, "User already exists");
            return Err(DomainError::validation("Este email já está cadastrado").into());
        }

        let password_hash = hash_password(&req.password).map_err(|e| {
            error!(error = %e, "Failed to hash password");
            DomainError::Internal(format!("Failed to hash password: {}", e))
        })?;

        let user = User {
            id: generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            member_since: member_since_label(Utc::now()),
        };

        debug!(user_id = %user.id, "Saving user to repository");
        self.user_repository.save_user(user.clone()).await?;
        self.session_repository.set_current_user_id(&user.id).await?;

        info!(user_id = %user.id, email = %user.email, "User registered successfully");
        Ok(user)
    }

    /// Signs in when the email exists and the password verifies. On any
    /// failure the current session is left as it was.
    #[instrument(skip(self, req), fields(email = %req.email.trim()))]
    pub async fn login(&self, req: LoginRequest) -> Result<User> {
        trace!("Starting login");

        let email = req.email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("Por favor, preencha seu email").into());
        }
        if req.password.is_empty() {
            return Err(DomainError::validation("Por favor, preencha sua senha").into());
        }

        let user = self
            .user_repository
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "User not found during login");
                DomainError::Unauthorized(INVALID_CREDENTIALS.to_string())
            })?;

        let is_valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
            error!(error = %e, "Failed to verify password");
            DomainError::Internal(format!("Failed to verify password: {}", e))
        })?;

        if !is_valid {
            warn!(user_id = %user.id, "Invalid password during login");
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()).into());
        }

        self.session_repository.set_current_user_id(&user.id).await?;

        info!(user_id = %user.id, email = %user.email, "Login successful");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        self.session_repository.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    /// The signed-in user, if any. A session pointing at a user that no
    /// longer exists is cleared.
    pub async fn current_user(&self) -> Result<Option<User>> {
        let Some(user_id) = self.session_repository.current_user_id().await? else {
            return Ok(None);
        };
        match self.user_repository.find_user_by_id(&user_id).await? {
            Some(user) => Ok(Some(user)),
            None => {
                warn!(user_id = %user_id, "Session refers to an unknown user, clearing it");
                self.session_repository.clear().await?;
                Ok(None)
            }
        }
    }
}
