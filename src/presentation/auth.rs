use crate::domain::error::DomainError;
use crate::domain::user::{CreateUser, LoginRequest};
use crate::presentation::handlers::{AppState, WebError, render, see_other};
use crate::presentation::router::Page;
use crate::presentation::views::{self, AuthMode, LoginView};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::{error, info, instrument, warn};

#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(
    state: web::Data<AppState>,
    form: web::Form<CreateUser>,
) -> Result<HttpResponse, WebError> {
    info!("Registration request received");
    let req = form.into_inner();
    let view = LoginView {
        mode: AuthMode::Register,
        error: None,
        name: req.name.clone(),
        email: req.email.clone(),
    };

    match state.auth_service.register_user(req).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered successfully");
            state.workout_service.discard_draft().await;
            state.notifier.success("Conta criada com sucesso!").await;
            Ok(see_other(&Page::Dashboard.path()))
        }
        Err(err) => auth_failure(&state, err, view).await,
    }
}

#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, WebError> {
    info!("Login request received");
    let req = form.into_inner();
    let view = LoginView {
        mode: AuthMode::Login,
        error: None,
        name: String::new(),
        email: req.email.clone(),
    };

    match state.auth_service.login(req).await {
        Ok(user) => {
            info!(user_id = %user.id, "Login successful");
            state.workout_service.discard_draft().await;
            state.notifier.success("Login realizado com sucesso!").await;
            Ok(see_other(&Page::Dashboard.path()))
        }
        Err(err) => auth_failure(&state, err, view).await,
    }
}

#[instrument(skip(state))]
pub async fn logout(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    state.auth_service.logout().await.map_err(|e| {
        error!(error = %e, "Failed to clear session");
        WebError::from(e)
    })?;
    state.workout_service.discard_draft().await;
    state.notifier.success("Você foi desconectado.").await;
    info!("Logged out");
    Ok(see_other(&Page::Home.path()))
}

/// Re-renders the auth form with the failure shown inline and the typed
/// name and email kept.
async fn auth_failure(
    state: &AppState,
    err: anyhow::Error,
    mut view: LoginView,
) -> Result<HttpResponse, WebError> {
    let status = match err.downcast_ref::<DomainError>() {
        Some(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
        Some(DomainError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
        _ => {
            error!(error = %err, "Authentication failed unexpectedly");
            return Err(WebError::from(err));
        }
    };
    let message = err
        .downcast_ref::<DomainError>()
        .map(|e| e.user_message().to_string())
        .unwrap_or_default();
    warn!(status = %status, message = %message, "Authentication rejected");

    view.error = Some(message);
    Ok(render(state, Page::Login, None, views::login(&view), status).await)
}
