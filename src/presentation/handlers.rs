use crate::application::auth_service::AuthService;
use crate::application::exercise_service::ExerciseService;
use crate::application::library_service::LibraryService;
use crate::application::profile_service::ProfileService;
use crate::application::workout_service::WorkoutService;
use crate::data::session_repository::JsonSessionRepository;
use crate::data::store::Store;
use crate::data::user_repository::JsonUserRepository;
use crate::domain::error::DomainError;
use crate::domain::filter::{AvailableExerciseFilter, ExerciseFilter, SearchQuery, WorkoutFilter};
use crate::domain::models::{NewExercise, NewWorkout};
use crate::domain::user::User;
use crate::presentation::notifications::Notifier;
use crate::presentation::router::{self, LOGIN_REQUIRED, Page, Route};
use crate::presentation::views::{self, AuthMode, Chrome, LoginView};
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, web};
use chrono::Utc;
use maud::Markup;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// Everything the handlers share, injected through `web::Data`.
pub struct AppState {
    pub auth_service: AuthService<JsonUserRepository, JsonSessionRepository>,
    pub exercise_service: ExerciseService<JsonUserRepository>,
    pub workout_service: WorkoutService<JsonUserRepository>,
    pub library_service: LibraryService<JsonUserRepository>,
    pub profile_service: ProfileService<JsonUserRepository>,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(users: Arc<JsonUserRepository>, sessions: Arc<JsonSessionRepository>) -> Self {
        Self {
            auth_service: AuthService::new(users.clone(), sessions),
            exercise_service: ExerciseService::new(users.clone()),
            workout_service: WorkoutService::new(users.clone()),
            library_service: LibraryService::new(users.clone()),
            profile_service: ProfileService::new(users),
            notifier: Notifier::new(),
        }
    }

    /// Loads both persisted collections from `store`.
    pub async fn open(store: Store) -> anyhow::Result<Self> {
        let users = JsonUserRepository::open(store.clone()).await?;
        let sessions = JsonSessionRepository::open(store).await?;
        Ok(Self::new(Arc::new(users), Arc::new(sessions)))
    }
}

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Validation(_) => StatusCode::BAD_REQUEST,
            WebError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            WebError::Unauthenticated => StatusCode::SEE_OTHER,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Storage(_) | WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        let message = match self {
            WebError::Unauthenticated => return see_other(&Page::Login.path()),
            WebError::Validation(msg) | WebError::Unauthorized(msg) => {
                warn!(error = %error_msg, status = %status, "Request rejected");
                msg.as_str()
            }
            WebError::NotFound(_) => {
                warn!(error = %error_msg, status = %status, "Resource not found");
                "Item não encontrado."
            }
            WebError::Storage(_) => {
                error!(error = %error_msg, status = %status, "Storage error");
                "Não foi possível acessar os dados salvos."
            }
            WebError::Internal(_) => {
                error!(error = %error_msg, status = %status, "Internal error");
                "Erro interno. Tente novamente."
            }
        };

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(views::error_page(message))
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::Validation(msg)) => WebError::Validation(msg.clone()),
            Some(DomainError::Unauthorized(msg)) => WebError::Unauthorized(msg.clone()),
            Some(DomainError::NotFound(msg)) => WebError::NotFound(msg.clone()),
            Some(DomainError::Internal(msg)) => WebError::Internal(msg.clone()),
            None => WebError::Storage(format!("{err:#}")),
        }
    }
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Wraps `body` in the layout, consuming pending notifications.
pub(crate) async fn render(
    state: &AppState,
    page: Page,
    user: Option<&User>,
    body: Markup,
    status: StatusCode,
) -> HttpResponse {
    let notifications = state.notifier.drain().await;
    let html = views::layout(
        &Chrome {
            page,
            user_name: user.map(|u| u.name.as_str()),
            notifications: &notifications,
        },
        body,
    );
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(html)
}

pub(crate) async fn session_user(state: &AppState) -> Result<Option<User>, WebError> {
    Ok(state.auth_service.current_user().await?)
}

/// Mutations without a session behave like protected pages.
async fn require_user(state: &AppState) -> Result<User, WebError> {
    match session_user(state).await? {
        Some(user) => Ok(user),
        None => {
            warn!("Mutation attempted without a session");
            state.notifier.error(LOGIN_REQUIRED).await;
            Err(WebError::Unauthenticated)
        }
    }
}

/// Turns a rejected submission into an error toast on `back`; anything else
/// becomes an error response.
async fn recover(state: &AppState, err: anyhow::Error, back: Page) -> Result<HttpResponse, WebError> {
    if let Some(DomainError::Validation(msg)) = err.downcast_ref::<DomainError>() {
        warn!(message = %msg, page = back.slug(), "Submission rejected");
        state.notifier.error(msg.clone()).await;
        return Ok(see_other(&back.path()));
    }
    Err(WebError::from(err))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

#[instrument]
pub async fn health_check() -> HttpResponse {
    info!("Health check requested");
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };
    HttpResponse::Ok().json(response)
}

#[instrument(skip(state))]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let user = session_user(&state).await?;
    let page = router::landing(user.is_some());
    debug!(page = page.slug(), "Landing");
    Ok(see_other(&page.path()))
}

#[instrument(skip(state, query))]
pub async fn show_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, WebError> {
    let slug = path.into_inner();
    let user = session_user(&state).await?;

    match router::resolve(&slug, user.is_some()) {
        Route::Redirect { to, notice } => {
            debug!(slug = %slug, to = to.slug(), "Redirecting");
            if let Some(notice) = notice {
                state.notifier.push(notice).await;
            }
            Ok(see_other(&to.path()))
        }
        Route::Render(page) => {
            let body = page_body(&state, page, user.as_ref(), &query).await?;
            Ok(render(&state, page, user.as_ref(), body, StatusCode::OK).await)
        }
    }
}

async fn page_body(
    state: &AppState,
    page: Page,
    user: Option<&User>,
    query: &SearchQuery,
) -> Result<Markup, WebError> {
    let signed_in = || user.ok_or(WebError::Unauthenticated);
    let search_text = query.q.clone().unwrap_or_default();

    let body = match page {
        Page::Home => views::home(),
        Page::Login => views::login(&LoginView {
            mode: AuthMode::from_query(query.mode.as_deref()),
            ..LoginView::default()
        }),
        Page::Dashboard => views::dashboard(&state.profile_service.dashboard(signed_in()?).await?),
        Page::MyExercises => {
            let filter = ExerciseFilter::from_search(query);
            let exercises = state
                .exercise_service
                .search_exercises(signed_in()?, &filter)
                .await?;
            views::exercise_list(&views::ExerciseListView {
                exercises,
                query: search_text,
                group: filter.muscle_group().map(str::to_string),
                filtered: filter.is_active(),
            })
        }
        Page::CreateExercise => views::exercise_form(&NewExercise::default()),
        Page::MyWorkouts => {
            let filter = WorkoutFilter::from_search(query);
            let workouts = state
                .workout_service
                .search_workouts(signed_in()?, &filter)
                .await?;
            views::workout_list(&views::WorkoutListView {
                workouts,
                query: search_text,
                difficulty: filter.difficulty(),
                filtered: filter.is_active(),
            })
        }
        Page::CreateWorkout => create_workout_body(state, signed_in()?, search_text).await?,
        Page::Library => {
            let filter = WorkoutFilter::from_search(query);
            views::library(&views::LibraryView {
                workouts: state.library_service.search(&filter),
                query: search_text,
                difficulty: filter.difficulty(),
            })
        }
        Page::Profile => views::profile(&state.profile_service.profile(signed_in()?).await?),
    };
    Ok(body)
}

async fn create_workout_body(
    state: &AppState,
    user: &User,
    query: String,
) -> Result<Markup, WebError> {
    let exercises = state.exercise_service.list_exercises(user).await?;
    let filter = AvailableExerciseFilter::new(Some(&query));
    let available = exercises.iter().filter(|e| filter.matches(e)).cloned().collect();
    Ok(views::create_workout(&views::CreateWorkoutView {
        available,
        has_exercises: !exercises.is_empty(),
        query,
        draft: state.workout_service.draft().await,
    }))
}

/// Body of the POST that follows a confirmation page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Confirmation {
    pub confirm: String,
}

impl Confirmation {
    fn accepted(&self) -> bool {
        self.confirm == "yes"
    }
}

#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create_exercise(
    state: web::Data<AppState>,
    form: web::Form<NewExercise>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    let req = form.into_inner();
    match state.exercise_service.create_exercise(&user, req.clone()).await {
        Ok(exercise) => {
            info!(exercise_id = %exercise.id, "Exercise created");
            state.notifier.success("Exercício criado com sucesso!").await;
            Ok(see_other(&Page::MyExercises.path()))
        }
        Err(err) => match err.downcast_ref::<DomainError>() {
            Some(DomainError::Validation(msg)) => {
                warn!(message = %msg, "Exercise rejected");
                state.notifier.error(msg.clone()).await;
                let body = views::exercise_form(&req);
                let status = StatusCode::BAD_REQUEST;
                Ok(render(&state, Page::CreateExercise, Some(&user), body, status).await)
            }
            _ => Err(WebError::from(err)),
        },
    }
}

#[instrument(skip(state))]
pub async fn confirm_delete_exercise(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    let exercise = state.exercise_service.find_exercise(&user, &path).await?;
    let body = views::confirm(&views::ConfirmView {
        question: "Tem certeza que deseja excluir este exercício?",
        subject: &exercise.name,
        action: format!("/exercises/{}/delete", exercise.id),
        cancel: Page::MyExercises,
    });
    Ok(render(&state, Page::MyExercises, Some(&user), body, StatusCode::OK).await)
}

#[instrument(skip(state, form))]
pub async fn delete_exercise(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<Confirmation>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    if !form.accepted() {
        debug!(exercise_id = %path, "Deletion not confirmed");
        return Ok(see_other(&Page::MyExercises.path()));
    }
    state.exercise_service.delete_exercise(&user, &path).await?;
    state.notifier.success("Exercício excluído com sucesso!").await;
    Ok(see_other(&Page::MyExercises.path()))
}

#[instrument(skip(state, form))]
pub async fn create_workout(
    state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    let form = form.into_inner();
    let req = NewWorkout::from_form(&form).unwrap_or_default();

    match state.workout_service.create_workout(&user, req, &form).await {
        Ok(workout) => {
            info!(workout_id = %workout.id, exercises = workout.exercises.len(), "Workout created");
            state.notifier.success("Treino criado com sucesso!").await;
            Ok(see_other(&Page::MyWorkouts.path()))
        }
        Err(err) => recover(&state, err, Page::CreateWorkout).await,
    }
}

#[instrument(skip(state, form))]
pub async fn stage_exercise(
    state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    state.workout_service.update_draft_values(&form).await;

    let exercise_id = form.get("exercise_id").map(String::as_str).unwrap_or_default();
    match state.workout_service.stage_exercise(&user, exercise_id).await {
        Ok(staged) => {
            debug!(exercise_id = %staged.exercise_id, "Staged");
            state.notifier.success("Exercício adicionado ao treino!").await;
            Ok(see_other(&Page::CreateWorkout.path()))
        }
        Err(err) => recover(&state, err, Page::CreateWorkout).await,
    }
}

#[instrument(skip(state, form))]
pub async fn unstage_exercise(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, WebError> {
    require_user(&state).await?;
    state.workout_service.update_draft_values(&form).await;
    if state.workout_service.unstage_exercise(&path).await {
        state.notifier.success("Exercício removido do treino").await;
    }
    Ok(see_other(&Page::CreateWorkout.path()))
}

/// Filters the available exercises from inside the workout form, so the
/// values typed so far are kept in the draft.
#[instrument(skip(state, form))]
pub async fn search_available(
    state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    state.workout_service.update_draft_values(&form).await;
    let query = form.get("q").cloned().unwrap_or_default();
    debug!(query = %query, "Searching available exercises");
    let body = create_workout_body(&state, &user, query).await?;
    Ok(render(&state, Page::CreateWorkout, Some(&user), body, StatusCode::OK).await)
}

#[instrument(skip(state))]
pub async fn confirm_delete_workout(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    let workout = state.workout_service.find_workout(&user, &path).await?;
    let body = views::confirm(&views::ConfirmView {
        question: "Tem certeza que deseja excluir este treino?",
        subject: &workout.name,
        action: format!("/workouts/{}/delete", workout.id),
        cancel: Page::MyWorkouts,
    });
    Ok(render(&state, Page::MyWorkouts, Some(&user), body, StatusCode::OK).await)
}

#[instrument(skip(state, form))]
pub async fn delete_workout(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<Confirmation>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    if !form.accepted() {
        debug!(workout_id = %path, "Deletion not confirmed");
        return Ok(see_other(&Page::MyWorkouts.path()));
    }
    state.workout_service.delete_workout(&user, &path).await?;
    state.notifier.success("Treino excluído com sucesso!").await;
    Ok(see_other(&Page::MyWorkouts.path()))
}

#[instrument(skip(state))]
pub async fn add_library_workout(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse, WebError> {
    let user = require_user(&state).await?;
    let workout = state.library_service.add_to_user(&user, path.into_inner()).await?;
    info!(workout_id = %workout.id, "Library workout copied");
    state.notifier.success("Treino adicionado aos seus treinos!").await;
    Ok(see_other(&Page::Library.path()))
}
