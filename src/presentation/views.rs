//! Page renderers: view models in, maud markup out.
//!
//! Every interpolated value goes through maud's escaping, so user supplied
//! names and descriptions can never inject markup.

use crate::domain::draft::{StagedExercise, WorkoutDraft};
use crate::domain::filter::{ALL_DIFFICULTIES, ALL_GROUPS};
use crate::domain::library::LibraryWorkout;
use crate::domain::models::{
    DashboardStats, Difficulty, Exercise, MUSCLE_GROUPS, NewExercise, Profile, Workout,
};
use crate::presentation::notifications::{Notification, NotificationKind};
use crate::presentation::router::{Page, shows_nav};
use maud::{DOCTYPE, Markup, html};

const INSTRUCTIONS_PREVIEW: usize = 100;
const LIBRARY_PREVIEW: usize = 100;
const AVAILABLE_PREVIEW: usize = 80;

const EMPTY_DRAFT: &str = "Nenhum exercício adicionado. Selecione exercícios na lista ao lado";
const ADJUST_FILTERS: &str = "Tente ajustar os filtros de busca.";

/// Cuts `value` to `max` characters, marking the cut with "...".
pub fn truncate(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte, _)) => format!("{}...", &value[..byte]),
        None => value.to_string(),
    }
}

pub struct Chrome<'a> {
    pub page: Page,
    pub user_name: Option<&'a str>,
    pub notifications: &'a [Notification],
}

pub fn layout(chrome: &Chrome<'_>, body: Markup) -> String {
    let authenticated = chrome.user_name.is_some();
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (chrome.page.title()) " · MyDumbbell" }
            }
            body {
                header.header {
                    a.logo href="/" { "🏋️ MyDumbbell" }
                    @if shows_nav(chrome.page, authenticated) {
                        (main_nav(chrome.page))
                    } @else {
                        a.btn.btn-entrar href=(Page::Login.path()) { "Entrar" }
                    }
                }
                (notification_stack(chrome.notifications))
                main.page id=(chrome.page.slug()) { (body) }
            }
        }
    }
    .into_string()
}

fn main_nav(current: Page) -> Markup {
    const LINKS: [Page; 5] = [
        Page::Dashboard,
        Page::MyExercises,
        Page::MyWorkouts,
        Page::Library,
        Page::Profile,
    ];
    html! {
        nav id="main-nav" {
            @for page in LINKS {
                @if page == current {
                    a.nav-link href=(page.path()) aria-current="page" { (page.title()) }
                } @else {
                    a.nav-link href=(page.path()) { (page.title()) }
                }
            }
            form.inline method="post" action="/auth/logout" {
                button.nav-link type="submit" { "Sair" }
            }
        }
    }
}

fn notification_stack(notifications: &[Notification]) -> Markup {
    html! {
        div id="notification-container" {
            @for notification in notifications {
                @match notification.kind {
                    NotificationKind::Success => {
                        div.notification role="status" { (notification.message) }
                    }
                    NotificationKind::Error => {
                        div.notification.error role="alert" { (notification.message) }
                    }
                }
            }
        }
    }
}

fn empty_state(icon: &str, title: &str, description: &str, action: Option<(Page, &str)>) -> Markup {
    html! {
        div.empty-state {
            div.empty-icon { (icon) }
            h3.empty-title { (title) }
            p.empty-description { (description) }
            @if let Some((page, label)) = action {
                a.btn.btn-primary href=(page.path()) { (label) }
            }
        }
    }
}

fn select(
    name: &str,
    placeholder: &str,
    options: &[&str],
    selected: Option<&str>,
    required: bool,
) -> Markup {
    html! {
        select.form-input name=(name) required[required] {
            option value="" selected[selected.is_none()] { (placeholder) }
            @for option in options {
                option value=(option) selected[selected == Some(*option)] { (option) }
            }
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.trim().is_empty())
}

fn difficulty_labels() -> Vec<&'static str> {
    Difficulty::ALL.iter().map(|d| d.label()).collect()
}

fn labeled(label: &str, control: Markup) -> Markup {
    html! {
        label.form-field {
            span.form-label { (label) }
            (control)
        }
    }
}

fn public_checkbox(checked: bool) -> Markup {
    html! {
        label.checkbox {
            input type="checkbox" name="is_public" value="true" checked[checked];
            " Tornar público"
        }
    }
}

fn visibility_label(is_public: bool) -> &'static str {
    if is_public { "Público" } else { "Privado" }
}

fn difficulty_badge(difficulty: Difficulty) -> Markup {
    html! {
        span class=(format!("difficulty {}", difficulty.css_class())) { (difficulty.label()) }
    }
}

pub fn home() -> Markup {
    html! {
        section.hero {
            h1 { "Seu treino, do seu jeito" }
            p { "Crie exercícios, monte treinos e explore a biblioteca de treinos prontos." }
            div.hero-actions {
                a.btn.btn-primary id="start-now" href=(Page::Login.path()) { "Começar agora" }
                a.btn id="create-account-btn" href=(format!("{}?mode=register", Page::Login.path())) {
                    "Criar conta"
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("register") => AuthMode::Register,
            _ => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub mode: AuthMode,
    pub error: Option<String>,
    pub name: String,
    pub email: String,
}

pub fn login(view: &LoginView) -> Markup {
    let register = view.mode == AuthMode::Register;
    let tab_class = |mode: AuthMode| {
        if view.mode == mode { "auth-tab active" } else { "auth-tab" }
    };

    html! {
        section.auth-card {
            div.auth-tabs {
                a class=(tab_class(AuthMode::Login)) href=(Page::Login.path()) { "Entrar" }
                a class=(tab_class(AuthMode::Register))
                    href=(format!("{}?mode=register", Page::Login.path())) { "Criar Conta" }
            }
            form id="auth-form" method="post"
                action=(if register { "/auth/register" } else { "/auth/login" }) {
                @if register {
                    (labeled("Nome", html! {
                        input.form-input type="text" name="name" value=(view.name);
                    }))
                }
                (labeled("Email", html! {
                    input.form-input type="email" name="email" value=(view.email);
                }))
                (labeled("Senha", html! {
                    input.form-input type="password" name="password";
                }))
                @if register {
                    (labeled("Confirmar senha", html! {
                        input.form-input type="password" name="confirm_password";
                    }))
                }
                @if let Some(error) = &view.error {
                    div.auth-error role="alert" { (error) }
                }
                button.btn.btn-primary id="auth-submit-btn" type="submit" {
                    @if register { "Criar Conta" } @else { "Entrar" }
                }
            }
        }
    }
}

pub fn dashboard(stats: &DashboardStats) -> Markup {
    let stat = |id: &str, value: usize, label: &str| {
        html! {
            div.stat-card {
                span.stat-value id=(id) { (value) }
                span.stat-label { (label) }
            }
        }
    };
    html! {
        h1.dashboard-title { "Olá, " (stats.greeting_name) "! 👋" }
        div.stats {
            (stat("total-exercises", stats.total_exercises, "Exercícios"))
            (stat("total-workouts", stats.total_workouts, "Treinos"))
        }
        div.quick-actions {
            a.btn.btn-primary href=(Page::CreateExercise.path()) { "Criar Exercício" }
            a.btn.btn-primary href=(Page::CreateWorkout.path()) { "Criar Treino" }
            a.btn href=(Page::Library.path()) { "Explorar Biblioteca" }
        }
    }
}

pub struct ExerciseListView {
    pub exercises: Vec<Exercise>,
    pub query: String,
    pub group: Option<String>,
    pub filtered: bool,
}

pub fn exercise_list(view: &ExerciseListView) -> Markup {
    html! {
        div.page-header {
            h1 { "Meus Exercícios" }
            a.btn.btn-primary href=(Page::CreateExercise.path()) { "Criar Exercício" }
        }
        form.filters method="get" action=(Page::MyExercises.path()) {
            input.form-input type="search" name="q" placeholder="Buscar exercícios..."
                value=(view.query);
            (select("group", ALL_GROUPS, &MUSCLE_GROUPS, view.group.as_deref(), false))
            button.btn type="submit" { "Filtrar" }
        }
        div.card-grid id="my-exercises-list" {
            @if view.exercises.is_empty() {
                @if view.filtered {
                    (empty_state("💪", "Nenhum exercício encontrado", ADJUST_FILTERS, None))
                } @else {
                    (empty_state(
                        "💪",
                        "Nenhum exercício encontrado",
                        "Você ainda não criou nenhum exercício. Comece criando seu primeiro exercício!",
                        Some((Page::CreateExercise, "Criar Exercício")),
                    ))
                }
            } @else {
                @for exercise in &view.exercises {
                    (exercise_card(exercise))
                }
            }
        }
    }
}

fn exercise_card(exercise: &Exercise) -> Markup {
    html! {
        div.exercise-card {
            div.card-header {
                h3 { (exercise.name) }
                span.muscle-group { (exercise.muscle_group) }
            }
            p.card-description { (exercise.description) }
            p.card-preview { (truncate(&exercise.instructions, INSTRUCTIONS_PREVIEW)) }
            div.card-footer {
                span { (visibility_label(exercise.is_public)) }
                a.delete-link href=(format!("/exercises/{}/delete", exercise.id)) { "Excluir" }
            }
        }
    }
}

/// The exercise form, filled with `values` after a rejected submission.
pub fn exercise_form(values: &NewExercise) -> Markup {
    html! {
        section {
            h1 { "Criar Exercício" }
            form id="create-exercise-form" method="post" action="/exercises" {
                (labeled("Nome do exercício", html! {
                    input.form-input type="text" name="name" value=(values.name) required;
                }))
                (labeled(
                    "Grupo muscular",
                    select(
                        "muscle_group",
                        "Selecione",
                        &MUSCLE_GROUPS,
                        non_blank(&values.muscle_group),
                        true,
                    ),
                ))
                (labeled("Descrição", html! {
                    textarea.form-input name="description" { (values.description) }
                }))
                (labeled("Instruções", html! {
                    textarea.form-input name="instructions" { (values.instructions) }
                }))
                (public_checkbox(values.is_public))
                button.btn.btn-primary type="submit" { "Salvar Exercício" }
            }
        }
    }
}

pub struct WorkoutListView {
    pub workouts: Vec<Workout>,
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub filtered: bool,
}

fn workout_search(action: Page, query: &str, difficulty: Option<Difficulty>) -> Markup {
    html! {
        form.filters method="get" action=(action.path()) {
            input.form-input type="search" name="q" placeholder="Buscar treinos..." value=(query);
            (select(
                "difficulty",
                ALL_DIFFICULTIES,
                &difficulty_labels(),
                difficulty.map(Difficulty::label),
                false,
            ))
            button.btn type="submit" { "Filtrar" }
        }
    }
}

pub fn workout_list(view: &WorkoutListView) -> Markup {
    html! {
        div.page-header {
            h1 { "Meus Treinos" }
            a.btn.btn-primary href=(Page::CreateWorkout.path()) { "Criar Treino" }
        }
        (workout_search(Page::MyWorkouts, &view.query, view.difficulty))
        div.card-grid id="my-workouts-list" {
            @if view.workouts.is_empty() {
                @if view.filtered {
                    (empty_state("🏋️", "Nenhum treino encontrado", ADJUST_FILTERS, None))
                } @else {
                    (empty_state(
                        "🏋️",
                        "Nenhum treino encontrado",
                        "Você ainda não criou nenhum treino. Comece criando seu primeiro treino!",
                        Some((Page::CreateWorkout, "Criar Treino")),
                    ))
                }
            } @else {
                @for workout in &view.workouts {
                    (workout_card(workout))
                }
            }
        }
    }
}

fn workout_meta(duration: u32, exercises: usize) -> Markup {
    html! {
        div.card-meta {
            span { "🕒 " (duration) "min" }
            span { "🏋️ " (exercises) " ex." }
        }
    }
}

fn workout_card(workout: &Workout) -> Markup {
    html! {
        div.workout-card {
            div.card-header {
                h3 { (workout.name) }
                (difficulty_badge(workout.difficulty))
            }
            p.card-description { (workout.description) }
            (workout_meta(workout.duration, workout.exercises.len()))
            div.card-footer {
                span { (visibility_label(workout.is_public)) }
                a.delete-link href=(format!("/workouts/{}/delete", workout.id)) { "Excluir" }
            }
        }
    }
}

pub struct CreateWorkoutView {
    pub available: Vec<Exercise>,
    pub has_exercises: bool,
    pub query: String,
    pub draft: WorkoutDraft,
}

/// One form carries the search box, the metadata and the staged entries. The
/// search button comes first so pressing Enter searches instead of saving.
pub fn create_workout(view: &CreateWorkoutView) -> Markup {
    let meta = view.draft.meta();
    html! {
        h1 { "Criar Treino" }
        form id="create-workout-form" method="post" action="/workouts" {
            div.filters {
                input.form-input type="search" name="q" placeholder="Buscar exercícios..."
                    value=(view.query);
                button.btn type="submit" formaction="/workouts/draft/search" formnovalidate {
                    "Buscar"
                }
            }
            div.workout-metadata {
                (labeled("Nome do treino", html! {
                    input.form-input type="text" name="name" value=(meta.name);
                }))
                (labeled("Descrição", html! {
                    textarea.form-input name="description" { (meta.description) }
                }))
                (labeled(
                    "Dificuldade",
                    select(
                        "difficulty",
                        "Selecione",
                        &difficulty_labels(),
                        non_blank(&meta.difficulty),
                        false,
                    ),
                ))
                (labeled("Duração (min)", html! {
                    input.form-input type="number" name="duration" min="1" value=(meta.duration);
                }))
                (public_checkbox(meta.is_public))
            }
            div.workout-builder {
                div id="available-exercises-list" {
                    h2 { "Exercícios disponíveis" }
                    @if !view.has_exercises {
                        div.empty-state-small {
                            h3.empty-title { "Nenhum exercício disponível" }
                            p.empty-description {
                                "Crie exercícios primeiro para poder adicioná-los aos treinos."
                            }
                            a.btn.btn-primary href=(Page::CreateExercise.path()) { "Criar Exercício" }
                        }
                    } @else if view.available.is_empty() {
                        div.empty-state-small {
                            h3.empty-title { "Nenhum exercício encontrado" }
                            p.empty-description { "Tente ajustar o termo de busca." }
                        }
                    } @else {
                        @for exercise in &view.available {
                            (available_card(exercise))
                        }
                    }
                }
                div id="selected-workout-exercises" {
                    h2 { "Exercícios do treino" }
                    @if view.draft.is_empty() {
                        div.empty-state-small { p { (EMPTY_DRAFT) } }
                    } @else {
                        @for entry in view.draft.entries() {
                            (staged_entry(entry))
                        }
                    }
                }
            }
            button.btn.btn-primary type="submit" { "Salvar Treino" }
        }
    }
}

/// Buttons submit the whole workout form to the draft routes, so values
/// typed so far travel with them.
fn available_card(exercise: &Exercise) -> Markup {
    html! {
        div.exercise-card {
            div.card-header {
                h4 { (exercise.name) }
                span.muscle-group { (exercise.muscle_group) }
            }
            p { (truncate(&exercise.description, AVAILABLE_PREVIEW)) }
            button.btn type="submit" formaction="/workouts/draft" formnovalidate
                name="exercise_id" value=(exercise.id) { "Adicionar" }
        }
    }
}

fn staged_entry(entry: &StagedExercise) -> Markup {
    let number = |label: &str, field: &str, value: &str, min: &str, step: &str| {
        labeled(
            label,
            html! {
                input type="number"
                    name=(StagedExercise::field_name(field, &entry.exercise_id))
                    value=(value)
                    min=(min)
                    step=(step)
                    class=(format!("{field}-input form-input"));
            },
        )
    };

    html! {
        div.selected-exercise data-exercise-id=(entry.exercise_id) {
            div.card-header {
                div {
                    h4 { (entry.name) }
                    span.muscle-group { (entry.muscle_group) }
                }
                button.remove-button type="submit"
                    formaction=(format!("/workouts/draft/{}/remove", entry.exercise_id))
                    formnovalidate aria-label="Remover" { "×" }
            }
            div.form-grid {
                (number("Séries", "sets", &entry.sets, "1", "1"))
                (number("Repetições", "reps", &entry.reps, "1", "1"))
                (number("Peso (kg)", "weight", &entry.weight, "0", "0.5"))
                (number("Descanso (s)", "rest", &entry.rest, "0", "15"))
            }
        }
    }
}

pub struct LibraryView {
    pub workouts: Vec<LibraryWorkout>,
    pub query: String,
    pub difficulty: Option<Difficulty>,
}

pub fn library(view: &LibraryView) -> Markup {
    html! {
        h1 { "Biblioteca de Treinos" }
        (workout_search(Page::Library, &view.query, view.difficulty))
        div.card-grid id="library-workouts-list" {
            @if view.workouts.is_empty() {
                (empty_state("🏋️", "Nenhum treino encontrado", ADJUST_FILTERS, None))
            } @else {
                @for workout in &view.workouts {
                    (library_card(workout))
                }
            }
        }
    }
}

fn library_card(workout: &LibraryWorkout) -> Markup {
    html! {
        div.workout-card {
            div.card-header {
                h3 { (workout.name) }
                (difficulty_badge(workout.difficulty))
            }
            p.card-description { (truncate(workout.description, LIBRARY_PREVIEW)) }
            (workout_meta(workout.duration, workout.exercises_count as usize))
            div.card-footer {
                span { "Por: " (workout.author) }
                form.inline method="post" action=(format!("/library/{}/add", workout.id)) {
                    button.btn.btn-primary type="submit" { "Adicionar" }
                }
            }
        }
    }
}

pub fn profile(profile: &Profile) -> Markup {
    let row = |id: &str, label: &str, value: String| {
        html! {
            div.profile-row {
                span.profile-label { (label) }
                span id=(id) { (value) }
            }
        }
    };
    html! {
        section.profile-card {
            h1 { "Meu Perfil" }
            (row("profile-name", "Nome", profile.name.clone()))
            (row("profile-email", "Email", profile.email.clone()))
            (row("profile-member-since", "Membro desde", profile.member_since.clone()))
            (row("profile-total-workouts", "Treinos", profile.total_workouts.to_string()))
            (row("profile-total-exercises", "Exercícios", profile.total_exercises.to_string()))
            (row("profile-public-content", "Conteúdo público", profile.public_content.to_string()))
        }
    }
}

pub struct ConfirmView<'a> {
    pub question: &'a str,
    pub subject: &'a str,
    pub action: String,
    pub cancel: Page,
}

pub fn confirm(view: &ConfirmView<'_>) -> Markup {
    html! {
        section.confirm-card {
            h1 { (view.question) }
            p.confirm-subject { (view.subject) }
            form method="post" action=(view.action) {
                input type="hidden" name="confirm" value="yes";
                button.btn.btn-danger type="submit" { "Excluir" }
                a.btn href=(view.cancel.path()) { "Cancelar" }
            }
        }
    }
}

pub fn error_page(message: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { "Erro · MyDumbbell" }
            }
            body {
                main.page.error-page {
                    h1 { "Algo deu errado" }
                    p { (message) }
                    a href="/" { "Voltar ao início" }
                }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn exercise(name: &str, instructions: &str) -> Exercise {
        Exercise {
            id: "ex-1".to_string(),
            name: name.to_string(),
            muscle_group: "Peito".to_string(),
            description: "Descrição".to_string(),
            instructions: instructions.to_string(),
            is_public: true,
            created_at: Utc::now(),
        }
    }

    fn empty_list(filtered: bool) -> String {
        exercise_list(&ExerciseListView {
            exercises: Vec::new(),
            query: String::new(),
            group: None,
            filtered,
        })
        .into_string()
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("curto", 10), "curto");
        assert_eq!(truncate("exatamente", 10), "exatamente");
        assert_eq!(truncate("ação ação ação", 4), "ação...");
    }

    #[test]
    fn test_empty_exercise_list_shows_call_to_action() {
        let html = empty_list(false);
        assert!(html.contains("Você ainda não criou nenhum exercício"));
        assert!(html.contains("href=\"/create-exercise\""));
    }

    #[test]
    fn test_filtered_empty_list_suggests_adjusting_filters() {
        let html = empty_list(true);
        assert!(html.contains(ADJUST_FILTERS));
        assert!(!html.contains("Você ainda não criou"));
    }

    #[test]
    fn test_exercise_card_escapes_user_text_and_truncates() {
        let long = "a".repeat(150);
        let html = exercise_list(&ExerciseListView {
            exercises: vec![exercise("<script>x</script>", &long)],
            query: String::new(),
            group: None,
            filtered: false,
        })
        .into_string();

        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(&format!("{}...", "a".repeat(100))));
        assert!(html.contains("/exercises/ex-1/delete"));
        assert!(html.contains("Público"));
    }

    #[test]
    fn test_selected_group_is_marked() {
        let html = exercise_list(&ExerciseListView {
            exercises: Vec::new(),
            query: "sup".to_string(),
            group: Some("Costas".to_string()),
            filtered: true,
        })
        .into_string();
        assert!(html.contains("<option value=\"Costas\" selected>Costas</option>"));
        assert!(html.contains("value=\"sup\""));
    }

    #[test]
    fn test_empty_draft_shows_placeholder() {
        let html = create_workout(&CreateWorkoutView {
            available: vec![exercise("Supino", "")],
            has_exercises: true,
            query: String::new(),
            draft: WorkoutDraft::new(),
        })
        .into_string();
        assert!(html.contains(EMPTY_DRAFT));
        assert!(html.contains("formaction=\"/workouts/draft\""));
    }

    #[test]
    fn test_staged_entry_renders_editable_fields() {
        let mut draft = WorkoutDraft::new();
        draft.stage(&exercise("Supino", "")).unwrap();
        let html = create_workout(&CreateWorkoutView {
            available: Vec::new(),
            has_exercises: true,
            query: "zzz".to_string(),
            draft,
        })
        .into_string();

        assert!(!html.contains(EMPTY_DRAFT));
        assert!(html.contains("name=\"sets_ex-1\" value=\"3\""));
        assert!(html.contains("name=\"rest_ex-1\" value=\"60\""));
        assert!(html.contains("/workouts/draft/ex-1/remove"));
        assert!(html.contains("Tente ajustar o termo de busca."));
    }

    #[test]
    fn test_workout_form_shows_typed_metadata() {
        let mut draft = WorkoutDraft::new();
        draft.stage(&exercise("Supino", "")).unwrap();
        let form: std::collections::HashMap<String, String> = [
            ("name", "Peito <A>"),
            ("description", "Foco em força"),
            ("difficulty", "Intermediário"),
            ("duration", "45"),
            ("is_public", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        draft.apply_form_values(&form);

        let html = create_workout(&CreateWorkoutView {
            available: Vec::new(),
            has_exercises: true,
            query: String::new(),
            draft,
        })
        .into_string();

        assert!(html.contains("name=\"name\" value=\"Peito &lt;A&gt;\""));
        assert!(html.contains(">Foco em força</textarea>"));
        assert!(html.contains("<option value=\"Intermediário\" selected>"));
        assert!(html.contains("name=\"duration\" min=\"1\" value=\"45\""));
        assert!(html.contains("value=\"true\" checked"));
        assert!(html.contains("formaction=\"/workouts/draft/search\""));
    }

    #[test]
    fn test_exercise_form_keeps_submitted_values() {
        let html = exercise_form(&NewExercise {
            name: String::new(),
            muscle_group: "Costas".to_string(),
            description: "Puxada alta".to_string(),
            instructions: "Segure a barra".to_string(),
            is_public: false,
        })
        .into_string();

        assert!(html.contains("<option value=\"Costas\" selected>"));
        assert!(html.contains(">Puxada alta</textarea>"));
        assert!(html.contains(">Segure a barra</textarea>"));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_layout_nav_depends_on_session() {
        let signed_in = layout(
            &Chrome {
                page: Page::Dashboard,
                user_name: Some("Ana"),
                notifications: &[Notification::success("Login realizado com sucesso!")],
            },
            html! { "body" },
        );
        assert!(signed_in.starts_with("<!DOCTYPE html>"));
        assert!(signed_in.contains("id=\"main-nav\""));
        assert!(signed_in.contains("Login realizado com sucesso!"));

        let anonymous = layout(
            &Chrome {
                page: Page::Home,
                user_name: None,
                notifications: &[],
            },
            html! { "body" },
        );
        assert!(!anonymous.contains("id=\"main-nav\""));
        assert!(anonymous.contains("btn-entrar"));
    }

    #[test]
    fn test_library_card_shows_author_and_count() {
        let html = library(&LibraryView {
            workouts: crate::domain::library::CATALOG.to_vec(),
            query: String::new(),
            difficulty: None,
        })
        .into_string();
        assert!(html.contains("Por: João Silva"));
        assert!(html.contains("🏋️ 8 ex."));
        assert!(html.contains("/library/4/add"));
    }
}
