use crate::presentation::auth::{login, logout, register};
use crate::presentation::handlers::{
    add_library_workout, confirm_delete_exercise, confirm_delete_workout, create_exercise,
    create_workout, delete_exercise, delete_workout, health_check, index, search_available,
    show_page, stage_exercise, unstage_exercise,
};
use actix_web::web;

/// Registers every route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/", web::get().to(index))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register))
                .route("/login", web::post().to(login))
                .route("/logout", web::post().to(logout)),
        )
        .route("/exercises", web::post().to(create_exercise))
        .route("/exercises/{id}/delete", web::get().to(confirm_delete_exercise))
        .route("/exercises/{id}/delete", web::post().to(delete_exercise))
        .route("/workouts", web::post().to(create_workout))
        .route("/workouts/draft", web::post().to(stage_exercise))
        .route("/workouts/draft/search", web::post().to(search_available))
        .route("/workouts/draft/{id}/remove", web::post().to(unstage_exercise))
        .route("/workouts/{id}/delete", web::get().to(confirm_delete_workout))
        .route("/workouts/{id}/delete", web::post().to(delete_workout))
        .route("/library/{id}/add", web::post().to(add_library_workout))
        .route("/{page}", web::get().to(show_page));
}
