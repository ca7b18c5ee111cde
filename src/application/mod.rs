pub mod auth_service;
pub mod exercise_service;
pub mod library_service;
pub mod profile_service;
pub mod workout_service;
