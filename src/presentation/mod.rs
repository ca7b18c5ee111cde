pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod notifications;
pub mod router;
pub mod routes;
pub mod views;
