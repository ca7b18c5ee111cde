pub mod draft;
pub mod error;
pub mod filter;
pub mod library;
pub mod models;
pub mod repository;
pub mod user;
