pub mod file;
pub mod memory;
pub mod session_repository;
pub mod store;
pub mod user_repository;
