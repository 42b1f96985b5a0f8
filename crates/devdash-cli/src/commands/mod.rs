pub mod auth;
pub mod dashboard;
pub mod goals;
pub mod repos;
pub mod resources;
