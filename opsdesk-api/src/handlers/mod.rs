pub mod auth;
pub mod clients;
pub mod forms;
pub mod payments;
pub mod portals;
pub mod projects;
pub mod tracking;
