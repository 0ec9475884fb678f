pub mod auth;
pub mod fairness;
pub mod health;
pub mod patients;
pub mod sharing;
pub mod tracking;
pub mod version;
