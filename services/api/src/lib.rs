//! Reserva booking backend
//!
//! HTTP/JSON API for user registration and login, a listing catalog, feedback
//! collection and booking requests with a pending/accepted/rejected workflow.

pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

pub use state::AppState;
