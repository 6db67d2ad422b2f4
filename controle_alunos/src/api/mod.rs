//! Typed access to the remote school REST API.
//!
//! Only compiled on the server: the browser talks to it through the server
//! functions in [`crate::services`].

pub mod alunos;
pub mod auth;
mod client;

pub use client::{ApiClient, ApiError};
