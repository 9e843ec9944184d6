//! Web layer for the trip server.
//!
//! Provides the HTTP endpoint that plans trips.

mod dto;
mod error;
mod routes;
mod state;


pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
