//! Web layer for the station finder.
//!
//! Provides HTTP endpoints for locating stations by device position or
//! address, plus the HTML frontend.

mod dto;
mod links;
mod routes;
mod state;
pub mod templates;


pub use dto::*;
pub use links::{maps_search_url, phone_url};
pub use routes::{AppError, create_router};
pub use state::{AppState, DEFAULT_REGION_QUALIFIER};
pub use templates::*;
