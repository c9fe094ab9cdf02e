//! HTTP API module for the HR Insights Engine.
//!
//! This module provides the REST API endpoint for computing an employee's
//! dashboard summary from a data snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SummaryRequest;
pub use response::ApiError;
pub use state::AppState;
