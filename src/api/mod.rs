//! JSON persistence API.
//!
//! Bodies are the bare entity shapes, so another deployment can point its
//! remote store at this one. Errors use the `{success, error}` envelope.

mod events;
mod fundraising;
mod team;

pub use events::*;
pub use fundraising::*;
pub use team::*;

use axum::Json;

use crate::errors::AppError;

/// Response type for API handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;
