//! Data models for the fundraiser.
//!
//! Field names match the persisted JSON layout and the remote API bodies.

mod donation;
mod event;
mod team;
mod totals;

pub use donation::*;
pub use event::*;
pub use team::*;
pub use totals::*;
