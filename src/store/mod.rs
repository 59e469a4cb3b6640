//! Persistence facade over the four fundraising collections.
//!
//! One interface, two implementations: [`LocalStore`] keeps JSON entries in the
//! local SQLite database, [`RemoteStore`] forwards every call to an HTTP API.
//! The backend is picked once at startup and injected through `AppState`.

mod local;
mod remote;
mod seed;

pub use local::*;
pub use remote::*;
pub use seed::*;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Donation, Event, NewDonation, NewEvent, TeamMember, Totals};

/// Storage keys of the local layout.
pub mod keys {
    pub const TOTALS: &str = "fundraise_totals";
    pub const DONATIONS: &str = "fundraise_donations";
    pub const EVENTS: &str = "fundraise_events";
    pub const TEAM: &str = "fundraise_team";

    pub const ALL: [&str; 4] = [TOTALS, DONATIONS, EVENTS, TEAM];
}

#[async_trait]
pub trait FundraisingStore: Send + Sync {
    /// Seed the events and team collections if they do not exist yet.
    async fn initialize(&self) -> Result<(), AppError>;

    async fn get_totals(&self) -> Result<Totals, AppError>;

    async fn list_donations(&self) -> Result<Vec<Donation>, AppError>;

    /// List events, seeding the collection on first access.
    async fn list_events(&self) -> Result<Vec<Event>, AppError>;

    /// List team members, seeding the collection on first access.
    async fn list_team(&self) -> Result<Vec<TeamMember>, AppError>;

    /// Append a donation and return the updated totals.
    ///
    /// The resulting total is clamped at zero, so negative amounts act as
    /// corrections that can never drive the total below nothing.
    async fn record_donation(&self, donation: NewDonation) -> Result<Totals, AppError>;

    /// Append an event and return the full list.
    async fn record_event(&self, event: NewEvent) -> Result<Vec<Event>, AppError>;
}
