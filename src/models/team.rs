//! Campaign team member shown on the About page.

use serde::{Deserialize, Serialize};

/// A member of the campaign team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Portrait image URL
    pub img: String,
}
