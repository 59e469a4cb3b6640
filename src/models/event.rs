//! Fundraising event listing.

use serde::{Deserialize, Serialize};

/// A fundraising event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub desc: String,
    /// Call-to-action button label
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub url: String,
}

/// Request body for creating an event. No field is required at this layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub url: String,
}

impl NewEvent {
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            desc: self.desc,
            cta: self.cta,
            url: self.url,
        }
    }
}
