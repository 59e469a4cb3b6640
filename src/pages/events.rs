//! Events page.

use super::{error_notice, event_card};
use crate::AppState;

pub(super) async fn render(state: &AppState) -> String {
    let list = match state.store.list_events().await {
        Ok(list) => list.iter().map(event_card).collect::<String>(),
        Err(e) => error_notice("Could not load events", &e.message()),
    };

    format!(
        r#"<header>
    <h1>Fundraising Events</h1>
    <p>Mark your calendar and bring a friend! Organizers can add new events from the Admin page.</p>
</header>
<div class="grid">{}</div>"#,
        list
    )
}
