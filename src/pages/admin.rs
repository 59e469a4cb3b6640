//! Admin page: PIN screen, offline donations and new events.
//!
//! The PIN travels with every admin form and is re-checked on each post.

use axum::{
    extract::{Form, State},
    response::Html,
};
use serde::Deserialize;

use super::{error_notice, format_currency, html_escape, layout, notice, parse_amount};
use crate::auth::pin_matches;
use crate::models::{DonationSource, NewDonation, NewEvent};
use crate::router::Page;
use crate::AppState;

const DEFAULT_CTA: &str = "RSVP";

#[derive(Debug, Deserialize)]
pub struct UnlockForm {
    #[serde(default)]
    pin: String,
}

#[derive(Debug, Deserialize)]
pub struct OfflineDonationForm {
    #[serde(default)]
    pin: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct EventForm {
    #[serde(default)]
    pin: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    cta: String,
    #[serde(default)]
    url: String,
}

impl EventForm {
    fn into_new_event(self) -> NewEvent {
        NewEvent {
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            desc: self.desc,
            cta: if self.cta.trim().is_empty() {
                DEFAULT_CTA.to_string()
            } else {
                self.cta
            },
            url: self.url,
        }
    }
}

pub(super) fn render_locked(message: Option<&str>) -> String {
    format!(
        r#"<div class="card">
    <h1>Admin Access</h1>
    <p>Enter the admin PIN to manage totals and events.</p>
    <form method="post" action="/admin/unlock">
        <input name="pin" placeholder="PIN" type="password">
        <button class="btn" type="submit">Unlock</button>
    </form>
    {}
</div>"#,
        notice(message)
    )
}

async fn render_panel(state: &AppState, pin: &str, message: Option<&str>) -> String {
    let totals = match state.store.get_totals().await {
        Ok(t) => format!(
            "Current: <strong>{}</strong> of {}",
            format_currency(t.total_raised),
            format_currency(t.goal)
        ),
        Err(e) => error_notice("Could not load totals", &e.message()),
    };
    let pin = html_escape(pin);

    format!(
        r#"{notice}
<section class="card">
    <h2>Totals</h2>
    <div>{totals}</div>
    <form method="post" action="/admin/donations">
        <input type="hidden" name="pin" value="{pin}">
        <input type="number" name="amount" min="1" step="any" placeholder="Amount">
        <input name="name" placeholder="Donor name (optional)">
        <button class="btn" type="submit">Add Offline Donation</button>
    </form>
</section>
<section class="card">
    <h2>Add Event</h2>
    <form method="post" action="/admin/events">
        <input type="hidden" name="pin" value="{pin}">
        <input name="title" placeholder="Event title">
        <input type="date" name="date">
        <input name="time" placeholder="Time (e.g. 6:00 PM)">
        <input name="location" placeholder="Location">
        <input name="cta" placeholder="CTA (Register/RSVP)" value="{cta}">
        <input name="url" placeholder="Link URL">
        <textarea name="desc" placeholder="Event description" rows="3"></textarea>
        <button class="btn" type="submit">Add Event</button>
    </form>
</section>"#,
        notice = notice(message),
        totals = totals,
        pin = pin,
        cta = DEFAULT_CTA,
    )
}

fn locked_page() -> Html<String> {
    layout(Page::Admin, &render_locked(Some("Incorrect PIN.")))
}

/// POST /admin/unlock - Check the PIN and show the admin panel.
pub async fn unlock(State(state): State<AppState>, Form(form): Form<UnlockForm>) -> Html<String> {
    if !pin_matches(&form.pin, &state.config.admin_pin) {
        tracing::warn!("Rejected admin PIN attempt");
        return locked_page();
    }
    layout(Page::Admin, &render_panel(&state, &form.pin, None).await)
}

/// POST /admin/donations - Record an offline donation. Non-positive amounts are ignored.
pub async fn add_offline_donation(
    State(state): State<AppState>,
    Form(form): Form<OfflineDonationForm>,
) -> Html<String> {
    if !pin_matches(&form.pin, &state.config.admin_pin) {
        return locked_page();
    }

    let amount = parse_amount(&form.amount);
    let message = if amount > 0.0 {
        let donation = NewDonation::new(amount, DonationSource::Offline).with_name(form.name);
        match state.store.record_donation(donation).await {
            Ok(_) => None,
            Err(e) => Some(format!("Error recording donation: {}", e.message())),
        }
    } else {
        None
    };

    layout(
        Page::Admin,
        &render_panel(&state, &form.pin, message.as_deref()).await,
    )
}

/// POST /admin/events - Add an event. Title and date are required; otherwise nothing happens.
pub async fn add_event(State(state): State<AppState>, Form(form): Form<EventForm>) -> Html<String> {
    if !pin_matches(&form.pin, &state.config.admin_pin) {
        return locked_page();
    }

    let pin = form.pin.clone();
    let message = if form.title.trim().is_empty() || form.date.trim().is_empty() {
        None
    } else {
        match state.store.record_event(form.into_new_event()).await {
            Ok(_) => Some("Event added!".to_string()),
            Err(e) => Some(format!("Error adding event: {}", e.message())),
        }
    };

    layout(
        Page::Admin,
        &render_panel(&state, &pin, message.as_deref()).await,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_form_defaults_cta() {
        let form = EventForm {
            pin: String::new(),
            title: "Car Wash".to_string(),
            date: "2025-11-01".to_string(),
            time: String::new(),
            location: String::new(),
            desc: String::new(),
            cta: "  ".to_string(),
            url: String::new(),
        };
        let event = form.into_new_event();
        assert_eq!(event.cta, "RSVP");
        assert_eq!(event.title, "Car Wash");
    }

    #[test]
    fn test_locked_screen_has_pin_form() {
        let html = render_locked(None);
        assert!(html.contains(r#"action="/admin/unlock""#));
        assert!(!html.contains("Add Offline Donation"));
    }
}
