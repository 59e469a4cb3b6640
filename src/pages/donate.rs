//! Donate page: hosted checkout with an offline-pledge fallback.

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::{format_currency, html_escape, layout, notice, parse_amount};
use crate::checkout::CheckoutPayload;
use crate::models::{DonationSource, NewDonation};
use crate::router::{Page, Route};
use crate::AppState;

const QUICK_AMOUNTS: [u32; 5] = [10, 25, 50, 100, 250];
const DEFAULT_AMOUNT: f64 = 25.0;

pub const THANK_YOU: &str = "Thank you! Your payment was completed.";
pub const PLEDGE_RECORDED: &str = "Pledge recorded locally. Treasurer can reconcile later.";
pub const FALLBACK_SUFFIX: &str =
    " — using demo pledge instead. See Admin to reconcile after payment.";

#[derive(Debug, Deserialize)]
pub struct DonateForm {
    #[serde(default)]
    amount: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl DonateForm {
    fn pledge(&self) -> NewDonation {
        let mut donation = NewDonation::new(parse_amount(&self.amount), DonationSource::Pledge);
        if let Some(name) = &self.name {
            donation = donation.with_name(name.as_str());
        }
        if let Some(email) = &self.email {
            donation = donation.with_email(email.as_str());
        }
        donation
    }
}

pub(super) fn render(route: &Route) -> String {
    let amount = route
        .query_param("amount")
        .map(parse_amount)
        .filter(|a| *a > 0.0)
        .unwrap_or(DEFAULT_AMOUNT);
    let message = route.payment_succeeded().then_some(THANK_YOU);
    render_form(amount, "", "", message)
}

fn render_form(amount: f64, name: &str, email: &str, message: Option<&str>) -> String {
    let quick: String = QUICK_AMOUNTS
        .iter()
        .map(|v| {
            let class = if f64::from(*v) == amount { "btn" } else { "btn plain" };
            format!(
                r#"<a class="{}" href="/donate?amount={}">{}</a> "#,
                class,
                v,
                format_currency(f64::from(*v))
            )
        })
        .collect();

    format!(
        r#"<div class="card">
    <h1>Make a Donation</h1>
    <p>Your gift powers shelter, stability services, and lasting change for families in Hendricks County.</p>
    <p>{quick}</p>
    <form method="post">
        <label>Other <input type="number" name="amount" min="1" step="any" value="{amount}"></label>
        <label>Full Name (optional) <input name="name" placeholder="Jane Doe" value="{name}"></label>
        <label>Email (for receipt) <input name="email" placeholder="you@example.com" value="{email}"></label>
        <p>
            <button class="btn" type="submit" formaction="/donate/checkout">Donate with Stripe</button>
            <button class="btn plain" type="submit" formaction="/donate/pledge">Record Pledge (Offline)</button>
        </p>
    </form>
    {notice}
</div>
<aside class="notice">
    <p><strong>Stripe Checkout:</strong> card payments are handled on Stripe's hosted page. Set FUNDRAISER_CHECKOUT_URL to the endpoint that returns <code>{{ url }}</code>.</p>
</aside>"#,
        quick = quick,
        amount = amount,
        name = html_escape(name),
        email = html_escape(email),
        notice = notice(message),
    )
}

/// POST /donate/checkout - Redirect to a hosted checkout, or record a pledge if that fails.
pub async fn start_checkout(State(state): State<AppState>, Form(form): Form<DonateForm>) -> Response {
    let public_url = state.config.public_url.trim_end_matches('/');
    let payload = CheckoutPayload {
        amount: parse_amount(&form.amount),
        name: form.name.clone().unwrap_or_default(),
        email: form.email.clone().unwrap_or_default(),
        success_url: format!("{}/donate?success=true", public_url),
        cancel_url: format!("{}/donate", public_url),
    };

    let err = match state.checkout.create_session(&payload).await {
        Ok(url) => {
            tracing::info!("Redirecting donor to hosted checkout");
            return Redirect::to(&url).into_response();
        }
        Err(e) => e,
    };

    tracing::warn!("Checkout unavailable, recording pledge instead: {}", err);
    let message = match state.store.record_donation(form.pledge()).await {
        Ok(_) => format!("{}{}", err.message(), FALLBACK_SUFFIX),
        Err(store_err) => format!(
            "{} — and the fallback pledge failed: {}",
            err.message(),
            store_err.message()
        ),
    };

    let body = render_form(
        payload.amount,
        &payload.name,
        &payload.email,
        Some(&message),
    );
    layout(Page::Donate, &body).into_response()
}

/// POST /donate/pledge - Record an offline pledge.
pub async fn record_pledge(State(state): State<AppState>, Form(form): Form<DonateForm>) -> Response {
    let amount = parse_amount(&form.amount);

    let body = match state.store.record_donation(form.pledge()).await {
        Ok(_) => render_form(amount, "", "", Some(PLEDGE_RECORDED)),
        Err(e) => render_form(
            amount,
            form.name.as_deref().unwrap_or_default(),
            form.email.as_deref().unwrap_or_default(),
            Some(&format!("Error recording pledge: {}", e.message())),
        ),
    };

    layout(Page::Donate, &body).into_response()
}
