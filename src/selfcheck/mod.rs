//! Built-in checks run from the home page against the local store.
//!
//! Storage is backed up and cleared before the run and always put back after,
//! whatever happens in between. The store stays locked for the whole run, so
//! other requests wait instead of writing into the cleared collections.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::{DonationSource, NewDonation, NewEvent};
use crate::store::{LocalStore, StoreSession};

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub pass: bool,
    pub info: String,
}

impl CheckResult {
    fn new(name: &str, pass: bool, info: String) -> Self {
        Self {
            name: name.to_string(),
            pass,
            info,
        }
    }
}

/// Run the checks and restore storage afterwards.
pub async fn run_self_check(store: &LocalStore) -> Vec<CheckResult> {
    let session = store.session().await;

    let snapshot = match session.backup().await {
        Ok(snapshot) => snapshot,
        Err(e) => return vec![CheckResult::new("unexpected error", false, e.message())],
    };

    let mut results = Vec::new();
    if let Err(e) = run_checks(&session, &mut results).await {
        results.push(CheckResult::new("unexpected error", false, e.message()));
    }

    if let Err(e) = session.restore(snapshot).await {
        tracing::error!("Self-check could not restore storage: {}", e);
        results.push(CheckResult::new("restore storage", false, e.message()));
    }

    let passed = results.iter().filter(|r| r.pass).count();
    tracing::info!("Self-check finished: {}/{} passed", passed, results.len());

    results
}

async fn run_checks(
    store: &StoreSession<'_>,
    results: &mut Vec<CheckResult>,
) -> Result<(), AppError> {
    store.clear().await?;

    let totals = store.totals().await?;
    results.push(CheckResult::new(
        "getTotals default values",
        totals.total_raised == 0.0 && totals.goal == store.goal(),
        String::new(),
    ));

    store
        .record_donation(NewDonation::new(50.0, DonationSource::Test).with_name("Test Donor"))
        .await?;
    let totals = store.totals().await?;
    results.push(CheckResult::new(
        "addDonation increments by 50",
        totals.total_raised == 50.0,
        format!("now={}", totals.total_raised),
    ));

    let before = store.events().await?.len();
    store
        .record_event(NewEvent {
            title: "Test Event".to_string(),
            date: "2025-12-31".to_string(),
            time: "6:00 PM".to_string(),
            location: "Gym".to_string(),
            desc: "Test".to_string(),
            cta: "RSVP".to_string(),
            url: "#".to_string(),
        })
        .await?;
    let after = store.events().await?.len();
    results.push(CheckResult::new(
        "addEvent adds one",
        after == before + 1,
        format!("before={}, after={}", before, after),
    ));

    store
        .record_donation(NewDonation::new(-999.0, DonationSource::Test).with_name("Neg Test"))
        .await?;
    let totals = store.totals().await?;
    results.push(CheckResult::new(
        "negative donation clamps ≥ 0",
        totals.total_raised >= 0.0,
        format!("now={}", totals.total_raised),
    ));

    let team = store.team().await?;
    results.push(CheckResult::new(
        "team list seeded",
        !team.is_empty(),
        format!("len={}", team.len()),
    ));

    let donations = store.donations().await?;
    results.push(CheckResult::new(
        "donations list has entries",
        !donations.is_empty(),
        format!("len={}", donations.len()),
    ));

    Ok(())
}
