//! Home page: campaign pitch, progress, upcoming events and the built-in checks.

use axum::{extract::State, response::Html};

use super::{
    donut_chart, error_notice, event_card, format_currency, format_timestamp, html_escape, layout,
};
use crate::router::Page;
use crate::selfcheck::{run_self_check, CheckResult};
use crate::AppState;

pub(super) async fn render(state: &AppState, checks: Option<&[CheckResult]>) -> String {
    let progress = match state.store.get_totals().await {
        Ok(totals) => {
            let pct = totals.percent();
            format!(
                r#"<div class="card">
    <strong>Fundraising Progress</strong>
    {donut}
    <div><strong>{raised}</strong> of {goal} goal</div>
    <div class="progress"><div style="width: {pct}%"></div></div>
    <div class="notice">{pct}%</div>
    <p class="notice">Last updated: {updated}</p>
</div>"#,
                donut = donut_chart(&totals),
                raised = format_currency(totals.total_raised),
                goal = format_currency(totals.goal),
                pct = pct,
                updated = html_escape(&format_timestamp(&totals.last_updated)),
            )
        }
        Err(e) => error_notice("Could not load totals", &e.message()),
    };

    let events = match state.store.list_events().await {
        Ok(list) => list.iter().map(event_card).collect::<String>(),
        Err(e) => error_notice("Could not load events", &e.message()),
    };

    format!(
        r#"<section>
    <h1>Together, we can end family homelessness.</h1>
    <p>Brownsburg High School DECA and Family Promise of Hendricks County are teaming up to raise funds for housing, stability, and hope. Every dollar moves a family closer to home.</p>
    <p><a class="btn" href="/donate">Donate Now</a> <a class="btn plain" href="/events">See Events</a></p>
    {progress}
</section>
<section>
    <h2>Upcoming Fundraising Events</h2>
    <p>Join us! These events are easy to update and add to over time.</p>
    <div class="grid">{events}</div>
</section>
{panel}"#,
        progress = progress,
        events = events,
        panel = check_panel(state, checks),
    )
}

fn check_panel(state: &AppState, checks: Option<&[CheckResult]>) -> String {
    if state.local.is_none() {
        return r#"<section class="card"><h3>Built-in Checks</h3><p class="notice">Checks run only against the local store.</p></section>"#.to_string();
    }

    let items = match checks {
        None | Some([]) => r#"<li class="notice">No tests run yet.</li>"#.to_string(),
        Some(results) => results
            .iter()
            .map(|r| {
                let (class, mark) = if r.pass { ("pass", "✓") } else { ("fail", "✗") };
                let info = if r.info.is_empty() {
                    String::new()
                } else {
                    format!(" <em>— {}</em>", html_escape(&r.info))
                };
                format!(
                    r#"<li class="{}">{} {}{}</li>"#,
                    class,
                    mark,
                    html_escape(&r.name),
                    info
                )
            })
            .collect(),
    };

    format!(
        r#"<section class="card">
    <form method="post" action="/selfcheck">
        <h3>Built-in Checks</h3>
        <button class="btn" type="submit">Run Tests</button>
    </form>
    <ul>{}</ul>
</section>"#,
        items
    )
}

/// POST /selfcheck - Run the built-in checks and show the home page with results.
pub async fn run_checks(State(state): State<AppState>) -> Html<String> {
    let results = match &state.local {
        Some(local) => run_self_check(local).await,
        None => Vec::new(),
    };
    let body = render(&state, Some(&results)).await;
    layout(Page::Home, &body)
}
