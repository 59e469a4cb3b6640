//! Server-rendered pages.
//!
//! Every page renders inside the same shell. Handlers never fail: store or
//! checkout errors become a plain notice on the page.

mod about;
mod admin;
mod donate;
mod events;
mod home;

pub use admin::{add_event, add_offline_donation, unlock};
pub use donate::{record_pledge, start_checkout};
pub use home::run_checks;

use axum::{
    extract::State,
    http::Uri,
    response::Html,
};
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Event, Totals};
use crate::router::{Page, Route};
use crate::AppState;

const SITE_TITLE: &str = "BHS DECA × Family Promise";
const SITE_SUBTITLE: &str = "Hendricks County Fundraiser";

const BASE_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #1e293b;
       background: linear-gradient(120deg, #3b82f6, #ec4899, #a855f7, #22c55e); min-height: 100vh; }
a { text-decoration: none; color: inherit; }
header, footer { background: rgba(255,255,255,0.8); }
.bar { max-width: 72rem; margin: 0 auto; padding: 0.75rem 1rem; display: flex; justify-content: space-between; align-items: center; }
nav a { padding: 0.5rem 0.75rem; border-radius: 0.75rem; }
nav a.active, .btn { background: linear-gradient(90deg, #4f46e5, #0ea5e9); color: #fff; }
.btn { display: inline-block; border: 0; padding: 0.5rem 1rem; border-radius: 0.75rem; cursor: pointer; font-weight: 600; }
.btn.plain { background: #fff; color: #1e293b; border: 1px solid #cbd5e1; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
.card { background: #fff; border-radius: 1.5rem; padding: 1.25rem; margin-bottom: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.25rem; }
.progress { background: #e2e8f0; border-radius: 999px; height: 0.5rem; overflow: hidden; width: 10rem; }
.progress div { height: 100%; background: linear-gradient(90deg, #4f46e5, #0ea5e9); }
.notice { color: #475569; font-size: 0.9rem; }
.pass { color: #047857; } .fail { color: #dc2626; }
input, textarea { padding: 0.5rem; border: 1px solid #cbd5e1; border-radius: 0.75rem; }
"#;

/// GET /, /donate, /events, /about, /admin and any unknown path.
pub async fn show_page(State(state): State<AppState>, uri: Uri) -> Html<String> {
    let raw = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let route = Route::resolve(raw);
    tracing::debug!("Rendering {:?} for {}", route.page, raw);

    let body = match route.page {
        Page::Home => home::render(&state, None).await,
        Page::Donate => donate::render(&route),
        Page::Events => events::render(&state).await,
        Page::About => about::render(&state).await,
        Page::Admin => admin::render_locked(None),
    };

    layout(route.page, &body)
}

/// Wrap a page body in the site shell.
fn layout(active: Page, body: &str) -> Html<String> {
    let nav: String = Page::ALL
        .iter()
        .map(|page| {
            let class = if *page == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{}"{}>{}</a>"#, page.path(), class, page.label())
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} · {page}</title>
    <style>{css}</style>
</head>
<body>
    <header>
        <div class="bar">
            <a href="/"><strong>{title}</strong><br><small>{subtitle}</small></a>
            <nav>{nav}</nav>
        </div>
    </header>
    <main>
{body}
    </main>
    <footer>
        <div class="bar">
            <p>&copy; {year} Brownsburg High School DECA &amp; Family Promise of Hendricks County</p>
        </div>
    </footer>
</body>
</html>"#,
        title = html_escape(SITE_TITLE),
        subtitle = SITE_SUBTITLE,
        page = active.label(),
        css = BASE_CSS,
        nav = nav,
        body = body,
        year = Utc::now().format("%Y"),
    ))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// US-dollar formatting with thousands separators, e.g. `$1,234.50`.
fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// `2025-09-20` becomes `9/20/2025`; anything unparsable is shown as given.
fn format_event_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn format_timestamp(rfc3339: &str) -> String {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc).format("%-m/%-d/%Y, %-I:%M %p UTC").to_string())
        .unwrap_or_else(|_| rfc3339.to_string())
}

fn notice(message: Option<&str>) -> String {
    match message {
        Some(m) if !m.is_empty() => format!(r#"<p class="notice">{}</p>"#, html_escape(m)),
        _ => String::new(),
    }
}

fn error_notice(context: &str, message: &str) -> String {
    format!(
        r#"<p class="notice fail">{}: {}</p>"#,
        html_escape(context),
        html_escape(message)
    )
}

fn event_card(event: &Event) -> String {
    let url = if event.url.is_empty() { "#" } else { &event.url };
    let cta = if event.cta.is_empty() { "Learn More" } else { &event.cta };
    format!(
        r#"<article class="card">
    <div class="notice">{date} • {time}</div>
    <h3>{title}</h3>
    <div>{location}</div>
    <p>{desc}</p>
    <a class="btn" href="{url}">{cta}</a>
</article>"#,
        date = html_escape(&format_event_date(&event.date)),
        time = html_escape(&event.time),
        title = html_escape(&event.title),
        location = html_escape(&event.location),
        desc = html_escape(&event.desc),
        url = html_escape(url),
        cta = html_escape(cta),
    )
}

/// Ring chart of progress toward the goal.
fn donut_chart(totals: &Totals) -> String {
    const SIZE: f64 = 112.0;
    const STROKE: f64 = 10.0;

    let pct = if totals.goal > 0.0 {
        (totals.total_raised / totals.goal * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let r = (SIZE - STROKE) / 2.0;
    let c = 2.0 * std::f64::consts::PI * r;
    let dash = pct / 100.0 * c;

    format!(
        r##"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}">
    <g transform="translate({half}, {half})">
        <circle r="{r}" fill="none" stroke="#e2e8f0" stroke-width="{stroke}"/>
        <circle r="{r}" fill="none" stroke="#0f172a" stroke-width="{stroke}" stroke-dasharray="{dash:.2} {rest:.2}" stroke-linecap="round" transform="rotate(-90)"/>
        <text x="0" y="6" text-anchor="middle" font-size="14" font-weight="700">{pct:.0}%</text>
    </g>
</svg>"##,
        size = SIZE,
        half = SIZE / 2.0,
        r = r,
        stroke = STROKE,
        dash = dash,
        rest = c - dash,
        pct = pct,
    )
}

/// Parse a form amount; anything unparsable counts as zero.
fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(25.0), "$25.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(10000.0), "$10,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-5.0), "-$5.00");
    }

    #[test]
    fn test_format_event_date() {
        assert_eq!(format_event_date("2025-09-20"), "9/20/2025");
        assert_eq!(format_event_date("next week"), "next week");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>"x" & 'y'</script>"#),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 25 "), 25.0);
        assert_eq!(parse_amount("-10.5"), -10.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_layout_marks_active_page() {
        let Html(page) = layout(Page::Events, "<p>body</p>");
        assert!(page.contains(r#"<a href="/events" class="active">Events</a>"#));
        assert!(page.contains(r#"<a href="/donate">Donate</a>"#));
        assert!(page.contains("<p>body</p>"));
    }

    #[test]
    fn test_event_card_defaults_cta() {
        let card = event_card(&Event {
            id: "x".to_string(),
            title: "Car <Wash>".to_string(),
            date: "2025-10-05".to_string(),
            time: "9:00 AM".to_string(),
            location: "Lot".to_string(),
            desc: String::new(),
            cta: String::new(),
            url: String::new(),
        });
        assert!(card.contains("Car &lt;Wash&gt;"));
        assert!(card.contains("10/5/2025"));
        assert!(card.contains(r##"href="#">Learn More</a>"##));
    }
}
