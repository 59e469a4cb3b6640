//! About page: the team and the campaign's purpose.

use super::{error_notice, html_escape};
use crate::AppState;

pub(super) async fn render(state: &AppState) -> String {
    let team = match state.store.list_team().await {
        Ok(team) => team
            .iter()
            .map(|t| {
                format!(
                    r#"<figure class="card">
    <img src="{img}" alt="{name}" style="width: 100%; height: 11rem; object-fit: cover; border-radius: 1rem">
    <figcaption><strong>{name}</strong><br><span class="notice">{role}</span></figcaption>
</figure>"#,
                    img = html_escape(&t.img),
                    name = html_escape(&t.name),
                    role = html_escape(&t.role),
                )
            })
            .collect::<String>(),
        Err(e) => error_notice("Could not load team", &e.message()),
    };

    format!(
        r#"<header>
    <h1>About the Campaign</h1>
    <p>This partnership brings together student leaders from DECA and the mission-driven team at Family Promise of Hendricks County.</p>
</header>
<section class="grid">{}</section>
<section class="card">
    <h2>Our Why</h2>
    <p>Family Promise of Hendricks County provides emergency shelter, housing assistance, and stability services to families experiencing homelessness. Brownsburg High School DECA students are learning by doing — engaging the community, organizing events, and raising funds that create real impact.</p>
</section>"#,
        team
    )
}
