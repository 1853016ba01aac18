//! Headline numbers.

use landing_content::Stats;

use crate::html::html_escape;

/// Render the stats strip.
pub fn render_stats(stats: &Stats) -> String {
    let items: String = stats
        .items
        .iter()
        .map(|item| {
            format!(
                r#"
            <li class="stat" data-id="{}">
                <div class="stat-title">{}</div>
                <div class="stat-subtitle">{}</div>
            </li>"#,
                html_escape(&item.id),
                html_escape(&item.title),
                html_escape(&item.subtitle)
            )
        })
        .collect();

    format!(
        r#"<section class="stats" data-section="stats">
    <ul class="stats-grid">{}
    </ul>
</section>"#,
        items
    )
}
