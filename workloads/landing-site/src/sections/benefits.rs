//! Benefit highlights.

use landing_content::{Benefits, BenefitsItem};

use crate::html::html_escape;

const IMAGE_ALT_FALLBACK: &str = "Stack Image";

/// Render the benefits section.
pub fn render_benefits(benefits: &Benefits) -> String {
    let items: String = benefits.items.iter().map(render_benefit).collect();

    format!(
        r#"<section id="benefits" class="benefits" data-section="benefits">
    <div class="section-heading">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="benefits-grid">{}
    </div>
</section>"#,
        html_escape(&benefits.title),
        html_escape(&benefits.description),
        items
    )
}

fn render_benefit(item: &BenefitsItem) -> String {
    format!(
        r#"
        <div class="benefit" data-id="{}">
            <div class="benefit-icon"><img src="{}" alt="{}" height="{}" width="{}" loading="lazy"></div>
            <div class="benefit-body">
                <h3>{}</h3>
                <p>{}</p>
            </div>
        </div>"#,
        html_escape(&item.id),
        html_escape(&item.image.url),
        html_escape(item.image.alt_or(IMAGE_ALT_FALLBACK)),
        item.image.height,
        item.image.width,
        html_escape(&item.title),
        html_escape(&item.description)
    )
}
