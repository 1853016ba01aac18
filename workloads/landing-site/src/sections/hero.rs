//! Hero banner.

use landing_content::Hero;

use crate::config::SITE_NAME;
use crate::html::html_escape;

/// Render the hero banner with the site name as headline.
pub fn render_hero(hero: &Hero) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <h1 class="hero-headline">{}</h1>
        <p class="hero-description">{}</p>
    </div>
</section>"#,
        SITE_NAME,
        html_escape(&hero.description)
    )
}
