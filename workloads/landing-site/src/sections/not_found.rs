//! 404 page body.

/// Title of the not-found page.
pub const NOT_FOUND_TITLE: &str = "Error 404 - Page Not Found";

/// Render the not-found section.
pub fn render_not_found() -> String {
    r#"<section class="not-found" data-section="not-found">
    <p class="not-found-code">404</p>
    <p class="not-found-message">Page Not Found</p>
</section>"#
        .to_string()
}
