//! Technology stack cards.

use landing_content::{Stack, StackItem};

use crate::html::html_escape;

const IMAGE_ALT_FALLBACK: &str = "Stack Image";

/// Render the stack section.
pub fn render_stack(stack: &Stack) -> String {
    let cards: String = stack.items.iter().map(render_stack_item).collect();

    format!(
        r#"<section id="stack" class="stack" data-section="stack">
    <div class="section-heading">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="stack-grid">{}
    </div>
</section>"#,
        html_escape(&stack.title),
        html_escape(&stack.description),
        cards
    )
}

fn render_stack_item(item: &StackItem) -> String {
    let list: String = item
        .list
        .items
        .iter()
        .map(|entry| {
            format!(
                r#"<li data-id="{}"><span>{}</span></li>"#,
                html_escape(&entry.id),
                html_escape(&entry.label)
            )
        })
        .collect();

    format!(
        r#"
        <div class="stack-card" data-id="{}">
            <div class="stack-badge"><img src="{}" alt="{}" height="{}" width="{}" loading="lazy"></div>
            <h3>{}</h3>
            <ul>{}</ul>
        </div>"#,
        html_escape(&item.id),
        html_escape(&item.image.url),
        html_escape(item.image.alt_or(IMAGE_ALT_FALLBACK)),
        item.image.height,
        item.image.width,
        html_escape(&item.title),
        list
    )
}

#[cfg(test)]
mod tests {
    use landing_content::{Image, StackList, StackListItem};

    use super::*;

    #[test]
    fn test_stack_card_with_fallback_alt() {
        let stack = Stack {
            title: "Our stack".into(),
            description: "Tools".into(),
            items: vec![StackItem {
                id: "k1".into(),
                image: Image {
                    alt: None,
                    url: "https://img/rust.svg".into(),
                    height: 48,
                    width: 48,
                },
                title: "Rust".into(),
                list: StackList {
                    items: vec![StackListItem {
                        id: "i1".into(),
                        label: "tokio".into(),
                    }],
                },
            }],
        };

        let html = render_stack(&stack);
        assert!(html.contains(r#"id="stack""#));
        assert!(html.contains(r#"alt="Stack Image""#));
        assert!(html.contains(r#"height="48" width="48""#));
        assert!(html.contains("<span>tokio</span>"));
    }
}
