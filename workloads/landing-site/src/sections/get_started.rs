//! Terminal-style list of setup commands.

use landing_content::GetStarted;

use crate::html::html_escape;

/// Render the get-started section, one terminal line per command in order.
pub fn render_get_started(get_started: &GetStarted) -> String {
    let commands: String = get_started
        .commands
        .iter()
        .map(|command| {
            format!(
                r#"
                <div class="command" data-id="{}"><code>{}</code></div>"#,
                html_escape(&command.id),
                html_escape(&command.command)
            )
        })
        .collect();

    format!(
        r#"<section id="get-started" class="get-started" data-section="get-started">
    <h2>{}</h2>
    <p>{}</p>
    <div class="terminal">
        <div class="terminal-bar"><span></span><span></span><span></span></div>
        <div class="terminal-body">{}
        </div>
    </div>
</section>"#,
        html_escape(&get_started.title),
        html_escape(&get_started.description),
        commands
    )
}

#[cfg(test)]
mod tests {
    use landing_content::GetStartedCommand;

    use super::*;

    #[test]
    fn test_commands_in_order() {
        let html = render_get_started(&GetStarted {
            title: "Get started".into(),
            description: "Run".into(),
            commands: vec![
                GetStartedCommand {
                    id: "1".into(),
                    command: "git clone repo".into(),
                },
                GetStartedCommand {
                    id: "2".into(),
                    command: "cargo run > out.html".into(),
                },
            ],
        });
        let first = html.find("git clone repo").unwrap();
        let second = html.find("cargo run &gt; out.html").unwrap();
        assert!(first < second);
    }
}
