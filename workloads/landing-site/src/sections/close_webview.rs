//! Floating button that asks the native shell to close the webview.

use crate::bridge::{BridgeAction, BRIDGE_INTERFACE};
use crate::html::html_escape;

/// Render the close-webview button and its handler script.
///
/// The script carries `nonce` when a Content Security Policy is active.
pub fn render_close_webview(nonce: Option<&str>) -> String {
    let message = BridgeAction::CloseWebView.message();
    let nonce_attr = nonce
        .map(|n| format!(r#" nonce="{}""#, html_escape(n)))
        .unwrap_or_default();

    format!(
        r#"<div class="close-webview">
    <button type="button" id="close-webview" data-bridge-message="{}">Close webview</button>
</div>
<script{}>
document.getElementById('close-webview').addEventListener('click', function (e) {{
    var bridge = window.{};
    if (bridge) {{ bridge.emit('bridge', JSON.parse(e.currentTarget.dataset.bridgeMessage)); }}
}});
</script>"#,
        html_escape(&message),
        nonce_attr,
        BRIDGE_INTERFACE
    )
}
