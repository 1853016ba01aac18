//! Messages sent to the native shell embedding the site in a webview.

use serde::{Deserialize, Serialize};

/// Name of the page-side interface injected by the native shell.
pub const BRIDGE_INTERFACE: &str = "nsWebViewInterface";

/// An action the page can ask the native shell to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum BridgeAction {
    /// Dismiss the webview hosting the site.
    CloseWebView,
}

impl BridgeAction {
    /// The message posted over the bridge.
    pub fn message(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_webview_message() {
        assert_eq!(
            BridgeAction::CloseWebView.message(),
            r#"{"action":"closeWebView"}"#
        );
        let parsed: BridgeAction =
            serde_json::from_str(r#"{"action":"closeWebView"}"#).unwrap();
        assert_eq!(parsed, BridgeAction::CloseWebView);
    }
}
