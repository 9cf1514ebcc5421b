//! Calls into the webview: scroll metrics, smooth scrolling, fullscreen and
//! clipboard. Each call is a one-shot `document::eval`.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::constants::{
    CLIPBOARD_SCRIPT, FULLSCREEN_TOGGLE_SCRIPT, ROW_METRICS_SCRIPT, ROW_SCROLL_SCRIPT,
};
use crate::core::row_scroll::ScrollMetrics;
use crate::error::ShellError;

/// Reply shape shared by the fullscreen and clipboard scripts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct BridgeReply {
    ok: bool,
    active: Option<bool>,
    error: Option<String>,
}

impl BridgeReply {
    fn into_result(self) -> Result<Option<bool>, ShellError> {
        if self.ok {
            Ok(self.active)
        } else {
            Err(ShellError::Bridge(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Quote a value as a JS literal.
fn js_literal<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ShellError> {
    serde_json::to_string(value).map_err(|err| ShellError::Payload(err.to_string()))
}

fn row_script(template: &str, row_id: &str) -> Result<String, ShellError> {
    Ok(template.replace("__ROW_ID__", &js_literal(row_id)?))
}

/// Current geometry of the row container, `None` if it isn't mounted.
pub async fn read_scroll_metrics(row_id: &str) -> Result<Option<ScrollMetrics>, ShellError> {
    let script = row_script(ROW_METRICS_SCRIPT, row_id)?;
    document::eval(&script)
        .join::<Option<ScrollMetrics>>()
        .await
        .map_err(|err| ShellError::Bridge(err.to_string()))
}

/// Smooth-scroll the row container by `delta` pixels.
pub async fn scroll_row_by(row_id: &str, delta: f64) -> Result<bool, ShellError> {
    let script = row_script(ROW_SCROLL_SCRIPT, row_id)?.replace("__DELTA__", &js_literal(&delta)?);
    document::eval(&script)
        .join::<bool>()
        .await
        .map_err(|err| ShellError::Bridge(err.to_string()))
}

/// Toggle fullscreen; returns the fullscreen state the webview reports afterwards.
pub async fn toggle_fullscreen() -> Result<bool, ShellError> {
    let reply = document::eval(FULLSCREEN_TOGGLE_SCRIPT)
        .join::<BridgeReply>()
        .await
        .map_err(|err| ShellError::Bridge(err.to_string()))?;
    reply
        .into_result()?
        .ok_or_else(|| ShellError::Payload("missing fullscreen state".to_string()))
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), ShellError> {
    let script = CLIPBOARD_SCRIPT.replace("__TEXT__", &js_literal(text)?);
    let reply = document::eval(&script)
        .join::<BridgeReply>()
        .await
        .map_err(|err| ShellError::Bridge(err.to_string()))?;
    reply.into_result().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_is_quoted() {
        let script = row_script(ROW_METRICS_SCRIPT, "row-\"1\"").unwrap();
        assert!(script.contains(r#"document.getElementById("row-\"1\"")"#));
    }

    #[test]
    fn test_failed_reply_maps_to_bridge_error() {
        let reply: BridgeReply =
            serde_json::from_str(r#"{"ok": false, "active": false, "error": "TypeError"}"#).unwrap();
        assert_eq!(reply.into_result(), Err(ShellError::Bridge("TypeError".to_string())));
    }

    #[test]
    fn test_ok_reply_carries_state() {
        let reply: BridgeReply =
            serde_json::from_str(r#"{"ok": true, "active": true, "error": null}"#).unwrap();
        assert_eq!(reply.into_result(), Ok(Some(true)));
    }
}
