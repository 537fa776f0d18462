//! Blocking user dialogs.
//!
//! Every precondition failure and every failed request surfaces through
//! [`alert`]; destructive commands gate on [`confirm`]. Native builds are
//! inert: `confirm` answers no, so no command body runs under test.

/// Show a blocking message dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "browser")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = message;
    }
}

/// Ask a yes/no question. Returns `false` outside a browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "browser")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = message;
        false
    }
}
