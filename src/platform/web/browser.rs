use anyhow::{anyhow, Result};
use dioxus::logger::tracing::{error, warn};

use crate::usecase::ports::notifier::Notifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!("no window to alert on: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            error!("alert failed: {err:?}");
        }
    }
}

/// The page origin, so requests go back to the server that served the app.
pub fn default_base_url() -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("找不到瀏覽器視窗物件"))?;
    window
        .location()
        .origin()
        .map_err(|err| anyhow!("無法取得頁面來源：{err:?}"))
}
