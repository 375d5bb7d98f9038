use anyhow::Result;
use dioxus::logger::tracing::info;

use crate::config::env_base_url;
use crate::usecase::ports::notifier::Notifier;

/// Used by targets without a native dialog (mobile, server); notices go to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("notice: {message}");
    }
}

pub fn default_base_url() -> Result<String> {
    Ok(env_base_url())
}
