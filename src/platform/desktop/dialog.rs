use anyhow::Result;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::config::env_base_url;
use crate::usecase::ports::notifier::Notifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("失物招領")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

pub fn default_base_url() -> Result<String> {
    Ok(env_base_url())
}
