use std::rc::Rc;

use dioxus::prelude::*;

use crate::error::UiError;

/// A rendered element captured through `onmounted`, looked up by the selector it carries in markup.
#[derive(Clone, Copy)]
pub struct MountedElement {
    selector: &'static str,
    handle: Signal<Option<Rc<MountedData>>>,
}

pub fn use_mounted_element(selector: &'static str) -> MountedElement {
    MountedElement {
        selector,
        handle: use_signal(|| None::<Rc<MountedData>>),
    }
}

impl MountedElement {
    pub fn on_mounted(&mut self, event: MountedEvent) {
        self.handle.set(Some(event.data()));
    }

    pub fn get(&self) -> Result<Rc<MountedData>, UiError> {
        self.handle
            .read()
            .clone()
            .ok_or(UiError::ElementNotMounted(self.selector))
    }

    /// Layout width in CSS pixels, measured at call time.
    pub async fn width(&self) -> Result<f64, UiError> {
        let element = self.get()?;
        let rect = element
            .get_client_rect()
            .await
            .map_err(|err| UiError::Measure {
                selector: self.selector,
                reason: format!("{err:?}"),
            })?;
        Ok(rect.width())
    }
}
