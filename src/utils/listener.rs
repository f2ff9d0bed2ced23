//! Scoped DOM event listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, EventTarget};

use crate::core::error::ListenerError;

/// A registered event listener that is removed when dropped.
///
/// Holds both the target and the closure, so the callback stays alive for
/// exactly as long as the registration.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Register `callback` for `event_type` events on `target`.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, ListenerError> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|_| ListenerError::RegistrationFailed(event_type.to_string()))?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
