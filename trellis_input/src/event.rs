// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-owner key → callback registry.
//!
//! An [`InputEvent`] holds at most one callback per [`VirtualKey`]. It has no knowledge of
//! trees or geometry: [`InputEvent::process`] looks up the event's key and hands the event to
//! whatever is registered there, returning the callback's verdict untouched.
//!
//! Registering over an existing key is rejected rather than overwritten, and removing a key
//! that was never registered is rejected as well. Both indicate a wiring bug in the caller.

use alloc::boxed::Box;

use hashbrown::HashMap;

use crate::key::VirtualKey;
use crate::param::OperationParam;

/// Handler for one key. Returns `true` if the event was consumed.
pub type Callback = Box<dyn FnMut(&OperationParam) -> bool>;

/// Registration failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A callback is already registered for this key; disconnect it first.
    #[error("a callback is already connected for {0:?}")]
    AlreadyConnected(VirtualKey),
    /// No callback is registered for this key.
    #[error("no callback is connected for {0:?}")]
    NotConnected(VirtualKey),
}

/// Key → callback table owned by exactly one frame.
///
/// ## Example
///
/// ```
/// use trellis_input::{InputError, InputEvent, InputState, OperationParam, VirtualKey};
///
/// let mut input = InputEvent::new();
/// input.connect(VirtualKey::Enter, |p| p.is_press()).unwrap();
///
/// assert!(input.process(&OperationParam::new(VirtualKey::Enter, InputState::Press)));
/// assert!(!input.process(&OperationParam::new(VirtualKey::Enter, InputState::Release)));
/// // Unregistered keys are simply not handled.
/// assert!(!input.process(&OperationParam::new(VirtualKey::Space, InputState::Press)));
///
/// assert_eq!(
///     input.connect(VirtualKey::Enter, |_| false),
///     Err(InputError::AlreadyConnected(VirtualKey::Enter)),
/// );
/// ```
#[derive(Default)]
pub struct InputEvent {
    callbacks: HashMap<VirtualKey, Callback>,
}

impl core::fmt::Debug for InputEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InputEvent")
            .field("connected", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

impl InputEvent {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `code`.
    ///
    /// Fails with [`InputError::AlreadyConnected`] if `code` already has a callback; the
    /// existing registration is left in place.
    pub fn connect(
        &mut self,
        code: VirtualKey,
        callback: impl FnMut(&OperationParam) -> bool + 'static,
    ) -> Result<(), InputError> {
        if self.callbacks.contains_key(&code) {
            log::debug!("rejected duplicate connect for {code:?}");
            return Err(InputError::AlreadyConnected(code));
        }
        self.callbacks.insert(code, Box::new(callback));
        log::debug!("connected {code:?}");
        Ok(())
    }

    /// Remove the callback for `code`.
    ///
    /// Fails with [`InputError::NotConnected`] if nothing was registered.
    pub fn disconnect(&mut self, code: VirtualKey) -> Result<(), InputError> {
        match self.callbacks.remove(&code) {
            Some(_) => {
                log::debug!("disconnected {code:?}");
                Ok(())
            }
            None => {
                log::debug!("rejected disconnect for unconnected {code:?}");
                Err(InputError::NotConnected(code))
            }
        }
    }

    /// Remove every callback. Succeeds on an empty registry too.
    pub fn disconnect_all(&mut self) {
        if !self.callbacks.is_empty() {
            log::debug!("disconnected all {} callbacks", self.callbacks.len());
        }
        self.callbacks.clear();
    }

    /// Hand `param` to the callback registered for `param.code`.
    ///
    /// Returns `false` without side effects if no callback is registered; otherwise returns
    /// exactly what the callback returned.
    pub fn process(&mut self, param: &OperationParam) -> bool {
        match self.callbacks.get_mut(&param.code) {
            Some(callback) => callback(param),
            None => false,
        }
    }

    /// Whether a callback is registered for `code`.
    pub fn is_connected(&self, code: VirtualKey) -> bool {
        self.callbacks.contains_key(&code)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no key is registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Iterate the registered keys in unspecified order.
    pub fn connected_keys(&self) -> impl Iterator<Item = VirtualKey> + '_ {
        self.callbacks.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::InputState;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    fn press(code: VirtualKey) -> OperationParam {
        OperationParam::new(code, InputState::Press)
    }

    #[test]
    fn unregistered_key_is_not_handled() {
        let mut input = InputEvent::new();
        assert!(!input.process(&press(VirtualKey::A)));
        assert!(input.is_empty());
    }

    #[test]
    fn callback_verdict_is_returned_verbatim() {
        let mut input = InputEvent::new();
        input.connect(VirtualKey::A, |_| true).unwrap();
        input.connect(VirtualKey::B, |_| false).unwrap();
        assert!(input.process(&press(VirtualKey::A)));
        assert!(!input.process(&press(VirtualKey::B)));
    }

    #[test]
    fn callback_receives_the_event() {
        let seen = Rc::new(Cell::new(None));
        let mut input = InputEvent::new();
        let sink = seen.clone();
        input
            .connect(VirtualKey::Space, move |p| {
                sink.set(Some(p.state));
                true
            })
            .unwrap();
        input.process(&OperationParam::new(VirtualKey::Space, InputState::Repeat));
        assert_eq!(seen.get(), Some(InputState::Repeat));
    }

    #[test]
    fn duplicate_connect_keeps_first_callback() {
        let first = Rc::new(Cell::new(0_u32));
        let second = Rc::new(Cell::new(0_u32));
        let mut input = InputEvent::new();

        let f = first.clone();
        input
            .connect(VirtualKey::Enter, move |_| {
                f.set(f.get() + 1);
                true
            })
            .unwrap();
        let s = second.clone();
        let err = input
            .connect(VirtualKey::Enter, move |_| {
                s.set(s.get() + 1);
                false
            })
            .unwrap_err();
        assert_eq!(err, InputError::AlreadyConnected(VirtualKey::Enter));

        assert!(input.process(&press(VirtualKey::Enter)));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn disconnect_then_reconnect() {
        let mut input = InputEvent::new();
        input.connect(VirtualKey::Escape, |_| true).unwrap();
        input.disconnect(VirtualKey::Escape).unwrap();
        assert!(!input.is_connected(VirtualKey::Escape));
        assert!(!input.process(&press(VirtualKey::Escape)));
        input.connect(VirtualKey::Escape, |_| false).unwrap();
        assert!(input.is_connected(VirtualKey::Escape));
    }

    #[test]
    fn disconnect_missing_key_fails() {
        let mut input = InputEvent::new();
        assert_eq!(
            input.disconnect(VirtualKey::Q),
            Err(InputError::NotConnected(VirtualKey::Q))
        );
    }

    #[test]
    fn disconnect_all_clears_everything() {
        let mut input = InputEvent::new();
        // Always succeeds, even when empty.
        input.disconnect_all();

        input.connect(VirtualKey::MouseLeft, |_| true).unwrap();
        input.connect(VirtualKey::Digit1, |_| true).unwrap();
        let mut keys: Vec<VirtualKey> = input.connected_keys().collect();
        keys.sort();
        assert_eq!(keys, [VirtualKey::MouseLeft, VirtualKey::Digit1]);

        input.disconnect_all();
        assert!(input.is_empty());
        assert!(!input.process(&press(VirtualKey::MouseLeft)));
        assert!(!input.process(&press(VirtualKey::Digit1)));
    }

    #[test]
    fn errors_display_the_key() {
        use alloc::string::ToString;
        assert_eq!(
            InputError::AlreadyConnected(VirtualKey::S).to_string(),
            "a callback is already connected for S"
        );
        assert_eq!(
            InputError::NotConnected(VirtualKey::MouseMove).to_string(),
            "no callback is connected for MouseMove"
        );
    }
}
