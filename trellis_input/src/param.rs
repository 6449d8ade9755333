// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input event record passed through a frame tree.

use kurbo::Point;

use crate::key::VirtualKey;

/// Transition state of a key or button.
///
/// A key goes `Press → (Repeat)* → Release`. Repeat detection belongs to the platform adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputState {
    /// The key went down.
    Press,
    /// The key went up.
    Release,
    /// The key is held and the platform emitted an auto-repeat.
    Repeat,
}

/// One discrete input event: which key, what happened to it, and where (for pointer events).
///
/// `position` is `Some` for pointer-derived events and `None` for keyboard events. Its
/// presence, not its value, is what enables spatial hit-testing: `Some(Point::ZERO)` is a
/// valid click at the origin.
///
/// ```
/// use kurbo::Point;
/// use trellis_input::{InputState, OperationParam, VirtualKey};
///
/// let click = OperationParam::pointer(VirtualKey::MouseLeft, InputState::Press, Point::new(10.0, 20.0));
/// assert!(click.is_press());
/// assert!(click.is_pointer());
///
/// let key = OperationParam::new(VirtualKey::Enter, InputState::Release);
/// assert!(key.is_release());
/// assert!(!key.is_pointer());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OperationParam {
    /// Abstract key code.
    pub code: VirtualKey,
    /// Press, release, or repeat.
    pub state: InputState,
    /// Pointer position in world space, if the event came from a pointer.
    pub position: Option<Point>,
}

impl OperationParam {
    /// Create an event without a position (a keyboard event).
    pub const fn new(code: VirtualKey, state: InputState) -> Self {
        Self {
            code,
            state,
            position: None,
        }
    }

    /// Create a pointer event at `position`.
    pub const fn pointer(code: VirtualKey, state: InputState, position: Point) -> Self {
        Self {
            code,
            state,
            position: Some(position),
        }
    }

    /// Return a copy of this event positioned at `position`.
    #[must_use]
    pub const fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Whether the key was pressed.
    pub fn is_press(&self) -> bool {
        self.state == InputState::Press
    }

    /// Whether the key was released.
    pub fn is_release(&self) -> bool {
        self.state == InputState::Release
    }

    /// Whether this is an auto-repeat.
    pub fn is_repeat(&self) -> bool {
        self.state == InputState::Repeat
    }

    /// Whether the event carries a position and is therefore subject to hit-testing.
    pub fn is_pointer(&self) -> bool {
        self.position.is_some()
    }
}
