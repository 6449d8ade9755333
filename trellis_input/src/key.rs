// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Abstract key codes.

/// Platform-independent input code: a mouse button, pointer motion, or keyboard key.
///
/// Translating native keyboard and mouse events into a `VirtualKey` is the job of the
/// platform adapter; the frame tree only ever sees these values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VirtualKey {
    /// Sentinel for native inputs the adapter could not map.
    Dummy,

    /// Primary mouse button.
    MouseLeft,
    /// Middle mouse button (wheel click).
    MouseMiddle,
    /// Secondary mouse button.
    MouseRight,
    /// "Back" side button.
    MouseBack,
    /// "Forward" side button.
    MouseNext,
    /// Pointer motion.
    MouseMove,

    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Space bar.
    Space,
    /// Control modifier.
    Control,
    /// Shift modifier.
    Shift,
    /// Alt / Option modifier.
    Alt,
    /// Backspace.
    Backspace,

    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,

    /// Letter A.
    A,
    /// Letter B.
    B,
    /// Letter C.
    C,
    /// Letter D.
    D,
    /// Letter E.
    E,
    /// Letter F.
    F,
    /// Letter G.
    G,
    /// Letter H.
    H,
    /// Letter I.
    I,
    /// Letter J.
    J,
    /// Letter K.
    K,
    /// Letter L.
    L,
    /// Letter M.
    M,
    /// Letter N.
    N,
    /// Letter O.
    O,
    /// Letter P.
    P,
    /// Letter Q.
    Q,
    /// Letter R.
    R,
    /// Letter S.
    S,
    /// Letter T.
    T,
    /// Letter U.
    U,
    /// Letter V.
    V,
    /// Letter W.
    W,
    /// Letter X.
    X,
    /// Letter Y.
    Y,
    /// Letter Z.
    Z,

    /// Digit row 0.
    Digit0,
    /// Digit row 1.
    Digit1,
    /// Digit row 2.
    Digit2,
    /// Digit row 3.
    Digit3,
    /// Digit row 4.
    Digit4,
    /// Digit row 5.
    Digit5,
    /// Digit row 6.
    Digit6,
    /// Digit row 7.
    Digit7,
    /// Digit row 8.
    Digit8,
    /// Digit row 9.
    Digit9,

    /// Numpad 0.
    Numpad0,
    /// Numpad 1.
    Numpad1,
    /// Numpad 2.
    Numpad2,
    /// Numpad 3.
    Numpad3,
    /// Numpad 4.
    Numpad4,
    /// Numpad 5.
    Numpad5,
    /// Numpad 6.
    Numpad6,
    /// Numpad 7.
    Numpad7,
    /// Numpad 8.
    Numpad8,
    /// Numpad 9.
    Numpad9,
}

const LETTERS: [VirtualKey; 26] = [
    VirtualKey::A,
    VirtualKey::B,
    VirtualKey::C,
    VirtualKey::D,
    VirtualKey::E,
    VirtualKey::F,
    VirtualKey::G,
    VirtualKey::H,
    VirtualKey::I,
    VirtualKey::J,
    VirtualKey::K,
    VirtualKey::L,
    VirtualKey::M,
    VirtualKey::N,
    VirtualKey::O,
    VirtualKey::P,
    VirtualKey::Q,
    VirtualKey::R,
    VirtualKey::S,
    VirtualKey::T,
    VirtualKey::U,
    VirtualKey::V,
    VirtualKey::W,
    VirtualKey::X,
    VirtualKey::Y,
    VirtualKey::Z,
];

impl VirtualKey {
    /// Whether this code comes from the mouse (a button or pointer motion).
    pub const fn is_mouse(self) -> bool {
        matches!(
            self,
            Self::MouseLeft
                | Self::MouseMiddle
                | Self::MouseRight
                | Self::MouseBack
                | Self::MouseNext
                | Self::MouseMove
        )
    }

    /// Whether this code is a mouse button (excludes [`VirtualKey::MouseMove`]).
    pub const fn is_mouse_button(self) -> bool {
        self.is_mouse() && !matches!(self, Self::MouseMove)
    }

    /// Whether this code is a keyboard key. [`VirtualKey::Dummy`] is neither mouse nor keyboard.
    pub const fn is_keyboard(self) -> bool {
        !self.is_mouse() && !matches!(self, Self::Dummy)
    }

    /// Whether this is one of the modifier keys (Control, Shift, Alt).
    pub const fn is_modifier(self) -> bool {
        matches!(self, Self::Control | Self::Shift | Self::Alt)
    }

    /// Whether this is one of the four arrow keys.
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// Whether this is a letter key `A..=Z`.
    pub fn is_letter(self) -> bool {
        LETTERS.contains(&self)
    }

    /// Whether this is a digit key, on either the digit row or the numpad.
    pub fn is_digit(self) -> bool {
        self.digit_value().is_some()
    }

    /// The numeric value of a digit-row or numpad key.
    pub fn digit_value(self) -> Option<u8> {
        let v = match self {
            Self::Digit0 | Self::Numpad0 => 0,
            Self::Digit1 | Self::Numpad1 => 1,
            Self::Digit2 | Self::Numpad2 => 2,
            Self::Digit3 | Self::Numpad3 => 3,
            Self::Digit4 | Self::Numpad4 => 4,
            Self::Digit5 | Self::Numpad5 => 5,
            Self::Digit6 | Self::Numpad6 => 6,
            Self::Digit7 | Self::Numpad7 => 7,
            Self::Digit8 | Self::Numpad8 => 8,
            Self::Digit9 | Self::Numpad9 => 9,
            _ => return None,
        };
        Some(v)
    }

    /// The letter key for an ASCII letter, ignoring case.
    ///
    /// ```
    /// use trellis_input::VirtualKey;
    ///
    /// assert_eq!(VirtualKey::letter('s'), Some(VirtualKey::S));
    /// assert_eq!(VirtualKey::letter('S'), Some(VirtualKey::S));
    /// assert_eq!(VirtualKey::letter('1'), None);
    /// ```
    pub fn letter(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let offset = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        LETTERS.get(offset).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_disjoint() {
        assert!(VirtualKey::MouseLeft.is_mouse());
        assert!(VirtualKey::MouseLeft.is_mouse_button());
        assert!(VirtualKey::MouseMove.is_mouse());
        assert!(!VirtualKey::MouseMove.is_mouse_button());
        assert!(!VirtualKey::MouseMove.is_keyboard());

        assert!(VirtualKey::Enter.is_keyboard());
        assert!(!VirtualKey::Enter.is_mouse());

        assert!(!VirtualKey::Dummy.is_mouse());
        assert!(!VirtualKey::Dummy.is_keyboard());
    }

    #[test]
    fn modifiers_and_arrows() {
        for k in [VirtualKey::Control, VirtualKey::Shift, VirtualKey::Alt] {
            assert!(k.is_modifier(), "{k:?} should be a modifier");
        }
        assert!(!VirtualKey::Space.is_modifier());
        for k in [
            VirtualKey::Up,
            VirtualKey::Down,
            VirtualKey::Left,
            VirtualKey::Right,
        ] {
            assert!(k.is_arrow(), "{k:?} should be an arrow");
        }
        // `Left` the arrow key is not a mouse button.
        assert!(!VirtualKey::Left.is_mouse());
    }

    #[test]
    fn digits_from_both_rows() {
        assert_eq!(VirtualKey::Digit7.digit_value(), Some(7));
        assert_eq!(VirtualKey::Numpad7.digit_value(), Some(7));
        assert_eq!(VirtualKey::Numpad0.digit_value(), Some(0));
        assert!(VirtualKey::Digit0.is_digit());
        assert!(!VirtualKey::A.is_digit());
        assert_eq!(VirtualKey::Escape.digit_value(), None);
    }

    #[test]
    fn letters() {
        assert_eq!(VirtualKey::letter('a'), Some(VirtualKey::A));
        assert_eq!(VirtualKey::letter('z'), Some(VirtualKey::Z));
        assert_eq!(VirtualKey::letter('Q'), Some(VirtualKey::Q));
        assert_eq!(VirtualKey::letter(' '), None);
        assert_eq!(VirtualKey::letter('\u{e9}'), None);
        assert!(VirtualKey::M.is_letter());
        assert!(!VirtualKey::Digit1.is_letter());
    }
}
