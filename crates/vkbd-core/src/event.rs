// Vkbd Pointer Events
// The pointer gesture vocabulary the press state machine consumes

/// Pointer button that initiated a gesture.
///
/// The chord modifier mapping is keyed by this, mirroring the way a
/// three-button pointer selects a modifier for the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Any other button, carried by its raw input-event code.
    Other(u16),
}

impl PointerButton {
    /// Map a raw BTN_* input-event code to a button.
    pub fn from_code(code: u16) -> Self {
        match code {
            0x110 => PointerButton::Left,
            0x111 => PointerButton::Right,
            0x112 => PointerButton::Middle,
            // BTN_TOUCH: a touch contact acts as the primary button
            0x14a => PointerButton::Left,
            other => PointerButton::Other(other),
        }
    }
}

/// A pointer event in window coordinates.
///
/// One variant per gesture the core reacts to; dispatch is a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Contact began at (x, y) with the given button.
    Down { x: i32, y: i32, button: PointerButton },
    /// Contact ended at (x, y).
    Up { x: i32, y: i32 },
    /// The pointer moved to (x, y) without a press change.
    Move { x: i32, y: i32 },
    /// The pointer left the keyboard surface.
    Leave,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_code() {
        assert_eq!(PointerButton::from_code(0x110), PointerButton::Left);
        assert_eq!(PointerButton::from_code(0x111), PointerButton::Right);
        assert_eq!(PointerButton::from_code(0x112), PointerButton::Middle);
        assert_eq!(PointerButton::from_code(0x14a), PointerButton::Left);
        assert_eq!(PointerButton::from_code(0x113), PointerButton::Other(0x113));
    }
}
