// Vkbd Key Type
// Virtual key identifiers expressed as Linux input-event codes

use std::fmt;

/// A virtual key, identified by its Linux input-event code.
///
/// The injection boundary speaks these codes natively, so the whole core
/// uses them as its abstract keysym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(u16);

impl Key {
    pub const ESC: Key = Key(1);
    pub const KEY_1: Key = Key(2);
    pub const KEY_2: Key = Key(3);
    pub const KEY_3: Key = Key(4);
    pub const KEY_4: Key = Key(5);
    pub const KEY_5: Key = Key(6);
    pub const KEY_6: Key = Key(7);
    pub const KEY_7: Key = Key(8);
    pub const KEY_8: Key = Key(9);
    pub const KEY_9: Key = Key(10);
    pub const KEY_0: Key = Key(11);
    pub const MINUS: Key = Key(12);
    pub const EQUAL: Key = Key(13);
    pub const BACKSPACE: Key = Key(14);
    pub const TAB: Key = Key(15);
    pub const Q: Key = Key(16);
    pub const W: Key = Key(17);
    pub const E: Key = Key(18);
    pub const R: Key = Key(19);
    pub const T: Key = Key(20);
    pub const Y: Key = Key(21);
    pub const U: Key = Key(22);
    pub const I: Key = Key(23);
    pub const O: Key = Key(24);
    pub const P: Key = Key(25);
    pub const LEFT_BRACE: Key = Key(26);
    pub const RIGHT_BRACE: Key = Key(27);
    pub const ENTER: Key = Key(28);
    pub const LEFT_CTRL: Key = Key(29);
    pub const A: Key = Key(30);
    pub const S: Key = Key(31);
    pub const D: Key = Key(32);
    pub const F: Key = Key(33);
    pub const G: Key = Key(34);
    pub const H: Key = Key(35);
    pub const J: Key = Key(36);
    pub const K: Key = Key(37);
    pub const L: Key = Key(38);
    pub const SEMICOLON: Key = Key(39);
    pub const APOSTROPHE: Key = Key(40);
    pub const GRAVE: Key = Key(41);
    pub const LEFT_SHIFT: Key = Key(42);
    pub const BACKSLASH: Key = Key(43);
    pub const Z: Key = Key(44);
    pub const X: Key = Key(45);
    pub const C: Key = Key(46);
    pub const V: Key = Key(47);
    pub const B: Key = Key(48);
    pub const N: Key = Key(49);
    pub const M: Key = Key(50);
    pub const COMMA: Key = Key(51);
    pub const DOT: Key = Key(52);
    pub const SLASH: Key = Key(53);
    pub const RIGHT_SHIFT: Key = Key(54);
    pub const KPASTERISK: Key = Key(55);
    pub const LEFT_ALT: Key = Key(56);
    pub const SPACE: Key = Key(57);
    pub const CAPSLOCK: Key = Key(58);
    pub const KPMINUS: Key = Key(74);
    pub const KPPLUS: Key = Key(78);
    pub const KPDOT: Key = Key(83);
    pub const KPENTER: Key = Key(96);
    pub const RIGHT_CTRL: Key = Key(97);
    pub const KPSLASH: Key = Key(98);
    pub const RIGHT_ALT: Key = Key(100);
    pub const HOME: Key = Key(102);
    pub const UP: Key = Key(103);
    pub const PAGE_UP: Key = Key(104);
    pub const LEFT: Key = Key(105);
    pub const RIGHT: Key = Key(106);
    pub const END: Key = Key(107);
    pub const DOWN: Key = Key(108);
    pub const PAGE_DOWN: Key = Key(109);
    pub const INSERT: Key = Key(110);
    pub const DELETE: Key = Key(111);
    pub const LEFT_META: Key = Key(125);
    pub const RIGHT_META: Key = Key(126);
    pub const COMPOSE: Key = Key(127);
    pub const MENU: Key = Key(139);
    pub const CANCEL: Key = Key(223);

    /// Wrap a raw input-event code.
    pub const fn new(code: u16) -> Self {
        Key(code)
    }

    /// The raw input-event code.
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Default modifier classification: shift, ctrl, alt, meta and caps lock.
    ///
    /// Used to seed the per-key `modifier` flag when a layout is built; the
    /// press state machine reads the flag, not this function.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::LEFT_SHIFT
                | Key::RIGHT_SHIFT
                | Key::LEFT_CTRL
                | Key::RIGHT_CTRL
                | Key::LEFT_ALT
                | Key::RIGHT_ALT
                | Key::LEFT_META
                | Key::RIGHT_META
                | Key::CAPSLOCK
        )
    }
}

impl From<u16> for Key {
    fn from(code: u16) -> Self {
        Key(code)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", key_name(self.0))
    }
}

/// Canonical display name for a key code.
pub fn key_name(code: u16) -> &'static str {
    match code {
        1 => "Esc",
        2 => "1",
        3 => "2",
        4 => "3",
        5 => "4",
        6 => "5",
        7 => "6",
        8 => "7",
        9 => "8",
        10 => "9",
        11 => "0",
        12 => "-",
        13 => "=",
        14 => "Backspace",
        15 => "Tab",
        16 => "q",
        17 => "w",
        18 => "e",
        19 => "r",
        20 => "t",
        21 => "y",
        22 => "u",
        23 => "i",
        24 => "o",
        25 => "p",
        26 => "[",
        27 => "]",
        28 => "Enter",
        29 => "Ctrl",
        30 => "a",
        31 => "s",
        32 => "d",
        33 => "f",
        34 => "g",
        35 => "h",
        36 => "j",
        37 => "k",
        38 => "l",
        39 => ";",
        40 => "'",
        41 => "`",
        42 => "Shift",
        43 => "\\",
        44 => "z",
        45 => "x",
        46 => "c",
        47 => "v",
        48 => "b",
        49 => "n",
        50 => "m",
        51 => ",",
        52 => ".",
        53 => "/",
        54 => "Shift",
        55 => "*",
        56 => "Alt",
        57 => "Space",
        58 => "Caps",
        74 => "KP-",
        78 => "KP+",
        83 => "KP.",
        96 => "KPEnter",
        97 => "Ctrl",
        98 => "KP/",
        100 => "Alt",
        102 => "Home",
        103 => "\u{2191}",
        104 => "PgUp",
        105 => "\u{2190}",
        106 => "\u{2192}",
        107 => "End",
        108 => "\u{2193}",
        109 => "PgDn",
        110 => "Ins",
        111 => "Del",
        125 => "Meta",
        126 => "Meta",
        127 => "Compose",
        139 => "Menu",
        223 => "Cancel",
        _ => "?",
    }
}

/// Parse a configuration key name to a key code.
///
/// Case-insensitive; accepts a few common aliases (`ESCAPE` for `ESC`,
/// `SUPER`/`WIN` for `LEFT_META`, `KEY_1` for `1`).
pub fn key_from_name(name: &str) -> Option<Key> {
    let upper = name.to_uppercase();
    let code = match upper.as_str() {
        "ESC" | "ESCAPE" => 1,
        "1" | "KEY_1" => 2,
        "2" | "KEY_2" => 3,
        "3" | "KEY_3" => 4,
        "4" | "KEY_4" => 5,
        "5" | "KEY_5" => 6,
        "6" | "KEY_6" => 7,
        "7" | "KEY_7" => 8,
        "8" | "KEY_8" => 9,
        "9" | "KEY_9" => 10,
        "0" | "KEY_0" => 11,
        "MINUS" => 12,
        "EQUAL" => 13,
        "BACKSPACE" => 14,
        "TAB" => 15,
        "Q" => 16,
        "W" => 17,
        "E" => 18,
        "R" => 19,
        "T" => 20,
        "Y" => 21,
        "U" => 22,
        "I" => 23,
        "O" => 24,
        "P" => 25,
        "LEFT_BRACE" => 26,
        "RIGHT_BRACE" => 27,
        "ENTER" | "RETURN" => 28,
        "LEFT_CTRL" | "LCTRL" | "CTRL" => 29,
        "A" => 30,
        "S" => 31,
        "D" => 32,
        "F" => 33,
        "G" => 34,
        "H" => 35,
        "J" => 36,
        "K" => 37,
        "L" => 38,
        "SEMICOLON" => 39,
        "APOSTROPHE" => 40,
        "GRAVE" => 41,
        "LEFT_SHIFT" | "LSHIFT" | "SHIFT" => 42,
        "BACKSLASH" => 43,
        "Z" => 44,
        "X" => 45,
        "C" => 46,
        "V" => 47,
        "B" => 48,
        "N" => 49,
        "M" => 50,
        "COMMA" => 51,
        "DOT" => 52,
        "SLASH" => 53,
        "RIGHT_SHIFT" | "RSHIFT" => 54,
        "KPASTERISK" => 55,
        "LEFT_ALT" | "LALT" | "ALT" => 56,
        "SPACE" => 57,
        "CAPSLOCK" | "CAPS" => 58,
        "KPMINUS" => 74,
        "KPPLUS" => 78,
        "KPDOT" => 83,
        "KPENTER" => 96,
        "RIGHT_CTRL" | "RCTRL" => 97,
        "KPSLASH" => 98,
        "RIGHT_ALT" | "RALT" => 100,
        "HOME" => 102,
        "UP" => 103,
        "PAGE_UP" | "PAGEUP" => 104,
        "LEFT" => 105,
        "RIGHT" => 106,
        "END" => 107,
        "DOWN" => 108,
        "PAGE_DOWN" | "PAGEDOWN" => 109,
        "INSERT" => 110,
        "DELETE" => 111,
        "LEFT_META" | "LMETA" | "META" | "SUPER" | "WIN" => 125,
        "RIGHT_META" | "RMETA" => 126,
        "COMPOSE" => 127,
        "MENU" => 139,
        "CANCEL" => 223,
        _ => return None,
    };
    Some(Key(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(key_from_name("a"), Some(Key::A));
        assert_eq!(key_from_name("A"), Some(Key::A));
        assert_eq!(key_from_name("ENTER"), Some(Key::ENTER));
        assert_eq!(key_from_name("escape"), Some(Key::ESC));
        assert_eq!(key_from_name("KEY_1"), Some(Key::KEY_1));
        assert_eq!(key_from_name("Super"), Some(Key::LEFT_META));
        assert_eq!(key_from_name("NO_SUCH_KEY"), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::A.to_string(), "a");
        assert_eq!(Key::ENTER.to_string(), "Enter");
        assert_eq!(Key::new(999).to_string(), "?");
    }

    #[test]
    fn test_is_modifier() {
        assert!(Key::LEFT_SHIFT.is_modifier());
        assert!(Key::RIGHT_CTRL.is_modifier());
        assert!(Key::LEFT_META.is_modifier());
        assert!(Key::CAPSLOCK.is_modifier());
        assert!(!Key::A.is_modifier());
        assert!(!Key::SPACE.is_modifier());
    }

    #[test]
    fn test_key_ordering() {
        assert!(Key::A < Key::S);
        assert_eq!(Key::from(30), Key::A);
    }
}
