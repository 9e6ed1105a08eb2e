// Vkbd Built-in Layouts
// Key tables shipped with the program; a config file can replace them

use crate::event::PointerButton;
use crate::key::Key;
use crate::layout::spec::{ButtonMap, KeyDef, LayoutSpec};

/// Compact single-row control strip: navigation and window-manager actions.
pub fn controls() -> LayoutSpec {
    LayoutSpec::new(vec![vec![
        KeyDef::new(Key::UP),
        KeyDef::new(Key::DOWN),
        KeyDef::new(Key::LEFT),
        KeyDef::new(Key::RIGHT),
        KeyDef::labeled("menu", Key::KPASTERISK),
        KeyDef::labeled("term", Key::KPSLASH),
        KeyDef::labeled("surf", Key::KPPLUS),
        KeyDef::labeled("kill", Key::KPMINUS),
        KeyDef::labeled("next", Key::KPDOT),
        KeyDef::labeled("swap", Key::KPENTER),
        KeyDef::new(Key::ESC),
        KeyDef::labeled("[X]", Key::CANCEL),
    ]])
}

/// Full qwerty layout with modifier keys on the bottom rows, so chording
/// works out of the box.
pub fn qwerty() -> LayoutSpec {
    LayoutSpec::new(vec![
        vec![
            KeyDef::new(Key::ESC),
            KeyDef::new(Key::KEY_1),
            KeyDef::new(Key::KEY_2),
            KeyDef::new(Key::KEY_3),
            KeyDef::new(Key::KEY_4),
            KeyDef::new(Key::KEY_5),
            KeyDef::new(Key::KEY_6),
            KeyDef::new(Key::KEY_7),
            KeyDef::new(Key::KEY_8),
            KeyDef::new(Key::KEY_9),
            KeyDef::new(Key::KEY_0),
            KeyDef::new(Key::MINUS),
            KeyDef::new(Key::EQUAL),
            KeyDef::labeled("\u{2190}", Key::BACKSPACE).width(2),
        ],
        vec![
            KeyDef::new(Key::TAB).width(2),
            KeyDef::new(Key::Q),
            KeyDef::new(Key::W),
            KeyDef::new(Key::E),
            KeyDef::new(Key::R),
            KeyDef::new(Key::T),
            KeyDef::new(Key::Y),
            KeyDef::new(Key::U),
            KeyDef::new(Key::I),
            KeyDef::new(Key::O),
            KeyDef::new(Key::P),
            KeyDef::new(Key::LEFT_BRACE),
            KeyDef::new(Key::RIGHT_BRACE),
        ],
        vec![
            KeyDef::new(Key::LEFT_CTRL).width(2),
            KeyDef::new(Key::A),
            KeyDef::new(Key::S),
            KeyDef::new(Key::D),
            KeyDef::new(Key::F),
            KeyDef::new(Key::G),
            KeyDef::new(Key::H),
            KeyDef::new(Key::J),
            KeyDef::new(Key::K),
            KeyDef::new(Key::L),
            KeyDef::new(Key::SEMICOLON),
            KeyDef::new(Key::APOSTROPHE),
            KeyDef::new(Key::ENTER).width(2),
        ],
        vec![
            KeyDef::new(Key::LEFT_SHIFT).width(2),
            KeyDef::new(Key::Z),
            KeyDef::new(Key::X),
            KeyDef::new(Key::C),
            KeyDef::new(Key::V),
            KeyDef::new(Key::B),
            KeyDef::new(Key::N),
            KeyDef::new(Key::M),
            KeyDef::new(Key::COMMA),
            KeyDef::new(Key::DOT),
            KeyDef::new(Key::SLASH),
            KeyDef::new(Key::RIGHT_SHIFT).width(2),
        ],
        vec![
            KeyDef::new(Key::LEFT_META),
            KeyDef::new(Key::LEFT_ALT),
            KeyDef::new(Key::SPACE).width(6),
            KeyDef::new(Key::RIGHT_ALT),
            KeyDef::new(Key::LEFT),
            KeyDef::new(Key::DOWN),
            KeyDef::new(Key::UP),
            KeyDef::new(Key::RIGHT),
        ],
    ])
}

/// Middle button chords meta, right button chords ctrl.
pub fn default_buttons() -> ButtonMap {
    ButtonMap::new()
        .with(PointerButton::Middle, Key::LEFT_META)
        .with(PointerButton::Right, Key::LEFT_CTRL)
}
