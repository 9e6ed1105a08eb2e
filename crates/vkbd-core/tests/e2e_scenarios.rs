// Vkbd End-to-End Test Scenarios
//
// These tests simulate real-world usage flows: a keyboard built from a
// config file, driven by pointer gestures, feeding an injector.
//
// Run with: cargo test --test e2e_scenarios

use vkbd_core::{
    Discipline, Injection, Injector, Key, Keyboard, PointerButton, PointerEvent,
    RecordingInjector, Settings, VisualState,
};

use Injection::{Press, Release};

// =========================================================================
// Test Helpers
// =========================================================================

/// Keyboard straight from a config string, resized to its resolved window.
fn keyboard_from_config(toml: &str, screen: (i32, i32)) -> Keyboard {
    let settings = Settings::from_toml(toml).unwrap();
    let placement = settings.placement.resolve(screen.0, screen.1);
    let mut kb = Keyboard::new(settings.layout, settings.buttons, settings.discipline);
    kb.resize(placement.width, placement.height);
    kb
}

fn center_of(kb: &Keyboard, key: Key) -> (i32, i32) {
    kb.keys()
        .find(|v| kb.spec().key(v.index).unwrap().key() == key)
        .map(|v| v.rect.center())
        .expect("key not in layout")
}

fn tap(kb: &mut Keyboard, injector: &mut RecordingInjector, key: Key) {
    let (x, y) = center_of(kb, key);
    let batch = kb.handle(PointerEvent::Down { x, y, button: PointerButton::Left });
    injector.apply(&batch);
    let batch = kb.handle(PointerEvent::Up { x, y });
    injector.apply(&batch);
}

const PAD_CONFIG: &str = r#"
[window]
width = 400
height = 100

[input]
discipline = "momentary"

[buttons]
right = "LEFT_CTRL"

[[layout.rows]]
keys = [
    { key = "LEFT_SHIFT", width = 2 },
    { key = "A" },
    { key = "B" },
    { key = "ENTER" },
]

[[layout.rows]]
keys = [
    { key = "SPACE", width = 3 },
    { key = "ESC" },
]
"#;

// =========================================================================
// Scenario 1: typing a short burst
// =========================================================================

#[test]
fn e2e_typing_burst_reaches_injector_in_order() {
    let mut kb = keyboard_from_config(PAD_CONFIG, (1920, 1080));
    let mut injector = RecordingInjector::new();

    tap(&mut kb, &mut injector, Key::A);
    tap(&mut kb, &mut injector, Key::B);
    tap(&mut kb, &mut injector, Key::ENTER);

    assert_eq!(
        injector.events(),
        &[
            Press(Key::A),
            Release(Key::A),
            Press(Key::B),
            Release(Key::B),
            Press(Key::ENTER),
            Release(Key::ENTER),
        ]
    );
}

// =========================================================================
// Scenario 2: shifted letter through the latch
// =========================================================================

#[test]
fn e2e_shifted_letter() {
    let mut kb = keyboard_from_config(PAD_CONFIG, (1920, 1080));
    let mut injector = RecordingInjector::new();

    // Latch shift (momentary modifiers inject immediately)...
    let shift = center_of(&kb, Key::LEFT_SHIFT);
    injector.apply(&kb.handle(PointerEvent::Down {
        x: shift.0,
        y: shift.1,
        button: PointerButton::Left,
    }));
    injector.apply(&kb.handle(PointerEvent::Up { x: shift.0, y: shift.1 }));

    // ...type the letter...
    tap(&mut kb, &mut injector, Key::A);

    // ...and unlatch.
    injector.apply(&kb.handle(PointerEvent::Down {
        x: shift.0,
        y: shift.1,
        button: PointerButton::Left,
    }));

    assert_eq!(
        injector.events(),
        &[
            Press(Key::LEFT_SHIFT),
            Press(Key::A),
            Release(Key::A),
            Release(Key::LEFT_SHIFT),
        ]
    );
}

// =========================================================================
// Scenario 3: button chord
// =========================================================================

#[test]
fn e2e_right_button_chords_ctrl() {
    let mut kb = keyboard_from_config(PAD_CONFIG, (1920, 1080));
    let mut injector = RecordingInjector::new();

    let (x, y) = center_of(&kb, Key::B);
    injector.apply(&kb.handle(PointerEvent::Down { x, y, button: PointerButton::Right }));
    injector.apply(&kb.handle(PointerEvent::Up { x, y }));

    assert_eq!(
        injector.events(),
        &[
            Press(Key::LEFT_CTRL),
            Press(Key::B),
            Release(Key::B),
            Release(Key::LEFT_CTRL),
        ]
    );
}

// =========================================================================
// Scenario 4: drag leaves the window mid-press
// =========================================================================

#[test]
fn e2e_drag_out_never_leaves_keys_stuck() {
    let mut kb = keyboard_from_config(PAD_CONFIG, (1920, 1080));
    let mut injector = RecordingInjector::new();

    let (x, y) = center_of(&kb, Key::A);
    injector.apply(&kb.handle(PointerEvent::Down { x, y, button: PointerButton::Right }));
    injector.apply(&kb.handle(PointerEvent::Move { x: x + 30, y }));
    injector.apply(&kb.handle(PointerEvent::Leave));

    assert_eq!(
        injector.events(),
        &[
            Press(Key::LEFT_CTRL),
            Press(Key::A),
            Release(Key::A),
            Release(Key::LEFT_CTRL),
        ]
    );
    assert!(kb.keys().all(|v| v.state == VisualState::Normal));
}

// =========================================================================
// Scenario 5: shutdown sweep
// =========================================================================

#[test]
fn e2e_shutdown_releases_everything_injected() {
    let mut kb = keyboard_from_config(PAD_CONFIG, (1920, 1080));
    let mut injector = RecordingInjector::new();

    // Latch shift, then hold a chorded A; kill the program mid-gesture.
    let shift = center_of(&kb, Key::LEFT_SHIFT);
    injector.apply(&kb.handle(PointerEvent::Down {
        x: shift.0,
        y: shift.1,
        button: PointerButton::Left,
    }));
    injector.apply(&kb.handle(PointerEvent::Up { x: shift.0, y: shift.1 }));
    let (x, y) = center_of(&kb, Key::A);
    injector.apply(&kb.handle(PointerEvent::Down { x, y, button: PointerButton::Right }));

    injector.apply(&kb.release_all());

    // Every press has a matching release, base key before modifiers.
    assert_eq!(
        injector.events(),
        &[
            Press(Key::LEFT_SHIFT),
            Press(Key::LEFT_CTRL),
            Press(Key::A),
            Release(Key::A),
            Release(Key::LEFT_CTRL),
            Release(Key::LEFT_SHIFT),
        ]
    );
}

// =========================================================================
// Scenario 6: toggle discipline from config
// =========================================================================

#[test]
fn e2e_toggle_discipline_round_trip() {
    let toggle_config = PAD_CONFIG.replace("momentary", "toggle");
    let mut kb = keyboard_from_config(&toggle_config, (1920, 1080));
    let mut injector = RecordingInjector::new();

    let (x, y) = center_of(&kb, Key::A);
    // Ups are unpaired noise under toggle.
    injector.apply(&kb.handle(PointerEvent::Down { x, y, button: PointerButton::Left }));
    injector.apply(&kb.handle(PointerEvent::Up { x, y }));
    injector.apply(&kb.handle(PointerEvent::Down { x, y, button: PointerButton::Left }));

    assert_eq!(injector.events(), &[Press(Key::A), Release(Key::A)]);
    assert!(kb.keys().all(|v| v.state == VisualState::Normal));
}

// =========================================================================
// Scenario 7: config window rules position the surface
// =========================================================================

#[test]
fn e2e_window_rules_shape_geometry() {
    let config = r#"
[window]
width = -2
height = 200
y = -200

[[layout.rows]]
keys = [{ key = "A" }, { key = "B" }]
"#;
    let settings = Settings::from_toml(config).unwrap();
    let placement = settings.placement.resolve(1600, 900);
    assert_eq!(placement.width, 800);
    assert_eq!(placement.height, 200);
    assert_eq!(placement.y, 700);

    let mut kb = Keyboard::new(settings.layout, settings.buttons, settings.discipline);
    kb.resize(placement.width, placement.height);
    let rects: Vec<_> = kb.keys().map(|v| v.rect).collect();
    assert_eq!(rects[0].w + rects[1].w, 800);
    assert_eq!(rects[0].h, 200);
}

// =========================================================================
// Scenario 8: hover feedback for the renderer
// =========================================================================

#[test]
fn e2e_hover_follows_pointer_without_injection() {
    let mut kb = keyboard_from_config(PAD_CONFIG, (1920, 1080));
    let mut injector = RecordingInjector::new();

    for key in [Key::A, Key::B, Key::SPACE, Key::ESC] {
        let (x, y) = center_of(&kb, key);
        injector.apply(&kb.handle(PointerEvent::Move { x, y }));
        let hovered: Vec<_> = kb
            .keys()
            .filter(|v| v.state == VisualState::Hovered)
            .map(|v| v.index)
            .collect();
        assert_eq!(hovered.len(), 1);
    }
    assert!(injector.events().is_empty());

    injector.apply(&kb.handle(PointerEvent::Leave));
    assert!(kb.keys().all(|v| v.state == VisualState::Normal));
    assert!(injector.events().is_empty());
}
