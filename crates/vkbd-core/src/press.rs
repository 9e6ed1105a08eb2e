// Vkbd Press Controller
// Turns pointer gestures into an ordered stream of synthetic key events

use smallvec::SmallVec;

use crate::event::PointerEvent;
use crate::key::Key;
use crate::layout::engine::KeyRect;
use crate::layout::hit::locate;
use crate::layout::spec::{ButtonMap, LayoutSpec};
use crate::state::KeyStateStore;

/// One synthetic key event to hand to the injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    Press(Key),
    Release(Key),
}

/// Ordered injection burst produced by a single pointer event.
pub type InjectionBatch = SmallVec<[Injection; 8]>;

/// How pointer gestures map to key activation.
///
/// The two variants have different release rules and are never blended: a
/// controller runs exactly one of them for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Pointer-down alone both activates and later deactivates a key; no
    /// paired pointer-up is required. Chord modifiers are one-shot: they are
    /// injected when a non-modifier chord starts and released when it ends.
    Toggle,
    /// A key is active between a matched pointer-down and pointer-up.
    /// Pointer-up ends the whole input burst. On-screen modifier keys latch
    /// with immediate injection and persist until explicitly toggled off.
    Momentary,
}

impl Default for Discipline {
    fn default() -> Self {
        Discipline::Toggle
    }
}

impl Discipline {
    /// Parse a configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "toggle" => Some(Discipline::Toggle),
            "momentary" => Some(Discipline::Momentary),
            _ => None,
        }
    }
}

/// The press/release state machine.
///
/// Owns the per-key runtime state exclusively. Every handler runs to
/// completion and returns the injections it decided on, in emission order:
/// modifiers always precede the base key on press, and the base key always
/// precedes its modifiers on release.
#[derive(Debug)]
pub struct PressController {
    discipline: Discipline,
    state: KeyStateStore,
}

impl PressController {
    pub fn new(discipline: Discipline, key_count: usize) -> Self {
        Self {
            discipline,
            state: KeyStateStore::new(key_count),
        }
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Read-only view of the runtime state, for rendering.
    pub fn state(&self) -> &KeyStateStore {
        &self.state
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Out-of-range coordinates hit no key and are no-ops; there are no
    /// fallible paths here.
    pub fn handle(
        &mut self,
        spec: &LayoutSpec,
        rects: &[KeyRect],
        buttons: &ButtonMap,
        event: PointerEvent,
    ) -> InjectionBatch {
        let mut out = InjectionBatch::new();
        match event {
            PointerEvent::Move { x, y } => {
                self.state.set_hovered(locate(x, y, rects));
            }
            PointerEvent::Leave => {
                self.state.set_hovered(None);
                match self.discipline {
                    Discipline::Toggle => self.toggle_strict_release(spec, &mut out),
                    Discipline::Momentary => self.momentary_up(spec, None, &mut out),
                }
            }
            PointerEvent::Down { x, y, button } => {
                if let Some(index) = locate(x, y, rects) {
                    // The chord modifier is resolved at this instant and
                    // never re-evaluated on motion.
                    let chord = buttons.resolve(button);
                    match self.discipline {
                        Discipline::Toggle => self.toggle_down(spec, index, chord, &mut out),
                        Discipline::Momentary => self.momentary_down(spec, index, chord, &mut out),
                    }
                }
            }
            PointerEvent::Up { x, y } => {
                if self.discipline == Discipline::Momentary {
                    let index = locate(x, y, rects);
                    self.momentary_up(spec, index, &mut out);
                }
                // Toggle: downs arrive unpaired, an up means nothing.
            }
        }
        out
    }

    /// Release everything currently injected, base keys before modifiers.
    /// Used at shutdown so no key is left stuck on the host.
    pub fn release_all(&mut self, spec: &LayoutSpec) -> InjectionBatch {
        let mut out = InjectionBatch::new();
        self.sweep_non_modifiers(spec, None, &mut out);
        if let Some(m) = self.state.take_chord_modifier() {
            out.push(Injection::Release(m));
        }
        for index in 0..spec.len() {
            if self.state.is_active(index) {
                if self.state.is_injected(index) {
                    out.push(Injection::Release(spec.keys()[index].key()));
                }
                self.state.set_active(index, false);
                self.state.set_injected(index, false);
            }
        }
        self.state.set_hovered(None);
        out
    }

    fn toggle_down(
        &mut self,
        spec: &LayoutSpec,
        index: usize,
        chord: Option<Key>,
        out: &mut InjectionBatch,
    ) {
        let def = &spec.keys()[index];
        if self.state.is_active(index) {
            // Second down on the same key lets it go.
            if def.is_modifier() {
                if self.state.is_injected(index) {
                    out.push(Injection::Release(def.key()));
                }
                self.state.set_active(index, false);
                self.state.set_injected(index, false);
            } else {
                out.push(Injection::Release(def.key()));
                self.state.set_active(index, false);
                self.state.set_injected(index, false);
                self.finish_chord(spec, out);
            }
        } else if def.is_modifier() {
            // Latch only; the press is injected when a chord starts.
            self.state.set_active(index, true);
        } else {
            self.begin_chord(spec, index, chord, out);
            // Latched modifiers go down before the base key.
            for j in 0..spec.len() {
                let other = &spec.keys()[j];
                if other.is_modifier() && self.state.is_active(j) && !self.state.is_injected(j) {
                    out.push(Injection::Press(other.key()));
                    self.state.set_injected(j, true);
                }
            }
            if let Some(m) = chord {
                out.push(Injection::Press(m));
            }
            out.push(Injection::Press(def.key()));
            self.state.set_active(index, true);
            self.state.set_injected(index, true);
        }
    }

    /// Leave with a key down is treated as letting the key go.
    fn toggle_strict_release(&mut self, spec: &LayoutSpec, out: &mut InjectionBatch) {
        let had_base = self.sweep_non_modifiers(spec, None, out);
        if had_base {
            self.finish_chord(spec, out);
        }
    }

    fn momentary_down(
        &mut self,
        spec: &LayoutSpec,
        index: usize,
        chord: Option<Key>,
        out: &mut InjectionBatch,
    ) {
        let def = &spec.keys()[index];
        if def.is_modifier() {
            // Modifier keys toggle-latch, injecting immediately in this
            // discipline.
            if self.state.is_active(index) {
                out.push(Injection::Release(def.key()));
                self.state.set_active(index, false);
                self.state.set_injected(index, false);
            } else {
                out.push(Injection::Press(def.key()));
                self.state.set_active(index, true);
                self.state.set_injected(index, true);
            }
        } else if !self.state.is_active(index) {
            self.begin_chord(spec, index, chord, out);
            if let Some(m) = chord {
                out.push(Injection::Press(m));
            }
            out.push(Injection::Press(def.key()));
            self.state.set_active(index, true);
            self.state.set_injected(index, true);
        }
    }

    fn momentary_up(&mut self, spec: &LayoutSpec, index: Option<usize>, out: &mut InjectionBatch) {
        if let Some(i) = index {
            // The up that ends a latch-click on a modifier key must not end
            // the current burst.
            if spec.keys()[i].is_modifier() && self.state.is_active(i) {
                return;
            }
        }
        self.sweep_non_modifiers(spec, None, out);
        if let Some(m) = self.state.take_chord_modifier() {
            out.push(Injection::Release(m));
        }
    }

    /// Shared chord-start bookkeeping: force-release every other live
    /// non-modifier and any chord modifier left over from it, then record
    /// the new chord modifier.
    fn begin_chord(
        &mut self,
        spec: &LayoutSpec,
        index: usize,
        chord: Option<Key>,
        out: &mut InjectionBatch,
    ) {
        self.sweep_non_modifiers(spec, Some(index), out);
        if let Some(m) = self.state.take_chord_modifier() {
            out.push(Injection::Release(m));
        }
        self.state.set_chord_modifier(chord);
    }

    /// Release every active non-modifier except `keep`, ascending table
    /// order. Modifier keys are never touched by this sweep. Returns whether
    /// anything was released.
    fn sweep_non_modifiers(
        &mut self,
        spec: &LayoutSpec,
        keep: Option<usize>,
        out: &mut InjectionBatch,
    ) -> bool {
        let mut released = false;
        for index in 0..spec.len() {
            if keep == Some(index) {
                continue;
            }
            let def = &spec.keys()[index];
            if !def.is_modifier() && self.state.is_active(index) {
                out.push(Injection::Release(def.key()));
                self.state.set_active(index, false);
                self.state.set_injected(index, false);
                released = true;
            }
        }
        released
    }

    /// End of a toggle chord: release the chord modifier, then every latched
    /// modifier. A chord's modifiers are one-shot.
    fn finish_chord(&mut self, spec: &LayoutSpec, out: &mut InjectionBatch) {
        if let Some(m) = self.state.take_chord_modifier() {
            out.push(Injection::Release(m));
        }
        for index in 0..spec.len() {
            let def = &spec.keys()[index];
            if def.is_modifier() && self.state.is_active(index) {
                if self.state.is_injected(index) {
                    out.push(Injection::Release(def.key()));
                }
                self.state.set_active(index, false);
                self.state.set_injected(index, false);
            }
        }
    }
}
