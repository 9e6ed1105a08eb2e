// Vkbd Key State Store
// Per-key runtime flags plus the hovered-key and chord-modifier slots

use crate::key::Key;

/// What the renderer should draw for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Normal,
    Hovered,
    Active,
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyFlags {
    /// Logically latched/pressed.
    active: bool,
    /// Its down event is currently live on the host. Tracked separately so
    /// a latched modifier is pressed at most once across overlapping chords.
    injected: bool,
}

/// Fixed-size arena of per-key runtime state, index-aligned with the layout
/// spec and mutated only by the press controller.
#[derive(Debug)]
pub struct KeyStateStore {
    flags: Vec<KeyFlags>,
    hovered: Option<usize>,
    chord_modifier: Option<Key>,
}

impl KeyStateStore {
    /// All keys idle, nothing hovered, no chord modifier.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![KeyFlags::default(); len],
            hovered: None,
            chord_modifier: None,
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.flags.get(index).map_or(false, |f| f.active)
    }

    pub fn set_active(&mut self, index: usize, active: bool) {
        if let Some(f) = self.flags.get_mut(index) {
            f.active = active;
        }
    }

    pub fn is_injected(&self, index: usize) -> bool {
        self.flags.get(index).map_or(false, |f| f.injected)
    }

    pub fn set_injected(&mut self, index: usize, injected: bool) {
        if let Some(f) = self.flags.get_mut(index) {
            f.injected = injected;
        }
    }

    /// The key currently under the pointer, if any. At most one at a time.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    /// The chord modifier captured when the most recent non-modifier press
    /// began.
    pub fn chord_modifier(&self) -> Option<Key> {
        self.chord_modifier
    }

    pub fn set_chord_modifier(&mut self, modifier: Option<Key>) {
        self.chord_modifier = modifier;
    }

    pub fn take_chord_modifier(&mut self) -> Option<Key> {
        self.chord_modifier.take()
    }

    /// Flat indices of all active keys, ascending.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, f)| f.active)
            .map(|(i, _)| i)
    }

    /// Visual state for rendering; an active key wins over a hovered one.
    pub fn visual(&self, index: usize) -> VisualState {
        if self.is_active(index) {
            VisualState::Active
        } else if self.hovered == Some(index) {
            VisualState::Hovered
        } else {
            VisualState::Normal
        }
    }

    /// Back to the all-idle startup state.
    pub fn reset(&mut self) {
        for f in &mut self.flags {
            *f = KeyFlags::default();
        }
        self.hovered = None;
        self.chord_modifier = None;
    }
}
