// Vkbd Layout Specification
// Static key tables: per-key descriptors grouped into rows, plus the
// pointer-button chord modifier mapping

use crate::event::PointerButton;
use crate::key::{key_name, Key};
use std::ops::Range;

/// Immutable description of one on-screen key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDef {
    label: Option<String>,
    key: Key,
    width: u32,
    modifier: bool,
}

impl KeyDef {
    /// A key with weight 1 and the default modifier classification.
    pub fn new(key: Key) -> Self {
        Self {
            label: None,
            key,
            width: 1,
            modifier: key.is_modifier(),
        }
    }

    /// A key with an explicit display label.
    pub fn labeled(label: &str, key: Key) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::new(key)
        }
    }

    /// Set the relative width weight within the row.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Override the modifier capability flag.
    pub fn modifier(mut self, modifier: bool) -> Self {
        self.modifier = modifier;
        self
    }

    /// The display label, falling back to the canonical key name.
    pub fn label(&self) -> &str {
        match &self.label {
            Some(l) => l,
            None => key_name(self.key.code()),
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Relative width weight within the row.
    pub fn width_weight(&self) -> u32 {
        self.width
    }

    /// Whether this key chords with (and survives the release sweep of)
    /// other keys.
    pub fn is_modifier(&self) -> bool {
        self.modifier
    }
}

/// Ordered key table, grouped into rows.
///
/// Rows are explicit rather than encoded with sentinel entries, so layout
/// never re-scans for row boundaries. Keys are addressed by a flat row-major
/// index shared with the geometry and runtime-state arrays.
#[derive(Debug, Clone, Default)]
pub struct LayoutSpec {
    keys: Vec<KeyDef>,
    rows: Vec<Range<usize>>,
}

impl LayoutSpec {
    pub fn new(rows: Vec<Vec<KeyDef>>) -> Self {
        let mut keys = Vec::new();
        let mut ranges = Vec::with_capacity(rows.len());
        for row in rows {
            let start = keys.len();
            keys.extend(row);
            ranges.push(start..keys.len());
        }
        Self { keys, rows: ranges }
    }

    /// Total number of keys across all rows.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of rows, including empty ones.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Key descriptor at a flat index.
    pub fn key(&self, index: usize) -> Option<&KeyDef> {
        self.keys.get(index)
    }

    /// All key descriptors in flat index order.
    pub fn keys(&self) -> &[KeyDef] {
        &self.keys
    }

    /// Iterate rows as slices of the flat table.
    pub fn rows(&self) -> impl Iterator<Item = &[KeyDef]> {
        self.rows.iter().map(move |r| &self.keys[r.clone()])
    }

    /// Flat index range covered by a row.
    pub fn row_range(&self, row: usize) -> Option<Range<usize>> {
        self.rows.get(row).cloned()
    }
}

/// Pointer-button to chord-modifier mapping.
///
/// Consulted once, at the instant a press begins; never re-evaluated on
/// pointer motion.
#[derive(Debug, Clone, Default)]
pub struct ButtonMap {
    entries: Vec<(PointerButton, Key)>,
}

impl ButtonMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, button: PointerButton, modifier: Key) -> Self {
        self.insert(button, modifier);
        self
    }

    /// Bind a button to a modifier key, replacing any previous binding.
    pub fn insert(&mut self, button: PointerButton, modifier: Key) {
        if let Some(entry) = self.entries.iter_mut().find(|(b, _)| *b == button) {
            entry.1 = modifier;
        } else {
            self.entries.push((button, modifier));
        }
    }

    /// The chord modifier for a button, if any.
    pub fn resolve(&self, button: PointerButton) -> Option<Key> {
        self.entries
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
