// Vkbd Keyboard Facade
// Ties a key table, geometry, runtime state and the press controller into
// the single object a host embeds

use crate::event::PointerEvent;
use crate::layout::engine::{compute_layout, KeyRect};
use crate::layout::spec::{ButtonMap, LayoutSpec};
use crate::press::{Discipline, InjectionBatch, PressController};
use crate::state::{KeyStateStore, VisualState};

/// Everything the renderer needs for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyView<'a> {
    pub index: usize,
    pub label: &'a str,
    pub rect: KeyRect,
    pub state: VisualState,
}

/// An on-screen keyboard: static configuration plus runtime state.
///
/// Single-owner, single-threaded: every method runs to completion, performs
/// no I/O and never blocks. The host event loop feeds it window sizes and
/// pointer events; it hands back geometry, visual state and the ordered
/// injection requests.
#[derive(Debug)]
pub struct Keyboard {
    spec: LayoutSpec,
    buttons: ButtonMap,
    controller: PressController,
    rects: Vec<KeyRect>,
    width: i32,
    height: i32,
}

impl Keyboard {
    pub fn new(spec: LayoutSpec, buttons: ButtonMap, discipline: Discipline) -> Self {
        let controller = PressController::new(discipline, spec.len());
        let rects = vec![KeyRect::default(); spec.len()];
        Self {
            spec,
            buttons,
            controller,
            rects,
            width: 0,
            height: 0,
        }
    }

    /// Recompute geometry for a new window size.
    ///
    /// Resizes are idempotent; repeats with an unchanged size are coalesced
    /// into nothing.
    pub fn resize(&mut self, width: i32, height: i32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.rects = compute_layout(&self.spec, width, height);
    }

    /// Current window size.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn spec(&self) -> &LayoutSpec {
        &self.spec
    }

    pub fn discipline(&self) -> Discipline {
        self.controller.discipline()
    }

    /// Runtime state, for rendering decisions beyond `keys()`.
    pub fn state(&self) -> &KeyStateStore {
        self.controller.state()
    }

    /// Geometry of one key.
    pub fn key_rect(&self, index: usize) -> Option<KeyRect> {
        self.rects.get(index).copied()
    }

    /// Feed one pointer event; returns the injections to forward, in order.
    pub fn handle(&mut self, event: PointerEvent) -> InjectionBatch {
        self.controller
            .handle(&self.spec, &self.rects, &self.buttons, event)
    }

    /// Render view over every key, flat table order.
    pub fn keys(&self) -> impl Iterator<Item = KeyView<'_>> {
        let state = self.controller.state();
        let rects = &self.rects;
        self.spec.keys().iter().enumerate().map(move |(index, def)| KeyView {
            index,
            label: def.label(),
            rect: rects[index],
            state: state.visual(index),
        })
    }

    /// Release everything injected, base keys before modifiers. For
    /// shutdown paths; leaves the keyboard all-idle.
    pub fn release_all(&mut self) -> InjectionBatch {
        self.controller.release_all(&self.spec)
    }
}
