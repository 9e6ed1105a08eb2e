// Vkbd Layout
// Key tables, geometry computation and hit testing

pub mod engine;
pub mod hit;
pub mod spec;

pub use engine::{compute_layout, KeyRect};
pub use hit::locate;
pub use spec::{ButtonMap, KeyDef, LayoutSpec};
