// Vkbd Runtime State
// Mutable per-key state owned by the press controller

pub mod keystore;

pub use keystore::{KeyStateStore, VisualState};
