// Vkbd Input
// Pointer device handling for the standalone driver

pub mod pointer;

pub use pointer::{DeviceInfo, PointerSource, PointerSourceError, PointerSourceResult};
