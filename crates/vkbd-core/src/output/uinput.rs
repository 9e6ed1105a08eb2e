// Vkbd uinput Output Layer
// Virtual keyboard device creation and key event emission

use evdev::{EventType, InputEvent};
use log::warn;

use super::Injector;
use crate::key::Key;

/// Name the virtual device registers under; the pointer source filters it
/// out to avoid a feedback loop.
pub const VIRT_DEVICE_NAME: &str = "vkbd (virtual) Keyboard";

/// Error types for uinput operations
#[derive(Debug, thiserror::Error)]
pub enum UinputError {
    #[error("Failed to create virtual device: {0}")]
    DeviceCreation(String),
}

/// Virtual uinput keyboard the synthetic key events are written to.
pub struct UinputKeyboard {
    device: evdev::uinput::VirtualDevice,
}

impl UinputKeyboard {
    /// Create the virtual device with the full keyboard key range.
    pub fn new() -> Result<Self, UinputError> {
        use evdev::uinput::VirtualDeviceBuilder;
        use evdev::AttributeSet;

        let mut keys = AttributeSet::new();
        for code in 0..256u16 {
            keys.insert(evdev::Key::new(code));
        }

        let device = VirtualDeviceBuilder::new()
            .map_err(|e: std::io::Error| UinputError::DeviceCreation(e.to_string()))?
            .name(VIRT_DEVICE_NAME)
            .with_keys(&keys)
            .map_err(|e: std::io::Error| UinputError::DeviceCreation(e.to_string()))?
            .build()
            .map_err(|e: std::io::Error| UinputError::DeviceCreation(e.to_string()))?;

        Ok(Self { device })
    }

    fn emit(&mut self, key: Key, down: bool) {
        let key_event = InputEvent::new(EventType::KEY, key.code(), i32::from(down));
        // SYN event is required for the kernel to process the key event
        let syn_event = InputEvent::new(EventType::SYNCHRONIZATION, 0, 0);
        if let Err(e) = self.device.emit(&[key_event, syn_event]) {
            warn!("uinput write failed for {}: {}", key, e);
        }
    }
}

impl Injector for UinputKeyboard {
    fn key_down(&mut self, key: Key) {
        self.emit(key, true);
    }

    fn key_up(&mut self, key: Key) {
        self.emit(key, false);
    }
}
